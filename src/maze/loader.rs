use std::fs;
use std::io;
use std::path::Path;

use super::model::{Maze, Position, Tile};

/// Section boundary between map rows and annotation lines.
const SECTION_SENTINEL: &str = "==========";

/////////////////////////////
/// MAP PARSER FUNCTIONS  ///
/////////////////////////////

/// Public API: load a maze from a map file on disk.
pub fn load_maze_from_file(path: &Path) -> io::Result<Maze> {
    let contents = fs::read_to_string(path)?;
    load_maze_from_str(&contents)
}

/// Parse a two-section map description: grid rows, then a ten-`=` sentinel
/// line, then sparse `<x>,<y> <flavor text>` annotation lines.
///
/// Rows need not be equal length; the grid width is the widest row and
/// short rows are padded with passable space tiles. Any line equal to the
/// sentinel is consumed as a separator and is never data: the first one
/// switches sections, later ones are skipped.
pub fn load_maze_from_str(contents: &str) -> io::Result<Maze> {
    let mut map_rows: Vec<&str> = Vec::new();
    let mut annotation_lines: Vec<&str> = Vec::new();
    let mut in_map = true;

    // `lines()` already strips both LF and CRLF endings.
    for line in contents.lines() {
        if line == SECTION_SENTINEL {
            in_map = false;
            continue;
        }
        if in_map {
            map_rows.push(line);
        } else {
            annotation_lines.push(line);
        }
    }

    if map_rows.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "map description has no rows",
        ));
    }

    let width = map_rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let height = map_rows.len();

    if width == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "map rows are all empty",
        ));
    }

    let mut tiles: Vec<Tile> = Vec::with_capacity(width * height);
    let mut player = Position { x: 0, y: 0 };

    for (y, row) in map_rows.iter().enumerate() {
        let mut symbols = row.chars();
        for x in 0..width {
            let symbol = symbols.next().unwrap_or(' ');

            // The start glyph seeds the player position but stays an
            // ordinary passable tile. Last one wins in row-major order.
            if symbol == 'S' {
                player = Position { x, y };
            }

            tiles.push(Tile::from_symbol(symbol));
        }
    }

    let mut maze = Maze::new(width, height, tiles, player);

    for line in annotation_lines {
        if let Some((x, y, text)) = parse_annotation(line) {
            // Out-of-bounds targets are silently dropped, same as
            // malformed lines. A later annotation for the same tile wins.
            if maze.in_bounds(x, y) {
                maze.tile_at_mut(x as usize, y as usize).flavor_text = Some(text.to_string());
            }
        }
    }

    Ok(maze)
}

/// `"<x>,<y> <freeform text>"`. The text after the first space is kept
/// verbatim, internal spaces included. Returns None for malformed lines.
fn parse_annotation(line: &str) -> Option<(i64, i64, &str)> {
    let (prefix, text) = line.split_once(' ')?;
    let (x_raw, y_raw) = prefix.split_once(',')?;
    let x = x_raw.trim().parse::<i64>().ok()?;
    let y = y_raw.trim().parse::<i64>().ok()?;
    Some((x, y, text))
}
