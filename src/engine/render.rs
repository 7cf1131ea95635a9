use crate::engine::visibility::{TileVisibility, classify_tile};
use crate::maze::Maze;

pub const PLAYER_GLYPH: char = '@';
pub const FOG_HINT_GLYPH: char = '.';

/// Render one frame of the partially-revealed map.
///
/// Rows are built left-to-right; hidden tiles contribute nothing, not even
/// a placeholder. A row with no visible tile emits no line at all, and the
/// frame ends with exactly one blank line iff any row printed. Fog-hinted
/// walls keep their true symbol so the maze outline reads correctly.
pub fn render_frame(maze: &Maze, show_all: bool) -> String {
    let mut frame = String::new();

    for y in 0..maze.height {
        let mut row = String::new();
        for x in 0..maze.width {
            match classify_tile(maze, x, y, show_all) {
                TileVisibility::Player => row.push(PLAYER_GLYPH),
                TileVisibility::Revealed => row.push(maze.tile_at(x, y).symbol),
                TileVisibility::Hinted => {
                    let tile = maze.tile_at(x, y);
                    row.push(if tile.is_wall { tile.symbol } else { FOG_HINT_GLYPH });
                }
                TileVisibility::Hidden => {}
            }
        }

        if !row.is_empty() {
            frame.push_str(&row);
            frame.push('\n');
        }
    }

    if !frame.is_empty() {
        frame.push('\n');
    }

    frame
}
