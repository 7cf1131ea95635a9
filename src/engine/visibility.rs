use crate::maze::Maze;

/// How a single tile should be presented this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileVisibility {
    /// The player's own tile, always shown as the player marker.
    Player,
    /// Discovered (or `show_all`): the true symbol.
    Revealed,
    /// Undiscovered but bordering a discovered tile: shown dimly.
    Hinted,
    /// Contributes nothing to the rendered row.
    Hidden,
}

/// The four orthogonal plus four diagonal directions.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// True iff at least one in-bounds neighbor of `(x, y)` is discovered.
/// Pure read-only query, recomputed fresh per tile per frame; grids are
/// small enough that caching would buy nothing.
pub fn is_adjacent_to_discovered(maze: &Maze, x: usize, y: usize) -> bool {
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if maze.in_bounds(nx, ny) && maze.tile_at(nx as usize, ny as usize).is_discovered {
            return true;
        }
    }
    false
}

/// Classify one tile for rendering. First match wins: player marker, then
/// revealed, then fog hint, then hidden.
pub fn classify_tile(maze: &Maze, x: usize, y: usize, show_all: bool) -> TileVisibility {
    if maze.player.x == x && maze.player.y == y {
        TileVisibility::Player
    } else if show_all || maze.tile_at(x, y).is_discovered {
        TileVisibility::Revealed
    } else if is_adjacent_to_discovered(maze, x, y) {
        TileVisibility::Hinted
    } else {
        TileVisibility::Hidden
    }
}
