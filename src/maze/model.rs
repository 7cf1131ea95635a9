//////////////////////////////
/// MAZE STRUCTS AND ENUMS ///
//////////////////////////////

/// One cell of the grid.
#[derive(Debug, Clone)]
pub struct Tile {
    pub symbol: char,
    pub flavor_text: Option<String>,
    pub is_wall: bool,
    pub is_scenario: bool,
    pub is_discovered: bool,
}

impl Tile {
    /// Build a tile from its map glyph. `|` and `-` are walls, `#` flags a
    /// scenario hook (no further semantics yet); everything else is a
    /// passable tile displayed as-is, space included.
    pub fn from_symbol(symbol: char) -> Self {
        Tile {
            symbol,
            flavor_text: None,
            is_wall: symbol == '|' || symbol == '-',
            is_scenario: symbol == '#',
            is_discovered: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Runtime maze type used by the game loop: a rectangular tile grid plus
/// the player position. The grid has no holes; every coordinate in
/// `[0,width) x [0,height)` holds a tile.
pub struct Maze {
    tiles: Vec<Tile>, // row-major, width * height
    pub width: usize,
    pub height: usize,
    pub player: Position,
}

impl Maze {
    pub fn new(width: usize, height: usize, tiles: Vec<Tile>, player: Position) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        Maze {
            tiles,
            width,
            height,
            player,
        }
    }

    /// Signed so movement and adjacency candidates can be checked before
    /// converting back to indices.
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Callers must check bounds first; out-of-range coordinates panic.
    pub fn tile_at(&self, x: usize, y: usize) -> &Tile {
        &self.tiles[self.index(x, y)]
    }

    pub(crate) fn tile_at_mut(&mut self, x: usize, y: usize) -> &mut Tile {
        let i = self.index(x, y);
        &mut self.tiles[i]
    }

    /// Idempotent; discovery never reverts.
    pub fn mark_discovered(&mut self, x: usize, y: usize) {
        self.tile_at_mut(x, y).is_discovered = true;
    }

    /// Unconditional coordinate overwrite. Walkability and bounds are the
    /// movement rule's responsibility, so the check lives in one place.
    pub fn move_player_to(&mut self, x: usize, y: usize) {
        self.player = Position { x, y };
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}
