mod loader;
mod model;
mod validator;

pub use loader::{load_maze_from_file, load_maze_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Maze, Position, Tile};
pub use validator::{ValidationError, validate_maze};
