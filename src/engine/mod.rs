mod movement;
mod output;
mod render;
mod visibility;

pub use movement::{Direction, try_handle_movement};
pub use output::{Output, OutputBlock};
pub use render::{FOG_HINT_GLYPH, PLAYER_GLYPH, render_frame};
pub use visibility::{TileVisibility, classify_tile, is_adjacent_to_discovered};
