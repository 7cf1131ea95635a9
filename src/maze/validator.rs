use super::model::Maze;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Post-load diagnostics for map authors. The loader already guarantees a
/// non-empty grid for anything it produced; the checks here catch maps
/// that are loadable but unplayable. Non-fatal: the caller decides whether
/// to warn or bail.
pub fn validate_maze(maze: &Maze) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if maze.width == 0 || maze.height == 0 {
        errors.push(ValidationError::new("maze has no tiles"));
        return errors;
    }

    if !maze.in_bounds(maze.player.x as i64, maze.player.y as i64) {
        errors.push(ValidationError::new(format!(
            "player position ({}, {}) is outside the {}x{} grid",
            maze.player.x, maze.player.y, maze.width, maze.height
        )));
        return errors;
    }

    if maze.tile_at(maze.player.x, maze.player.y).is_wall {
        errors.push(ValidationError::new(format!(
            "start position ({}, {}) is a wall tile",
            maze.player.x, maze.player.y
        )));
    }

    errors
}
