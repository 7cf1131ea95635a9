use crate::engine::output::Output;
use crate::engine::render::render_frame;
use crate::maze::Maze;

/// The four grid directions. Command tokens are matched exactly and
/// case-sensitively; there are no abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn parse(token: &str) -> Option<Direction> {
        match token {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    /// `(dx, dy)` with y growing southward, the map's row order.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Apply one movement command. Returns false if the token is not a
/// direction at all; true once the command has been fully handled.
///
/// This is the one place that checks bounds and walls: a boundary
/// violation reports without re-rendering, a wall reports and re-renders
/// the unchanged frame, and a legal step commits the move, marks the tile
/// discovered, renders, and echoes the tile's flavor text (or the generic
/// moved message).
pub fn try_handle_movement(
    out: &mut Output,
    maze: &mut Maze,
    token: &str,
    show_all: bool,
) -> bool {
    let Some(dir) = Direction::parse(token) else {
        return false;
    };

    let (dx, dy) = dir.offset();
    let nx = maze.player.x as i64 + dx;
    let ny = maze.player.y as i64 + dy;

    if !maze.in_bounds(nx, ny) {
        out.say("You can't move outside the map!");
        return true;
    }

    let (nx, ny) = (nx as usize, ny as usize);

    if maze.tile_at(nx, ny).is_wall {
        out.say("There's a wall there!");
        out.frame(render_frame(maze, show_all));
        return true;
    }

    do_move(out, maze, nx, ny, show_all);
    true
}

fn do_move(out: &mut Output, maze: &mut Maze, x: usize, y: usize, show_all: bool) {
    maze.move_player_to(x, y);
    maze.mark_discovered(x, y);
    out.frame(render_frame(maze, show_all));

    match &maze.tile_at(x, y).flavor_text {
        Some(text) => out.say(text.clone()),
        None => out.say("You moved to a new location."),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::output::OutputBlock;
    use crate::maze::{Position, load_maze_from_str};

    fn texts(out: &Output) -> Vec<&str> {
        out.blocks
            .iter()
            .filter_map(|b| match b {
                OutputBlock::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    fn frame_count(out: &Output) -> usize {
        out.blocks
            .iter()
            .filter(|b| matches!(b, OutputBlock::Frame(_)))
            .count()
    }

    #[test]
    fn token_parsing_is_exact_and_case_sensitive() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("North"), None);
        assert_eq!(Direction::parse("n"), None);
        assert_eq!(Direction::parse("northward"), None);
    }

    #[test]
    fn boundary_violation_reports_without_rendering() {
        let mut maze = load_maze_from_str("S.\n..\n==========\n").unwrap();
        let mut out = Output::new();

        assert!(try_handle_movement(&mut out, &mut maze, "west", false));

        assert_eq!(maze.player, Position { x: 0, y: 0 });
        assert_eq!(texts(&out), vec!["You can't move outside the map!"]);
        assert_eq!(frame_count(&out), 0);
    }

    #[test]
    fn wall_blocks_and_rerenders() {
        let mut maze = load_maze_from_str("S|\n..\n==========\n").unwrap();
        maze.mark_discovered(0, 0);
        let mut out = Output::new();

        assert!(try_handle_movement(&mut out, &mut maze, "east", false));

        assert_eq!(maze.player, Position { x: 0, y: 0 });
        assert_eq!(texts(&out), vec!["There's a wall there!"]);
        assert_eq!(frame_count(&out), 1);
        // The wall tile was not discovered by bumping into it.
        assert!(!maze.tile_at(1, 0).is_discovered);
        // Message comes before the unchanged frame.
        assert!(matches!(out.blocks[0], OutputBlock::Text(_)));
    }

    #[test]
    fn successful_move_discovers_and_uses_generic_message() {
        let mut maze = load_maze_from_str("S.\n..\n==========\n").unwrap();
        maze.mark_discovered(0, 0);
        let mut out = Output::new();

        assert!(try_handle_movement(&mut out, &mut maze, "east", false));

        assert_eq!(maze.player, Position { x: 1, y: 0 });
        assert!(maze.tile_at(1, 0).is_discovered);
        assert_eq!(texts(&out), vec!["You moved to a new location."]);
        // Frame first, then the message.
        assert!(matches!(out.blocks[0], OutputBlock::Frame(_)));
    }

    #[test]
    fn flavor_text_is_echoed_verbatim() {
        let mut maze =
            load_maze_from_str("S.\n..\n==========\n1,0 A torch flickers.\n").unwrap();
        maze.mark_discovered(0, 0);
        let mut out = Output::new();

        try_handle_movement(&mut out, &mut maze, "east", false);

        assert_eq!(texts(&out), vec!["A torch flickers."]);
    }

    #[test]
    fn all_four_directions_step_one_cell() {
        let mut maze = load_maze_from_str("...\n.S.\n...\n==========\n").unwrap();
        let mut out = Output::new();

        try_handle_movement(&mut out, &mut maze, "north", false);
        assert_eq!(maze.player, Position { x: 1, y: 0 });
        try_handle_movement(&mut out, &mut maze, "south", false);
        assert_eq!(maze.player, Position { x: 1, y: 1 });
        try_handle_movement(&mut out, &mut maze, "east", false);
        assert_eq!(maze.player, Position { x: 2, y: 1 });
        try_handle_movement(&mut out, &mut maze, "west", false);
        assert_eq!(maze.player, Position { x: 1, y: 1 });
    }

    #[test]
    fn non_direction_tokens_are_not_handled() {
        let mut maze = load_maze_from_str("S.\n==========\n").unwrap();
        let mut out = Output::new();
        assert!(!try_handle_movement(&mut out, &mut maze, "look", false));
        assert!(!try_handle_movement(&mut out, &mut maze, "dance", false));
        assert!(out.blocks.is_empty());
    }
}
