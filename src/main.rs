use std::collections::VecDeque;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use fog_maze::engine::{Output, OutputBlock};
use fog_maze::{GameState, load_maze_from_file, validate_maze};

fn flush_output(out: Output) {
    for block in out.blocks {
        match block {
            // Frames carry their own line breaks, trailing blank line included.
            OutputBlock::Frame(frame) => print!("{}", frame),
            OutputBlock::Text(line) => println!("{}", line),
        }
    }
}

fn main() -> io::Result<()> {
    let mut map_path: Option<PathBuf> = None;
    let mut reveal_all = false;

    for arg in env::args().skip(1) {
        if arg == "--reveal" {
            reveal_all = true;
        } else {
            map_path = Some(PathBuf::from(arg));
        }
    }

    let map_path = map_path.unwrap_or_else(|| PathBuf::from("maps/maze.txt"));

    let maze = match load_maze_from_file(&map_path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Failed to load map file '{}': {e}", map_path.display());
            process::exit(1);
        }
    };

    for warning in validate_maze(&maze) {
        eprintln!("Warning: {}", warning.message);
    }

    println!("Welcome to the Maze Game!");

    let mut game = GameState::new(maze);
    game.show_all = reveal_all;
    flush_output(game.initialize());

    let stdin = io::stdin();
    let mut pending: VecDeque<String> = VecDeque::new();

    loop {
        let pos = game.maze.player;
        println!("\nYou are at ({}, {}).", pos.x, pos.y);
        print!("Enter a command (north, south, east, west, look, quit): ");
        io::stdout().flush()?;

        // One whitespace-delimited token per turn; a single input line may
        // supply several turns' worth.
        let token = loop {
            if let Some(t) = pending.pop_front() {
                break Some(t);
            }

            let mut input = String::new();
            let bytes_read = stdin.read_line(&mut input)?;
            if bytes_read == 0 {
                break None;
            }

            pending.extend(input.split_whitespace().map(str::to_string));
        };

        let Some(token) = token else {
            println!("\nGoodbye.");
            break;
        };

        let (out, quit) = game.step(&token);
        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(())
}
