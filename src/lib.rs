pub mod engine;
pub mod maze;

use engine::{Output, render_frame, try_handle_movement};
use maze::Maze;

pub use maze::{load_maze_from_file, load_maze_from_str, validate_maze};

/// One play session: the maze plus session options. All turn processing
/// goes through `step`, a pure one-token state transition, so the game is
/// fully driveable without any I/O.
pub struct GameState {
    pub maze: Maze,
    /// Renderer debug mode: reveal every tile's true symbol.
    pub show_all: bool,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
        initialized: bool,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a map description string. Call `init()`
        /// to get the initial frame.
        #[wasm_bindgen(constructor)]
        pub fn new(map_text: &str) -> Result<WasmGame, JsValue> {
            let maze =
                load_maze_from_str(map_text).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state: GameState::new(maze),
                initialized: false,
            })
        }

        /// Mark the start tile discovered and return the initial frame.
        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            self.initialized = true;
            let out = self.state.initialize();
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process one command token and return the resulting output
        /// blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            if !self.initialized {
                let _ = self.init();
            }
            let (out, quit) = self.state.step(input.trim());
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Current player position as `[x, y]`, for host-side prompts.
        #[wasm_bindgen]
        pub fn position(&self) -> Vec<u32> {
            vec![self.state.maze.player.x as u32, self.state.maze.player.y as u32]
        }
    }
}

impl GameState {
    pub fn new(maze: Maze) -> Self {
        GameState {
            maze,
            show_all: false,
        }
    }

    /// Session start: the starting tile becomes discovered and the first
    /// frame is rendered, before any command is read.
    pub fn initialize(&mut self) -> Output {
        let start = self.maze.player;
        self.maze.mark_discovered(start.x, start.y);

        let mut out = Output::new();
        out.frame(render_frame(&self.maze, self.show_all));
        out
    }

    /// Process a single command token; returns (output, quit?)
    pub fn step(&mut self, token: &str) -> (Output, bool) {
        let mut out = Output::new();
        let mut quit = false;

        if token == "quit" {
            out.say("Goodbye.");
            quit = true;
        } else if token == "look" {
            out.frame(render_frame(&self.maze, self.show_all));
        } else if !try_handle_movement(&mut out, &mut self.maze, token, self.show_all) {
            out.say("Invalid command.");
        }

        (out, quit)
    }
}
