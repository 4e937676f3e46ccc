//! # 2048 Rules Engine
//!
//! This library implements the board transitions of the tile-merging puzzle
//! 2048: shifting and merging power-of-two tiles in one of four directions,
//! scoring merges, spawning new tiles, and detecting the end of a game.
//!
//! It is used by the `human_player` binary, which plays a game from the
//! command line with single-character moves (`u`, `l`, `d`, `r`).
//!
//! ## Modules
//! - `board`: the square grid (`Board`), the `Tile` value type and the `EMPTY` sentinel.
//! - `transform`: `Direction` and the reorientations that reduce every move to a shift left.
//! - `engine`: line collapse, full moves, random tile spawns and `GameSession`.
//! - `config`: `SessionConfig`, the settings a session is started from.
//! - `error`: the `GameError` type.
//! - `utils`: parsing boards from text.
//!
//! ## Example
//! ```
//! use twenty48::{Direction, GameSession, MoveOutcome};
//!
//! let mut game = GameSession::new_with_seed(4, 42).unwrap();
//! match game.make_move(Direction::Up).unwrap() {
//!     MoveOutcome::Continue { points } => println!("+{} points", points),
//!     MoveOutcome::GameOver => println!("Game over!"),
//! }
//! println!("Score: {}\n{}", game.score(), game.board());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod transform;
pub mod utils;

pub use board::{Board, Tile, EMPTY, MAX_TILE};
pub use config::SessionConfig;
pub use engine::{GameSession, MoveOutcome};
pub use error::GameError;
pub use transform::Direction;
