//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the rule engine of a 2048-style sliding-tile puzzle. It has **no
//! dependencies** on terminals, input handling or I/O, making it:
//!
//! - **Deterministic**: randomness comes from an injected [`TileSource`], so a seeded
//!   source replays the same session
//! - **Testable**: every rule is a plain method on [`Board`] or [`Game`]
//! - **Portable**: a front-end only reads [`GameSnapshot`]s and calls
//!   [`Game::apply_move`]
//!
//! # Module Structure
//!
//! - [`board`]: the tile grid, the slide/merge sweep and tile spawning
//! - [`orientation`]: per-direction coordinate transforms into canonical space
//! - [`game_state`]: session lifecycle (starting tiles, termination, conditional spawn)
//! - [`config`]: per-session [`GameConfig`]
//! - [`rng`]: the [`TileSource`] seam and its implementations
//! - [`snapshot`]: render-ready copy of the session state
//! - [`error`]: [`EngineError`]
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge. Two equal tiles that meet merge into
//!   one tile of double value; a tile produced by a merge cannot merge again in the
//!   same move.
//! - A move that changed the board spawns a 2 (or, with probability
//!   `spawn_probability_of_4`, a 4) in a uniformly chosen empty cell.
//! - The session ends when no empty cell remains or a 2048 tile appears. The check
//!   runs after each move, before the spawn. Ended sessions ignore moves.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, Game, GameConfig, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let board = Board::from_rows(&[
//!     [2u32, 2, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//! let mut game = Game::from_board(GameConfig::default(), board, SimpleRng::new(7)).unwrap();
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert_eq!(outcome.merges, 1);
//! assert_eq!(game.board().get(0, 0), Some(4));
//! assert!(outcome.spawned.is_some());
//! assert!(!game.ended());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod orientation;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, SlideResult, SpawnedTile};
pub use config::GameConfig;
pub use error::{EngineError, Result};
pub use game_state::{Game, MoveOutcome};
pub use orientation::Orientation;
pub use rng::{RngSource, SimpleRng, TileSource};
pub use snapshot::GameSnapshot;
