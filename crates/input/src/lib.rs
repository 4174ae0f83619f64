//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. The board engine
//! never sees key codes; a front-end feeds it the mapped actions.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
