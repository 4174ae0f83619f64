//! Terminal rendering for the puzzle.
//!
//! Rendering goes through a small framebuffer rather than a widget toolkit:
//! [`GameView`] turns a [`GameSnapshot`](crate::core::GameSnapshot) into a
//! [`FrameBuffer`] (pure, testable) and [`TerminalRenderer`] flushes it to the tty.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{status_line, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
