//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,term,types}` so the
//! binary, integration tests and benchmarks share one import path.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
