//! Engine error types.

use thiserror::Error;

/// Errors surfaced by session construction and the spawn step.
///
/// Moves never fail: a move on an ended session is a silent no-op.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A board side of zero cells.
    #[error("invalid board dimensions {width}x{height}: both sides must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    /// Parameters that cannot describe a playable session.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Spawn was asked to place a tile on a full board.
    #[error("no empty cell left to spawn into")]
    NoEmptyCell,

    /// A cell value that is neither empty nor a power of two >= 2.
    #[error("invalid tile {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// Rows of unequal length, or a board that does not match the configured size.
    #[error("board shape mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    ShapeMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
