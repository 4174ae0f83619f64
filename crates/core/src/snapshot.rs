use crate::types::{Tile, TARGET_TILE};

/// Observable session state for a renderer
///
/// A front-end keeps one snapshot and refreshes it with
/// [`Game::snapshot_into`](crate::Game::snapshot_into) every frame, so the cell
/// buffer is reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major tile values
    pub cells: Vec<Tile>,
    pub ended: bool,
    pub moves: u32,
}

impl GameSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    pub fn highest_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// The session ended because the target tile was reached
    pub fn won(&self) -> bool {
        self.cells.contains(&TARGET_TILE)
    }
}
