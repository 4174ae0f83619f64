//! Orientation module - per-direction coordinate transforms
//!
//! A move is always computed in *canonical space*, where tiles travel toward
//! canonical row 0. Each [`Direction`] maps the real grid into canonical space with a
//! quarter-turn transform, and maps canonical coordinates back with the inverse turn:
//!
//! | Direction | forward (grid → canonical) | inverse (canonical → grid) |
//! |-----------|----------------------------|----------------------------|
//! | Up        | identity                   | identity                   |
//! | Down      | half turn                  | half turn                  |
//! | Left      | clockwise                  | counter-clockwise          |
//! | Right     | counter-clockwise          | clockwise                  |
//!
//! Canonical space has `depth` rows (the axis tiles travel along) and `lanes`
//! columns (independent lines of tiles). Only coordinates are transformed; the grid
//! itself is never copied during a move.

use crate::types::Direction;

/// A quarter-turn rotation of a `rows` x `cols` grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Identity,
    Half,
    Clockwise,
    CounterClockwise,
}

impl Turn {
    /// Dimensions `(rows, cols)` of the grid after turning
    #[inline(always)]
    fn turned_dims(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Turn::Identity | Turn::Half => (rows, cols),
            Turn::Clockwise | Turn::CounterClockwise => (cols, rows),
        }
    }

    /// Where `(row, col)` of a `rows` x `cols` grid lands after turning
    #[inline(always)]
    fn apply(self, row: usize, col: usize, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Turn::Identity => (row, col),
            Turn::Half => (rows - 1 - row, cols - 1 - col),
            Turn::Clockwise => (col, rows - 1 - row),
            Turn::CounterClockwise => (cols - 1 - col, row),
        }
    }
}

/// Coordinate mapping between the real grid and canonical space for one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    forward: Turn,
    inverse: Turn,
    width: usize,
    height: usize,
}

impl Orientation {
    /// Build the mapping for `direction` on a `width` x `height` grid
    pub fn for_direction(direction: Direction, width: usize, height: usize) -> Self {
        // Forward and inverse stay paired here so they cannot drift apart.
        let (forward, inverse) = match direction {
            Direction::Up => (Turn::Identity, Turn::Identity),
            Direction::Down => (Turn::Half, Turn::Half),
            Direction::Left => (Turn::Clockwise, Turn::CounterClockwise),
            Direction::Right => (Turn::CounterClockwise, Turn::Clockwise),
        };
        Self {
            forward,
            inverse,
            width,
            height,
        }
    }

    /// Canonical rows: the number of cells a tile can travel along
    pub fn depth(&self) -> usize {
        self.forward.turned_dims(self.height, self.width).0
    }

    /// Canonical columns: the number of independent lines
    pub fn lanes(&self) -> usize {
        self.forward.turned_dims(self.height, self.width).1
    }

    /// Map canonical `(row, col)` to real grid `(row, col)`
    #[inline(always)]
    pub fn to_grid(&self, row: usize, col: usize) -> (usize, usize) {
        self.inverse.apply(row, col, self.depth(), self.lanes())
    }

    /// Map real grid `(row, col)` to canonical `(row, col)`
    #[inline(always)]
    pub fn from_grid(&self, row: usize, col: usize) -> (usize, usize) {
        self.forward.apply(row, col, self.height, self.width)
    }
}
