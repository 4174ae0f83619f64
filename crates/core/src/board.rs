//! Board module - manages the tile grid
//!
//! The board is a `width` x `height` grid where each cell is empty (`0`) or holds a
//! power of two >= 2. Storage is a flat row-major vector (`row * width + col`).
//! Coordinates are `(row, col)`: row 0 is the top edge, column 0 the left edge.
//!
//! The board knows how to slide and merge its tiles ([`Board::slide`]) and how to
//! spawn a new tile ([`Board::spawn`]). Lifecycle rules (when to spawn, when the
//! session ends) live in [`Game`](crate::Game).

use tracing::trace;

use crate::error::{EngineError, Result};
use crate::orientation::Orientation;
use crate::rng::TileSource;
use crate::types::{is_valid_tile, Direction, Tile, SPAWN_FOUR, SPAWN_TWO};

/// Result of one slide/merge sweep, before any spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideResult {
    /// At least one tile moved or merged
    pub changed: bool,
    /// Number of merges performed
    pub merges: u32,
}

/// A tile placed by [`Board::spawn`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// The game board - flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Build a board from rows of tile values
    ///
    /// Rows must be non-empty, of equal length, and hold only `0` or powers of two >= 2.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimension { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(EngineError::ShapeMismatch {
                    expected_width: width,
                    expected_height: height,
                    width: values.len(),
                    height,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Calculate flat index from `(row, col)` coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get tile at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set tile at `(row, col)`
    /// Returns false if out of bounds or `value` is not a valid tile
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        if !is_valid_tile(value) {
            return false;
        }
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width)
    }

    /// Convert to a 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Coordinates of every empty cell, row-major
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| (i / self.width, i % self.width))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Whether any cell holds exactly `value`
    pub fn contains(&self, value: Tile) -> bool {
        self.cells.contains(&value)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Slide and merge every tile toward `direction`
    ///
    /// Cells are visited row-major in canonical space (see [`Orientation`]). Each
    /// tile walks toward canonical row 0 until it hits the edge, a different tile, or
    /// a cell that already absorbed a merge during this sweep. Meeting an equal tile
    /// merges into it and ends the walk, so a destination receives at most one merge.
    pub fn slide(&mut self, direction: Direction) -> SlideResult {
        let mut merged = Vec::with_capacity(self.cells.len());
        self.slide_with(direction, &mut merged)
    }

    /// [`Board::slide`] with a caller-owned merge-marker buffer
    ///
    /// The buffer is reset on entry; reusing it keeps repeated moves allocation-free.
    pub fn slide_with(&mut self, direction: Direction, merged: &mut Vec<bool>) -> SlideResult {
        let orient = Orientation::for_direction(direction, self.width, self.height);
        let width = self.width;
        let flat = |(row, col): (usize, usize)| row * width + col;

        merged.clear();
        merged.resize(self.cells.len(), false);
        let mut result = SlideResult::default();

        for r in 0..orient.depth() {
            for c in 0..orient.lanes() {
                let mut at = flat(orient.to_grid(r, c));
                let value = self.cells[at];
                if value == 0 {
                    continue;
                }

                let mut landing = r;
                while landing > 0 {
                    let probe = flat(orient.to_grid(landing - 1, c));
                    if merged[probe] {
                        break;
                    }

                    let target = self.cells[probe];
                    if target == value {
                        // The largest representable tile cannot double.
                        let Some(doubled) = value.checked_mul(2) else {
                            break;
                        };
                        self.cells[probe] = doubled;
                        self.cells[at] = 0;
                        merged[probe] = true;
                        result.changed = true;
                        result.merges += 1;
                        break;
                    }
                    if target != 0 {
                        break;
                    }

                    self.cells[probe] = value;
                    self.cells[at] = 0;
                    at = probe;
                    landing -= 1;
                    result.changed = true;
                }
            }
        }

        trace!(
            direction = direction.as_str(),
            changed = result.changed,
            merges = result.merges,
            "slide"
        );
        result
    }

    /// Place a 2 or 4 into a uniformly chosen empty cell
    ///
    /// The tile is a 4 when `source.roll()` falls below `prob_four`.
    pub fn spawn<S: TileSource + ?Sized>(
        &mut self,
        source: &mut S,
        prob_four: f64,
    ) -> Result<SpawnedTile> {
        let empty = self.empty_count();
        if empty == 0 {
            return Err(EngineError::NoEmptyCell);
        }

        // n-th empty cell in row-major order, without collecting the candidates.
        let nth = source.pick(empty);
        let idx = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .nth(nth)
            .map(|(i, _)| i)
            .ok_or(EngineError::NoEmptyCell)?;

        let value = if source.roll() < prob_four {
            SPAWN_FOUR
        } else {
            SPAWN_TWO
        };
        self.cells[idx] = value;

        Ok(SpawnedTile {
            row: idx / self.width,
            col: idx % self.width,
            value,
        })
    }

    /// Copy of this board turned into canonical space for `direction`
    pub fn reoriented(&self, direction: Direction) -> Board {
        let orient = Orientation::for_direction(direction, self.width, self.height);
        let mut out = Board::new(orient.lanes(), orient.depth());
        for row in 0..self.height {
            for col in 0..self.width {
                let (r, c) = orient.from_grid(row, col);
                out.cells[r * out.width + c] = self.cells[row * self.width + col];
            }
        }
        out
    }

    /// Inverse of [`Board::reoriented`]: turn a canonical board back for `direction`
    pub fn restored(&self, direction: Direction) -> Board {
        let (width, height) = match direction {
            Direction::Up | Direction::Down => (self.width, self.height),
            Direction::Left | Direction::Right => (self.height, self.width),
        };
        let orient = Orientation::for_direction(direction, width, height);
        let mut out = Board::new(width, height);
        for r in 0..self.height {
            for c in 0..self.width {
                let (row, col) = orient.to_grid(r, c);
                out.cells[row * width + col] = self.cells[r * self.width + c];
            }
        }
        out
    }
}
