//! Session configuration.
//!
//! Every session carries its own [`GameConfig`], so independent sessions with
//! different sizes or spawn odds can coexist.

use crate::error::{EngineError, Result};
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_PROB_FOUR, DEFAULT_STARTING_PIECES, DEFAULT_WIDTH,
};

/// Construction parameters for a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// Probability in `[0, 1]` that a spawned tile is a 4
    pub spawn_probability_of_4: f64,
    /// Tiles spawned before the first move
    pub starting_pieces: usize,
}

impl GameConfig {
    /// Default odds and starting pieces on a `width` x `height` board.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn spawn_probability_of_4(mut self, p: f64) -> Self {
        self.spawn_probability_of_4 = p;
        self
    }

    pub fn starting_pieces(mut self, n: usize) -> Self {
        self.starting_pieces = n;
        self
    }

    /// Number of cells on the board, `None` if it does not fit in `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Reject configurations that would produce an unplayable or looping session.
    pub fn validate(&self) -> Result<()> {
        let cells = self.validate_board()?;
        if self.starting_pieces > cells {
            return Err(EngineError::InvalidConfiguration(format!(
                "{} starting pieces do not fit on a {}x{} board",
                self.starting_pieces, self.width, self.height
            )));
        }

        Ok(())
    }

    /// Check the board shape and spawn odds only; returns the cell count.
    ///
    /// Used when a session starts from an existing board and no starting tiles
    /// are placed.
    pub fn validate_board(&self) -> Result<usize> {
        let cells = match self.cell_count() {
            Some(n) if n > 0 => n,
            _ => {
                return Err(EngineError::InvalidDimension {
                    width: self.width,
                    height: self.height,
                })
            }
        };

        let p = self.spawn_probability_of_4;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(EngineError::InvalidConfiguration(format!(
                "spawn probability of 4 must be within [0, 1], got {p}"
            )));
        }

        Ok(cells)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            spawn_probability_of_4: DEFAULT_PROB_FOUR,
            starting_pieces: DEFAULT_STARTING_PIECES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.width, 4);
        assert_eq!(config.height, 4);
        assert_eq!(config.starting_pieces, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_side_is_invalid_dimension() {
        let err = GameConfig::with_size(0, 4).validate().unwrap_err();
        assert_eq!(err, EngineError::InvalidDimension { width: 0, height: 4 });

        let err = GameConfig::with_size(3, 0).validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidDimension { .. }));
    }

    #[test]
    fn oversized_board_is_invalid_dimension() {
        let config = GameConfig::with_size(1 << 40, 1 << 40);
        assert_eq!(config.cell_count(), None);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidDimension { .. })
        ));
        assert!(config.validate_board().is_err());
    }

    #[test]
    fn board_validation_ignores_starting_pieces() {
        let config = GameConfig::with_size(1, 1);
        assert!(config.validate().is_err());
        assert_eq!(config.validate_board(), Ok(1));
        assert!(GameConfig::with_size(1, 1)
            .spawn_probability_of_4(2.0)
            .validate_board()
            .is_err());
    }

    #[test]
    fn probability_out_of_range_is_rejected() {
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = GameConfig::default()
                .spawn_probability_of_4(p)
                .validate()
                .unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfiguration(_)), "p = {p}");
        }
        assert!(GameConfig::default().spawn_probability_of_4(0.0).validate().is_ok());
        assert!(GameConfig::default().spawn_probability_of_4(1.0).validate().is_ok());
    }

    #[test]
    fn too_many_starting_pieces_is_rejected() {
        let config = GameConfig::with_size(2, 2).starting_pieces(5);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration(_))
        ));

        // Filling the board exactly is allowed; the session simply starts ended.
        assert!(GameConfig::with_size(2, 2).starting_pieces(4).validate().is_ok());
    }
}
