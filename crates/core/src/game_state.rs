//! Game state module - one puzzle session
//!
//! Ties the board, the session configuration and the tile source together and
//! enforces the lifecycle: starting tiles, move → termination check → spawn, and the
//! terminal `ended` state.
//!
//! A session has two states. It is *active* until a move (or the starting tiles)
//! leaves no empty cell or produces a [`TARGET_TILE`]; from then on it is *ended*
//! and every move is a silent no-op.

use tracing::{debug, info};

use crate::board::{Board, SpawnedTile};
use crate::config::GameConfig;
use crate::error::{EngineError, Result};
use crate::rng::{RngSource, TileSource};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, Tile, TARGET_TILE};

/// What a single move did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one tile slid or merged
    pub changed: bool,
    /// Number of merges performed
    pub merges: u32,
    /// Tile spawned after the move, if any
    pub spawned: Option<SpawnedTile>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Game<S: TileSource = RngSource> {
    config: GameConfig,
    board: Board,
    source: S,
    ended: bool,
    /// Moves that changed the board.
    moves: u32,
    /// Merge markers reused across moves.
    merged: Vec<bool>,
}

impl Game {
    /// Start a session drawing randomness from OS entropy
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_source(config, RngSource::from_entropy())
    }

    /// Start a reproducible session
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_source(config, RngSource::seeded(seed))
    }
}

impl<S: TileSource> Game<S> {
    /// Start a session with an explicit tile source
    ///
    /// Spawns `config.starting_pieces` tiles, then evaluates the termination check
    /// once, so a board filled by its starting tiles begins ended.
    pub fn with_source(config: GameConfig, source: S) -> Result<Self> {
        config.validate()?;

        let mut game = Self {
            config,
            board: Board::new(config.width, config.height),
            source,
            ended: false,
            moves: 0,
            merged: Vec::new(),
        };
        for _ in 0..config.starting_pieces {
            game.spawn()?;
        }
        game.check_ended();

        debug!(
            width = config.width,
            height = config.height,
            starting_pieces = config.starting_pieces,
            "session started"
        );
        Ok(game)
    }

    /// Resume from an explicit board; no starting tiles are spawned
    ///
    /// Only the target tile ends the session here. A full board stays active
    /// until a move runs the termination check, so a full board with merges left
    /// can still be played.
    pub fn from_board(config: GameConfig, board: Board, source: S) -> Result<Self> {
        config.validate_board()?;
        if board.width() != config.width || board.height() != config.height {
            return Err(EngineError::ShapeMismatch {
                expected_width: config.width,
                expected_height: config.height,
                width: board.width(),
                height: board.height(),
            });
        }

        let ended = board.contains(TARGET_TILE);
        Ok(Self {
            config,
            board,
            source,
            ended,
            moves: 0,
            merged: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    /// The target tile is on the board
    pub fn won(&self) -> bool {
        self.board.contains(TARGET_TILE)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn highest_tile(&self) -> Tile {
        self.board.max_tile()
    }

    pub fn tile_sum(&self) -> u64 {
        self.board.sum()
    }

    /// Slide toward `direction`, then spawn if the board changed and the session
    /// is still active
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.ended {
            return MoveOutcome::default();
        }

        let slide = self.board.slide_with(direction, &mut self.merged);
        let mut outcome = MoveOutcome {
            changed: slide.changed,
            merges: slide.merges,
            spawned: None,
        };
        if slide.changed {
            self.moves += 1;
        }

        self.check_ended();

        if !self.ended && slide.changed {
            // An active session always has an empty cell, so this cannot fail.
            outcome.spawned = self.spawn().ok();
        }

        debug!(
            direction = direction.as_str(),
            changed = outcome.changed,
            merges = outcome.merges,
            "move applied"
        );
        outcome
    }

    /// Apply a front-end action
    ///
    /// Returns `None` for actions the engine does not handle (restart).
    pub fn apply_action(&mut self, action: GameAction) -> Option<MoveOutcome> {
        action.direction().map(|dir| self.apply_move(dir))
    }

    /// Copy observable state into `snap`, reusing its allocation
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.width = self.board.width();
        snap.height = self.board.height();
        snap.cells.clear();
        snap.cells.extend_from_slice(self.board.cells());
        snap.ended = self.ended;
        snap.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn spawn(&mut self) -> Result<SpawnedTile> {
        let tile = self
            .board
            .spawn(&mut self.source, self.config.spawn_probability_of_4)?;
        debug!(row = tile.row, col = tile.col, value = tile.value, "tile spawned");
        Ok(tile)
    }

    fn check_ended(&mut self) {
        if self.ended {
            return;
        }
        self.ended = self.board.is_full() || self.board.contains(TARGET_TILE);
        if self.ended {
            info!(
                won = self.won(),
                moves = self.moves,
                highest_tile = self.board.max_tile(),
                "session ended"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    /// Always picks the first empty cell and always rolls a 2.
    #[derive(Debug)]
    struct FirstEmpty;

    impl TileSource for FirstEmpty {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }

        fn roll(&mut self) -> f64 {
            0.99
        }
    }

    fn game(rows: &[&[Tile]]) -> Game<FirstEmpty> {
        let board = Board::from_rows(rows).unwrap();
        let config = GameConfig::with_size(board.width(), board.height());
        Game::from_board(config, board, FirstEmpty).unwrap()
    }

    #[test]
    fn test_new_session_has_starting_pieces() {
        let g = Game::with_source(GameConfig::default(), SimpleRng::new(1)).unwrap();
        assert_eq!(g.board().empty_count(), 14);
        assert!(!g.ended());
        assert_eq!(g.moves(), 0);
        assert!(g.board().cells().iter().all(|&v| v == 0 || v == 2 || v == 4));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = Game::with_source(GameConfig::with_size(0, 4), SimpleRng::new(1)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDimension { .. }));
    }

    #[test]
    fn test_starting_pieces_filling_board_ends_session() {
        let config = GameConfig::with_size(2, 1).starting_pieces(2);
        let g = Game::with_source(config, SimpleRng::new(4)).unwrap();
        assert!(g.board().is_full());
        assert!(g.ended());
    }

    #[test]
    fn test_move_spawns_into_first_empty() {
        let mut g = game(&[&[0, 0, 2, 2], &[0, 0, 0, 0]]);
        let out = g.apply_move(Direction::Left);
        assert!(out.changed);
        assert_eq!(out.merges, 1);
        assert_eq!(
            out.spawned,
            Some(SpawnedTile {
                row: 0,
                col: 1,
                value: 2
            })
        );
        assert_eq!(g.board().to_rows(), vec![vec![4, 2, 0, 0], vec![0, 0, 0, 0]]);
        assert_eq!(g.moves(), 1);
    }

    #[test]
    fn test_unchanged_move_does_not_spawn() {
        let mut g = game(&[&[2, 0], &[0, 0]]);
        let out = g.apply_move(Direction::Up);
        assert_eq!(out, MoveOutcome::default());
        assert_eq!(g.board().to_rows(), vec![vec![2, 0], vec![0, 0]]);
        assert_eq!(g.moves(), 0);
    }

    #[test]
    fn test_reaching_target_ends_without_spawn() {
        let mut g = game(&[&[1024, 1024, 0, 0]]);
        let out = g.apply_move(Direction::Left);
        assert!(out.changed);
        assert_eq!(out.spawned, None);
        assert!(g.ended());
        assert!(g.won());
        assert_eq!(g.board().to_rows(), vec![vec![2048, 0, 0, 0]]);
    }

    #[test]
    fn test_ended_session_ignores_moves() {
        let mut g = game(&[&[2, 4], &[8, 16]]);
        assert!(!g.ended());
        assert_eq!(g.apply_move(Direction::Left), MoveOutcome::default());
        assert!(g.ended());

        let before = g.board().clone();
        for dir in Direction::ALL {
            assert_eq!(g.apply_move(dir), MoveOutcome::default());
        }
        assert_eq!(g.board(), &before);
    }

    #[test]
    fn test_full_board_ends_on_next_check() {
        // The check runs before the spawn, so a spawn that fills the last gap leaves
        // the session active until the next move evaluates it.
        let mut g = game(&[&[2, 2, 4]]);
        let out = g.apply_move(Direction::Left);
        assert_eq!(out.spawned.map(|t| t.col), Some(2));
        assert_eq!(g.board().to_rows(), vec![vec![4, 4, 2]]);
        assert!(!g.ended());

        let out = g.apply_move(Direction::Right);
        assert_eq!(out.spawned.map(|t| t.col), Some(0));
        assert_eq!(g.board().to_rows(), vec![vec![2, 8, 2]]);
        assert!(!g.ended());

        let out = g.apply_move(Direction::Left);
        assert!(!out.changed);
        assert!(g.ended());
        assert_eq!(g.board().to_rows(), vec![vec![2, 8, 2]]);
    }

    #[test]
    fn test_full_board_with_merges_left_is_playable() {
        let mut g = game(&[&[2, 4], &[2, 8]]);
        assert!(!g.ended());

        let out = g.apply_move(Direction::Up);
        assert_eq!(out.merges, 1);
        assert_eq!(
            out.spawned,
            Some(SpawnedTile {
                row: 1,
                col: 0,
                value: 2
            })
        );
        assert_eq!(g.board().to_rows(), vec![vec![4, 4], vec![2, 8]]);
    }

    #[test]
    fn test_loaded_target_tile_starts_ended() {
        let mut g = game(&[&[2048, 0], &[0, 0]]);
        assert!(g.ended());
        assert!(g.won());
        assert_eq!(g.apply_move(Direction::Right), MoveOutcome::default());
    }

    #[test]
    fn test_from_board_single_cell() {
        // The default two starting pieces would not fit, but none are placed here.
        let board = Board::from_rows(&[[8u32]]).unwrap();
        let mut g = Game::from_board(GameConfig::with_size(1, 1), board, FirstEmpty).unwrap();
        assert!(!g.ended());
        assert_eq!(g.apply_move(Direction::Left), MoveOutcome::default());
        assert!(g.ended());
        assert_eq!(g.board().get(0, 0), Some(8));
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut g = game(&[&[0, 2]]);
        assert_eq!(g.apply_action(GameAction::Restart), None);
        let out = g.apply_action(GameAction::MoveLeft).unwrap();
        assert!(out.changed);
    }

    #[test]
    fn test_from_board_shape_mismatch() {
        let board = Board::new(3, 3);
        let err = Game::from_board(GameConfig::default(), board, FirstEmpty).unwrap_err();
        assert!(matches!(err, EngineError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let g = game(&[&[2, 0], &[0, 8]]);
        let snap = g.snapshot();
        assert_eq!((snap.width, snap.height), (2, 2));
        assert_eq!(snap.get(1, 1), Some(8));
        assert_eq!(snap.get(2, 0), None);
        assert_eq!(snap.highest_tile(), 8);
        assert!(!snap.ended);

        let mut reused = GameSnapshot::default();
        reused.cells.reserve(64);
        g.snapshot_into(&mut reused);
        assert_eq!(reused, snap);
    }
}
