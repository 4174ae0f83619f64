//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, key mapping).
//!
//! # Session Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 4 | Columns on a new board |
//! | `DEFAULT_HEIGHT` | 4 | Rows on a new board |
//! | `DEFAULT_PROB_FOUR` | 0.1 | Chance a spawned tile is a 4 instead of a 2 |
//! | `DEFAULT_STARTING_PIECES` | 2 | Tiles spawned before the first move |
//! | `TARGET_TILE` | 2048 | Reaching this value ends the session |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_WIDTH};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Up));
//!
//! assert_eq!(DEFAULT_WIDTH, 4);
//! ```

/// Board width in cells for a default session
pub const DEFAULT_WIDTH: usize = 4;

/// Board height in cells for a default session
pub const DEFAULT_HEIGHT: usize = 4;

/// Probability that a freshly spawned tile is a 4
pub const DEFAULT_PROB_FOUR: f64 = 0.1;

/// Number of tiles spawned when a session starts
pub const DEFAULT_STARTING_PIECES: usize = 2;

/// Tile value that ends the session as a win
pub const TARGET_TILE: u32 = 2048;

/// Value of a regular spawned tile
pub const SPAWN_TWO: u32 = 2;

/// Value of a lucky spawned tile
pub const SPAWN_FOUR: u32 = 4;

/// A cell on the board
///
/// - `0`: Empty cell
/// - power of two >= 2: a tile
pub type Tile = u32;

/// The edge tiles slide toward during a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    Up,
    /// Toward the last row
    Down,
    /// Toward column 0
    Left,
    /// Toward the last column
    Right,
}

impl Direction {
    /// All four directions, in the order a solver or test usually iterates them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing at the opposite edge
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that a front-end can feed into a session
///
/// Movement actions map one-to-one onto [`Direction`]. `Restart` is handled by
/// the front-end, which replaces the session with a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide tiles toward the top edge
    MoveUp,
    /// Slide tiles toward the bottom edge
    MoveDown,
    /// Slide tiles toward the left edge
    MoveLeft,
    /// Slide tiles toward the right edge
    MoveRight,
    /// Start a new session with the same configuration
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("RESTART"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Restart => "restart",
        }
    }

    /// The movement direction carried by this action, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
        }
    }
}

/// Whether `value` can sit in a board cell (empty or a power of two >= 2)
///
/// # Examples
///
/// ```
/// use tui_2048_types::is_valid_tile;
///
/// assert!(is_valid_tile(0));
/// assert!(is_valid_tile(2048));
/// assert!(!is_valid_tile(1));
/// assert!(!is_valid_tile(6));
/// ```
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults() {
        assert_eq!(DEFAULT_WIDTH, 4);
        assert_eq!(DEFAULT_HEIGHT, 4);
        assert_eq!(DEFAULT_PROB_FOUR, 0.1);
        assert_eq!(DEFAULT_STARTING_PIECES, 2);
        assert_eq!(TARGET_TILE, 2048);
    }

    #[test]
    fn direction_string_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::from_str("R"), Some(Direction::Right));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn action_direction_mapping() {
        for dir in Direction::ALL {
            let action = GameAction::from(dir);
            assert_eq!(action.direction(), Some(dir));
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::Restart.direction(), None);
    }
}
