//! Board representation for Gomoku / Pente

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, MoveGuard, MoveRecord};

/// Board size (19x19)
pub const BOARD_SIZE: usize = 19;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 361
/// Index of the center cell (9, 9)
pub const CENTER: usize = (BOARD_SIZE / 2) * BOARD_SIZE + BOARD_SIZE / 2;

/// Cell contents / player colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}

impl fmt::Display for Pos {
    /// Go-style coordinate: column letter (A-S) and row number counted from the bottom
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col) as char;
        write!(f, "{}{}", col, BOARD_SIZE - self.row as usize)
    }
}

/// The four undirected lines through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Unit step (row, col) in the positive direction of the axis
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (-1, 1),
        }
    }

    /// Cell `distance` steps away from `index` along the axis.
    /// Negative distances walk the opposite direction. `None` when off the board.
    #[inline]
    pub fn step(self, index: usize, distance: i32) -> Option<usize> {
        let (dr, dc) = self.delta();
        let row = (index / BOARD_SIZE) as i32 + dr * distance;
        let col = (index % BOARD_SIZE) as i32 + dc * distance;
        if Pos::is_valid(row, col) {
            Some(row as usize * BOARD_SIZE + col as usize)
        } else {
            None
        }
    }
}

/// Rule variant in force for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Plain five-in-a-row
    Standard,
    /// Double free-three forbidden, pair captures, capture win
    #[default]
    Restricted,
}

impl Ruleset {
    #[inline]
    pub fn is_restricted(self) -> bool {
        matches!(self, Ruleset::Restricted)
    }
}

impl FromStr for Ruleset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Ruleset::Standard),
            "restricted" => Ok(Ruleset::Restricted),
            other => Err(format!("unknown ruleset '{other}' (expected standard or restricted)")),
        }
    }
}

/// Classification of a run of stones along one axis, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    None,
    BlockedTwo,
    FreeTwo,
    BlockedThree,
    FreeThree,
    BlockedFour,
    FreeFour,
    Five,
}

/// Number of captured pairs that wins the game under the restricted rules.
pub const CAPTURE_WIN_PAIRS: u8 = 5;

/// Game status, evaluated right after a move at the played cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    LineWin(Stone),
    CaptureWin(Stone),
    Draw,
}

impl GameStatus {
    pub fn winner(self) -> Option<Stone> {
        match self {
            GameStatus::LineWin(stone) | GameStatus::CaptureWin(stone) => Some(stone),
            GameStatus::Playing | GameStatus::Draw => None,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::LineWin(stone) => write!(f, "{} wins by five in a row", stone.name()),
            GameStatus::CaptureWin(stone) => write!(f, "{} wins by captures", stone.name()),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
