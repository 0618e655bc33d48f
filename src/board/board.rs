//! Board structure with capture tracking and reversible move history

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Axis, GameStatus, Ruleset, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::RuleError;
use crate::rules::{self, CaptureSet, Sequence};

/// Game board with capture tracking
#[derive(Debug, Clone)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    /// Number of pairs captured by each side (0-5, 5 = win)
    black_captures: u8,
    white_captures: u8,
    history: Vec<MoveRecord>,
}

/// Reversible delta for one applied move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub index: usize,
    pub stone: Stone,
    /// Opponent stones removed by this move
    pub captured: CaptureSet,
    /// Capture counters (black, white) before the move
    pub counters_before: [u8; 2],
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            black_captures: 0,
            white_captures: 0,
            history: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    /// Get stone at a cell
    #[inline]
    pub fn get(&self, index: usize) -> Stone {
        if self.black.get(index) {
            Stone::Black
        } else if self.white.get(index) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        !self.black.get(index) && !self.white.get(index)
    }

    /// Place a stone without captures or history.
    /// Setup primitive; game moves go through `play_move`.
    #[inline]
    pub fn place_stone(&mut self, index: usize, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(index),
            Stone::White => self.white.set(index),
            Stone::Empty => {}
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, index: usize) {
        self.black.clear(index);
        self.white.clear(index);
    }

    /// Occupancy set for a color (None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Pairs captured by a color
    #[inline]
    pub fn captures(&self, stone: Stone) -> u8 {
        match stone {
            Stone::Black => self.black_captures,
            Stone::White => self.white_captures,
            Stone::Empty => 0,
        }
    }

    /// Add captured pairs for a color (saturating)
    #[inline]
    pub fn add_captures(&mut self, stone: Stone, pairs: u8) {
        match stone {
            Stone::Black => self.black_captures = self.black_captures.saturating_add(pairs),
            Stone::White => self.white_captures = self.white_captures.saturating_add(pairs),
            Stone::Empty => {}
        }
    }

    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Applied moves, oldest first
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<usize> {
        self.history.last().map(|record| record.index)
    }

    /// Whether `player` may play at `index` under `ruleset`.
    #[inline]
    pub fn can_place(&self, index: usize, player: Stone, ruleset: Ruleset) -> bool {
        rules::can_place(self, index, player, ruleset)
    }

    /// Same check as `can_place`, reporting why a move is rejected.
    #[inline]
    pub fn check_placement(&self, index: usize, player: Stone, ruleset: Ruleset) -> Result<(), RuleError> {
        rules::check_placement(self, index, player, ruleset)
    }

    /// Apply a move: resolve bracket captures (restricted rules), place the
    /// stone and record the delta. Returns the number of pairs captured.
    ///
    /// The caller must have checked the move with `can_place`.
    pub fn play_move(&mut self, index: usize, player: Stone, ruleset: Ruleset) -> u8 {
        debug_assert!(self.is_empty(index), "play_move on occupied cell {index}");
        debug_assert!(player != Stone::Empty);

        let counters_before = [self.black_captures, self.white_captures];
        let captured = if ruleset.is_restricted() {
            rules::find_captures(self, index, player)
        } else {
            CaptureSet::new()
        };

        for &cell in captured.as_slice() {
            self.remove_stone(cell);
        }
        let pairs = captured.pairs();
        self.add_captures(player, pairs);
        self.place_stone(index, player);

        self.history.push(MoveRecord {
            index,
            stone: player,
            captured,
            counters_before,
        });
        pairs
    }

    /// Revert the most recent move. `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.remove_stone(record.index);
        let opponent = record.stone.opponent();
        for &cell in record.captured.as_slice() {
            self.place_stone(cell, opponent);
        }
        [self.black_captures, self.white_captures] = record.counters_before;
        Some(record)
    }

    /// Revert up to `plies` moves and return how many were reverted.
    ///
    /// Running out of history leaves the position the first recorded move
    /// was played on: the empty board, or whatever was set up with
    /// `place_stone`.
    pub fn load_history(&mut self, plies: usize) -> usize {
        let mut reverted = 0;
        while reverted < plies && self.undo_move().is_some() {
            reverted += 1;
        }
        reverted
    }

    /// Apply a move that is undone when the returned guard drops.
    pub fn scoped_move(&mut self, index: usize, player: Stone, ruleset: Ruleset) -> MoveGuard<'_> {
        self.play_move(index, player, ruleset);
        MoveGuard { board: self }
    }

    /// Run through `index` along `axis`, treating `index` as holding `player`'s stone.
    #[inline]
    pub fn get_sequence(&self, index: usize, player: Stone, axis: Axis) -> Sequence {
        rules::get_sequence(self, index, player, axis)
    }

    /// Whether the opponent can break `player`'s five through `index` by capture next turn.
    #[inline]
    pub fn can_capture_win_sequence(&self, index: usize, player: Stone, axis: Axis) -> bool {
        rules::can_capture_win_sequence(self, index, player, axis)
    }

    /// Status after `player` has just played at `index`.
    #[inline]
    pub fn is_endgame(&self, index: usize, player: Stone, ruleset: Ruleset) -> GameStatus {
        rules::is_endgame(self, index, player, ruleset)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid and counters compare equal; history is not part of the position.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.black == other.black
            && self.white == other.white
            && self.black_captures == other.black_captures
            && self.white_captures == other.white_captures
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{:>3}", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let symbol = match self.get(row * BOARD_SIZE + col) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "captures: black {} / white {}",
            self.black_captures, self.white_captures
        )
    }
}

/// A move applied for the lifetime of the guard.
///
/// Dropping the guard undoes the move, so every exit path of a search node
/// (including pruning) restores the board. Guards must be dropped in LIFO order,
/// which nested scopes guarantee.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move();
    }
}
