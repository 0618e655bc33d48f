//! Bracket capture rules (Pente-style pair capture)
//!
//! Capture pattern: X-O-O-X where X is the capturing player's stone
//! and O is the opponent's stone. Only exactly 2 stones can be captured.

use crate::board::{Axis, Board, Stone};

/// Maximum stones one move can capture: one pair in each of the 8 directions.
const MAX_CAPTURED: usize = 16;

/// Stones removed by a single move, stored inline so search never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSet {
    cells: [usize; MAX_CAPTURED],
    len: u8,
}

impl CaptureSet {
    pub const fn new() -> Self {
        Self {
            cells: [0; MAX_CAPTURED],
            len: 0,
        }
    }

    #[inline]
    fn push_pair(&mut self, first: usize, second: usize) {
        let len = self.len as usize;
        self.cells[len] = first;
        self.cells[len + 1] = second;
        self.len += 2;
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.cells[..self.len as usize]
    }

    /// Number of captured pairs
    #[inline]
    pub fn pairs(&self) -> u8 {
        self.len / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for CaptureSet {
    fn default() -> Self {
        Self::new()
    }
}

/// The pair bracketed by a stone at `index` going `sign` along `axis`, if any.
///
/// Pattern: placed_stone(index) - opp(+1) - opp(+2) - own(+3)
#[inline]
fn bracketed_pair(board: &Board, index: usize, stone: Stone, axis: Axis, sign: i32) -> Option<(usize, usize)> {
    let opponent = stone.opponent();
    let far = axis.step(index, 3 * sign)?;
    let first = axis.step(index, sign)?;
    let second = axis.step(index, 2 * sign)?;

    (board.get(first) == opponent && board.get(second) == opponent && board.get(far) == stone)
        .then_some((first, second))
}

/// Find the stones that would be captured if `stone` is placed at `index`.
///
/// All 8 directions are scanned; every matching bracket contributes its pair.
pub fn find_captures(board: &Board, index: usize, stone: Stone) -> CaptureSet {
    let mut captured = CaptureSet::new();
    for axis in Axis::ALL {
        for sign in [1, -1] {
            if let Some((first, second)) = bracketed_pair(board, index, stone, axis, sign) {
                captured.push_pair(first, second);
            }
        }
    }
    captured
}

/// Count how many pairs would be captured by a move.
#[inline]
pub fn count_captures(board: &Board, index: usize, stone: Stone) -> u8 {
    find_captures(board, index, stone).pairs()
}
