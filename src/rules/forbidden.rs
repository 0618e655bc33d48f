//! Double free-three forbidden move rule
//!
//! A double free-three is a move that creates two or more free-threes
//! simultaneously. Free-three: 3 stones with both ends open that become an
//! open four when extended, either contiguous (`_OOO_`) or split by a single
//! gap (`_OO_O_`, `_O_OO_`).

use crate::board::{Axis, Board, Ruleset, Stone};
use crate::error::RuleError;

/// Cells scanned on each side of the origin
const REACH: i32 = 5;
const ORIGIN: usize = REACH as usize;
const WINDOW: usize = 2 * ORIGIN + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Own,
    Empty,
    /// Opponent stone or off the board
    Blocked,
}

/// Snapshot of the line through `index`, with the origin provisionally
/// holding `stone`. The board itself is never touched.
fn line_marks(board: &Board, index: usize, stone: Stone, axis: Axis) -> [Mark; WINDOW] {
    let mut marks = [Mark::Blocked; WINDOW];
    for (slot, offset) in (-REACH..=REACH).enumerate() {
        marks[slot] = if offset == 0 {
            Mark::Own
        } else {
            match axis.step(index, offset).map(|cell| board.get(cell)) {
                Some(cell) if cell == stone => Mark::Own,
                Some(Stone::Empty) => Mark::Empty,
                _ => Mark::Blocked,
            }
        };
    }
    marks
}

/// Whether the snapshot holds a free-three that includes the origin.
fn has_free_three(marks: &[Mark; WINDOW]) -> bool {
    let own = |i: usize| marks[i] == Mark::Own;
    let empty = |i: usize| marks[i] == Mark::Empty;

    // _OOO_ with `start` on the first stone. A friendly stone one cell
    // beyond either open end turns the shape into a four.
    let contiguous = (ORIGIN - 2..=ORIGIN).any(|start| {
        (start..start + 3).all(own)
            && empty(start - 1)
            && empty(start + 3)
            && !own(start - 2)
            && !own(start + 4)
    });
    if contiguous {
        return true;
    }

    // _OO_O_ / _O_OO_ spanning four cells from `start`
    (ORIGIN - 3..=ORIGIN).any(|start| {
        let inner_gap = (empty(start + 1) && own(start + 2)) || (own(start + 1) && empty(start + 2));
        own(start)
            && own(start + 3)
            && inner_gap
            && empty(start - 1)
            && empty(start + 4)
            && !own(start - 2)
            && !own(start + 5)
    })
}

/// Count the axes on which placing `stone` at `index` makes a free-three.
pub fn count_free_threes(board: &Board, index: usize, stone: Stone) -> u8 {
    let mut count = 0;
    for axis in Axis::ALL {
        if has_free_three(&line_marks(board, index, stone, axis)) {
            count += 1;
        }
    }
    count
}

/// Check if a move is a forbidden double free-three
#[inline]
pub fn is_double_free_three(board: &Board, index: usize, stone: Stone) -> bool {
    count_free_threes(board, index, stone) >= 2
}

/// Legality check reporting the reason for a rejection.
///
/// A move is legal when the cell is empty and, under the restricted rules,
/// it does not create two free-threes at once.
pub fn check_placement(board: &Board, index: usize, player: Stone, ruleset: Ruleset) -> Result<(), RuleError> {
    if !board.is_empty(index) {
        return Err(RuleError::Occupied(index));
    }
    if ruleset.is_restricted() && is_double_free_three(board, index, player) {
        return Err(RuleError::DoubleFreeThree(index));
    }
    Ok(())
}

#[inline]
pub fn can_place(board: &Board, index: usize, player: Stone, ruleset: Ruleset) -> bool {
    check_placement(board, index, player, ruleset).is_ok()
}
