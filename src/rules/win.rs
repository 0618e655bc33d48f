//! Win condition checking
//!
//! Win conditions:
//! 1. Five or more stones in a row
//! 2. Capture 10 opponent stones (5 pairs), restricted rules only
//!
//! Endgame capture rule: under the restricted rules a five only wins if the
//! opponent cannot break it by capturing a pair out of the line.

use crate::board::{Axis, Board, Category, GameStatus, Ruleset, Stone, CAPTURE_WIN_PAIRS};

use super::forbidden::can_place;
use super::sequence::{get_sequence, Sequence};

/// The five (or longer) run of `player` through `index`, if there is one.
pub fn find_five(board: &Board, index: usize, player: Stone) -> Option<Sequence> {
    Axis::ALL
        .into_iter()
        .map(|axis| get_sequence(board, index, player, axis))
        .find(|seq| seq.category == Category::Five)
}

/// Cell where the opponent would land to capture the pair `cell`-`partner`.
///
/// Pattern along the pair: flank - cell - partner - flank, one flank held by
/// the opponent and the other empty.
#[inline]
fn pair_capture_landing(board: &Board, cell: usize, player: Stone, axis: Axis, sign: i32) -> Option<usize> {
    let partner = axis.step(cell, sign)?;
    if board.get(partner) != player {
        return None;
    }
    let behind = axis.step(cell, -sign)?;
    let beyond = axis.step(cell, 2 * sign)?;
    let opponent = player.opponent();

    match (board.get(behind), board.get(beyond)) {
        (b, Stone::Empty) if b == opponent => Some(beyond),
        (Stone::Empty, b) if b == opponent => Some(behind),
        _ => None,
    }
}

/// Whether the opponent can break `player`'s five through `index` along
/// `axis` by capturing a pair that contains one of its stones.
///
/// One-ply lookahead: only bracket patterns are checked, and the capturing
/// move must itself be legal for the opponent.
pub fn can_capture_win_sequence(board: &Board, index: usize, player: Stone, axis: Axis) -> bool {
    let seq = get_sequence(board, index, player, axis);
    if seq.category != Category::Five {
        return false;
    }

    let opponent = player.opponent();
    let breakable = seq.cells().any(|cell| {
        Axis::ALL.into_iter().any(|pair_axis| {
            [1, -1].into_iter().any(|sign| {
                pair_capture_landing(board, cell, player, pair_axis, sign)
                    .is_some_and(|landing| can_place(board, landing, opponent, Ruleset::Restricted))
            })
        })
    });
    breakable
}

/// Game status right after `player` played at `index`.
///
/// Checks in order: capture threshold (restricted), a five through `index`
/// that cannot be broken by capture, a full board.
pub fn is_endgame(board: &Board, index: usize, player: Stone, ruleset: Ruleset) -> GameStatus {
    let restricted = ruleset.is_restricted();

    if restricted && board.captures(player) >= CAPTURE_WIN_PAIRS {
        return GameStatus::CaptureWin(player);
    }

    for axis in Axis::ALL {
        let seq = get_sequence(board, index, player, axis);
        if seq.category == Category::Five && !(restricted && can_capture_win_sequence(board, index, player, axis)) {
            return GameStatus::LineWin(player);
        }
    }

    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::Playing
}
