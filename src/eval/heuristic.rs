//! Heuristic evaluation function for Gomoku board positions
//!
//! Positions are scored from one player's perspective as:
//! - Run categories (fives, fours, threes, twos), each run counted once
//! - Capture advantage (restricted rules)
//! - Positional bonuses (distance from the edge)

use crate::board::{Axis, Board, Ruleset, Stone, CAPTURE_WIN_PAIRS};

use super::patterns::{capture_score, category_score, PatternScore, CELL_VALUE};

/// Evaluate the board from the perspective of `player`.
///
/// Returns a score where:
/// - Positive values indicate advantage for `player`
/// - `PatternScore::FIVE` / `-PatternScore::FIVE` bound the range (win / loss)
///
/// Symmetric: `evaluate(board, p) == -evaluate(board, p.opponent())`.
#[must_use]
pub fn evaluate(board: &Board, player: Stone, ruleset: Ruleset) -> i32 {
    let opponent = player.opponent();

    if ruleset.is_restricted() {
        if board.captures(player) >= CAPTURE_WIN_PAIRS {
            return PatternScore::FIVE;
        }
        if board.captures(opponent) >= CAPTURE_WIN_PAIRS {
            return -PatternScore::FIVE;
        }
    }

    let pattern_score = evaluate_runs(board, player, ruleset) - evaluate_runs(board, opponent, ruleset);
    let cap_score = i64::from(capture_score(board.captures(player), board.captures(opponent)));
    let position_score = evaluate_positions(board, player) - evaluate_positions(board, opponent);

    let total = pattern_score + cap_score + position_score;
    let bound = i64::from(PatternScore::FIVE);
    total.clamp(-bound, bound) as i32
}

/// Sum of run scores for `stone`.
///
/// Each run is scored once, from its first stone along the axis.
fn evaluate_runs(board: &Board, stone: Stone, ruleset: Ruleset) -> i64 {
    let Some(stones) = board.stones(stone) else {
        return 0;
    };

    let mut score = 0i64;
    for cell in stones.iter_ones() {
        for axis in Axis::ALL {
            let continues_run = axis
                .step(cell, -1)
                .is_some_and(|prev| board.get(prev) == stone);
            if continues_run {
                continue;
            }
            let seq = board.get_sequence(cell, stone, axis);
            score += i64::from(category_score(seq.category, ruleset));
        }
    }
    score
}

fn evaluate_positions(board: &Board, stone: Stone) -> i64 {
    board
        .stones(stone)
        .map(|stones| stones.iter_ones().map(|cell| i64::from(CELL_VALUE[cell])).sum())
        .unwrap_or(0)
}
