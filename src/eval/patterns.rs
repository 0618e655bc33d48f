//! Pattern scores for Gomoku evaluation
//!
//! These constants define the scoring weights for run categories, captured
//! pairs and board cells.

use crate::board::{Category, Ruleset, BOARD_SIZE, CAPTURE_WIN_PAIRS, TOTAL_CELLS};

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    // Winning patterns
    /// Five in a row - immediate win
    pub const FIVE: i32 = 100_000_000;
    /// Free four: _OOOO_ (unstoppable without capture)
    pub const FREE_FOUR: i32 = 20_000_000;

    // Threats
    /// Blocked four: XOOOO_ or _OOOOX (one way to extend)
    pub const BLOCKED_FOUR: i32 = 8_000;
    /// Free three: _OOO_ (becomes a free four if not blocked)
    pub const FREE_THREE: i32 = 5_000;
    pub const BLOCKED_THREE: i32 = 500;

    // Building patterns
    pub const FREE_TWO: i32 = 100;
    pub const BLOCKED_TWO: i32 = 10;
    /// A half-closed pair is a capture target when pairs can be taken
    pub const BLOCKED_TWO_RESTRICTED: i32 = -60;
}

/// Score of one run of a given category.
///
/// `Five` and `FreeFour` outweigh any sum of lesser runs a board can hold,
/// so a forcing win is never traded for positional gains.
#[inline]
pub const fn category_score(category: Category, ruleset: Ruleset) -> i32 {
    match category {
        Category::Five => PatternScore::FIVE,
        Category::FreeFour => PatternScore::FREE_FOUR,
        Category::BlockedFour => PatternScore::BLOCKED_FOUR,
        Category::FreeThree => PatternScore::FREE_THREE,
        Category::BlockedThree => PatternScore::BLOCKED_THREE,
        Category::FreeTwo => PatternScore::FREE_TWO,
        Category::BlockedTwo => match ruleset {
            Ruleset::Restricted => PatternScore::BLOCKED_TWO_RESTRICTED,
            Ruleset::Standard => PatternScore::BLOCKED_TWO,
        },
        Category::None => 0,
    }
}

/// Capture-based scoring with non-linear weights
///
/// Each level approaches the capture win faster than the last.
/// Symmetric for negamax: capture_score(a, b) == -capture_score(b, a).
pub fn capture_score(my_captures: u8, opp_captures: u8) -> i32 {
    const CAP_WEIGHTS: [i32; CAPTURE_WIN_PAIRS as usize + 1] = [
        0,
        3_000,
        9_000,
        30_000,
        200_000, // one pair from winning
        PatternScore::FIVE,
    ];
    let weight = |pairs: u8| CAP_WEIGHTS[pairs.min(CAPTURE_WIN_PAIRS) as usize];

    weight(my_captures) - weight(opp_captures)
}

/// Positional weight of a cell: its distance to the nearest edge.
///
/// 0 on the border, rising to 9 at the center, identical in all four quadrants.
pub const CELL_VALUE: [i32; TOTAL_CELLS] = build_cell_values();

const fn build_cell_values() -> [i32; TOTAL_CELLS] {
    let mut values = [0; TOTAL_CELLS];
    let last = BOARD_SIZE - 1;
    let mut index = 0;
    while index < TOTAL_CELLS {
        let row = index / BOARD_SIZE;
        let col = index % BOARD_SIZE;
        let mut value = row;
        if col < value {
            value = col;
        }
        if last - row < value {
            value = last - row;
        }
        if last - col < value {
            value = last - col;
        }
        values[index] = value as i32;
        index += 1;
    }
    values
}
