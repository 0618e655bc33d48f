//! Run scanning and classification along one axis

use crate::board::{Axis, Board, Category, Stone};

/// A contiguous run of one player's stones through an origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    pub category: Category,
    pub axis: Axis,
    /// Number of stones in the run (origin included)
    pub length: u8,
    /// Extremal cells of the run, `start` on the negative side of the axis
    pub start: usize,
    pub end: usize,
    /// Ends whose next cell is empty (0, 1 or 2)
    pub open_ends: u8,
}

impl Sequence {
    /// Cells of the run, from `start` to `end`
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..i32::from(self.length)).filter_map(move |k| self.axis.step(self.start, k))
    }
}

/// Walk from `index` while cells hold `stone`; returns the last matching
/// cell, the run length on that side, and whether the next cell is empty.
#[inline]
fn extend(board: &Board, index: usize, stone: Stone, axis: Axis, sign: i32) -> (usize, u8, bool) {
    let mut last = index;
    let mut count = 0u8;
    loop {
        match axis.step(last, sign) {
            Some(next) if board.get(next) == stone => {
                last = next;
                count += 1;
            }
            Some(next) => return (last, count, board.get(next) == Stone::Empty),
            // Board edge closes the run
            None => return (last, count, false),
        }
    }
}

/// Classify a run from its length and number of open ends.
/// Five or more wins regardless of openness; runs closed on both ends are dead.
pub fn classify(length: u8, open_ends: u8) -> Category {
    match (length, open_ends) {
        (5.., _) => Category::Five,
        (4, 2) => Category::FreeFour,
        (4, 1) => Category::BlockedFour,
        (3, 2) => Category::FreeThree,
        (3, 1) => Category::BlockedThree,
        (2, 2) => Category::FreeTwo,
        (2, 1) => Category::BlockedTwo,
        _ => Category::None,
    }
}

/// Scan the run through `index` along `axis` for `player`.
///
/// The origin counts as `player`'s stone whether or not it is placed yet,
/// so the same scan rates played stones and candidate moves.
pub fn get_sequence(board: &Board, index: usize, player: Stone, axis: Axis) -> Sequence {
    let (start, before, open_start) = extend(board, index, player, axis, -1);
    let (end, after, open_end) = extend(board, index, player, axis, 1);
    let length = 1 + before + after;
    let open_ends = u8::from(open_start) + u8::from(open_end);

    Sequence {
        category: classify(length, open_ends),
        axis,
        length,
        start,
        end,
        open_ends,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, BOARD_SIZE, TOTAL_CELLS};

    fn idx(row: u8, col: u8) -> usize {
        Pos::new(row, col).to_index()
    }

    fn place_row(board: &mut Board, row: u8, cols: impl IntoIterator<Item = u8>, stone: Stone) {
        for col in cols {
            board.place_stone(idx(row, col), stone);
        }
    }

    #[test]
    fn test_single_stone_is_none() {
        let board = Board::new();
        let seq = get_sequence(&board, idx(9, 9), Stone::Black, Axis::Horizontal);
        assert_eq!(seq.category, Category::None);
        assert_eq!(seq.length, 1);
        assert_eq!(seq.open_ends, 2);
        assert_eq!((seq.start, seq.end), (idx(9, 9), idx(9, 9)));
    }

    #[test]
    fn test_free_and_blocked_runs() {
        let mut board = Board::new();
        place_row(&mut board, 9, 5..8, Stone::Black);
        let seq = get_sequence(&board, idx(9, 6), Stone::Black, Axis::Horizontal);
        assert_eq!(seq.category, Category::FreeThree);
        assert_eq!((seq.start, seq.end), (idx(9, 5), idx(9, 7)));

        board.place_stone(idx(9, 4), Stone::White);
        let seq = get_sequence(&board, idx(9, 6), Stone::Black, Axis::Horizontal);
        assert_eq!(seq.category, Category::BlockedThree);

        board.place_stone(idx(9, 8), Stone::White);
        let seq = get_sequence(&board, idx(9, 6), Stone::Black, Axis::Horizontal);
        assert_eq!(seq.category, Category::None, "closed on both ends is dead");
    }

    #[test]
    fn test_edge_blocks_run() {
        let mut board = Board::new();
        place_row(&mut board, 0, 0..4, Stone::White);
        let seq = get_sequence(&board, idx(0, 2), Stone::White, Axis::Horizontal);
        assert_eq!(seq.category, Category::BlockedFour);
        assert_eq!(seq.open_ends, 1);
    }

    #[test]
    fn test_origin_treated_as_player() {
        let mut board = Board::new();
        place_row(&mut board, 9, [5, 6, 8, 9], Stone::Black);
        // Empty (9,7) completes the run when rated as a candidate
        let seq = get_sequence(&board, idx(9, 7), Stone::Black, Axis::Horizontal);
        assert_eq!(seq.category, Category::Five);
        assert_eq!(seq.length, 5);
    }

    #[test]
    fn test_five_reported_regardless_of_openness() {
        let mut board = Board::new();
        board.place_stone(idx(9, 3), Stone::White);
        place_row(&mut board, 9, 4..9, Stone::Black);
        board.place_stone(idx(9, 9), Stone::White);
        let seq = get_sequence(&board, idx(9, 4), Stone::Black, Axis::Horizontal);
        assert_eq!(seq.category, Category::Five);
        assert_eq!(seq.open_ends, 0);

        let cells: Vec<usize> = seq.cells().collect();
        assert_eq!(cells, (4..9).map(|c| idx(9, c)).collect::<Vec<_>>());
    }

    #[test]
    fn test_overline_counts_as_five() {
        let mut board = Board::new();
        place_row(&mut board, 3, 2..9, Stone::Black);
        let seq = get_sequence(&board, idx(3, 5), Stone::Black, Axis::Horizontal);
        assert_eq!(seq.category, Category::Five);
        assert_eq!(seq.length, 7);
    }

    #[test]
    fn test_diagonal_up_run() {
        let mut board = Board::new();
        // (12,6) (11,7) (10,8) (9,9) climbing to the upper right
        for k in 0..4u8 {
            board.place_stone(idx(12 - k, 6 + k), Stone::Black);
        }
        let seq = get_sequence(&board, idx(10, 8), Stone::Black, Axis::DiagonalUp);
        assert_eq!(seq.category, Category::FreeFour);
        assert_eq!((seq.start, seq.end), (idx(12, 6), idx(9, 9)));
    }

    fn rotate(index: usize) -> usize {
        TOTAL_CELLS - 1 - index
    }

    #[test]
    fn test_classification_symmetric_under_rotation_and_color_swap() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..30 {
            let mut board = Board::new();
            let mut rotated = Board::new();
            let mut swapped = Board::new();
            for _ in 0..rng.usize(10..80) {
                let cell = rng.usize(0..TOTAL_CELLS);
                if !board.is_empty(cell) {
                    continue;
                }
                let stone = if rng.bool() { Stone::Black } else { Stone::White };
                board.place_stone(cell, stone);
                rotated.place_stone(rotate(cell), stone);
                swapped.place_stone(cell, stone.opponent());
            }

            for cell in (0..TOTAL_CELLS).step_by(BOARD_SIZE / 3) {
                for axis in Axis::ALL {
                    for player in [Stone::Black, Stone::White] {
                        let original = get_sequence(&board, cell, player, axis);
                        let turned = get_sequence(&rotated, rotate(cell), player, axis);
                        let recolored = get_sequence(&swapped, cell, player.opponent(), axis);

                        assert_eq!(original.category, turned.category);
                        assert_eq!(original.length, turned.length);
                        assert_eq!(rotate(original.start), turned.end);
                        assert_eq!(original, recolored);
                    }
                }
            }
        }
    }
}
