use super::*;

fn idx(row: u8, col: u8) -> usize {
    Pos::new(row, col).to_index()
}

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(9, 9);
    assert_eq!(pos.to_index(), 180);
    assert_eq!(pos.to_index(), CENTER);
    assert_eq!(Pos::from_index(180), pos);
    assert_eq!(Pos::new(18, 18).to_index(), TOTAL_CELLS - 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(18, 18));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 19));
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(18, 0).to_string(), "A1");
    assert_eq!(Pos::new(0, 18).to_string(), "S19");
    assert_eq!(Pos::new(9, 9).to_string(), "J10");
}

#[test]
fn test_axis_step() {
    let center = CENTER;
    assert_eq!(Axis::Horizontal.step(center, 1), Some(idx(9, 10)));
    assert_eq!(Axis::Horizontal.step(center, -2), Some(idx(9, 7)));
    assert_eq!(Axis::Vertical.step(center, 3), Some(idx(12, 9)));
    assert_eq!(Axis::DiagonalDown.step(center, -1), Some(idx(8, 8)));
    assert_eq!(Axis::DiagonalUp.step(center, 1), Some(idx(8, 10)));

    assert_eq!(Axis::Horizontal.step(idx(0, 18), 1), None);
    assert_eq!(Axis::Vertical.step(idx(0, 4), -1), None);
    assert_eq!(Axis::DiagonalUp.step(idx(0, 0), 1), None);
}

#[test]
fn test_ruleset_from_str() {
    assert_eq!("standard".parse::<Ruleset>(), Ok(Ruleset::Standard));
    assert_eq!("Restricted".parse::<Ruleset>(), Ok(Ruleset::Restricted));
    assert!("renju".parse::<Ruleset>().is_err());
}

#[test]
fn test_category_order() {
    assert!(Category::Five > Category::FreeFour);
    assert!(Category::FreeFour > Category::BlockedFour);
    assert!(Category::BlockedFour > Category::FreeThree);
    assert!(Category::FreeThree > Category::BlockedThree);
    assert!(Category::BlockedThree > Category::FreeTwo);
    assert!(Category::FreeTwo > Category::BlockedTwo);
    assert!(Category::BlockedTwo > Category::None);
}

#[test]
fn test_play_move_records_history() {
    let mut board = Board::new();
    board.play_move(CENTER, Stone::Black, Ruleset::Standard);
    board.play_move(idx(9, 10), Stone::White, Ruleset::Standard);

    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.history().len(), 2);
    assert_eq!(board.last_move(), Some(idx(9, 10)));
    assert_eq!(board.get(CENTER), Stone::Black);
}

#[test]
fn test_standard_rules_never_capture() {
    let mut board = Board::new();
    board.place_stone(idx(9, 5), Stone::Black);
    board.place_stone(idx(9, 7), Stone::White);
    board.place_stone(idx(9, 8), Stone::White);

    let pairs = board.play_move(idx(9, 9), Stone::Black, Ruleset::Standard);
    assert_eq!(pairs, 0);
    assert_eq!(board.get(idx(9, 7)), Stone::White);
    assert_eq!(board.captures(Stone::Black), 0);
}

#[test]
fn test_capture_and_undo_restores_position() {
    let mut board = Board::new();
    board.place_stone(idx(9, 5), Stone::Black);
    board.place_stone(idx(9, 7), Stone::White);
    board.place_stone(idx(9, 8), Stone::White);
    let before = board.clone();

    let pairs = board.play_move(idx(9, 6), Stone::Black, Ruleset::Restricted);
    // B at 5 brackets nothing; the bracket needs B beyond the pair
    assert_eq!(pairs, 0);
    board.undo_move();
    assert_eq!(board, before);

    board.place_stone(idx(9, 9), Stone::Black);
    let before = board.clone();
    let pairs = board.play_move(idx(9, 6), Stone::Black, Ruleset::Restricted);
    assert_eq!(pairs, 1);
    assert!(board.is_empty(idx(9, 7)) && board.is_empty(idx(9, 8)));
    assert_eq!(board.captures(Stone::Black), 1);

    let record = board.undo_move().unwrap();
    assert_eq!(record.captured.pairs(), 1);
    assert_eq!(board, before);
    assert_eq!(board.get(idx(9, 7)), Stone::White);
    assert_eq!(board.captures(Stone::Black), 0);
}

#[test]
fn test_undo_empty_history_is_noop() {
    let mut board = Board::new();
    assert!(board.undo_move().is_none());
    assert_eq!(board.load_history(2), 0);
    assert_eq!(board, Board::new());
}

#[test]
fn test_load_history_two_plies() {
    let mut board = Board::new();
    board.play_move(CENTER, Stone::Black, Ruleset::Restricted);
    let after_first = board.clone();
    board.play_move(idx(9, 10), Stone::White, Ruleset::Restricted);
    board.play_move(idx(10, 10), Stone::Black, Ruleset::Restricted);

    assert_eq!(board.load_history(2), 2);
    assert_eq!(board, after_first);
    assert_eq!(board.history().len(), 1);

    assert_eq!(board.load_history(2), 1);
    assert!(board.is_board_empty());
    assert!(board.history().is_empty());
}

#[test]
fn test_load_history_keeps_setup_stones() {
    let mut board = Board::new();
    board.place_stone(idx(9, 9), Stone::Black);
    board.place_stone(idx(9, 10), Stone::White);
    board.place_stone(idx(9, 11), Stone::White);
    let setup = board.clone();

    board.play_move(idx(9, 12), Stone::Black, Ruleset::Restricted);
    board.play_move(idx(3, 3), Stone::White, Ruleset::Restricted);
    assert_eq!(board.captures(Stone::Black), 1);

    assert_eq!(board.load_history(5), 2);
    assert_eq!(board, setup);
    assert_eq!(board.get(idx(9, 10)), Stone::White);
    assert_eq!(board.stone_count(), 3);
    assert!(board.history().is_empty());
}

#[test]
fn test_scoped_move_reverts_on_drop() {
    let mut board = Board::new();
    board.place_stone(idx(9, 5), Stone::White);
    board.place_stone(idx(9, 6), Stone::Black);
    board.place_stone(idx(9, 7), Stone::Black);
    let before = board.clone();

    {
        let guard = board.scoped_move(idx(9, 8), Stone::White, Ruleset::Restricted);
        assert_eq!(guard.captures(Stone::White), 1);
        assert!(guard.is_empty(idx(9, 6)));
    }
    assert_eq!(board, before);
    assert!(board.history().is_empty());
}

#[test]
fn test_random_play_undo_roundtrip() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..20 {
        let mut board = Board::new();
        let mut snapshots = vec![board.clone()];
        let mut player = Stone::Black;

        for _ in 0..120 {
            let index = rng.usize(0..TOTAL_CELLS);
            if !board.can_place(index, player, Ruleset::Restricted) {
                continue;
            }
            board.play_move(index, player, Ruleset::Restricted);
            snapshots.push(board.clone());
            player = player.opponent();
        }

        snapshots.pop();
        while let Some(expected) = snapshots.pop() {
            board.undo_move().unwrap();
            assert_eq!(board, expected);
        }
        assert!(board.is_board_empty());
    }
}

#[test]
fn test_display_marks_stones() {
    let mut board = Board::new();
    board.place_stone(idx(0, 0), Stone::Black);
    board.place_stone(idx(0, 1), Stone::White);
    let text = board.to_string();
    assert!(text.contains(" 19 X O ."));
    assert!(text.ends_with("captures: black 0 / white 0"));
}
