//! End-to-end game scenarios through the public API

use pente::board::{Axis, Board, Category, Pos, Ruleset, Stone, CENTER};
use pente::{GameConfig, GameError, GameMode, GameSession, GameStatus, RuleError, Searcher};

fn idx(row: u8, col: u8) -> usize {
    Pos::new(row, col).to_index()
}

#[test]
fn empty_board_opens_in_the_center() {
    let mut board = Board::new();
    let mut searcher = Searcher::new(Ruleset::Standard);
    assert_eq!(searcher.get_best_move(&mut board, Stone::Black, 2), Some(CENTER));
    assert_eq!(CENTER, idx(9, 9));
}

#[test]
fn depth_one_takes_the_winning_move() {
    let mut board = Board::new();
    for col in 3..7 {
        board.place_stone(idx(4, col), Stone::White);
    }
    board.place_stone(idx(4, 2), Stone::Black);
    board.place_stone(idx(12, 12), Stone::Black);

    let mut searcher = Searcher::new(Ruleset::Standard);
    assert_eq!(searcher.get_best_move(&mut board, Stone::White, 1), Some(idx(4, 7)));
}

#[test]
fn open_four_is_blocked() {
    let mut board = Board::new();
    for col in 5..9 {
        board.place_stone(idx(9, col), Stone::White);
    }

    let mut searcher = Searcher::new(Ruleset::Standard);
    let reply = searcher.get_best_move(&mut board, Stone::Black, 2);
    assert!(
        reply == Some(idx(9, 4)) || reply == Some(idx(9, 9)),
        "expected a block, got {reply:?}"
    );
}

#[test]
fn bracket_capture_removes_pair() {
    let mut board = Board::new();
    board.place_stone(idx(9, 9), Stone::Black);
    board.place_stone(idx(9, 10), Stone::White);
    board.place_stone(idx(9, 11), Stone::White);
    assert_eq!(board.captures(Stone::Black), 0);

    let pairs = board.play_move(idx(9, 12), Stone::Black, Ruleset::Restricted);

    assert_eq!(pairs, 1);
    assert_eq!(board.captures(Stone::Black), 1);
    assert!(board.is_empty(idx(9, 10)));
    assert!(board.is_empty(idx(9, 11)));
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn standard_rules_never_capture() {
    let mut board = Board::new();
    board.place_stone(idx(9, 9), Stone::Black);
    board.place_stone(idx(9, 10), Stone::White);
    board.place_stone(idx(9, 11), Stone::White);

    assert_eq!(board.play_move(idx(9, 12), Stone::Black, Ruleset::Standard), 0);
    assert_eq!(board.get(idx(9, 10)), Stone::White);
    assert_eq!(board.captures(Stone::Black), 0);
}

#[test]
fn capturable_five_keeps_playing() {
    let mut board = Board::new();
    for col in 5..10 {
        board.place_stone(idx(9, col), Stone::Black);
    }
    board.place_stone(idx(10, 7), Stone::Black);
    board.place_stone(idx(8, 7), Stone::White);

    let played = idx(9, 7);
    assert_eq!(board.get_sequence(played, Stone::Black, Axis::Horizontal).category, Category::Five);
    assert!(board.can_capture_win_sequence(played, Stone::Black, Axis::Horizontal));
    assert_eq!(board.is_endgame(played, Stone::Black, Ruleset::Restricted), GameStatus::Playing);
    assert_eq!(
        board.is_endgame(played, Stone::Black, Ruleset::Standard),
        GameStatus::LineWin(Stone::Black)
    );
}

#[test]
fn double_free_three_is_forbidden() {
    let mut board = Board::new();
    board.place_stone(idx(9, 8), Stone::Black);
    board.place_stone(idx(9, 10), Stone::Black);
    assert!(board.can_place(idx(9, 9), Stone::Black, Ruleset::Restricted));

    board.place_stone(idx(8, 9), Stone::Black);
    board.place_stone(idx(10, 9), Stone::Black);
    assert!(!board.can_place(idx(9, 9), Stone::Black, Ruleset::Restricted));
    assert_eq!(
        board.check_placement(idx(9, 9), Stone::Black, Ruleset::Restricted),
        Err(RuleError::DoubleFreeThree(idx(9, 9)))
    );
    assert!(board.can_place(idx(9, 9), Stone::Black, Ruleset::Standard));
}

#[test]
fn undo_restores_grid_and_counters() {
    let mut board = Board::new();
    board.play_move(idx(9, 9), Stone::Black, Ruleset::Restricted);
    board.play_move(idx(9, 10), Stone::White, Ruleset::Restricted);
    board.play_move(idx(5, 5), Stone::Black, Ruleset::Restricted);
    board.play_move(idx(9, 11), Stone::White, Ruleset::Restricted);
    let before = board.clone();

    board.play_move(idx(9, 12), Stone::Black, Ruleset::Restricted);
    assert_eq!(board.captures(Stone::Black), 1);

    assert_eq!(board.load_history(1), 1);
    assert_eq!(board, before);
    assert_eq!(board.captures(Stone::Black), 0);

    assert_eq!(board.load_history(10), 4);
    assert!(board.is_board_empty());
    assert_eq!(board.load_history(1), 0);
}

#[test]
fn engine_game_flow() {
    let mut session = GameSession::new(GameConfig {
        ruleset: Ruleset::Restricted,
        mode: GameMode::PlayerVsEngine { human: Stone::Black },
        first: Stone::Black,
        depth: 2,
    });

    assert_eq!(session.play(CENTER), Ok(GameStatus::Playing));
    assert!(session.is_engine_turn());
    assert_eq!(session.play(idx(0, 0)), Err(GameError::NotYourTurn));

    assert_eq!(session.engine_move(), Ok(GameStatus::Playing));
    assert_eq!(session.board().history().len(), 2);
    assert_eq!(session.turn(), Stone::Black);

    assert_eq!(session.undo(), 2);
    assert!(session.board().is_board_empty());
    assert_eq!(session.turn(), Stone::Black);
}

#[test]
fn stale_engine_result_is_rejected() {
    let mut session = GameSession::new(GameConfig {
        ruleset: Ruleset::Standard,
        mode: GameMode::PlayerVsEngine { human: Stone::Black },
        first: Stone::Black,
        depth: 1,
    });
    session.play(CENTER).unwrap();
    let job = session.engine_job();
    session.undo();

    assert_eq!(session.apply_engine_move(job.run()), Err(GameError::NotYourTurn));
    assert!(session.board().is_board_empty());
}
