//! Alpha-Beta search over a single shared board
//!
//! This module implements the move search for the Gomoku engine.
//! It uses negamax with alpha-beta pruning at a fixed depth.
//!
//! # Features
//!
//! - Explicit apply/undo on one board through scoped move guards
//! - Early terminal detection at every applied move
//! - Move generation with proximity filtering
//! - Heuristic move ordering for earlier cutoffs
//! - Deterministic: ties keep the first move in generation order
//!
//! # Example
//!
//! ```
//! use pente::board::{Board, Ruleset, Stone, CENTER};
//! use pente::search::Searcher;
//!
//! let mut searcher = Searcher::new(Ruleset::Standard);
//! let mut board = Board::new();
//!
//! let result = searcher.search(&mut board, Stone::Black, 2);
//! assert_eq!(result.best_move, Some(CENTER));
//! ```

use std::cmp::Reverse;

use tracing::debug;

use crate::board::{Axis, Board, Category, GameStatus, Pos, Ruleset, Stone, CENTER, TOTAL_CELLS};
use crate::eval::{evaluate, PatternScore, CELL_VALUE};
use crate::rules::count_captures;

/// Score of a decided win. Above any heuristic evaluation, so a forced win
/// always beats a positional edge; the remaining depth is added to prefer
/// faster wins.
pub const WIN_SCORE: i32 = PatternScore::FIVE + 1_000;

/// Infinity score for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1_000;

/// Candidate moves lie within this Chebyshev distance of a stone.
const NEIGHBOR_RADIUS: i32 = 2;

/// Ordering weight of the run a move creates, indexed by `Category`.
const MOVE_VALUE: [i32; 8] = [0, 10, 100, 100, 1_000, 1_000, 10_000, 100_000];

/// Ordering weight per pair a move would capture.
const CAPTURE_ORDER_BONUS: i32 = 5_000;

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when no legal move exists
    pub best_move: Option<usize>,
    /// Score of the best move from the searching player's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
}

/// Negamax searcher for one ruleset.
#[derive(Debug, Clone)]
pub struct Searcher {
    ruleset: Ruleset,
    nodes: u64,
}

impl Searcher {
    pub fn new(ruleset: Ruleset) -> Self {
        Self { ruleset, nodes: 0 }
    }

    #[inline]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Best move for `player`, `None` when no legal move exists.
    pub fn get_best_move(&mut self, board: &mut Board, player: Stone, depth: u8) -> Option<usize> {
        self.search(board, player, depth).best_move
    }

    /// Search `depth` plies ahead (at least one).
    ///
    /// The board is mutated during the search and restored before return.
    #[must_use]
    pub fn search(&mut self, board: &mut Board, player: Stone, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 0;

        let moves = self.generate_moves(board, player);
        let mut best_move = None;
        let mut best_score = if moves.is_empty() { 0 } else { -INF };
        let mut alpha = -INF;

        for index in moves {
            let score = self.score_move(board, index, player, depth, alpha, INF);
            // Strict comparison keeps the first of equal moves
            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
            alpha = alpha.max(score);
        }

        debug!(
            player = player.name(),
            depth,
            nodes = self.nodes,
            score = best_score,
            best = ?best_move.map(Pos::from_index),
            "search complete"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Apply `index` for `player`, score the resulting position for `player`,
    /// and undo the move.
    fn score_move(&mut self, board: &mut Board, index: usize, player: Stone, depth: u8, alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        let mut child = board.scoped_move(index, player, self.ruleset);

        match child.is_endgame(index, player, self.ruleset) {
            GameStatus::Playing => -self.negamax(&mut child, player.opponent(), depth - 1, -beta, -alpha),
            GameStatus::Draw => 0,
            GameStatus::LineWin(_) | GameStatus::CaptureWin(_) => WIN_SCORE + i32::from(depth),
        }
    }

    /// Negamax with alpha-beta pruning; scores are from `player`'s perspective.
    fn negamax(&mut self, board: &mut Board, player: Stone, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        if depth == 0 {
            return evaluate(board, player, self.ruleset);
        }

        let moves = self.generate_moves(board, player);
        if moves.is_empty() {
            return 0;
        }

        let mut best = -INF;
        for index in moves {
            let score = self.score_move(board, index, player, depth, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Legal moves for `player`, best first.
    ///
    /// Empty cells near existing stones, or every legal cell when none of
    /// those is playable. An empty board yields only the center.
    fn generate_moves(&self, board: &Board, player: Stone) -> Vec<usize> {
        if board.is_board_empty() {
            return vec![CENTER];
        }

        let mut near = [false; TOTAL_CELLS];
        for stone in board.occupied().iter_ones() {
            let pos = Pos::from_index(stone);
            for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                    let r = i32::from(pos.row) + dr;
                    let c = i32::from(pos.col) + dc;
                    if Pos::is_valid(r, c) {
                        near[Pos::new(r as u8, c as u8).to_index()] = true;
                    }
                }
            }
        }

        let mut moves: Vec<usize> = (0..TOTAL_CELLS)
            .filter(|&index| near[index] && board.can_place(index, player, self.ruleset))
            .collect();
        if moves.is_empty() {
            moves = (0..TOTAL_CELLS)
                .filter(|&index| board.can_place(index, player, self.ruleset))
                .collect();
        }

        // Stable: equal values stay in ascending index order
        moves.sort_by_cached_key(|&index| Reverse(self.move_value(board, index, player)));
        moves
    }

    /// Ordering heuristic: runs the move makes for `player`, runs it denies
    /// the opponent, pairs it captures, and the cell's positional weight.
    fn move_value(&self, board: &Board, index: usize, player: Stone) -> i32 {
        let opponent = player.opponent();
        let mut value = CELL_VALUE[index];

        for axis in Axis::ALL {
            let attack = board.get_sequence(index, player, axis).category;
            let defend = board.get_sequence(index, opponent, axis).category;
            value += MOVE_VALUE[attack as usize] + MOVE_VALUE[defend as usize] / 2;
        }

        if self.ruleset.is_restricted() {
            value += i32::from(count_captures(board, index, player)) * CAPTURE_ORDER_BONUS;
            value += i32::from(count_captures(board, index, opponent)) * CAPTURE_ORDER_BONUS / 2;
        }
        value
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Ruleset::default())
    }
}

// `MOVE_VALUE` is indexed by category
const _: () = assert!(Category::Five as usize == MOVE_VALUE.len() - 1);
