//! Game session: turn order, seats, undo and engine requests
//!
//! `GameSession` is what front-ends drive. It owns the board, validates
//! human moves, hands search jobs to whoever runs the engine and tracks
//! the game status.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::{Board, GameStatus, Pos, Ruleset, Stone};
use crate::config::{GameConfig, MAX_DEPTH};
use crate::error::GameError;
use crate::rules::find_five;
use crate::search::Searcher;

/// Who makes the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Engine,
}

/// Seat assignment for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GameMode {
    /// Hotseat
    PlayerVsPlayer,
    PlayerVsEngine { human: Stone },
    EngineVsEngine,
}

impl GameMode {
    pub fn seat(self, stone: Stone) -> Seat {
        match self {
            GameMode::PlayerVsPlayer => Seat::Human,
            GameMode::PlayerVsEngine { human } if human == stone => Seat::Human,
            GameMode::PlayerVsEngine { .. } | GameMode::EngineVsEngine => Seat::Engine,
        }
    }

    #[inline]
    pub fn has_human(self) -> bool {
        !matches!(self, GameMode::EngineVsEngine)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PlayerVsEngine { human: Stone::Black }
    }
}

/// A search request detached from the session.
///
/// The job owns a copy of the board, so it can run on another thread while
/// the session keeps serving reads.
#[derive(Debug, Clone)]
pub struct EngineJob {
    board: Board,
    player: Stone,
    depth: u8,
    ruleset: Ruleset,
    generation: u64,
}

impl EngineJob {
    #[inline]
    pub fn player(&self) -> Stone {
        self.player
    }

    pub fn run(mut self) -> EngineMove {
        let ply = self.board.history().len();
        let choice = Searcher::new(self.ruleset).get_best_move(&mut self.board, self.player, self.depth);
        EngineMove {
            player: self.player,
            ply,
            generation: self.generation,
            choice,
        }
    }
}

/// Outcome of an `EngineJob`, tagged with the position it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMove {
    pub player: Stone,
    /// History length when the job was created
    pub ply: usize,
    /// Session position counter when the job was created
    pub generation: u64,
    /// `None` when the player had no legal move
    pub choice: Option<usize>,
}

/// A five that did not win because the opponent could capture out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFive {
    owner: Stone,
    cells: Vec<usize>,
}

/// One game from the first move to a result.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    config: GameConfig,
    turn: Stone,
    status: GameStatus,
    /// Pending five after each ply, parallel to the board history
    pending: Vec<Option<PendingFive>>,
    /// Cells of the five that ended the game
    winning_line: Option<Vec<usize>>,
    /// Bumped on every change of position; engine results from an older
    /// generation are stale
    generation: u64,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        info!(
            ruleset = ?config.ruleset,
            mode = ?config.mode,
            first = config.first.name(),
            depth = config.depth,
            "new game"
        );
        Self {
            board: Board::new(),
            turn: config.first,
            config,
            status: GameStatus::Playing,
            pending: Vec::new(),
            winning_line: None,
            generation: 0,
        }
    }

    /// Start over with the same settings.
    pub fn restart(&mut self) {
        let generation = self.generation + 1;
        *self = Self::new(self.config.clone());
        self.generation = generation;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn ruleset(&self) -> Ruleset {
        self.config.ruleset
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Stones of the winning five once the game is won on the board
    pub fn winning_line(&self) -> Option<&[usize]> {
        self.winning_line.as_deref()
    }

    /// Engine depth for the next searches, clamped to `1..=MAX_DEPTH`.
    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth.clamp(1, MAX_DEPTH);
    }

    #[inline]
    pub fn seat_to_move(&self) -> Seat {
        self.config.mode.seat(self.turn)
    }

    /// Whether the session is waiting on the engine.
    #[inline]
    pub fn is_engine_turn(&self) -> bool {
        !self.status.is_over() && self.seat_to_move() == Seat::Engine
    }

    /// Play a human move for the side to move.
    pub fn play(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.seat_to_move() == Seat::Engine {
            return Err(GameError::NotYourTurn);
        }
        if let Err(err) = self.board.check_placement(index, self.turn, self.config.ruleset) {
            warn!(player = self.turn.name(), pos = %Pos::from_index(index), %err, "move rejected");
            return Err(err.into());
        }
        Ok(self.commit(index))
    }

    /// Snapshot a search for the side to move.
    pub fn engine_job(&self) -> EngineJob {
        EngineJob {
            board: self.board.clone(),
            player: self.turn,
            depth: self.config.depth,
            ruleset: self.config.ruleset,
            generation: self.generation,
        }
    }

    /// Whether `engine_move` was computed for the current position.
    pub fn is_current(&self, engine_move: &EngineMove) -> bool {
        engine_move.player == self.turn
            && engine_move.generation == self.generation
            && engine_move.ply == self.board.history().len()
    }

    /// Commit the result of an `EngineJob`.
    ///
    /// Results computed for another position (after an undo, a restart or
    /// any move since the job was created) are rejected with `NotYourTurn`.
    pub fn apply_engine_move(&mut self, engine_move: EngineMove) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_current(&engine_move) || self.seat_to_move() != Seat::Engine {
            return Err(GameError::NotYourTurn);
        }

        match engine_move.choice {
            Some(index) => {
                self.board.check_placement(index, self.turn, self.config.ruleset)?;
                Ok(self.commit(index))
            }
            None => {
                info!(player = self.turn.name(), "no legal move, game drawn");
                self.status = GameStatus::Draw;
                Ok(self.status)
            }
        }
    }

    /// Run the engine for the side to move and play its choice.
    pub fn engine_move(&mut self) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.seat_to_move() != Seat::Engine {
            return Err(GameError::NotYourTurn);
        }
        let engine_move = self.engine_job().run();
        self.apply_engine_move(engine_move)
    }

    /// Engine suggestion for the side to move, without playing it.
    pub fn hint(&self) -> Option<usize> {
        if self.status.is_over() {
            return None;
        }
        self.engine_job().run().choice
    }

    /// Take back the last ply, or the last two when that hands the move back
    /// to a human after an engine reply. Returns the number of plies undone.
    pub fn undo(&mut self) -> usize {
        let history = self.board.history();
        let Some(last) = history.last() else {
            return 0;
        };

        let mode = self.config.mode;
        let plies = if mode.has_human() && history.len() >= 2 && mode.seat(last.stone) == Seat::Engine {
            2
        } else {
            1
        };
        let turn = history[history.len() - plies].stone;

        let undone = self.board.load_history(plies);
        self.generation += 1;
        self.pending.truncate(self.board.history().len());
        self.turn = turn;
        self.status = GameStatus::Playing;
        self.winning_line = None;
        info!(plies = undone, turn = turn.name(), "undo");
        undone
    }

    /// Apply a validated move and update turn and status.
    fn commit(&mut self, index: usize) -> GameStatus {
        let player = self.turn;
        let ruleset = self.config.ruleset;

        let pairs = self.board.play_move(index, player, ruleset);
        self.generation += 1;
        info!(player = player.name(), pos = %Pos::from_index(index), "move played");
        if pairs > 0 {
            info!(
                player = player.name(),
                pairs,
                total = self.board.captures(player),
                "captured"
            );
        }

        let mut status = self.board.is_endgame(index, player, ruleset);
        if let GameStatus::LineWin(_) = status {
            self.winning_line = find_five(&self.board, index, player).map(|seq| seq.cells().collect());
        }

        // The opponent had one reply to break the five by capture
        let previous = self.pending.last().cloned().flatten();
        if let (GameStatus::Playing, Some(five)) = (status, previous) {
            if five.owner != player && five.cells.iter().all(|&cell| self.board.get(cell) == five.owner) {
                status = GameStatus::LineWin(five.owner);
                self.winning_line = Some(five.cells);
            }
        }

        let pending = match status {
            GameStatus::Playing if ruleset.is_restricted() => find_five(&self.board, index, player).map(|seq| {
                info!(player = player.name(), "five can still be broken by capture");
                PendingFive {
                    owner: player,
                    cells: seq.cells().collect(),
                }
            }),
            _ => None,
        };
        self.pending.push(pending);

        self.status = status;
        if status.is_over() {
            info!(result = %status, "game over");
        } else {
            self.turn = player.opponent();
        }
        status
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
