//! Pente / Gomoku engine with pair captures
//!
//! Rules implemented:
//! - 19x19 board, five or more in a row wins
//! - Pair capture: X-O-O-X removes the O-O pair
//! - Restricted ruleset: five captured pairs win, a five that the opponent
//!   can break by capture does not end the game yet, and moves creating two
//!   free threes at once are forbidden
//!
//! # Architecture
//!
//! - [`board`]: Board representation, move history and rule entry points
//! - [`rules`]: Captures, sequences, forbidden moves and end-of-game checks
//! - [`eval`]: Static position evaluation
//! - [`search`]: Negamax alpha-beta search
//! - [`session`]: Turn order, seats, undo and engine requests
//! - [`config`]: TOML game configuration
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use pente::{GameConfig, GameMode, GameSession, GameStatus, Pos, Ruleset};
//!
//! let config = GameConfig {
//!     ruleset: Ruleset::Standard,
//!     mode: GameMode::PlayerVsPlayer,
//!     depth: 2,
//!     ..GameConfig::default()
//! };
//! let mut session = GameSession::new(config);
//!
//! let status = session.play(Pos::new(9, 9).to_index()).unwrap();
//! assert_eq!(status, GameStatus::Playing);
//!
//! // Ask the engine what White should answer
//! assert!(session.hint().is_some());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

pub use board::{Board, GameStatus, Pos, Ruleset, Stone, BOARD_SIZE, CAPTURE_WIN_PAIRS};
pub use config::GameConfig;
pub use error::{ConfigError, GameError, RuleError};
pub use search::{SearchResult, Searcher};
pub use session::{EngineJob, EngineMove, GameMode, GameSession, Seat};
