//! Game rules for Gomoku with the Pente-style restricted variant
//!
//! This module implements the rule set including:
//! - Capture rules (pair capture)
//! - Run scanning and classification
//! - Forbidden moves (double free-three)
//! - Win conditions (5-in-a-row, capture win, capture-breakable fives)

pub mod capture;
pub mod forbidden;
pub mod sequence;
pub mod win;

// Re-exports for convenient access
pub use capture::{count_captures, find_captures, CaptureSet};
pub use forbidden::{can_place, check_placement, count_free_threes, is_double_free_three};
pub use sequence::{classify, get_sequence, Sequence};
pub use win::{can_capture_win_sequence, find_five, is_endgame};
