//! Evaluation module for Gomoku positions
//!
//! This module provides pattern scoring for board positions.
//! The evaluation considers:
//! - Run categories (twos, threes, fours, fives)
//! - Capture counts
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{capture_score, category_score, PatternScore, CELL_VALUE};
