//! Search module for the Gomoku engine
//!
//! Contains the fixed-depth negamax searcher with alpha-beta pruning.

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher, WIN_SCORE};
