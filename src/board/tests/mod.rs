//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move and attack-square geometry
//! - `edge_cases.rs` - Pins, checks, checkmate and stalemate
//! - `perft.rs` - Leaf counts for move generation correctness
//! - `proptest.rs` - Property-based tests

mod edge_cases;

use std::collections::HashSet;

use crate::board::Square;

/// Move order is not part of the contract, so compare as sets.
pub(super) fn square_set(squares: &[Square]) -> HashSet<Square> {
    squares.iter().copied().collect()
}

pub(super) fn squares(names: &[&str]) -> HashSet<Square> {
    names
        .iter()
        .map(|n| n.parse::<Square>().expect("valid square"))
        .collect()
}
