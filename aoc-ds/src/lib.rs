//! Data structures shared between the Advent of Code solutions.
//!
//! The main item is the incremental [`DisjointSet`], which the puzzles use for
//! grouping and connectivity questions.
//!
//! [`DisjointSet`]: disjoint_set::DisjointSet
pub mod disjoint_set;

pub use disjoint_set::{DisjointSet, DisjointSetError, SetId, Union};
