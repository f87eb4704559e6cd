//! Comparison pipeline stages.
//!
//! `grouping` clusters listings, `verdict` picks and explains the best offer,
//! and `compare` runs the whole pipeline for one query.

pub mod compare;
pub mod grouping;
pub mod verdict;
