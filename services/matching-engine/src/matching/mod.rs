//! Matching rules
//!
//! Price-compatibility predicates used by the per-symbol book.

pub mod crossing;
