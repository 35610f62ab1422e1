//! Matching Engine
//!
//! Multi-symbol limit-order matching with price-time priority books
//! supporting Market, Limit, IOC and FOK orders, and fan-out of the
//! derived trade and top-of-book depth streams to subscribers.
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced
//! - Trades always execute at the maker's resting price
//! - No crossed book between ingest calls
//! - Conservation of quantity across fills

pub mod book;
pub mod broadcast;
pub mod engine;
pub mod events;
pub mod matching;

pub use engine::MatchingEngine;
