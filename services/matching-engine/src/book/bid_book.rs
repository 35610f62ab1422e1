//! Bid (buy-side) order book
//!
//! Maintains buy orders sorted by price descending (best bid first).
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Bid (buy) side of a book
///
/// Price levels are sorted descending, so the highest bid is best.
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Clone)]
pub struct BidBook {
    /// Price levels; BTreeMap iterates ascending, so best is `next_back`
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Rest an order on the bid book, creating its level on demand
    pub fn insert(&mut self, order: Order) {
        self.levels
            .entry(order.price())
            .or_default()
            .push_back(order);
    }

    /// Get the best bid price (highest)
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Peek at the head of the best level
    ///
    /// Returns copies of (maker order id, maker price, maker remaining
    /// quantity) so the caller holds no borrow into the book.
    pub fn best_front(&self) -> Option<(OrderId, Price, Quantity)> {
        let (price, level) = self.levels.iter().next_back()?;
        let order = level.front()?;
        Some((order.order_id(), *price, order.quantity()))
    }

    /// Fill the head of the best level by `amount`
    ///
    /// Pops the head when it is fully filled and removes the level when it
    /// empties, so no empty level ever remains visible.
    pub fn fill_best_front(&mut self, amount: Quantity) {
        let Some((&price, level)) = self.levels.iter_mut().next_back() else {
            return;
        };
        level.fill_front(amount);
        if level.is_empty() {
            self.levels.remove(&price);
        }
    }

    /// Get depth snapshot (top N price levels, best first)
    pub fn depth(&self, n: usize) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .rev()
            .take(n)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Cumulative quantity of levels priced at or above `limit`
    ///
    /// The eligible liquidity a price-limited sell order could consume.
    pub fn quantity_at_or_better(&self, limit: Price) -> Quantity {
        let mut available = Quantity::ZERO;
        for (price, level) in self.levels.iter().rev() {
            if *price < limit {
                break;
            }
            available = available + level.total_quantity();
        }
        available
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Iterate levels in priority order (best bid first)
    pub fn iter_levels(&self) -> impl Iterator<Item = (Price, &PriceLevel)> {
        self.levels.iter().rev().map(|(price, level)| (*price, level))
    }
}

impl Default for BidBook {
    fn default() -> Self {
        Self::new()
    }
}
