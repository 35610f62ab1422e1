//! Ask (sell-side) order book
//!
//! Maintains sell orders sorted by price ascending (best ask first).
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Ask (sell) side of a book
///
/// Price levels are sorted ascending, so the lowest ask is best.
/// At each price level, orders are maintained in FIFO order.
#[derive(Debug, Clone)]
pub struct AskBook {
    /// Price levels; BTreeMap iterates ascending, so best is first
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Rest an order on the ask book, creating its level on demand
    pub fn insert(&mut self, order: Order) {
        self.levels
            .entry(order.price())
            .or_default()
            .push_back(order);
    }

    /// Get the best ask price (lowest)
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Peek at the head of the best level
    ///
    /// Returns copies of (maker order id, maker price, maker remaining
    /// quantity) so the caller holds no borrow into the book.
    pub fn best_front(&self) -> Option<(OrderId, Price, Quantity)> {
        let (price, level) = self.levels.iter().next()?;
        let order = level.front()?;
        Some((order.order_id(), *price, order.quantity()))
    }

    /// Fill the head of the best level by `amount`
    ///
    /// Pops the head when it is fully filled and removes the level when it
    /// empties, so no empty level ever remains visible.
    pub fn fill_best_front(&mut self, amount: Quantity) {
        let Some((&price, level)) = self.levels.iter_mut().next() else {
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
            .take(n)
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Cumulative quantity of levels priced at or below `limit`
    ///
    /// The eligible liquidity a price-limited buy order could consume.
    pub fn quantity_at_or_better(&self, limit: Price) -> Quantity {
        let mut available = Quantity::ZERO;
        for (price, level) in self.levels.iter() {
            if *price > limit {
                break;
            }
            available = available + level.total_quantity();
        }
        available
    }

    /// Check if the ask book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Iterate levels in priority order (best ask first)
    pub fn iter_levels(&self) -> impl Iterator<Item = (Price, &PriceLevel)> {
        self.levels.iter().map(|(price, level)| (*price, level))
    }
}

impl Default for AskBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::Symbol;
    use types::order::{OrderType, Side};

    fn ask(price: u64, qty: &str) -> Order {
        Order::new(
            OrderType::Limit,
            Side::Sell,
            Quantity::from_str(qty).unwrap(),
            Symbol::new("BTC-USDT"),
            Price::from_u64(price),
        )
    }

    #[test]
    fn test_ask_book_best_is_lowest() {
        let mut book = AskBook::new();
        book.insert(ask(50000, "1.0"));
        book.insert(ask(51000, "2.0"));
        book.insert(ask(49000, "1.5"));

        assert_eq!(book.best_price(), Some(Price::from_u64(49000)));
        let (_, price, qty) = book.best_front().unwrap();
        assert_eq!(price, Price::from_u64(49000));
        assert_eq!(qty, Quantity::from_str("1.5").unwrap());
    }

    #[test]
    fn test_ask_book_depth_ascending() {
        let mut book = AskBook::new();
        book.insert(ask(50000, "1.0"));
        book.insert(ask(51000, "2.0"));
        book.insert(ask(49000, "1.5"));

        let depth = book.depth(10);
        assert_eq!(depth.len(), 3);
        assert_eq!(depth[0].0, Price::from_u64(49000));
        assert_eq!(depth[2].0, Price::from_u64(51000));
    }

    #[test]
    fn test_ask_book_fill_best_front_partial() {
        let mut book = AskBook::new();
        book.insert(ask(50000, "2.0"));

        book.fill_best_front(Quantity::from_str("0.5").unwrap());

        assert_eq!(book.level_count(), 1);
        let (_, _, qty) = book.best_front().unwrap();
        assert_eq!(qty, Quantity::from_str("1.5").unwrap());
    }

    #[test]
    fn test_ask_book_quantity_at_or_better() {
        let mut book = AskBook::new();
        book.insert(ask(100, "3.0"));
        book.insert(ask(101, "3.0"));
        book.insert(ask(105, "10.0"));

        // A buy limited at 101 can reach the 100 and 101 levels only.
        assert_eq!(
            book.quantity_at_or_better(Price::from_u64(101)),
            Quantity::from_str("6.0").unwrap()
        );
        assert_eq!(
            book.quantity_at_or_better(Price::from_u64(99)),
            Quantity::ZERO
        );
    }
}
