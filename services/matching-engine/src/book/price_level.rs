//! Price level implementation with FIFO queue
//!
//! A price level owns every order resting at a specific price point.
//! Orders are maintained in FIFO order to enforce time priority; the
//! aggregate remaining quantity is cached so depth queries never walk
//! the queue.

use std::collections::VecDeque;
use types::numeric::Quantity;
use types::order::Order;

/// A price level containing the resting orders at a specific price
///
/// Maintains strict FIFO ordering for time-priority matching. Between
/// ingest calls every queued order has a positive remaining quantity.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Queue of resting orders at this price (FIFO order)
    orders: VecDeque<Order>,
    /// Total remaining quantity across all orders at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: Quantity::ZERO,
        }
    }

    /// Append an order at the back of the queue (time priority)
    pub fn push_back(&mut self, order: Order) {
        self.total_quantity = self.total_quantity + order.quantity();
        self.orders.push_back(order);
    }

    /// Peek at the front order without removing it
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Fill the front order by `amount`
    ///
    /// Reduces the head's remaining quantity and the cached aggregate;
    /// a fully filled head is popped. `amount` never exceeds the head's
    /// remaining quantity because matching always fills by the min of
    /// taker and maker remainders.
    pub fn fill_front(&mut self, amount: Quantity) {
        if let Some(order) = self.orders.front_mut() {
            order.reduce_quantity(amount);
            self.total_quantity = self.total_quantity - amount;

            if order.is_filled() {
                self.orders.pop_front();
            }
        }
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total remaining quantity at this price level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Iterate the resting orders in FIFO order
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}

impl Default for PriceLevel {
    fn default() -> Self {
        Self::new()
    }
}
