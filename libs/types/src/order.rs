//! Order types and lifecycle

use crate::ids::{OrderId, Symbol};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Execution type and time-in-force policy of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Execute immediately at the best available price; residual is discarded
    Market,
    /// Execute at the limit price or better; residual rests on the book
    Limit,
    /// Immediate-Or-Cancel: match what is possible now, discard the rest
    Ioc,
    /// Fill-Or-Kill: match the entire quantity now or do nothing
    Fok,
}

impl OrderType {
    /// Whether matching must stop at levels worse than the order's limit price
    pub fn is_price_limited(&self) -> bool {
        !matches!(self, OrderType::Market)
    }

    /// Whether an unfilled residual rests on the book
    pub fn rests(&self) -> bool {
        matches!(self, OrderType::Limit)
    }

    /// Wire representation ("market" / "limit" / "ioc" / "fok")
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "market",
            OrderType::Limit => "limit",
            OrderType::Ioc => "ioc",
            OrderType::Fok => "fok",
        }
    }
}

/// A single trading order
///
/// Identity fields are immutable after construction; `quantity` is the
/// remaining quantity and only ever decreases as fills are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    order_type: OrderType,
    side: Side,
    price: Price,
    quantity: Quantity,
    symbol: Symbol,
}

impl Order {
    /// Create a new order, assigning the next process-wide order id
    ///
    /// `price` is the worst acceptable price for Limit/IOC/FOK orders and
    /// is ignored for Market orders (which carry zero).
    pub fn new(
        order_type: OrderType,
        side: Side,
        quantity: Quantity,
        symbol: Symbol,
        price: Price,
    ) -> Self {
        Self {
            order_id: OrderId::next(),
            order_type,
            side,
            price,
            quantity,
            symbol,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Remaining (unfilled) quantity
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Reduce the remaining quantity after a fill
    ///
    /// Matching always passes `min(taker remaining, maker remaining)`, so
    /// `amount` can never exceed the remaining quantity; an overdraw is a
    /// bug and the reduction is skipped.
    pub fn reduce_quantity(&mut self, amount: Quantity) {
        debug_assert!(amount <= self.quantity, "fill exceeds remaining quantity");
        if amount <= self.quantity {
            self.quantity = self.quantity - amount;
        }
    }

    /// Whether the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit_buy(qty: &str, price: u64) -> Order {
        Order::new(
            OrderType::Limit,
            Side::Buy,
            Quantity::from_str(qty).unwrap(),
            Symbol::new("BTC-USDT"),
            Price::from_u64(price),
        )
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_order_type_flags() {
        assert!(!OrderType::Market.is_price_limited());
        assert!(OrderType::Limit.is_price_limited());
        assert!(OrderType::Ioc.is_price_limited());
        assert!(OrderType::Fok.is_price_limited());

        assert!(OrderType::Limit.rests());
        assert!(!OrderType::Market.rests());
        assert!(!OrderType::Ioc.rests());
        assert!(!OrderType::Fok.rests());
    }

    #[test]
    fn test_order_creation_assigns_increasing_ids() {
        let order1 = limit_buy("1.0", 50000);
        let order2 = limit_buy("1.0", 50000);
        assert!(order1.order_id() < order2.order_id());
    }

    #[test]
    fn test_reduce_quantity() {
        let mut order = limit_buy("5.0", 50000);
        order.reduce_quantity(Quantity::from_str("2.0").unwrap());
        assert_eq!(order.quantity(), Quantity::from_str("3.0").unwrap());
        assert!(!order.is_filled());

        order.reduce_quantity(Quantity::from_str("3.0").unwrap());
        assert!(order.quantity().is_zero());
        assert!(order.is_filled());
    }

    #[test]
    fn test_reduce_quantity_overdraw_is_noop() {
        let mut order = limit_buy("1.0", 50000);
        // Release-build behavior: the guard skips an overdrawn reduction.
        if !cfg!(debug_assertions) {
            order.reduce_quantity(Quantity::from_str("2.0").unwrap());
            assert_eq!(order.quantity(), Quantity::from_str("1.0").unwrap());
        }
    }

    #[test]
    fn test_side_wire_casing() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"sell\"");
        let side: Side = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(side, Side::Sell);
    }

    #[test]
    fn test_order_type_wire_casing() {
        assert_eq!(serde_json::to_string(&OrderType::Market).unwrap(), "\"market\"");
        assert_eq!(serde_json::to_string(&OrderType::Fok).unwrap(), "\"fok\"");
        let ty: OrderType = serde_json::from_str("\"ioc\"").unwrap();
        assert_eq!(ty, OrderType::Ioc);
        assert!(serde_json::from_str::<OrderType>("\"stop\"").is_err());
    }
}
