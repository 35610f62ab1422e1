//! Trade execution types

use crate::ids::{OrderId, Symbol, TradeId};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use serde::{Deserialize, Serialize};

/// A single, atomic trade execution
///
/// Produced whenever part of an aggressing (taker) order matches a resting
/// (maker) order. The price is always the maker's resting price; the
/// quantity is `min(remaining taker, remaining maker)` at the moment of
/// execution. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    /// Side of the taker order
    pub aggressor_side: Side,
    pub symbol: Symbol,
}

impl Trade {
    /// Create a new trade, assigning the next process-wide trade id
    pub fn new(
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        price: Price,
        quantity: Quantity,
        aggressor_side: Side,
        symbol: Symbol,
    ) -> Self {
        Self {
            trade_id: TradeId::next(),
            maker_order_id,
            taker_order_id,
            price,
            quantity,
            aggressor_side,
            symbol,
        }
    }
}
