//! Wire events for the derived data streams
//!
//! Serialization lives here, separate from the domain types: the trade
//! stream and the depth stream each have a fixed JSON schema, and the
//! depth schema doubles as the change-detection domain — two depth images
//! are equal exactly when a consumer would see identical state.
//!
//! Inside the depth arrays, price and quantity are canonical decimal
//! strings so consumers never suffer float-precision drift; the top-level
//! best bid/ask and the trade fields are plain JSON numbers.

use rust_decimal::Decimal;
use serde::Serialize;
use types::ids::Symbol;
use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::Trade;

use crate::book::Bbo;

/// Number of price levels rendered into depth images and updates
pub const DEPTH_LEVELS: usize = 10;

/// Canonical string form of one side's visible depth
///
/// `[price, quantity]` pairs in priority order, canonically formatted.
pub type DepthImage = Vec<(String, String)>;

/// Render a depth snapshot into its canonical string image
pub fn depth_image(levels: &[(Price, Quantity)]) -> DepthImage {
    levels
        .iter()
        .map(|(price, qty)| (price.canonical_str(), qty.canonical_str()))
        .collect()
}

/// Frame a JSON payload as a Server-Sent Events message
pub fn sse_frame(json: &str) -> String {
    format!("data: {json}\n\n")
}

/// Wire event for a single trade execution
#[derive(Debug, Clone, Serialize)]
pub struct TradeEvent {
    #[serde(rename = "type")]
    kind: &'static str,
    trade_id: u64,
    symbol: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    quantity: Decimal,
    aggressor_side: Side,
    maker_order_id: u64,
    taker_order_id: u64,
}

impl From<&Trade> for TradeEvent {
    fn from(trade: &Trade) -> Self {
        Self {
            kind: "trade",
            trade_id: trade.trade_id.as_u64(),
            symbol: trade.symbol.as_str().to_string(),
            price: trade.price.as_decimal(),
            quantity: trade.quantity.as_decimal(),
            aggressor_side: trade.aggressor_side,
            maker_order_id: trade.maker_order_id.as_u64(),
            taker_order_id: trade.taker_order_id.as_u64(),
        }
    }
}

/// Wire event for a visible change of a book's top-of-book depth
///
/// `best_bid`/`best_ask` are both null whenever either side of the book
/// is empty.
#[derive(Debug, Clone, Serialize)]
pub struct L2UpdateEvent {
    #[serde(rename = "type")]
    kind: &'static str,
    symbol: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    best_bid: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    best_ask: Option<Decimal>,
    bids: DepthImage,
    asks: DepthImage,
}

impl L2UpdateEvent {
    pub fn new(symbol: &Symbol, bbo: Option<Bbo>, bids: DepthImage, asks: DepthImage) -> Self {
        let (best_bid, best_ask) = match bbo {
            Some(bbo) => (
                Some(bbo.best_bid.as_decimal()),
                Some(bbo.best_ask.as_decimal()),
            ),
            None => (None, None),
        };
        Self {
            kind: "l2update",
            symbol: symbol.as_str().to_string(),
            best_bid,
            best_ask,
            bids,
            asks,
        }
    }
}
