//! Crossing detection logic
//!
//! Determines when an incoming taker can match against a resting maker
//! price, by order type and side.

use types::numeric::Price;
use types::order::{OrderType, Side};

/// Check whether a taker crosses the best resting price
///
/// Market orders cross unconditionally. Limit, IOC and FOK orders cross
/// only while the maker price is no worse than the taker's limit:
/// - Buy taker: maker ask price <= taker limit
/// - Sell taker: maker bid price >= taker limit
pub fn crosses(
    order_type: OrderType,
    taker_side: Side,
    taker_price: Price,
    maker_price: Price,
) -> bool {
    if !order_type.is_price_limited() {
        return true;
    }
    match taker_side {
        Side::Buy => taker_price >= maker_price,
        Side::Sell => taker_price <= maker_price,
    }
}
