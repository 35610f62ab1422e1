use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::OrderValidationError;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType, Side};

/// Inbound order placement request
///
/// `order_type` and `side` deserialize as their enumerated wire forms, so
/// an unknown value is rejected at the JSON layer before validation runs.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub symbol: String,
    pub order_type: OrderType,
    pub side: Side,
    pub quantity: Decimal,
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl CreateOrderRequest {
    /// Validate the request and construct the core order
    ///
    /// Rules enforced here, before the core is entered: symbol non-empty,
    /// quantity positive, price present and non-negative for Limit/IOC/FOK.
    /// Market orders carry a price of zero, which matching ignores.
    pub fn validate(self) -> Result<Order, OrderValidationError> {
        let symbol = Symbol::try_new(self.symbol).ok_or(OrderValidationError::EmptySymbol)?;

        let quantity = Quantity::try_new(self.quantity)
            .filter(|qty| !qty.is_zero())
            .ok_or_else(|| OrderValidationError::InvalidQuantity(self.quantity.to_string()))?;

        let price = if self.order_type.is_price_limited() {
            let raw = self.price.ok_or_else(|| {
                OrderValidationError::MissingPrice(self.order_type.as_str().to_string())
            })?;
            Price::try_new(raw).ok_or_else(|| OrderValidationError::NegativePrice(raw.to_string()))?
        } else {
            Price::ZERO
        };

        Ok(Order::new(self.order_type, self.side, quantity, symbol, price))
    }
}

/// Acknowledgement for an accepted order
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub status: &'static str,
    pub order_id: OrderId,
}

impl OrderResponse {
    pub fn received(order_id: OrderId) -> Self {
        Self {
            status: "Order Received",
            order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> CreateOrderRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_limit_order() {
        let order = request(
            r#"{"symbol":"BTC-USDT","order_type":"limit","side":"buy","quantity":1.5,"price":50000}"#,
        )
        .validate()
        .unwrap();

        assert_eq!(order.order_type(), OrderType::Limit);
        assert_eq!(order.side(), Side::Buy);
        assert_eq!(order.quantity(), Quantity::from_str("1.5").unwrap());
        assert_eq!(order.price(), Price::from_u64(50000));
    }

    #[test]
    fn test_market_order_without_price() {
        let order = request(
            r#"{"symbol":"BTC-USDT","order_type":"market","side":"sell","quantity":2}"#,
        )
        .validate()
        .unwrap();

        assert_eq!(order.order_type(), OrderType::Market);
        assert_eq!(order.price(), Price::ZERO);
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let err = request(
            r#"{"symbol":"","order_type":"limit","side":"buy","quantity":1,"price":100}"#,
        )
        .validate()
        .unwrap_err();
        assert_eq!(err, OrderValidationError::EmptySymbol);
    }

    #[test]
    fn test_zero_and_negative_quantity_rejected() {
        let err = request(
            r#"{"symbol":"BTC-USDT","order_type":"limit","side":"buy","quantity":0,"price":100}"#,
        )
        .validate()
        .unwrap_err();
        assert!(matches!(err, OrderValidationError::InvalidQuantity(_)));

        let err = request(
            r#"{"symbol":"BTC-USDT","order_type":"limit","side":"buy","quantity":-1,"price":100}"#,
        )
        .validate()
        .unwrap_err();
        assert!(matches!(err, OrderValidationError::InvalidQuantity(_)));
    }

    #[test]
    fn test_price_required_for_limited_types() {
        for order_type in ["limit", "ioc", "fok"] {
            let err = request(&format!(
                r#"{{"symbol":"BTC-USDT","order_type":"{order_type}","side":"buy","quantity":1}}"#
            ))
            .validate()
            .unwrap_err();
            assert!(matches!(err, OrderValidationError::MissingPrice(_)));
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = request(
            r#"{"symbol":"BTC-USDT","order_type":"limit","side":"buy","quantity":1,"price":-5}"#,
        )
        .validate()
        .unwrap_err();
        assert!(matches!(err, OrderValidationError::NegativePrice(_)));
    }

    #[test]
    fn test_unknown_enums_fail_to_parse() {
        assert!(serde_json::from_str::<CreateOrderRequest>(
            r#"{"symbol":"BTC-USDT","order_type":"stop","side":"buy","quantity":1,"price":100}"#
        )
        .is_err());
        assert!(serde_json::from_str::<CreateOrderRequest>(
            r#"{"symbol":"BTC-USDT","order_type":"limit","side":"hold","quantity":1,"price":100}"#
        )
        .is_err());
    }

    #[test]
    fn test_response_shape() {
        let response = OrderResponse::received(OrderId::from_u64(9));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"Order Received","order_id":9}"#);
    }
}
