//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Both types expose `canonical_str`, the single canonical decimal formatter
//! used wherever book state is rendered or compared as text: trailing zeros
//! are stripped, so equal numeric states always produce equal strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Price type with fixed-point decimal representation
///
/// Must be non-negative. Market orders carry a price of zero, which the
/// matching logic ignores. Serialized as string to prevent JSON number
/// precision loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Create a new Price from a Decimal
    ///
    /// # Panics
    /// Panics if the price is negative
    pub fn new(value: Decimal) -> Self {
        assert!(value >= Decimal::ZERO, "Price must be non-negative");
        Self(value)
    }

    /// Try to create a Price, returning None if negative
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value >= Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create from integer (for testing/convenience)
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create from string
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        let decimal = Decimal::from_str(s)?;
        Ok(Self::new(decimal))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Canonical decimal string: normalized, no trailing zeros
    pub fn canonical_str(&self) -> String {
        self.0.normalize().to_string()
    }
}

// Custom serialization to preserve precision
impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let decimal = Decimal::from_str(&s).map_err(serde::de::Error::custom)?;
        Self::try_new(decimal).ok_or_else(|| serde::de::Error::custom("Price must be non-negative"))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity type with fixed-point decimal representation
///
/// Must be non-negative; positive at order construction and monotonically
/// decreasing as fills are applied. Serialized as string to prevent JSON
/// number precision loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(Decimal);

impl Quantity {
    pub const ZERO: Quantity = Quantity(Decimal::ZERO);

    /// Create a new Quantity from a Decimal
    ///
    /// # Panics
    /// Panics if the quantity is negative
    pub fn new(value: Decimal) -> Self {
        assert!(value >= Decimal::ZERO, "Quantity must be non-negative");
        Self(value)
    }

    /// Try to create a Quantity, returning None if negative
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value >= Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create from integer (for testing/convenience)
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create from string
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        let decimal = Decimal::from_str(s)?;
        Ok(Self::new(decimal))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Canonical decimal string: normalized, no trailing zeros
    pub fn canonical_str(&self) -> String {
        self.0.normalize().to_string()
    }

    /// Check if quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.0 >= rhs.0, "Quantity subtraction would result in negative");
        Self(self.0 - rhs.0)
    }
}

// Custom serialization to preserve precision
impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let decimal = Decimal::from_str(&s).map_err(serde::de::Error::custom)?;
        Self::try_new(decimal).ok_or_else(|| serde::de::Error::custom("Quantity cannot be negative"))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_creation() {
        let price = Price::from_u64(50000);
        assert_eq!(price.as_decimal(), Decimal::from(50000));
    }

    #[test]
    fn test_price_zero_allowed() {
        let price = Price::new(Decimal::ZERO);
        assert_eq!(price, Price::ZERO);
    }

    #[test]
    #[should_panic(expected = "Price must be non-negative")]
    fn test_price_negative_panics() {
        Price::new(Decimal::from(-100));
    }

    #[test]
    fn test_price_ordering() {
        assert!(Price::from_u64(100) < Price::from_u64(101));
        assert!(Price::from_str("99.5").unwrap() < Price::from_u64(100));
    }

    #[test]
    fn test_price_serialization() {
        let price = Price::from_str("50000.25").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"50000.25\"");

        let deserialized: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, deserialized);
    }

    #[test]
    fn test_canonical_str_strips_trailing_zeros() {
        assert_eq!(Price::from_str("100.500").unwrap().canonical_str(), "100.5");
        assert_eq!(Price::from_str("100.00").unwrap().canonical_str(), "100");
        assert_eq!(Price::from_u64(100).canonical_str(), "100");
    }

    #[test]
    fn test_canonical_str_equal_states_equal_strings() {
        // Sums that carry different scales must still render identically.
        let a = Quantity::from_str("1.5").unwrap() + Quantity::from_str("2.5").unwrap();
        let b = Quantity::from_u64(4);
        assert_eq!(a.canonical_str(), b.canonical_str());
        assert_eq!(a.canonical_str(), "4");
    }

    #[test]
    fn test_quantity_arithmetic() {
        let q1 = Quantity::from_str("2.5").unwrap();
        let q2 = Quantity::from_str("1.5").unwrap();

        let sum = q1 + q2;
        assert_eq!(sum.as_decimal(), Decimal::from_str("4.0").unwrap());

        let diff = q1 - q2;
        assert_eq!(diff.as_decimal(), Decimal::from_str("1.0").unwrap());
    }

    #[test]
    #[should_panic(expected = "Quantity subtraction would result in negative")]
    fn test_quantity_underflow_panics() {
        let _ = Quantity::from_u64(1) - Quantity::from_u64(2);
    }

    #[test]
    fn test_quantity_zero() {
        let qty = Quantity::from_u64(3) - Quantity::from_u64(3);
        assert!(qty.is_zero());
        assert_eq!(qty, Quantity::ZERO);
    }

    #[test]
    fn test_quantity_min() {
        let q1 = Quantity::from_str("2.5").unwrap();
        let q2 = Quantity::from_u64(4);
        assert_eq!(q1.min(q2), q1);
    }
}
