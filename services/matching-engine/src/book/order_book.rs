//! Per-symbol order book
//!
//! The heart of the engine for one instrument: two sorted sides and the
//! price-time priority matching algorithm. Processing never fails; an
//! order that cannot execute simply produces no trades.

use tracing::debug;
use types::ids::Symbol;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType, Side};
use types::trade::Trade;

use super::ask_book::AskBook;
use super::bid_book::BidBook;
use crate::matching::crossing;

/// Best Bid and Offer
///
/// Only exists while both sides of the book are non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bbo {
    pub best_bid: Price,
    pub best_ask: Price,
}

/// Order book for a single symbol
///
/// Invariants held between ingest calls:
/// - no empty price level
/// - every resting order has positive remaining quantity
/// - best bid < best ask whenever both sides are non-empty
#[derive(Debug, Clone)]
pub struct OrderBook {
    symbol: Symbol,
    bids: BidBook,
    asks: AskBook,
}

impl OrderBook {
    /// Create a new empty book for `symbol`
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            bids: BidBook::new(),
            asks: AskBook::new(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Process an order against this book
    ///
    /// Consumes the order: a Limit residual transfers into its price level,
    /// everything else is either fully filled or discarded. Returns the
    /// trades in execution order.
    ///
    /// A fill-or-kill order is pre-checked against the eligible opposite
    /// liquidity; when it cannot fill completely it executes nothing and
    /// the book is left untouched.
    pub fn process_order(&mut self, mut order: Order) -> Vec<Trade> {
        let mut trades = Vec::new();

        if order.order_type() == OrderType::Fok && !self.fok_can_fill(&order) {
            debug!(
                order_id = %order.order_id(),
                symbol = %self.symbol,
                "fill-or-kill rejected, insufficient liquidity"
            );
            return trades;
        }

        match order.side() {
            Side::Buy => self.match_buy(&mut order, &mut trades),
            Side::Sell => self.match_sell(&mut order, &mut trades),
        }

        if !order.is_filled() && order.order_type().rests() {
            debug!(
                order_id = %order.order_id(),
                symbol = %self.symbol,
                remaining = %order.quantity(),
                "resting limit order"
            );
            match order.side() {
                Side::Buy => self.bids.insert(order),
                Side::Sell => self.asks.insert(order),
            }
        }

        trades
    }

    /// Match an incoming buy against the asks, best price first
    fn match_buy(&mut self, taker: &mut Order, trades: &mut Vec<Trade>) {
        while !taker.is_filled() {
            let Some((maker_id, maker_price, maker_qty)) = self.asks.best_front() else {
                break;
            };
            if !crossing::crosses(taker.order_type(), Side::Buy, taker.price(), maker_price) {
                break;
            }

            let fill = taker.quantity().min(maker_qty);
            trades.push(Trade::new(
                maker_id,
                taker.order_id(),
                maker_price,
                fill,
                Side::Buy,
                self.symbol.clone(),
            ));

            self.asks.fill_best_front(fill);
            taker.reduce_quantity(fill);
        }
    }

    /// Match an incoming sell against the bids, best price first
    fn match_sell(&mut self, taker: &mut Order, trades: &mut Vec<Trade>) {
        while !taker.is_filled() {
            let Some((maker_id, maker_price, maker_qty)) = self.bids.best_front() else {
                break;
            };
            if !crossing::crosses(taker.order_type(), Side::Sell, taker.price(), maker_price) {
                break;
            }

            let fill = taker.quantity().min(maker_qty);
            trades.push(Trade::new(
                maker_id,
                taker.order_id(),
                maker_price,
                fill,
                Side::Sell,
                self.symbol.clone(),
            ));

            self.bids.fill_best_front(fill);
            taker.reduce_quantity(fill);
        }
    }

    /// Whether a fill-or-kill order can execute completely right now
    ///
    /// Sums the opposite side's liquidity at prices no worse than the
    /// order's limit and compares it to the order's quantity.
    fn fok_can_fill(&self, order: &Order) -> bool {
        let available = match order.side() {
            Side::Buy => self.asks.quantity_at_or_better(order.price()),
            Side::Sell => self.bids.quantity_at_or_better(order.price()),
        };
        available >= order.quantity()
    }

    /// Best bid and offer, present only when both sides are non-empty
    pub fn best_bid_ask(&self) -> Option<Bbo> {
        match (self.bids.best_price(), self.asks.best_price()) {
            (Some(best_bid), Some(best_ask)) => Some(Bbo { best_bid, best_ask }),
            _ => None,
        }
    }

    /// Top `n` price levels of one side with aggregated remaining quantity
    ///
    /// Bids come back descending, asks ascending.
    pub fn depth(&self, n: usize, side: Side) -> Vec<(Price, Quantity)> {
        match side {
            Side::Buy => self.bids.depth(n),
            Side::Sell => self.asks.depth(n),
        }
    }

    pub fn bids(&self) -> &BidBook {
        &self.bids
    }

    pub fn asks(&self) -> &AskBook {
        &self.asks
    }
}
