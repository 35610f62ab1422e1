//! Matching engine core
//!
//! The controller that owns one order book per symbol, routes inbound
//! orders, and publishes the derived trade and depth streams.
//!
//! Concurrency model: the symbol map is sharded, so ingest on distinct
//! symbols never serializes; ingest on the same symbol is fully serialized
//! by the book's own mutex, which is held across the whole call so the
//! pre/post depth images bracket the matching consistently. The broadcast
//! mutex is only ever acquired inside a book lock, never the other way
//! around.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::book::OrderBook;
use crate::broadcast::{Broadcaster, Channel, EventSink};
use crate::events::{self, L2UpdateEvent, TradeEvent, DEPTH_LEVELS};
use types::ids::Symbol;
use types::order::{Order, Side};

/// Multi-symbol matching engine
///
/// Books are created lazily on first reference and never removed.
pub struct MatchingEngine {
    books: DashMap<String, Arc<Mutex<OrderBook>>>,
    broadcaster: Broadcaster,
}

impl MatchingEngine {
    /// Create a new engine with no books and no subscribers
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            broadcaster: Broadcaster::new(),
        }
    }

    /// Process one inbound order end to end
    ///
    /// Captures the top-of-book depth images before and after matching,
    /// publishes every resulting trade in execution order, and publishes a
    /// single depth update when (and only when) the visible top of the
    /// book changed. Trades for one ingest always precede its depth
    /// update; there is no ordering guarantee across symbols.
    pub fn ingest(&self, order: Order) {
        let book = self.book(order.symbol());
        let mut book = book.lock();

        let pre_bids = events::depth_image(&book.depth(DEPTH_LEVELS, Side::Buy));
        let pre_asks = events::depth_image(&book.depth(DEPTH_LEVELS, Side::Sell));

        let order_id = order.order_id();
        let trades = book.process_order(order);

        if !trades.is_empty() {
            info!(
                order_id = %order_id,
                symbol = %book.symbol(),
                trades = trades.len(),
                "order executed"
            );
            for trade in &trades {
                self.publish(Channel::Trades, &TradeEvent::from(trade));
            }
        }

        let post_bids = events::depth_image(&book.depth(DEPTH_LEVELS, Side::Buy));
        let post_asks = events::depth_image(&book.depth(DEPTH_LEVELS, Side::Sell));

        // Canonical string equality of the images is the change predicate:
        // anything a depth consumer could observe differs iff these differ.
        if pre_bids != post_bids || pre_asks != post_asks {
            let update =
                L2UpdateEvent::new(book.symbol(), book.best_bid_ask(), post_bids, post_asks);
            self.publish(Channel::Depth, &update);
        }
    }

    /// Register a sink for the trade stream
    pub fn subscribe_trades(&self, sink: Box<dyn EventSink>) {
        self.broadcaster.add(Channel::Trades, sink);
    }

    /// Register a sink for the depth stream
    pub fn subscribe_depth(&self, sink: Box<dyn EventSink>) {
        self.broadcaster.add(Channel::Depth, sink);
    }

    /// Serialize an event and fan it out as an SSE frame
    fn publish<E: Serialize>(&self, channel: Channel, event: &E) {
        match serde_json::to_string(event) {
            Ok(json) => {
                let frame = events::sse_frame(&json);
                debug!(?channel, payload = %json, "broadcasting event");
                self.broadcaster.broadcast(channel, frame.as_bytes());
            }
            Err(err) => error!(%err, "event serialization failed"),
        }
    }

    /// Resolve the book for `symbol`, creating it on first reference
    ///
    /// Fast path is a shard read; the shard write lock is only taken when
    /// a new symbol appears. The returned handle is locked by the caller,
    /// after the shard lock has been released.
    fn book(&self, symbol: &Symbol) -> Arc<Mutex<OrderBook>> {
        if let Some(book) = self.books.get(symbol.as_str()) {
            return book.clone();
        }
        self.books
            .entry(symbol.as_str().to_string())
            .or_insert_with(|| {
                debug!(symbol = %symbol, "creating order book");
                Arc::new(Mutex::new(OrderBook::new(symbol.clone())))
            })
            .clone()
    }

    /// Number of symbols with a live book
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}
