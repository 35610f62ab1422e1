//! Subscriber fan-out
//!
//! Thread-safe broadcast of serialized events to a dynamic set of sinks.
//! Sinks are opaque write-only byte consumers supplied by the transport;
//! their lifetime is managed externally. A sink that fails to accept a
//! write is skipped, never removed: registration is append-only and the
//! transport decides when a consumer is gone.

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

/// Failure writing to a subscriber sink
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinkError {
    /// The consumer went away; subsequent writes will keep failing
    #[error("sink closed")]
    Closed,
}

/// Opaque write-only byte consumer
///
/// Implementations must tolerate writes from any thread; a write either
/// accepts the whole payload or fails.
pub trait EventSink: Send {
    fn write(&self, payload: &[u8]) -> Result<(), SinkError>;
}

/// Broadcast channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// One event per trade execution
    Trades,
    /// One event per visible change of a book's top-of-book depth
    Depth,
}

#[derive(Default)]
struct SinkLists {
    trades: Vec<Box<dyn EventSink>>,
    depth: Vec<Box<dyn EventSink>>,
}

impl SinkLists {
    fn for_channel(&self, channel: Channel) -> &Vec<Box<dyn EventSink>> {
        match channel {
            Channel::Trades => &self.trades,
            Channel::Depth => &self.depth,
        }
    }

    fn for_channel_mut(&mut self, channel: Channel) -> &mut Vec<Box<dyn EventSink>> {
        match channel {
            Channel::Trades => &mut self.trades,
            Channel::Depth => &mut self.depth,
        }
    }
}

/// Fan-out of serialized events to the subscribed sinks of each channel
///
/// A single mutex guards both lists and is held for the duration of a
/// broadcast, so registrations cannot mutate a list mid-iteration.
pub struct Broadcaster {
    sinks: Mutex<SinkLists>,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self {
            sinks: Mutex::new(SinkLists::default()),
        }
    }

    /// Register a sink on a channel
    pub fn add(&self, channel: Channel, sink: Box<dyn EventSink>) {
        self.sinks.lock().for_channel_mut(channel).push(sink);
    }

    /// Write `payload` to every sink of `channel`, in registration order
    ///
    /// An individual write failure is logged and skipped; the fan-out
    /// continues with the remaining sinks.
    pub fn broadcast(&self, channel: Channel, payload: &[u8]) {
        let lists = self.sinks.lock();
        for sink in lists.for_channel(channel) {
            if let Err(err) = sink.write(payload) {
                debug!(?channel, %err, "skipping unwritable sink");
            }
        }
    }

    /// Number of sinks registered on a channel
    pub fn sink_count(&self, channel: Channel) -> usize {
        self.sinks.lock().for_channel(channel).len()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}
