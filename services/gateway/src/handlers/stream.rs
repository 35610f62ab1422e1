use crate::state::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use futures::StreamExt;
use matching_engine::broadcast::{EventSink, SinkError};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::info;

/// Event sink backed by an unbounded channel to one SSE client
///
/// The engine writes pre-framed bytes from its own threads; the channel
/// decouples a slow client from matching. Once the client disconnects the
/// receiver is dropped and every subsequent write fails, which the
/// fan-out skips.
struct ChannelSink {
    tx: mpsc::UnboundedSender<Bytes>,
}

impl EventSink for ChannelSink {
    fn write(&self, payload: &[u8]) -> Result<(), SinkError> {
        self.tx
            .send(Bytes::copy_from_slice(payload))
            .map_err(|_| SinkError::Closed)
    }
}

/// SSE stream of trade executions
pub async fn trade_feed(State(state): State<AppState>) -> Response {
    info!("client connected to trade feed");
    let (tx, rx) = mpsc::unbounded_channel();
    state.engine.subscribe_trades(Box::new(ChannelSink { tx }));
    sse_response(rx)
}

/// SSE stream of depth updates
pub async fn market_data_feed(State(state): State<AppState>) -> Response {
    info!("client connected to market data feed");
    let (tx, rx) = mpsc::unbounded_channel();
    state.engine.subscribe_depth(Box::new(ChannelSink { tx }));
    sse_response(rx)
}

/// Wrap the receiving end of a sink channel as an event-stream body
///
/// Frames arrive already SSE-formatted from the engine, so the body is a
/// plain byte stream with the event-stream content type.
fn sse_response(rx: mpsc::UnboundedReceiver<Bytes>) -> Response {
    let stream = UnboundedReceiverStream::new(rx).map(Ok::<_, std::convert::Infallible>);
    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(stream),
    )
        .into_response()
}
