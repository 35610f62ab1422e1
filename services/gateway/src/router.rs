use crate::handlers::{order, stream};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/order", post(order::create_order))
        // Trailing-slash alias, some clients send it.
        .route("/order/", post(order::create_order))
        .route("/ws/trades", get(stream::trade_feed))
        .route("/ws/marketdata", get(stream::market_data_feed))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
