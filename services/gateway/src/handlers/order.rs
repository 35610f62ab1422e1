use crate::error::AppError;
use crate::models::{CreateOrderRequest, OrderResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

/// Accept an order, validate it, and hand it to the engine
///
/// The engine broadcasts any resulting trades and depth changes itself.
/// A fill-or-kill order that cannot execute is still acknowledged with
/// its order id: insufficiency is not an error at this boundary.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, AppError> {
    let Json(request) = payload?;

    let order = request.validate()?;
    let order_id = order.order_id();

    info!(order_id = %order_id, symbol = %order.symbol(), "order received");
    state.engine.ingest(order);

    Ok(Json(OrderResponse::received(order_id)))
}
