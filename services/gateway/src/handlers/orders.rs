use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use ledger::OrderRequest;
use types::errors::LedgerError;
use types::ids::OrderId;
use types::order::Order;

/// `POST /api/v1/orders`
///
/// Places an order and reports its state after placement. Market orders
/// that execute on the spot come back `EXECUTED`; everything else is
/// `PLACED`.
pub async fn place_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderRequest>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let placement = state.orders.place(payload)?;
    Ok((StatusCode::CREATED, Json(placement.order)))
}

/// `GET /api/v1/orders/{id}`
///
/// The path segment is matched as an opaque string; anything that does
/// not name a known order reports `ORDER_NOT_FOUND`.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let not_found = || LedgerError::OrderNotFound {
        order_id: order_id.clone(),
    };

    let id: OrderId = order_id.parse().map_err(|_| not_found())?;
    let order = state.orders.get(&id).ok_or_else(not_found)?;
    Ok(Json(order))
}

/// `GET /api/v1/orders`
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.orders.list())
}
