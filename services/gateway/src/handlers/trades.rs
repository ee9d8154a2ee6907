use crate::state::AppState;
use axum::{extract::State, Json};
use types::trade::Trade;

/// `GET /api/v1/trades`
pub async fn list_trades(State(state): State<AppState>) -> Json<Vec<Trade>> {
    Json(state.store.trades())
}
