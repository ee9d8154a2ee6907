use crate::state::AppState;
use axum::{extract::State, Json};
use types::instrument::Instrument;

/// `GET /api/v1/instruments`
pub async fn list_instruments(State(state): State<AppState>) -> Json<Vec<Instrument>> {
    Json(state.store.instruments())
}
