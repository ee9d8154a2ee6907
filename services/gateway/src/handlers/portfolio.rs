use crate::state::AppState;
use axum::{extract::State, Json};
use ledger::PortfolioSummary;
use types::holding::PortfolioHolding;

/// `GET /api/v1/portfolio`
///
/// Holdings are marked to market before they are reported.
pub async fn get_portfolio(State(state): State<AppState>) -> Json<Vec<PortfolioHolding>> {
    Json(state.portfolio.snapshot())
}

/// `GET /api/v1/portfolio/summary`
pub async fn get_summary(State(state): State<AppState>) -> Json<PortfolioSummary> {
    Json(state.portfolio.summary())
}
