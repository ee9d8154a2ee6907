use crate::handlers::{health, instruments, orders, portfolio, trades};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/orders", post(orders::place_order).get(orders::list_orders))
        .route("/orders/{id}", get(orders::get_order))
        .route("/instruments", get(instruments::list_instruments))
        .route("/trades", get(trades::list_trades))
        .route("/portfolio", get(portfolio::get_portfolio))
        .route("/portfolio/summary", get(portfolio::get_summary));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
