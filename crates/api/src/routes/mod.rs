pub mod health;
pub mod simulate;
pub mod thresholds;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(thresholds::router())
        .merge(simulate::router())
        .with_state(state)
}
