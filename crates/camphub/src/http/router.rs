//! Router configuration for the HTTP API.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/campers",
            get(handlers::list_campers).post(handlers::create_camper),
        )
        .route(
            "/campers/{id}",
            get(handlers::get_camper).patch(handlers::update_camper),
        )
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{id}", delete(handlers::delete_activity))
        .route("/signups", post(handlers::create_signup))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Storage::open_in_memory().unwrap());
        let _router = create_router(state);
    }
}
