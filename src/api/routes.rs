//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Health check
        .route("/health", get(handlers::health_check))
        // Restaurants
        .route("/restaurants", get(handlers::list_restaurants))
        .route(
            "/restaurants/{id}",
            get(handlers::get_restaurant).delete(handlers::delete_restaurant),
        )
        // Pizzas
        .route("/pizzas", get(handlers::list_pizzas))
        // Restaurant pizzas
        .route(
            "/restaurant_pizzas",
            post(handlers::create_restaurant_pizza),
        )
        .with_state(state)
}
