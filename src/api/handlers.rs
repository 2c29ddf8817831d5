//! API request handlers.

use crate::db::NewRestaurantPizza;
use crate::error::{ApiError, ErrorResponse, ErrorsResponse};
use crate::models::{
    CreateRestaurantPizzaRequest, HealthResponse, PizzaSummary, RestaurantDetail,
    RestaurantPizzaCreated, RestaurantSummary,
};
use crate::serialization::{
    serialize_pizza_summary, serialize_restaurant_detail, serialize_restaurant_pizza_created,
    serialize_restaurant_summary,
};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// Index & Health
// ============================================================================

/// Landing page.
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Restaurants
// ============================================================================

/// List all restaurants.
#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = Vec<RestaurantSummary>)
    ),
    tag = "Restaurants"
)]
pub async fn list_restaurants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let restaurants = state
        .store
        .list_restaurants()
        .await
        .map_err(ApiError::from_read)?;

    Ok(Json(
        restaurants.iter().map(serialize_restaurant_summary).collect(),
    ))
}

/// Get a restaurant with the pizzas it sells.
#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Restaurant details", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = ErrorResponse)
    ),
    tag = "Restaurants"
)]
pub async fn get_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let detail = state
        .store
        .get_restaurant_with_pizzas(id)
        .await
        .map_err(ApiError::from_read)?
        .ok_or(ApiError::RestaurantNotFound(id))?;

    Ok(Json(serialize_restaurant_detail(&detail)))
}

/// Delete a restaurant and its pizza prices.
#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 204, description = "Restaurant deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorResponse)
    ),
    tag = "Restaurants"
)]
pub async fn delete_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .store
        .delete_restaurant(id)
        .await
        .map_err(ApiError::from_write)?;

    if deleted {
        info!(restaurant_id = id, "Restaurant deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::RestaurantNotFound(id))
    }
}

// ============================================================================
// Pizzas
// ============================================================================

/// List all pizzas.
#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = Vec<PizzaSummary>)
    ),
    tag = "Pizzas"
)]
pub async fn list_pizzas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let pizzas = state
        .store
        .list_pizzas()
        .await
        .map_err(ApiError::from_read)?;

    Ok(Json(pizzas.iter().map(serialize_pizza_summary).collect()))
}

// ============================================================================
// Restaurant Pizzas
// ============================================================================

/// Add a pizza to a restaurant at a price.
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Restaurant pizza created", body = RestaurantPizzaCreated),
        (status = 400, description = "Invalid price or unknown pizza/restaurant", body = ErrorsResponse)
    ),
    tag = "Restaurant Pizzas"
)]
pub async fn create_restaurant_pizza(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), ApiError> {
    let Json(request) = payload?;

    let new = NewRestaurantPizza::from_request(&request).inspect_err(|errors| {
        warn!(%errors, "Rejected restaurant pizza");
    })?;

    let created = state
        .store
        .create_restaurant_pizza(new)
        .await
        .map_err(ApiError::from_write)?;

    info!(
        id = created.restaurant_pizza.id,
        pizza_id = new.pizza_id,
        restaurant_id = new.restaurant_id,
        price = new.price,
        "Restaurant pizza created"
    );

    Ok((
        StatusCode::CREATED,
        Json(serialize_restaurant_pizza_created(&created)),
    ))
}
