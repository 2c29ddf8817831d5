//! Request and response types for the pizza restaurants API.

use serde::{Deserialize, Serialize};


// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

// ============================================================================
// Restaurants
// ============================================================================

/// Restaurant as listed by `GET /restaurants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    /// Restaurant ID.
    pub id: i64,
    /// Restaurant name.
    pub name: String,
    /// Street address.
    pub address: String,
}

/// Restaurant with its pizzas, from `GET /restaurants/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantDetail {
    /// Restaurant ID.
    pub id: i64,
    /// Restaurant name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Pizzas sold and their prices.
    pub associations: Vec<RestaurantPizzaEntry>,
}

/// Price entry nested in a restaurant detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantPizzaEntry {
    /// Price entry ID.
    pub id: i64,
    /// The pizza being sold.
    pub pizza: PizzaSummary,
    /// Pizza ID.
    pub pizza_id: i64,
    /// Price.
    pub price: i32,
    /// Restaurant ID.
    pub restaurant_id: i64,
}

// ============================================================================
// Pizzas
// ============================================================================

/// Pizza as listed by `GET /pizzas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaSummary {
    /// Pizza ID.
    pub id: i64,
    /// Pizza name.
    pub name: String,
    /// Ingredient list.
    pub ingredients: String,
}

// ============================================================================
// Restaurant Pizzas
// ============================================================================

/// Request to add a pizza to a restaurant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreateRestaurantPizzaRequest {
    /// Price between 1 and 30.
    pub price: i32,
    /// Existing pizza ID.
    pub pizza_id: i64,
    /// Existing restaurant ID.
    pub restaurant_id: i64,
}

/// Response from `POST /restaurant_pizzas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantPizzaCreated {
    /// Price entry ID.
    pub id: i64,
    /// The pizza being sold.
    pub pizza: PizzaSummary,
    /// Pizza ID.
    pub pizza_id: i64,
    /// Price.
    pub price: i32,
    /// The restaurant selling it.
    pub restaurant: RestaurantSummary,
    /// Restaurant ID.
    pub restaurant_id: i64,
}

// ============================================================================
// Errors
// ============================================================================

/// Body of a rejected write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorsBody {
    /// One message per failed rule.
    pub errors: Vec<String>,
}

/// Body of a not-found response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message.
    pub error: String,
}
