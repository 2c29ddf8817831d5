//! Request and response models for the REST API.
//!
//! Each response type is a fixed field list. Nested entities never carry
//! their own price entry collections, so no view can recurse back into the
//! one that contains it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

// ============================================================================
// Restaurants
// ============================================================================

/// Restaurant without relations, used in list views and nested records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantSummary {
    /// Restaurant ID.
    pub id: i64,
    /// Restaurant name.
    pub name: String,
    /// Street address.
    pub address: String,
}

/// Restaurant with the pizzas it sells.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestaurantDetail {
    /// Restaurant ID.
    pub id: i64,
    /// Restaurant name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Price entries, without a link back to this restaurant.
    pub associations: Vec<RestaurantPizzaEntry>,
}

/// Price entry as nested inside a restaurant detail.
#[derive(Debug, Clone, Serialize, ToSchema)]
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

/// Pizza without relations, used in list views and nested records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PizzaSummary {
    /// Pizza ID.
    pub id: i64,
    /// Pizza name.
    pub name: String,
    /// Free-text ingredient list.
    pub ingredients: String,
}

// ============================================================================
// Restaurant Pizzas
// ============================================================================

/// Request to add a pizza to a restaurant's menu.
///
/// Fields are kept as raw JSON so that every rule can be checked and
/// reported together.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price between 1 and 30.
    #[schema(value_type = i32, example = 5)]
    pub price: Option<Value>,
    /// Existing pizza ID.
    #[schema(value_type = i64, example = 1)]
    pub pizza_id: Option<Value>,
    /// Existing restaurant ID.
    #[schema(value_type = i64, example = 1)]
    pub restaurant_id: Option<Value>,
}

/// Newly created price entry with both parents.
#[derive(Debug, Clone, Serialize, ToSchema)]
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
