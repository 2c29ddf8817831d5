//! OpenAPI documentation.

use crate::error::{ErrorResponse, ErrorsResponse};
use crate::models::{
    CreateRestaurantPizzaRequest, HealthResponse, PizzaSummary, RestaurantDetail,
    RestaurantPizzaCreated, RestaurantPizzaEntry, RestaurantSummary,
};
use utoipa::OpenApi;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health_check,
        crate::api::handlers::list_restaurants,
        crate::api::handlers::get_restaurant,
        crate::api::handlers::delete_restaurant,
        crate::api::handlers::list_pizzas,
        crate::api::handlers::create_restaurant_pizza,
    ),
    components(
        schemas(
            HealthResponse,
            RestaurantSummary,
            RestaurantDetail,
            RestaurantPizzaEntry,
            PizzaSummary,
            CreateRestaurantPizzaRequest,
            RestaurantPizzaCreated,
            ErrorResponse,
            ErrorsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Restaurants", description = "Restaurant listing, details and removal"),
        (name = "Pizzas", description = "Pizza catalogue"),
        (name = "Restaurant Pizzas", description = "Pizza prices per restaurant"),
    ),
    info(
        title = "Pizza Restaurants API",
        version = "0.1.0",
        description = "REST API for restaurants, pizzas and their prices",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;
