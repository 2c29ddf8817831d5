//! Integration tests for the Pizza Restaurants API.
//!
//! These tests require the API server to be running with its seed data and
//! are ignored by default. Configure the server URL via the `API_BASE_URL`
//! environment variable (default: `http://localhost:5555`) and run them with
//! `cargo test -p pizza-tests -- --ignored`.

use pizza_client::{ClientConfig, PizzaClient, PizzaSummary, RestaurantSummary};
use std::time::Duration;

/// Gets the API base URL from environment or uses default.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5555".to_string())
}

/// Creates a test client configured for the API.
///
/// # Errors
/// Returns error if client creation fails.
pub fn create_test_client() -> Result<PizzaClient, pizza_client::Error> {
    PizzaClient::new(ClientConfig {
        base_url: get_api_url(),
        timeout: Duration::from_secs(10),
    })
}

/// Returns some restaurant and some pizza from the running server.
///
/// # Errors
/// Returns error if either list cannot be fetched.
///
/// # Panics
/// Panics if the server has no restaurants or no pizzas.
pub async fn any_restaurant_and_pizza(
    client: &PizzaClient,
) -> Result<(RestaurantSummary, PizzaSummary), pizza_client::Error> {
    let restaurant = client
        .list_restaurants()
        .await?
        .pop()
        .expect("server should have at least one restaurant");
    let pizza = client
        .list_pizzas()
        .await?
        .pop()
        .expect("server should have at least one pizza");
    Ok((restaurant, pizza))
}

/// Returns an id no restaurant on the server uses.
///
/// # Errors
/// Returns error if the restaurant list cannot be fetched.
pub async fn unused_restaurant_id(client: &PizzaClient) -> Result<i64, pizza_client::Error> {
    let max = client
        .list_restaurants()
        .await?
        .iter()
        .map(|r| r.id)
        .max()
        .unwrap_or(0);
    Ok(max + 1_000_000)
}
