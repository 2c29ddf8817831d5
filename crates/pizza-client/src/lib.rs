//! HTTP client library for the Pizza Restaurants API.
//!
//! This crate provides a typed HTTP client for the restaurant, pizza and
//! restaurant pizza endpoints.
//!
//! # Example
//!
//! ```no_run
//! use pizza_client::{ClientConfig, CreateRestaurantPizzaRequest, PizzaClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pizza_client::Error> {
//!     let client = PizzaClient::new(ClientConfig {
//!         base_url: "http://localhost:5555".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     for restaurant in client.list_restaurants().await? {
//!         println!("{}: {}", restaurant.id, restaurant.name);
//!     }
//!
//!     let created = client
//!         .create_restaurant_pizza(&CreateRestaurantPizzaRequest {
//!             price: 5,
//!             pizza_id: 1,
//!             restaurant_id: 1,
//!         })
//!         .await?;
//!     println!("{} now sells {}", created.restaurant.name, created.pizza.name);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, PizzaClient};
pub use error::Error;
pub use types::*;
