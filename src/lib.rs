//! # Pizza Restaurants Backend - REST API Server
//!
//! A small REST API exposing restaurants, pizzas and the price each
//! restaurant charges for a pizza. Built with [Axum](https://crates.io/crates/axum)
//! for async HTTP handling, [sqlx](https://crates.io/crates/sqlx) for PostgreSQL
//! storage, and OpenAPI/Swagger documentation via
//! [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **Relational Storage**: Restaurants, pizzas and restaurant pizzas with
//!   foreign keys and cascading deletes, or an in-memory store when no
//!   database is configured.
//!
//! - **Validated Writes**: Prices must be integers between 1 and 30; every
//!   rejected write is rolled back before the response is sent.
//!
//! - **Cycle-Free Views**: Each response shape is a fixed field list, so a
//!   nested record never embeds the collection that points back at its parent.
//!
//! - **OpenAPI Documentation**: Swagger UI at `/swagger-ui/`.
//!
//! ## Data Model
//!
//! ```text
//! restaurants ──< restaurant_pizzas >── pizzas
//!                   price ∈ [1, 30]
//! ```
//!
//! Deleting a restaurant (or pizza) deletes every restaurant pizza that
//! references it.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers, router and OpenAPI document |
//! | [`config`] | TOML configuration with environment overrides |
//! | [`db`] | Schema types, store trait, PostgreSQL and in-memory stores |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request/response DTOs with OpenAPI schemas |
//! | [`seed`] | Startup seeding of an empty store |
//! | [`serialization`] | Stored records to response views |
//! | [`state`] | Application state management |
//! | [`validation`] | Price and foreign key checks |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/restaurants` | List restaurants (`id`, `name`, `address`) |
//! | GET | `/restaurants/{id}` | Restaurant with its pizzas and prices |
//! | DELETE | `/restaurants/{id}` | Delete restaurant and its prices |
//! | GET | `/pizzas` | List pizzas (`id`, `name`, `ingredients`) |
//! | POST | `/restaurant_pizzas` | Add a pizza to a restaurant at a price |
//!
//! ## Example Usage
//!
//! ### Starting the Server
//!
//! ```bash
//! # In-memory store seeded from config.toml
//! cargo run
//!
//! # PostgreSQL
//! DATABASE_URL=postgres://localhost/pizza_restaurants cargo run
//!
//! # With custom host/port
//! HOST=127.0.0.1 PORT=3000 cargo run
//! ```
//!
//! ### API Requests
//!
//! ```bash
//! curl http://localhost:5555/restaurants
//!
//! curl -X POST http://localhost:5555/restaurant_pizzas \
//!   -H "Content-Type: application/json" \
//!   -d '{"price": 5, "pizza_id": 1, "restaurant_id": 3}'
//!
//! curl -X DELETE http://localhost:5555/restaurants/3
//! ```
//!
//! ## Dependencies
//!
//! - **axum** (0.8): Async web framework
//! - **tower-http** (0.6): HTTP middleware (CORS, tracing)
//! - **sqlx** (0.8): PostgreSQL access and migrations
//! - **utoipa** (5.4): OpenAPI documentation generation
//! - **tokio** (1.49): Async runtime
//! - **serde** (1.0): Serialization/deserialization
//! - **tracing** (0.1): Structured logging

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod seed;
pub mod serialization;
pub mod state;
pub mod validation;
