//! HTTP client for the pizza restaurants API.

use crate::error::Error;
use crate::types::*;
use reqwest::{Client, StatusCode};
use std::time::Duration;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:5555").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5555".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the Pizza Restaurants API.
#[derive(Debug, Clone)]
pub struct PizzaClient {
    client: Client,
    base_url: String,
}

impl PizzaClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Restaurants
    // ========================================================================

    /// Lists all restaurants.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_restaurants(&self) -> Result<Vec<RestaurantSummary>, Error> {
        let url = format!("{}/restaurants", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a restaurant with its pizzas.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the restaurant does not exist.
    pub async fn get_restaurant(&self, id: i64) -> Result<RestaurantDetail, Error> {
        let url = format!("{}/restaurants/{}", self.base_url, id);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    /// Deletes a restaurant and its pizza prices.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the restaurant does not exist.
    pub async fn delete_restaurant(&self, id: i64) -> Result<(), Error> {
        let url = format!("{}/restaurants/{}", self.base_url, id);
        let resp = self.client.delete(&url).send().await?;
        self.handle_empty_response(resp).await
    }

    // ========================================================================
    // Pizzas
    // ========================================================================

    /// Lists all pizzas.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_pizzas(&self) -> Result<Vec<PizzaSummary>, Error> {
        let url = format!("{}/pizzas", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Restaurant Pizzas
    // ========================================================================

    /// Adds a pizza to a restaurant at a price.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the price or ids are rejected.
    pub async fn create_restaurant_pizza(
        &self,
        request: &CreateRestaurantPizzaRequest,
    ) -> Result<RestaurantPizzaCreated, Error> {
        let url = format!("{}/restaurant_pizzas", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    async fn handle_empty_response(&self, resp: reqwest::Response) -> Result<(), Error> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(resp).await)
        }
    }

    async fn error_from(resp: reqwest::Response) -> Error {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        error_from_body(status, &text)
    }
}

/// Classifies a non-success response body.
fn error_from_body(status: StatusCode, text: &str) -> Error {
    if status == StatusCode::NOT_FOUND {
        let message = serde_json::from_str::<ErrorBody>(text)
            .map(|body| body.error)
            .unwrap_or_else(|_| text.to_string());
        return Error::NotFound(message);
    }

    match serde_json::from_str::<ErrorsBody>(text) {
        Ok(body) => Error::Validation {
            status: status.as_u16(),
            errors: body.errors,
        },
        Err(_) => Error::Api {
            status: status.as_u16(),
            message: text.to_string(),
        },
    }
}
