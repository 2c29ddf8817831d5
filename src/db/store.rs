//! Storage abstraction shared by the request handlers.

use crate::db::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizzaWithParents,
    RestaurantWithPizzas,
};
use async_trait::async_trait;
use thiserror::Error;

/// PostgreSQL SQLSTATE for a foreign key violation.
pub(crate) const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL SQLSTATE for a check constraint violation.
pub(crate) const CHECK_VIOLATION: &str = "23514";

/// Storage error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced row does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A row failed a check constraint.
    #[error("check constraint violation: {0}")]
    CheckViolation(String),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            let detail = db_err
                .constraint()
                .map_or_else(|| db_err.message().to_string(), str::to_string);

            match db_err.code().as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => return StoreError::ForeignKeyViolation(detail),
                Some(CHECK_VIOLATION) => return StoreError::CheckViolation(detail),
                _ => {}
            }
        }

        StoreError::Database(err)
    }
}

/// Persistence operations for restaurants, pizzas and their prices.
///
/// Every write runs as a single atomic unit: either all of its effects are
/// stored, or none are.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// Lists every restaurant ordered by id.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError>;

    /// Loads a restaurant and its price entries, each joined with its pizza.
    async fn get_restaurant_with_pizzas(
        &self,
        id: i64,
    ) -> Result<Option<RestaurantWithPizzas>, StoreError>;

    /// Deletes a restaurant and every price entry that references it.
    ///
    /// Returns `false` when no restaurant has the given id.
    async fn delete_restaurant(&self, id: i64) -> Result<bool, StoreError>;

    /// Lists every pizza ordered by id.
    async fn list_pizzas(&self) -> Result<Vec<Pizza>, StoreError>;

    /// Creates a price entry and returns it joined with both parents.
    async fn create_restaurant_pizza(
        &self,
        new: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaWithParents, StoreError>;

    /// Inserts a restaurant.
    async fn insert_restaurant(&self, new: NewRestaurant) -> Result<Restaurant, StoreError>;

    /// Inserts a pizza.
    async fn insert_pizza(&self, new: NewPizza) -> Result<Pizza, StoreError>;

    /// Returns `true` when there are neither restaurants nor pizzas.
    async fn is_empty(&self) -> Result<bool, StoreError>;
}
