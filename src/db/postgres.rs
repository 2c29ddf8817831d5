//! PostgreSQL-backed store.

use crate::db::schema::RestaurantPizzaRow;
use crate::db::{
    DatabasePool, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant,
    RestaurantPizza, RestaurantPizzaWithParents, RestaurantStore, RestaurantWithPizzas, StoreError,
};
use async_trait::async_trait;
use tracing::debug;

/// Store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    db: DatabasePool,
}

impl PgStore {
    /// Creates a store over an established pool.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantStore for PgStore {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants ORDER BY id",
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(restaurants)
    }

    async fn get_restaurant_with_pizzas(
        &self,
        id: i64,
    ) -> Result<Option<RestaurantWithPizzas>, StoreError> {
        let Some(restaurant) = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?
        else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, RestaurantPizzaRow>(
            r#"
            SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = $1
            ORDER BY rp.id
            "#,
        )
        .bind(id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(Some(RestaurantWithPizzas {
            restaurant,
            restaurant_pizzas: rows.into_iter().map(Into::into).collect(),
        }))
    }

    async fn delete_restaurant(&self, id: i64) -> Result<bool, StoreError> {
        let mut tx = self.db.pool().begin().await?;

        let removed = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        debug!(restaurant_id = id, removed, "Deleted restaurant");
        Ok(true)
    }

    async fn list_pizzas(&self) -> Result<Vec<Pizza>, StoreError> {
        let pizzas =
            sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
                .fetch_all(self.db.pool())
                .await?;

        Ok(pizzas)
    }

    async fn create_restaurant_pizza(
        &self,
        new: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaWithParents, StoreError> {
        // Dropping `tx` on any early return rolls the insert back.
        let mut tx = self.db.pool().begin().await?;

        let restaurant_pizza = sqlx::query_as::<_, RestaurantPizza>(
            r#"
            INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
            VALUES ($1, $2, $3)
            RETURNING id, price, pizza_id, restaurant_id
            "#,
        )
        .bind(new.price)
        .bind(new.pizza_id)
        .bind(new.restaurant_id)
        .fetch_one(&mut *tx)
        .await?;

        let pizza = sqlx::query_as::<_, Pizza>(
            "SELECT id, name, ingredients FROM pizzas WHERE id = $1",
        )
        .bind(restaurant_pizza.pizza_id)
        .fetch_one(&mut *tx)
        .await?;

        let restaurant = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = $1",
        )
        .bind(restaurant_pizza.restaurant_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(RestaurantPizzaWithParents {
            restaurant_pizza,
            pizza,
            restaurant,
        })
    }

    async fn insert_restaurant(&self, new: NewRestaurant) -> Result<Restaurant, StoreError> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name, address) VALUES ($1, $2) RETURNING id, name, address",
        )
        .bind(&new.name)
        .bind(&new.address)
        .fetch_one(self.db.pool())
        .await?;

        Ok(restaurant)
    }

    async fn insert_pizza(&self, new: NewPizza) -> Result<Pizza, StoreError> {
        let pizza = sqlx::query_as::<_, Pizza>(
            "INSERT INTO pizzas (name, ingredients) VALUES ($1, $2) RETURNING id, name, ingredients",
        )
        .bind(&new.name)
        .bind(&new.ingredients)
        .fetch_one(self.db.pool())
        .await?;

        Ok(pizza)
    }

    async fn is_empty(&self) -> Result<bool, StoreError> {
        let (any_rows,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM restaurants) OR EXISTS (SELECT 1 FROM pizzas)",
        )
        .fetch_one(self.db.pool())
        .await?;

        Ok(!any_rows)
    }
}
