//! In-process store used when no database is configured.

use crate::db::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
    RestaurantPizzaWithParents, RestaurantPizzaWithPizza, RestaurantStore, RestaurantWithPizzas,
    StoreError,
};
use crate::validation::{MAX_PRICE, MIN_PRICE};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;


#[derive(Debug, Default)]
struct Tables {
    restaurants: BTreeMap<i64, Restaurant>,
    pizzas: BTreeMap<i64, Pizza>,
    restaurant_pizzas: BTreeMap<i64, RestaurantPizza>,
    last_restaurant_id: i64,
    last_pizza_id: i64,
    last_restaurant_pizza_id: i64,
}

/// Store holding all rows in memory.
///
/// Each operation takes the lock once, so writes (including cascades) are
/// applied atomically and enforce the same constraints as the SQL schema.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of price entries currently stored.
    #[must_use]
    pub fn restaurant_pizza_count(&self) -> usize {
        self.tables.read().restaurant_pizzas.len()
    }
}

#[async_trait]
impl RestaurantStore for MemoryStore {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        Ok(self.tables.read().restaurants.values().cloned().collect())
    }

    async fn get_restaurant_with_pizzas(
        &self,
        id: i64,
    ) -> Result<Option<RestaurantWithPizzas>, StoreError> {
        let tables = self.tables.read();

        let Some(restaurant) = tables.restaurants.get(&id) else {
            return Ok(None);
        };

        let restaurant_pizzas = tables
            .restaurant_pizzas
            .values()
            .filter(|rp| rp.restaurant_id == id)
            .filter_map(|rp| {
                tables
                    .pizzas
                    .get(&rp.pizza_id)
                    .map(|pizza| RestaurantPizzaWithPizza {
                        restaurant_pizza: rp.clone(),
                        pizza: pizza.clone(),
                    })
            })
            .collect();

        Ok(Some(RestaurantWithPizzas {
            restaurant: restaurant.clone(),
            restaurant_pizzas,
        }))
    }

    async fn delete_restaurant(&self, id: i64) -> Result<bool, StoreError> {
        let mut tables = self.tables.write();

        if tables.restaurants.remove(&id).is_none() {
            return Ok(false);
        }

        tables
            .restaurant_pizzas
            .retain(|_, rp| rp.restaurant_id != id);

        Ok(true)
    }

    async fn list_pizzas(&self) -> Result<Vec<Pizza>, StoreError> {
        Ok(self.tables.read().pizzas.values().cloned().collect())
    }

    async fn create_restaurant_pizza(
        &self,
        new: NewRestaurantPizza,
    ) -> Result<RestaurantPizzaWithParents, StoreError> {
        let mut tables = self.tables.write();

        if !(MIN_PRICE..=MAX_PRICE).contains(&new.price) {
            return Err(StoreError::CheckViolation(format!(
                "price {} outside {MIN_PRICE}..={MAX_PRICE}",
                new.price
            )));
        }

        let pizza = tables.pizzas.get(&new.pizza_id).cloned().ok_or_else(|| {
            StoreError::ForeignKeyViolation(format!("pizza {} does not exist", new.pizza_id))
        })?;

        let restaurant = tables
            .restaurants
            .get(&new.restaurant_id)
            .cloned()
            .ok_or_else(|| {
                StoreError::ForeignKeyViolation(format!(
                    "restaurant {} does not exist",
                    new.restaurant_id
                ))
            })?;

        tables.last_restaurant_pizza_id += 1;
        let restaurant_pizza = RestaurantPizza {
            id: tables.last_restaurant_pizza_id,
            price: new.price,
            pizza_id: new.pizza_id,
            restaurant_id: new.restaurant_id,
        };
        tables
            .restaurant_pizzas
            .insert(restaurant_pizza.id, restaurant_pizza.clone());

        Ok(RestaurantPizzaWithParents {
            restaurant_pizza,
            pizza,
            restaurant,
        })
    }

    async fn insert_restaurant(&self, new: NewRestaurant) -> Result<Restaurant, StoreError> {
        let mut tables = self.tables.write();

        tables.last_restaurant_id += 1;
        let restaurant = Restaurant {
            id: tables.last_restaurant_id,
            name: new.name,
            address: new.address,
        };
        tables.restaurants.insert(restaurant.id, restaurant.clone());

        Ok(restaurant)
    }

    async fn insert_pizza(&self, new: NewPizza) -> Result<Pizza, StoreError> {
        let mut tables = self.tables.write();

        tables.last_pizza_id += 1;
        let pizza = Pizza {
            id: tables.last_pizza_id,
            name: new.name,
            ingredients: new.ingredients,
        };
        tables.pizzas.insert(pizza.id, pizza.clone());

        Ok(pizza)
    }

    async fn is_empty(&self) -> Result<bool, StoreError> {
        let tables = self.tables.read();
        Ok(tables.restaurants.is_empty() && tables.pizzas.is_empty())
    }
}
