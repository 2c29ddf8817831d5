//! Database schema types.

use sqlx::FromRow;

/// Restaurant record from the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Restaurant {
    /// Unique identifier.
    pub id: i64,
    /// Restaurant name.
    pub name: String,
    /// Street address.
    pub address: String,
}

/// Pizza record from the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Pizza {
    /// Unique identifier.
    pub id: i64,
    /// Pizza name.
    pub name: String,
    /// Free-text ingredient list.
    pub ingredients: String,
}

/// Priced link between a restaurant and a pizza.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RestaurantPizza {
    /// Unique identifier.
    pub id: i64,
    /// Price, always within `1..=30`.
    pub price: i32,
    /// Referenced pizza.
    pub pizza_id: i64,
    /// Referenced restaurant.
    pub restaurant_id: i64,
}

/// A restaurant together with everything it sells.
#[derive(Debug, Clone)]
pub struct RestaurantWithPizzas {
    /// The restaurant itself.
    pub restaurant: Restaurant,
    /// Its price entries, ordered by id.
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

/// A price entry joined with its pizza.
#[derive(Debug, Clone)]
pub struct RestaurantPizzaWithPizza {
    /// The price entry.
    pub restaurant_pizza: RestaurantPizza,
    /// The pizza it points at.
    pub pizza: Pizza,
}

/// A price entry joined with both of its parents.
#[derive(Debug, Clone)]
pub struct RestaurantPizzaWithParents {
    /// The price entry.
    pub restaurant_pizza: RestaurantPizza,
    /// The pizza it points at.
    pub pizza: Pizza,
    /// The restaurant it points at.
    pub restaurant: Restaurant,
}

/// Values for a new restaurant row.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    /// Restaurant name.
    pub name: String,
    /// Street address.
    pub address: String,
}

/// Values for a new pizza row.
#[derive(Debug, Clone)]
pub struct NewPizza {
    /// Pizza name.
    pub name: String,
    /// Free-text ingredient list.
    pub ingredients: String,
}

/// Validated values for a new price entry.
///
/// Built by [`crate::validation`]; the foreign keys are not yet known to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    /// Price within `1..=30`.
    pub price: i32,
    /// Referenced pizza.
    pub pizza_id: i64,
    /// Referenced restaurant.
    pub restaurant_id: i64,
}

/// Joined row used by the restaurant detail query.
#[derive(Debug, FromRow)]
pub(crate) struct RestaurantPizzaRow {
    pub id: i64,
    pub price: i32,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza_name: String,
    pub pizza_ingredients: String,
}

impl From<RestaurantPizzaRow> for RestaurantPizzaWithPizza {
    fn from(row: RestaurantPizzaRow) -> Self {
        Self {
            restaurant_pizza: RestaurantPizza {
                id: row.id,
                price: row.price,
                pizza_id: row.pizza_id,
                restaurant_id: row.restaurant_id,
            },
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}
