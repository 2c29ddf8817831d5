//! Startup seeding of restaurants and pizzas.

use crate::config::SeedConfig;
use crate::db::{NewPizza, NewRestaurant, RestaurantStore, StoreError};
use tracing::info;

/// Inserts the configured restaurants and pizzas into an empty store.
///
/// Returns `false` without writing anything if the store already holds data.
///
/// # Errors
/// Returns the first storage failure.
pub async fn seed_if_empty(
    store: &dyn RestaurantStore,
    seed: &SeedConfig,
) -> Result<bool, StoreError> {
    if !store.is_empty().await? {
        info!("Store already populated, skipping seed");
        return Ok(false);
    }

    for restaurant in &seed.restaurants {
        store
            .insert_restaurant(NewRestaurant {
                name: restaurant.name.clone(),
                address: restaurant.address.clone(),
            })
            .await?;
    }

    for pizza in &seed.pizzas {
        store
            .insert_pizza(NewPizza {
                name: pizza.name.clone(),
                ingredients: pizza.ingredients.clone(),
            })
            .await?;
    }

    info!(
        restaurants = seed.restaurants.len(),
        pizzas = seed.pizzas.len(),
        "Seeded store"
    );

    Ok(true)
}
