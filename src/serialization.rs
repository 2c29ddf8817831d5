//! Conversion of stored records into response views.

use crate::db::{
    Pizza, Restaurant, RestaurantPizzaWithParents, RestaurantPizzaWithPizza, RestaurantWithPizzas,
};
use crate::models::{
    PizzaSummary, RestaurantDetail, RestaurantPizzaCreated, RestaurantPizzaEntry,
    RestaurantSummary,
};


/// Restaurant scalars only.
#[must_use]
pub fn serialize_restaurant_summary(restaurant: &Restaurant) -> RestaurantSummary {
    RestaurantSummary {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
    }
}

/// Pizza scalars only.
#[must_use]
pub fn serialize_pizza_summary(pizza: &Pizza) -> PizzaSummary {
    PizzaSummary {
        id: pizza.id,
        name: pizza.name.clone(),
        ingredients: pizza.ingredients.clone(),
    }
}

/// Price entry as seen from its restaurant: the pizza is nested, the
/// restaurant is only referenced by id.
#[must_use]
pub fn serialize_restaurant_pizza_from_restaurant(
    entry: &RestaurantPizzaWithPizza,
) -> RestaurantPizzaEntry {
    let rp = &entry.restaurant_pizza;
    RestaurantPizzaEntry {
        id: rp.id,
        pizza: serialize_pizza_summary(&entry.pizza),
        pizza_id: rp.pizza_id,
        price: rp.price,
        restaurant_id: rp.restaurant_id,
    }
}

/// Restaurant with its price entries.
#[must_use]
pub fn serialize_restaurant_detail(detail: &RestaurantWithPizzas) -> RestaurantDetail {
    let restaurant = &detail.restaurant;
    RestaurantDetail {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
        associations: detail
            .restaurant_pizzas
            .iter()
            .map(serialize_restaurant_pizza_from_restaurant)
            .collect(),
    }
}

/// Creation response: both parents nested as summaries.
#[must_use]
pub fn serialize_restaurant_pizza_created(
    created: &RestaurantPizzaWithParents,
) -> RestaurantPizzaCreated {
    let rp = &created.restaurant_pizza;
    RestaurantPizzaCreated {
        id: rp.id,
        pizza: serialize_pizza_summary(&created.pizza),
        pizza_id: rp.pizza_id,
        price: rp.price,
        restaurant: serialize_restaurant_summary(&created.restaurant),
        restaurant_id: rp.restaurant_id,
    }
}
