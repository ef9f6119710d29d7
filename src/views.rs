//! Response and request shapes, one struct per documented view. Nesting goes
//! exactly one level deep; a nested restaurant or pizza never carries its own
//! association list, so the shapes cannot recurse.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Pizza, Restaurant, RestaurantPizza};

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<Pizza> for PizzaSummary {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        }
    }
}

/// One menu entry of a restaurant, with the pizza embedded.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaSummary {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
}

impl From<(RestaurantPizza, Pizza)> for RestaurantPizzaSummary {
    fn from((association, pizza): (RestaurantPizza, Pizza)) -> Self {
        Self {
            id: association.id,
            price: association.price,
            pizza_id: association.pizza_id,
            restaurant_id: association.restaurant_id,
            pizza: pizza.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaSummary>,
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, menu: Vec<(RestaurantPizza, Pizza)>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: menu.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price in whole units, 1 to 30 inclusive
    pub price: i32,
    /// Id of an existing pizza
    pub pizza_id: i32,
    /// Id of an existing restaurant
    pub restaurant_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaCreated {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl RestaurantPizzaCreated {
    pub fn new(association: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        Self {
            id: association.id,
            price: association.price,
            pizza_id: association.pizza_id,
            restaurant_id: association.restaurant_id,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorsResponse {
    /// Error messages
    pub errors: Vec<String>,
}
