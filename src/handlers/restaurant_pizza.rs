use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use tracing::instrument;

use crate::error::ApiError;
use crate::models::{validate_price, NewRestaurantPizza};
use crate::store;
use crate::views::{ApiErrorsResponse, CreateRestaurantPizzaRequest, RestaurantPizzaCreated};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Menu entry created", body = RestaurantPizzaCreated),
        (status = 400, description = "Validation or persistence failure", body = ApiErrorsResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), ApiError> {
    validate_price(payload.price).map_err(|_| ApiError::Validation)?;

    let conn = &mut state.pool.get()?;
    let (association, pizza, restaurant) = store::create_restaurant_pizza(
        conn,
        NewRestaurantPizza {
            price: payload.price,
            pizza_id: payload.pizza_id,
            restaurant_id: payload.restaurant_id,
        },
    )?;

    Ok((
        StatusCode::CREATED,
        Json(RestaurantPizzaCreated::new(association, pizza, restaurant)),
    ))
}
