use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::store;
use crate::views::{ApiErrorResponse, RestaurantDetail, RestaurantSummary};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = Vec<RestaurantSummary>),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let conn = &mut state.pool.get()?;
    let restaurants = store::list_restaurants(conn)?;

    Ok(Json(
        restaurants.into_iter().map(RestaurantSummary::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(
        ("id" = i32, Path, description = "Restaurant id"),
    ),
    responses(
        (status = 200, description = "Restaurant with its menu", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let conn = &mut state.pool.get()?;
    let restaurant = store::find_restaurant(conn, id)?
        .ok_or(ApiError::NotFound("Restaurant not found"))?;
    let menu = store::menu_for_restaurant(conn, &restaurant)?;

    Ok(Json(RestaurantDetail::new(restaurant, menu)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(
        ("id" = i32, Path, description = "Restaurant id"),
    ),
    responses(
        (status = 204, description = "Restaurant and its menu deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let conn = &mut state.pool.get()?;
    let restaurant = store::find_restaurant(conn, id)?
        .ok_or(ApiError::NotFound("Restaurant not found"))?;
    store::delete_restaurant(conn, restaurant.id)?;

    Ok(StatusCode::NO_CONTENT)
}
