pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

// Re-export routers for easier importing
pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::Pool;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::views::RestaurantSummary,
            crate::views::RestaurantDetail,
            crate::views::RestaurantPizzaSummary,
            crate::views::PizzaSummary,
            crate::views::CreateRestaurantPizzaRequest,
            crate::views::RestaurantPizzaCreated,
            crate::views::ApiErrorResponse,
            crate::views::ApiErrorsResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Restaurant menu endpoints")
    ),
    info(
        title = "Pizza Restaurants API",
        description = "CRUD API over restaurants, pizzas, and their menu prices",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

async fn home() -> Html<&'static str> {
    Html("<h1>Pizza Restaurants API</h1>")
}

pub fn app(pool: Pool) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(AppState { pool })
        .layer(CorsLayer::permissive())
}
