use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use diesel::r2d2::ConnectionManager;
use diesel_migrations::MigrationHarness;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use pizza_restaurants_service::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use pizza_restaurants_service::{handlers, store, ForeignKeyEnforcer, Pool, MIGRATIONS};

struct TestApp {
    pool: Pool,
    app: Router,
    restaurant_id: i32,
    pizza_id: i32,
}

/// In-memory database, one pooled connection so every request sees the same
/// tables, seeded with one restaurant and one pizza.
fn test_app() -> TestApp {
    let pool: Pool = diesel::r2d2::Pool::builder()
        .max_size(1)
        .connection_customizer(Box::new(ForeignKeyEnforcer))
        .build(ConnectionManager::new(":memory:"))
        .unwrap();

    let (restaurant_id, pizza_id) = {
        let conn = &mut pool.get().unwrap();
        conn.run_pending_migrations(MIGRATIONS).unwrap();
        let restaurant = store::insert_restaurant(
            conn,
            NewRestaurant {
                name: "Karen's Pizza Shack",
                address: "123 Main Street",
            },
        )
        .unwrap();
        let pizza = store::insert_pizza(
            conn,
            NewPizza {
                name: "Emma",
                ingredients: "Dough, Tomato Sauce, Cheese",
            },
        )
        .unwrap();
        (restaurant.id, pizza.id)
    };

    TestApp {
        app: handlers::app(pool.clone()),
        pool,
        restaurant_id,
        pizza_id,
    }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn list_restaurants_returns_shallow_rows() {
    let test = test_app();

    let (status, body) = get(&test.app, "/restaurants").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": test.restaurant_id,
            "name": "Karen's Pizza Shack",
            "address": "123 Main Street",
        }])
    );
}

#[tokio::test]
async fn list_pizzas_returns_exactly_the_shallow_fields() {
    let test = test_app();

    let (status, body) = get(&test.app, "/pizzas").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let row = rows[0].as_object().unwrap();
    assert_eq!(row.len(), 3);
    assert_eq!(row["id"], json!(test.pizza_id));
    assert_eq!(row["name"], json!("Emma"));
    assert_eq!(row["ingredients"], json!("Dough, Tomato Sauce, Cheese"));
}

#[tokio::test]
async fn get_restaurant_nests_menu_one_level_deep() {
    let test = test_app();
    {
        let conn = &mut test.pool.get().unwrap();
        store::create_restaurant_pizza(
            conn,
            NewRestaurantPizza {
                price: 7,
                pizza_id: test.pizza_id,
                restaurant_id: test.restaurant_id,
            },
        )
        .unwrap();
    }

    let (status, body) = get(&test.app, &format!("/restaurants/{}", test.restaurant_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(test.restaurant_id));
    assert_eq!(body["name"], json!("Karen's Pizza Shack"));
    assert_eq!(body["address"], json!("123 Main Street"));
    let menu = body["restaurant_pizzas"].as_array().unwrap();
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0]["price"], json!(7));
    assert_eq!(menu[0]["pizza_id"], json!(test.pizza_id));
    assert_eq!(menu[0]["restaurant_id"], json!(test.restaurant_id));
    assert_eq!(
        menu[0]["pizza"],
        json!({
            "id": test.pizza_id,
            "name": "Emma",
            "ingredients": "Dough, Tomato Sauce, Cheese",
        })
    );
    // The nested entry never carries the restaurant back-reference.
    assert!(menu[0].get("restaurant").is_none());
}

#[tokio::test]
async fn get_unknown_restaurant_is_404() {
    let test = test_app();

    let (status, body) = get(&test.app, "/restaurants/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Restaurant not found" }));
}

#[tokio::test]
async fn delete_restaurant_cascades_to_its_menu() {
    let test = test_app();
    let association_ids: Vec<i32> = {
        let conn = &mut test.pool.get().unwrap();
        let mut ids = Vec::new();
        for price in [5, 6] {
            let (association, _, _) = store::create_restaurant_pizza(
                conn,
                NewRestaurantPizza {
                    price,
                    pizza_id: test.pizza_id,
                    restaurant_id: test.restaurant_id,
                },
            )
            .unwrap();
            ids.push(association.id);
        }
        ids
    };

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/restaurants/{}", test.restaurant_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    {
        let conn = &mut test.pool.get().unwrap();
        for id in association_ids {
            assert_eq!(store::find_restaurant_pizza(conn, id).unwrap(), None);
        }
    }
    let (status, _) = get(&test.app, &format!("/restaurants/{}", test.restaurant_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_restaurant_is_404() {
    let test = test_app();

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/restaurants/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Restaurant not found" }));
}

#[tokio::test]
async fn create_restaurant_pizza_embeds_both_parents() {
    let test = test_app();

    let (status, body) = post_json(
        &test.app,
        "/restaurant_pizzas",
        json!({
            "price": 5,
            "pizza_id": test.pizza_id,
            "restaurant_id": test.restaurant_id,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], json!(5));
    assert_eq!(body["pizza_id"], json!(test.pizza_id));
    assert_eq!(body["restaurant_id"], json!(test.restaurant_id));
    assert_eq!(
        body["pizza"],
        json!({
            "id": test.pizza_id,
            "name": "Emma",
            "ingredients": "Dough, Tomato Sauce, Cheese",
        })
    );
    assert_eq!(
        body["restaurant"],
        json!({
            "id": test.restaurant_id,
            "name": "Karen's Pizza Shack",
            "address": "123 Main Street",
        })
    );
}

#[tokio::test]
async fn boundary_prices_persist_as_given() {
    let test = test_app();

    for price in [1, 30] {
        let (status, body) = post_json(
            &test.app,
            "/restaurant_pizzas",
            json!({
                "price": price,
                "pizza_id": test.pizza_id,
                "restaurant_id": test.restaurant_id,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["price"], json!(price));

        let conn = &mut test.pool.get().unwrap();
        let stored = store::find_restaurant_pizza(conn, body["id"].as_i64().unwrap() as i32)
            .unwrap()
            .unwrap();
        assert_eq!(stored.price, price);
    }
}

#[tokio::test]
async fn out_of_range_price_is_rejected_and_not_persisted() {
    let test = test_app();

    for price in [0, 31] {
        let (status, body) = post_json(
            &test.app,
            "/restaurant_pizzas",
            json!({
                "price": price,
                "pizza_id": test.pizza_id,
                "restaurant_id": test.restaurant_id,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": ["validation errors"] }));
    }

    let conn = &mut test.pool.get().unwrap();
    let restaurant = store::find_restaurant(conn, test.restaurant_id).unwrap().unwrap();
    assert!(store::menu_for_restaurant(conn, &restaurant).unwrap().is_empty());
}

#[tokio::test]
async fn unknown_foreign_keys_flatten_into_the_400_contract() {
    let test = test_app();

    let (status, body) = post_json(
        &test.app,
        "/restaurant_pizzas",
        json!({
            "price": 5,
            "pizza_id": 999,
            "restaurant_id": test.restaurant_id,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_string());

    let conn = &mut test.pool.get().unwrap();
    let restaurant = store::find_restaurant(conn, test.restaurant_id).unwrap().unwrap();
    assert!(store::menu_for_restaurant(conn, &restaurant).unwrap().is_empty());
}

#[tokio::test]
async fn home_route_serves_the_banner() {
    let test = test_app();

    let response = test
        .app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>Pizza Restaurants API</h1>");
}
