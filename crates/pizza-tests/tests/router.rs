//! Router tests.
//!
//! Requests are sent straight to the backend router with `tower::ServiceExt`,
//! backed by the in-memory store, so no running server is needed.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use pizza_restaurants_backend::api::create_router;
use pizza_restaurants_backend::db::{MemoryStore, NewPizza, NewRestaurant, RestaurantStore};
use pizza_restaurants_backend::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// Helpers
// ============================================================================

/// Builds the router over a store holding two restaurants and two pizzas.
///
/// The store handle is returned so tests can inspect rows directly.
async fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());

    for (name, address) in [("Karen's Pizza Shack", "address1"), ("Sanjay's Pizza", "address2")] {
        store
            .insert_restaurant(NewRestaurant {
                name: name.to_string(),
                address: address.to_string(),
            })
            .await
            .unwrap();
    }

    for (name, ingredients) in [
        ("Emma", "Dough, Tomato Sauce, Cheese"),
        ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ] {
        store
            .insert_pizza(NewPizza {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
            .await
            .unwrap();
    }

    let state = Arc::new(AppState::with_store(store.clone()));
    (create_router(state), store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ============================================================================
// Index & Health
// ============================================================================

#[tokio::test]
async fn test_index_banner() {
    let (app, _) = build_test_app().await;

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<h1>Code challenge</h1>");
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = build_test_app().await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

// ============================================================================
// GET /restaurants
// ============================================================================

#[tokio::test]
async fn test_list_restaurants_returns_summaries_only() {
    let (app, _) = build_test_app().await;
    post_json(
        &app,
        "/restaurant_pizzas",
        json!({"price": 5, "pizza_id": 1, "restaurant_id": 1}),
    )
    .await;

    let response = get(&app, "/restaurants").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"id": 1, "name": "Karen's Pizza Shack", "address": "address1"},
            {"id": 2, "name": "Sanjay's Pizza", "address": "address2"},
        ])
    );
}

// ============================================================================
// GET /restaurants/{id}
// ============================================================================

#[tokio::test]
async fn test_get_restaurant_detail() {
    let (app, _) = build_test_app().await;
    post_json(
        &app,
        "/restaurant_pizzas",
        json!({"price": 10, "pizza_id": 2, "restaurant_id": 1}),
    )
    .await;

    let response = get(&app, "/restaurants/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "id": 1,
            "name": "Karen's Pizza Shack",
            "address": "address1",
            "associations": [{
                "id": 1,
                "pizza": {
                    "id": 2,
                    "name": "Geri",
                    "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"
                },
                "pizza_id": 2,
                "price": 10,
                "restaurant_id": 1
            }]
        })
    );
}

#[tokio::test]
async fn test_get_nonexistent_restaurant_returns_404() {
    let (app, _) = build_test_app().await;

    let response = get(&app, "/restaurants/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Restaurant not found"})
    );
}

#[tokio::test]
async fn test_get_restaurant_with_non_integer_id_is_rejected() {
    let (app, _) = build_test_app().await;

    let response = get(&app, "/restaurants/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// DELETE /restaurants/{id}
// ============================================================================

#[tokio::test]
async fn test_delete_restaurant_cascades() {
    let (app, store) = build_test_app().await;
    for pizza_id in [1, 2] {
        let response = post_json(
            &app,
            "/restaurant_pizzas",
            json!({"price": 8, "pizza_id": pizza_id, "restaurant_id": 1}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    post_json(
        &app,
        "/restaurant_pizzas",
        json!({"price": 9, "pizza_id": 1, "restaurant_id": 2}),
    )
    .await;
    assert_eq!(store.restaurant_pizza_count(), 3);

    let response = delete(&app, "/restaurants/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = get(&app, "/restaurants/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(store.restaurant_pizza_count(), 1);
    let other = body_json(get(&app, "/restaurants/2").await).await;
    assert_eq!(other["associations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_nonexistent_restaurant_returns_404() {
    let (app, store) = build_test_app().await;
    post_json(
        &app,
        "/restaurant_pizzas",
        json!({"price": 8, "pizza_id": 1, "restaurant_id": 1}),
    )
    .await;

    let response = delete(&app, "/restaurants/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Restaurant not found"})
    );

    let restaurants = body_json(get(&app, "/restaurants").await).await;
    assert_eq!(restaurants.as_array().unwrap().len(), 2);
    assert_eq!(store.restaurant_pizza_count(), 1);
}

// ============================================================================
// GET /pizzas
// ============================================================================

#[tokio::test]
async fn test_list_pizzas() {
    let (app, _) = build_test_app().await;

    let response = get(&app, "/pizzas").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"id": 1, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"},
            {"id": 2, "name": "Geri", "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"},
        ])
    );
}

// ============================================================================
// POST /restaurant_pizzas
// ============================================================================

#[tokio::test]
async fn test_create_restaurant_pizza_returns_201() {
    let (app, store) = build_test_app().await;

    let response = post_json(
        &app,
        "/restaurant_pizzas",
        json!({"price": 5, "pizza_id": 1, "restaurant_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "id": 1,
            "pizza": {"id": 1, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"},
            "pizza_id": 1,
            "price": 5,
            "restaurant": {"id": 1, "name": "Karen's Pizza Shack", "address": "address1"},
            "restaurant_id": 1
        })
    );
    assert_eq!(store.restaurant_pizza_count(), 1);
}

#[tokio::test]
async fn test_every_price_in_range_is_stored() {
    let (app, store) = build_test_app().await;

    for price in 1..=30 {
        let response = post_json(
            &app,
            "/restaurant_pizzas",
            json!({"price": price, "pizza_id": 2, "restaurant_id": 2}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["price"], price);
    }

    assert_eq!(store.restaurant_pizza_count(), 30);
}

#[tokio::test]
async fn test_out_of_range_price_returns_400() {
    let (app, store) = build_test_app().await;

    for price in [json!(0), json!(31), json!(50), json!(-3)] {
        let response = post_json(
            &app,
            "/restaurant_pizzas",
            json!({"price": price, "pizza_id": 1, "restaurant_id": 1}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"errors": ["price must be between 1 and 30"]})
        );
    }

    assert_eq!(store.restaurant_pizza_count(), 0);
}

#[tokio::test]
async fn test_non_integer_price_returns_400() {
    let (app, store) = build_test_app().await;

    let response = post_json(
        &app,
        "/restaurant_pizzas",
        json!({"price": "cheap", "pizza_id": 1, "restaurant_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"errors": ["price must be an integer"]})
    );
    assert_eq!(store.restaurant_pizza_count(), 0);
}

#[tokio::test]
async fn test_missing_fields_are_all_reported() {
    let (app, _) = build_test_app().await;

    let response = post_json(&app, "/restaurant_pizzas", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"errors": [
            "price is required",
            "pizza_id is required",
            "restaurant_id is required"
        ]})
    );
}

#[tokio::test]
async fn test_unknown_pizza_returns_400() {
    let (app, store) = build_test_app().await;

    let response = post_json(
        &app,
        "/restaurant_pizzas",
        json!({"price": 5, "pizza_id": 999, "restaurant_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"errors": ["Invalid pizza_id or restaurant_id"]})
    );
    assert_eq!(store.restaurant_pizza_count(), 0);
}

#[tokio::test]
async fn test_unknown_restaurant_returns_400() {
    let (app, store) = build_test_app().await;

    let response = post_json(
        &app,
        "/restaurant_pizzas",
        json!({"price": 5, "pizza_id": 1, "restaurant_id": 999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["errors"].is_array());
    assert_eq!(store.restaurant_pizza_count(), 0);
}

#[tokio::test]
async fn test_malformed_json_returns_400_errors_shape() {
    let (app, store) = build_test_app().await;

    let response = send(
        &app,
        Method::POST,
        "/restaurant_pizzas",
        Some("{not json".to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    assert_eq!(store.restaurant_pizza_count(), 0);
}

#[tokio::test]
async fn test_created_entry_appears_in_restaurant_detail() {
    let (app, _) = build_test_app().await;

    post_json(
        &app,
        "/restaurant_pizzas",
        json!({"price": 10, "pizza_id": 1, "restaurant_id": 2}),
    )
    .await;

    let detail = body_json(get(&app, "/restaurants/2").await).await;
    let entries = detail["associations"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["pizza_id"], 1);
    assert_eq!(entries[0]["price"], 10);
    assert_eq!(entries[0]["pizza"]["name"], "Emma");
    assert_eq!(entries[0]["pizza"]["ingredients"], "Dough, Tomato Sauce, Cheese");
    assert!(entries[0].get("restaurant").is_none());
}

#[tokio::test]
async fn test_huge_integer_valued_price_is_out_of_range() {
    let (app, store) = build_test_app().await;

    for price in [json!(1e300), json!("99999999999999999999")] {
        let response = post_json(
            &app,
            "/restaurant_pizzas",
            json!({"price": price, "pizza_id": 1, "restaurant_id": 1}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"errors": ["price must be between 1 and 30"]})
        );
    }

    assert_eq!(store.restaurant_pizza_count(), 0);
}
