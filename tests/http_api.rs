//! Full-stack HTTP tests against a live Postgres: the same route table the
//! server mounts, driven through actix's test harness. Skipped when
//! CARDMARKET_TEST_DATABASE_URL is unset.

mod common;

use actix_web::{test, web, App};
use cardmarket_backend::routes;
use cardmarket_backend::state::AppState;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn cards_crud_over_http() {
    let Some(store) = common::test_store().await else {
        return;
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(store)))
            .configure(routes::configure),
    )
    .await;

    // Create
    let req = test::TestRequest::post()
        .uri("/api/cards")
        .set_json(serde_json::json!({
            "name": "Black Lotus",
            "image_url": "https://img.example.com/black-lotus.jpg",
            "description": "Adds three mana of any single color.",
            "set_name": "Alpha",
            "card_number": "232",
            "rarity": "Mythic Rare",
            "tcg_game_id": 1
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "card created");

    // List
    let req = test::TestRequest::get().uri("/api/cards").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["tcg_game"], "Magic: The Gathering");
    let id = cards[0]["card_id"].as_i64().unwrap();

    // Get by id
    let req = test::TestRequest::get()
        .uri(&format!("/api/cards/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["card"]["name"], "Black Lotus");
    assert!(body["card"].get("password").is_none());

    // Update (full replacement)
    let req = test::TestRequest::put()
        .uri(&format!("/api/cards/{id}"))
        .set_json(serde_json::json!({
            "name": "Black Lotus",
            "image_url": "https://img.example.com/black-lotus.jpg",
            "description": "Adds three mana of any single color.",
            "set_name": "Beta",
            "card_number": "233",
            "rarity": "Rare",
            "tcg_game_id": 1
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "card updated");

    let req = test::TestRequest::get()
        .uri(&format!("/api/cards/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["card"]["set_name"], "Beta");

    // Delete, then the id is gone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/cards/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/cards/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "CARD_NOT_FOUND");
}

#[tokio::test]
#[serial]
async fn update_of_missing_order_is_404_not_silent_success() {
    let Some(store) = common::test_store().await else {
        return;
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(store)))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/orders/424242")
        .set_json(serde_json::json!({
            "buyer_id": 1,
            "seller_id": 2,
            "product_id": 3,
            "quantity": 1,
            "shipping_address": "12 Main St",
            "shipping_cost": "4.50",
            "total_amount": "19.49",
            "status": "pending"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "ORDER_NOT_FOUND");
}

#[tokio::test]
#[serial]
async fn health_over_http_reports_up() {
    let Some(store) = common::test_store().await else {
        return;
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(store)))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "up");
    assert!(body["open_connections"].as_u64().unwrap() >= 1);
}
