//! Handler behavior that does not need a database: a state built without a
//! store reports DB_UNAVAILABLE instead of panicking, and malformed ids or
//! bodies are rejected before any operation runs.

use actix_web::{test, web, App};
use cardmarket_backend::routes;
use cardmarket_backend::state::AppState;

macro_rules! storeless_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::without_store()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health_reports_down_without_store() {
    let app = storeless_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "down");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("store not configured"));
    assert!(body.get("open_connections").is_none());
}

#[actix_web::test]
async fn root_says_hello() {
    let app = storeless_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn entity_routes_report_db_unavailable() {
    let app = storeless_app!();

    for uri in ["/api/cards", "/api/products", "/api/orders", "/api/users"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500, "GET {uri}");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "DB_UNAVAILABLE", "GET {uri}");
    }
}

#[actix_web::test]
async fn non_numeric_id_is_a_bad_request() {
    let app = storeless_app!();

    for uri in ["/api/cards/not-a-number", "/api/orders/1.5", "/api/users/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        if uri.ends_with('/') {
            // No id segment at all falls through the route table.
            assert_eq!(resp.status().as_u16(), 404, "GET {uri}");
            continue;
        }
        assert_eq!(resp.status().as_u16(), 400, "GET {uri}");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_ID", "GET {uri}");
        assert_eq!(body["status"], 400, "GET {uri}");
    }
}

#[actix_web::test]
async fn non_numeric_id_is_a_bad_request_on_writes_too() {
    let app = storeless_app!();

    let req = test::TestRequest::delete()
        .uri("/api/products/not-a-number")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_ID");
}

#[actix_web::test]
async fn malformed_create_body_is_a_bad_request() {
    let app = storeless_app!();

    let req = test::TestRequest::post()
        .uri("/api/cards")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": 12}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}
