use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::domain::crud;
use crate::domain::orders::{Order, OrderDraft};
use crate::error::AppError;
use crate::infra::db::require_store;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct OrdersResponse {
    orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
struct OrderResponse {
    order: Order,
}

async fn list_orders(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    let orders = crud::list::<Order>(store).await?;
    Ok(HttpResponse::Ok().json(OrdersResponse { orders }))
}

async fn get_order(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    let order = crud::get_by_id::<Order>(store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(OrderResponse { order }))
}

async fn create_order(
    app_state: web::Data<AppState>,
    body: web::Json<OrderDraft>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::create(store, &body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({"message": "order created"})))
}

async fn update_order(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<OrderDraft>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::update(store, path.into_inner(), &body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "order updated"})))
}

async fn delete_order(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::delete::<Order>(store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "order deleted"})))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("", web::get().to(list_orders))
        .route("", web::post().to(create_order))
        .route("/{id}", web::get().to(get_order))
        .route("/{id}", web::put().to(update_order))
        .route("/{id}", web::delete().to(delete_order));
}
