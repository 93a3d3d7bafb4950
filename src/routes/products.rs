use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::domain::crud;
use crate::domain::products::{Product, ProductDraft};
use crate::error::AppError;
use crate::infra::db::require_store;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

#[derive(Debug, Serialize)]
struct ProductResponse {
    product: Product,
}

async fn list_products(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    let products = crud::list::<Product>(store).await?;
    Ok(HttpResponse::Ok().json(ProductsResponse { products }))
}

async fn get_product(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    let product = crud::get_by_id::<Product>(store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ProductResponse { product }))
}

async fn create_product(
    app_state: web::Data<AppState>,
    body: web::Json<ProductDraft>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::create(store, &body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({"message": "product created"})))
}

async fn update_product(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<ProductDraft>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::update(store, path.into_inner(), &body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "product updated"})))
}

async fn delete_product(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::delete::<Product>(store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "product deleted"})))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("", web::get().to(list_products))
        .route("", web::post().to(create_product))
        .route("/{id}", web::get().to(get_product))
        .route("/{id}", web::put().to(update_product))
        .route("/{id}", web::delete().to(delete_product));
}
