use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::domain::cards::{Card, CardDraft};
use crate::domain::crud;
use crate::error::AppError;
use crate::infra::db::require_store;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct CardsResponse {
    cards: Vec<Card>,
}

#[derive(Debug, Serialize)]
struct CardResponse {
    card: Card,
}

async fn list_cards(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    let cards = crud::list::<Card>(store).await?;
    Ok(HttpResponse::Ok().json(CardsResponse { cards }))
}

async fn get_card(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    let card = crud::get_by_id::<Card>(store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CardResponse { card }))
}

async fn create_card(
    app_state: web::Data<AppState>,
    body: web::Json<CardDraft>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::create(store, &body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({"message": "card created"})))
}

async fn update_card(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CardDraft>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::update(store, path.into_inner(), &body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "card updated"})))
}

async fn delete_card(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::delete::<Card>(store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "card deleted"})))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("", web::get().to(list_cards))
        .route("", web::post().to(create_card))
        .route("/{id}", web::get().to(get_card))
        .route("/{id}", web::put().to(update_card))
        .route("/{id}", web::delete().to(delete_card));
}
