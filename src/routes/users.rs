use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::domain::crud;
use crate::domain::users::{User, UserDraft};
use crate::error::AppError;
use crate::infra::db::require_store;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct UsersResponse {
    users: Vec<User>,
}

#[derive(Debug, Serialize)]
struct UserResponse {
    user: User,
}

async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    let users = crud::list::<User>(store).await?;
    Ok(HttpResponse::Ok().json(UsersResponse { users }))
}

async fn get_user(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    let user = crud::get_by_id::<User>(store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse { user }))
}

async fn create_user(
    app_state: web::Data<AppState>,
    body: web::Json<UserDraft>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::create(store, &body.into_inner()).await?;
    Ok(HttpResponse::Created().json(json!({"message": "user created"})))
}

async fn update_user(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UserDraft>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::update(store, path.into_inner(), &body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "user updated"})))
}

async fn delete_user(
    app_state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let store = require_store(&app_state)?;
    crud::delete::<User>(store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "user deleted"})))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("", web::get().to(list_users))
        .route("", web::post().to(create_user))
        .route("/{id}", web::get().to(get_user))
        .route("/{id}", web::put().to(update_user))
        .route("/{id}", web::delete().to(delete_user));
}
