use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::infra::db::StatusReport;
use crate::state::AppState;

pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("Hello from Cardmarket Backend!"))
}

/// Always answers 200; the report body carries the up/down status so the
/// probe itself never turns into an HTTP failure.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let report = match &app_state.store {
        Some(store) => store.health().await,
        None => StatusReport::down("store not configured".to_string()),
    };
    Ok(HttpResponse::Ok().json(report))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
