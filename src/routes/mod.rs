use actix_web::web;

use crate::error::AppError;

pub mod cards;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

/// Route table shared by `main` and the test harness. Each handler invokes
/// exactly one data-access operation and translates its outcome into a
/// response; status mapping lives in `AppError`.
///
/// The path extractor would otherwise answer 404 for an id that does not
/// parse; an unparseable id is a malformed request, so it is remapped to a
/// problem+json 400 here.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::bad_request("INVALID_ID", err.to_string()).into()
    }));

    cfg.configure(health::configure_routes);

    cfg.service(web::scope("/api/cards").configure(cards::configure_routes));
    cfg.service(web::scope("/api/products").configure(products::configure_routes));
    cfg.service(web::scope("/api/orders").configure(orders::configure_routes));
    cfg.service(web::scope("/api/users").configure(users::configure_routes));
}
