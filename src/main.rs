use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use cardmarket_backend::config::db::DbConfig;
use cardmarket_backend::infra::db::Store;
use cardmarket_backend::middleware::cors::cors_middleware;
use cardmarket_backend::routes;
use cardmarket_backend::state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker-compose env_file, or sourced manually for local dev).
    let host = std::env::var("CARDMARKET_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("CARDMARKET_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("CARDMARKET_PORT must be a valid port number");
            std::process::exit(1);
        });

    let db_config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid database configuration: {e}");
            std::process::exit(1);
        }
    };

    // The store handle is built here, once, and injected into every
    // handler through AppState; nothing else constructs a pool.
    let store = match Store::connect(&db_config).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("server=start host={} port={}", host, port);

    let data = web::Data::new(AppState::new(store.clone()));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    store.close().await;
    Ok(())
}
