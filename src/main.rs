use std::sync::Arc;

use storefront_admin_api::catalog::StripeCatalog;
use storefront_admin_api::{app, config, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up STRIPE_SECRET_KEY, AUTH_JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    let config = config::config();
    tracing_subscriber::fmt::init();
    tracing::info!("Starting Storefront Admin API in {:?} mode", config.environment);

    let catalog = StripeCatalog::new(&config.catalog)
        .unwrap_or_else(|e| panic!("failed to build catalog client: {}", e));

    let app = app(AppState::new(Arc::new(catalog)));

    // Allow deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Storefront Admin API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
