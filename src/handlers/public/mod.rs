pub mod products;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::{json, Value};

pub use products::products_get;

/// GET / - service banner
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Storefront Admin API",
            "version": version,
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "products": "/api/products (public - storefront listing)",
                "whoami": "/api/auth/whoami (protected)",
                "set_tax_code": "/api/products/set-tax-code (admin)",
            }
        }
    }))
}

/// GET /health - liveness check
pub async fn health() -> impl IntoResponse {
    let now = chrono::Utc::now();

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": {
                "status": "ok",
                "timestamp": now
            }
        })),
    )
}
