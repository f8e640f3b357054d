use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;

use catalog::CatalogProvider;
use middleware::{require_admin_middleware, session_middleware};

/// Shared application state: the catalog provider behind its trait seam so
/// tests can substitute a mock.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }
}

/// Build the full router. Routes are grouped by security tier; the admin
/// tier runs the session guard first, then the role guard.
pub fn app(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        .route("/api/products", get(handlers::public::products_get));

    let protected = Router::new()
        .route("/api/auth/whoami", get(handlers::protected::whoami))
        .route_layer(axum::middleware::from_fn(session_middleware));

    let admin = Router::new()
        .route(
            "/api/products/set-tax-code",
            post(handlers::admin::set_tax_code_post),
        )
        // route_layer is outermost-last: session resolves before the role check
        .route_layer(axum::middleware::from_fn(require_admin_middleware))
        .route_layer(axum::middleware::from_fn(session_middleware));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(admin)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
