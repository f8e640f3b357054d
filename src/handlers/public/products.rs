// handlers/public/products.rs - GET /api/products

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// GET /api/products - storefront product listing
///
/// Returns the active products carrying the storefront tax classification,
/// straight from the catalog provider. No local caching; the provider is the
/// source of truth.
///
/// Expected Output:
/// ```json
/// {
///   "success": true,
///   "products": [
///     {
///       "id": "prod_123",
///       "name": "Widget",
///       "description": "A widget",
///       "images": [],
///       "default_price_id": "price_1",
///       "unit_amount": 1999,
///       "currency": "usd",
///       "metadata": {},
///       "tax_code": "txcd_99999999"
///     }
///   ]
/// }
/// ```
pub async fn products_get(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let products = state.catalog.list_products().await?;

    Ok(Json(json!({
        "success": true,
        "products": products
    })))
}
