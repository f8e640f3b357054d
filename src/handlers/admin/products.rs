// handlers/admin/products.rs - POST /api/products/set-tax-code

use axum::extract::State;
use axum::response::Json;
use axum::Extension;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::Session;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTaxCodeRequest {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub tax_code: Option<String>,
}

/// POST /api/products/set-tax-code - set the tax classification on a product
///
/// Admin-only (enforced by the session and role guards in front of this
/// route). Both identifiers are opaque; they are forwarded to the catalog
/// provider unchanged, and the provider decides whether they are valid.
///
/// Expected Input:
/// ```json
/// { "productId": "prod_123", "taxCode": "txcd_99999999" }
/// ```
///
/// Expected Output (Success):
/// ```json
/// {
///   "success": true,
///   "product": { "id": "prod_123", "name": "Widget", "tax_code": "txcd_99999999" }
/// }
/// ```
///
/// Errors: 400 when either field is missing/empty, 500 when the provider or
/// its transport fails (single attempt, no retry).
pub async fn set_tax_code_post(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<SetTaxCodeRequest>,
) -> Result<Json<Value>, ApiError> {
    let (product_id, tax_code) = validate(&payload)?;

    tracing::info!(
        user_id = %session.user_id,
        product_id = %product_id,
        tax_code = %tax_code,
        "admin tax-code update"
    );

    let product = state
        .catalog
        .update_product_tax_code(product_id, tax_code)
        .await?;

    Ok(Json(json!({
        "success": true,
        "product": {
            "id": product.id,
            "name": product.name,
            "tax_code": product.tax_code
        }
    })))
}

/// Both fields must be present and non-empty after trimming. No further
/// format rules exist locally; the provider rejects invalid identifiers.
fn validate(payload: &SetTaxCodeRequest) -> Result<(&str, &str), ApiError> {
    let product_id = payload.product_id.as_deref().map(str::trim).unwrap_or("");
    let tax_code = payload.tax_code.as_deref().map(str::trim).unwrap_or("");

    if product_id.is_empty() || tax_code.is_empty() {
        return Err(ApiError::validation_error(
            "Product ID and tax code are required",
        ));
    }

    Ok((product_id, tax_code))
}
