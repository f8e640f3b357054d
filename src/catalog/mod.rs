// External catalog/payments provider boundary.
//
// The provider owns the product records; this service only reads the listing
// and sets tax codes. Identifier validity (product ids, tax codes) is the
// provider's concern - nothing is validated locally beyond non-emptiness.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod stripe;

pub use stripe::StripeCatalog;

/// Normalized result of a tax-code update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(alias = "taxCode")]
    pub tax_code: String,
}

/// Product shape backing the storefront listing page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub default_price_id: Option<String>,
    pub unit_amount: Option<i64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub tax_code: Option<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The provider rejected the request and told us why.
    #[error("{0}")]
    Provider(String),

    /// The round trip itself failed (DNS, TLS, timeout, connection reset).
    #[error("catalog transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with something we could not interpret.
    #[error("unexpected catalog response: {0}")]
    UnexpectedResponse(String),
}

/// Catalog capabilities this service consumes. The Stripe implementation is
/// used in production; tests substitute a recording mock.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Set the tax classification code on a product. The identifiers are
    /// passed through unchanged; one mutating call, no retries.
    async fn update_product_tax_code(
        &self,
        product_id: &str,
        tax_code: &str,
    ) -> Result<Product, CatalogError>;

    /// List active products for the storefront page.
    async fn list_products(&self) -> Result<Vec<ProductSummary>, CatalogError>;
}
