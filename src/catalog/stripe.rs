// Stripe-backed CatalogProvider.
//
// Wire format follows the Stripe REST API: form-encoded writes, JSON reads,
// errors wrapped in `{ "error": { "message": ... } }`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::config::CatalogConfig;

use super::{CatalogError, CatalogProvider, Product, ProductSummary};

#[derive(Clone)]
pub struct StripeCatalog {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
    storefront_tax_code: String,
}

impl StripeCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
            storefront_tax_code: config.storefront_tax_code.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[async_trait]
impl CatalogProvider for StripeCatalog {
    async fn update_product_tax_code(
        &self,
        product_id: &str,
        tax_code: &str,
    ) -> Result<Product, CatalogError> {
        let response = self
            .client
            .post(self.url(&format!("/v1/products/{}", product_id)))
            .bearer_auth(&self.secret_key)
            .form(&[("tax_code", tax_code)])
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            return Err(provider_error(status.as_u16(), &body));
        }

        serde_json::from_value(body.clone()).map_err(|_| {
            CatalogError::UnexpectedResponse(format!("product payload missing fields: {}", body))
        })
    }

    async fn list_products(&self) -> Result<Vec<ProductSummary>, CatalogError> {
        let response = self
            .client
            .get(self.url("/v1/products"))
            .bearer_auth(&self.secret_key)
            .query(&[("active", "true"), ("expand[]", "data.default_price")])
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            return Err(provider_error(status.as_u16(), &body));
        }

        let raw: ProductListPayload = serde_json::from_value(body.clone()).map_err(|_| {
            CatalogError::UnexpectedResponse(format!("product list payload malformed: {}", body))
        })?;

        // The storefront only shows the configured tax classification
        Ok(raw
            .data
            .into_iter()
            .filter(|p| p.tax_code.as_deref() == Some(self.storefront_tax_code.as_str()))
            .map(ProductSummary::from)
            .collect())
    }
}

fn provider_error(status: u16, body: &Value) -> CatalogError {
    match body
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        Some(msg) => CatalogError::Provider(msg.to_string()),
        None => CatalogError::UnexpectedResponse(format!("provider returned status {}", status)),
    }
}

/// Raw `/v1/products` list item before price expansion is flattened.
#[derive(Debug, Deserialize)]
struct RawProduct {
    id: String,
    name: String,
    description: Option<String>,
    #[serde(default)]
    images: Vec<String>,
    default_price: Option<RawPrice>,
    #[serde(default)]
    metadata: HashMap<String, String>,
    tax_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPrice {
    id: String,
    unit_amount: Option<i64>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProductListPayload {
    #[serde(default)]
    data: Vec<RawProduct>,
}

impl From<RawProduct> for ProductSummary {
    fn from(raw: RawProduct) -> Self {
        let (default_price_id, unit_amount, currency) = match raw.default_price {
            Some(price) => (Some(price.id), price.unit_amount, price.currency),
            None => (None, None, None),
        };

        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            images: raw.images,
            default_price_id,
            unit_amount,
            currency,
            metadata: raw.metadata,
            tax_code: raw.tax_code,
        }
    }
}
