// Shared test harness: an in-process router wired to a recording mock of the
// catalog provider, plus JWT helpers for minting sessions.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use serde_json::Value;
use uuid::Uuid;

use storefront_admin_api::auth::{generate_jwt, Claims, ADMIN_ROLE};
use storefront_admin_api::catalog::{CatalogError, CatalogProvider, Product, ProductSummary};
use storefront_admin_api::{app, AppState};

/// Catalog double. Records update calls and serves canned outcomes.
pub struct MockCatalog {
    pub update_calls: Mutex<Vec<(String, String)>>,
    update_outcome: Mutex<Result<Product, String>>,
    listing: Mutex<Result<Vec<ProductSummary>, String>>,
}

impl MockCatalog {
    /// Provider that confirms every update by echoing the requested pair.
    pub fn echoing(name: &str) -> Arc<Self> {
        let name = name.to_string();
        Arc::new(Self {
            update_calls: Mutex::new(Vec::new()),
            update_outcome: Mutex::new(Ok(Product {
                id: String::new(),
                name,
                tax_code: String::new(),
            })),
            listing: Mutex::new(Ok(Vec::new())),
        })
    }

    /// Provider that rejects every call with the given message.
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            update_calls: Mutex::new(Vec::new()),
            update_outcome: Mutex::new(Err(message.to_string())),
            listing: Mutex::new(Err(message.to_string())),
        })
    }

    pub fn with_products(self: Arc<Self>, products: Vec<ProductSummary>) -> Arc<Self> {
        *self.listing.lock().unwrap() = Ok(products);
        self
    }

    pub fn update_call_count(&self) -> usize {
        self.update_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn update_product_tax_code(
        &self,
        product_id: &str,
        tax_code: &str,
    ) -> Result<Product, CatalogError> {
        self.update_calls
            .lock()
            .unwrap()
            .push((product_id.to_string(), tax_code.to_string()));

        match &*self.update_outcome.lock().unwrap() {
            Ok(template) => Ok(Product {
                id: product_id.to_string(),
                name: template.name.clone(),
                tax_code: tax_code.to_string(),
            }),
            Err(msg) => Err(CatalogError::Provider(msg.clone())),
        }
    }

    async fn list_products(&self) -> Result<Vec<ProductSummary>, CatalogError> {
        match &*self.listing.lock().unwrap() {
            Ok(products) => Ok(products.clone()),
            Err(msg) => Err(CatalogError::Provider(msg.clone())),
        }
    }
}

pub fn test_app(catalog: Arc<MockCatalog>) -> Router {
    app(AppState::new(catalog))
}

pub fn token_with_role(role: &str) -> String {
    let claims = Claims::new(
        Uuid::new_v4(),
        format!("{}@example.com", role),
        role.to_string(),
    );
    generate_jwt(claims).expect("test token")
}

pub fn admin_token() -> String {
    token_with_role(ADMIN_ROLE)
}

pub fn member_token() -> String {
    token_with_role("member")
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).expect("request")
}

pub fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn body_json(response: axum::response::Response) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn sample_summary(id: &str, name: &str) -> ProductSummary {
    ProductSummary {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        images: vec![],
        default_price_id: Some("price_1".to_string()),
        unit_amount: Some(1999),
        currency: Some("usd".to_string()),
        metadata: HashMap::new(),
        tax_code: Some("txcd_99999999".to_string()),
    }
}
