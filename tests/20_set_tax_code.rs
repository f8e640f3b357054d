mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn admin_update_confirms_new_tax_code() -> Result<()> {
    let catalog = common::MockCatalog::echoing("Widget");
    let app = common::test_app(catalog.clone());

    let payload = json!({ "productId": "prod_123", "taxCode": "txcd_99999999" });
    let response = app
        .oneshot(common::post_json(
            "/api/products/set-tax-code",
            Some(&common::admin_token()),
            &payload,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await?;
    assert_eq!(
        body,
        json!({
            "success": true,
            "product": {
                "id": "prod_123",
                "name": "Widget",
                "tax_code": "txcd_99999999"
            }
        })
    );

    // Exactly one downstream call, identifiers passed through unchanged
    let calls = catalog.update_calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![("prod_123".to_string(), "txcd_99999999".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn empty_product_id_is_rejected_before_the_provider() -> Result<()> {
    let catalog = common::MockCatalog::echoing("Widget");
    let app = common::test_app(catalog.clone());

    let payload = json!({ "productId": "", "taxCode": "txcd_99999999" });
    let response = app
        .oneshot(common::post_json(
            "/api/products/set-tax-code",
            Some(&common::admin_token()),
            &payload,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await?;
    assert_eq!(body["error"], json!("Product ID and tax code are required"));
    assert_eq!(catalog.update_call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn missing_tax_code_is_rejected_before_the_provider() -> Result<()> {
    let catalog = common::MockCatalog::echoing("Widget");
    let app = common::test_app(catalog.clone());

    let payload = json!({ "productId": "prod_123" });
    let response = app
        .oneshot(common::post_json(
            "/api/products/set-tax-code",
            Some(&common::admin_token()),
            &payload,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await?;
    assert_eq!(body["error"], json!("Product ID and tax code are required"));
    assert_eq!(catalog.update_call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn whitespace_only_fields_are_rejected() -> Result<()> {
    let catalog = common::MockCatalog::echoing("Widget");
    let app = common::test_app(catalog.clone());

    let payload = json!({ "productId": "   ", "taxCode": "\t" });
    let response = app
        .oneshot(common::post_json(
            "/api/products/set-tax-code",
            Some(&common::admin_token()),
            &payload,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(catalog.update_call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn provider_failure_surfaces_downstream_message() -> Result<()> {
    let catalog = common::MockCatalog::failing("No such product: 'prod_404'");
    let app = common::test_app(catalog.clone());

    let payload = json!({ "productId": "prod_404", "taxCode": "txcd_99999999" });
    let response = app
        .oneshot(common::post_json(
            "/api/products/set-tax-code",
            Some(&common::admin_token()),
            &payload,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = common::body_json(response).await?;
    assert_eq!(body["error"], json!("No such product: 'prod_404'"));

    // Single attempt, no retry
    assert_eq!(catalog.update_call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn identifiers_are_forwarded_trimmed_but_otherwise_unmodified() -> Result<()> {
    let catalog = common::MockCatalog::echoing("Books");
    let app = common::test_app(catalog.clone());

    // Opaque identifiers: no local format rules beyond non-emptiness
    let payload = json!({ "productId": "anything-goes-here", "taxCode": "txcd_20030000" });
    let response = app
        .oneshot(common::post_json(
            "/api/products/set-tax-code",
            Some(&common::admin_token()),
            &payload,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let calls = catalog.update_calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![("anything-goes-here".to_string(), "txcd_20030000".to_string())]
    );
    Ok(())
}
