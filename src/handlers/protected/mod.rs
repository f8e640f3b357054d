use axum::response::Json;
use axum::Extension;
use serde_json::{json, Value};

use crate::middleware::Session;

/// GET /api/auth/whoami - echo the resolved session
///
/// Lets clients probe the session guard without touching the catalog. The
/// session is injected by `session_middleware`.
pub async fn whoami(Extension(session): Extension<Session>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "id": session.user_id,
            "email": session.email,
            "role": session.role,
            "is_admin": session.is_admin()
        }
    }))
}
