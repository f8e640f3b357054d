pub mod auth;

pub use auth::{require_admin_middleware, session_middleware, Session};
