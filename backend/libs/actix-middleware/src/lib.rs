//! # Actix Middleware Library
//!
//! Unified middleware components for forum Actix services
//!
//! ## Modules
//! - `jwt_auth`: Bearer token authentication, resolves the acting user
//! - `logging`: Request/response logging via tracing

pub mod jwt_auth;
pub mod logging;

pub use jwt_auth::{AuthMode, JwtAuthMiddleware, UserId};
pub use logging::Logging;
