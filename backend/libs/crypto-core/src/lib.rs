//! Shared token primitives for forum services.
//!
//! - `jwt`: HS256 access token issuance and validation

pub mod jwt;
