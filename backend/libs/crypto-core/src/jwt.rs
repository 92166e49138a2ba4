/// Shared JWT module for forum services
///
/// Tokens are HS256-signed with a single shared secret. The secret is read
/// from the environment once at startup and is immutable afterwards.
///
/// ## Usage
///
/// Services must call `initialize_jwt_secret()` during startup before any JWT operations:
///
/// ```rust,no_run
/// use crypto_core::jwt;
///
/// let secret = std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY required");
/// jwt::initialize_jwt_secret(&secret).expect("Failed to initialize JWT secret");
///
/// let token = jwt::generate_access_token(1, "alice").unwrap();
/// assert_eq!(jwt::get_user_id_from_token(&token).unwrap(), 1);
/// ```
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 24;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

// ============================================================================
// Data Structures
// ============================================================================

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as decimal string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Username at issuance time
    pub username: String,
}

struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

// ============================================================================
// Key Storage
// ============================================================================

static JWT_KEYS: OnceCell<JwtKeys> = OnceCell::new();

/// Initialize the signing secret.
///
/// Can only be called once - subsequent calls return an error, as does an
/// empty secret.
pub fn initialize_jwt_secret(secret: &str) -> Result<()> {
    if secret.trim().is_empty() {
        return Err(anyhow!("JWT secret must not be empty"));
    }

    let keys = JwtKeys {
        encoding: EncodingKey::from_secret(secret.as_bytes()),
        decoding: DecodingKey::from_secret(secret.as_bytes()),
    };

    JWT_KEYS
        .set(keys)
        .map_err(|_| anyhow!("JWT secret already initialized"))
}

/// Whether `initialize_jwt_secret()` has completed.
pub fn is_initialized() -> bool {
    JWT_KEYS.get().is_some()
}

fn get_keys() -> Result<&'static JwtKeys> {
    JWT_KEYS.get().ok_or_else(|| {
        anyhow!("JWT secret not initialized. Call initialize_jwt_secret() during startup.")
    })
}

// ============================================================================
// Token Generation
// ============================================================================

/// Generate a new access token for `user_id`.
pub fn generate_access_token(user_id: i64, username: &str) -> Result<String> {
    let now = Utc::now();
    let expiry = now + Duration::hours(ACCESS_TOKEN_EXPIRY_HOURS);

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: expiry.timestamp(),
        username: username.to_string(),
    };

    encode(&Header::new(JWT_ALGORITHM), &claims, &get_keys()?.encoding)
        .map_err(|e| anyhow!("Failed to generate access token: {e}"))
}

// ============================================================================
// Token Validation
// ============================================================================

/// Validate and decode a JWT token
///
/// Verifies the HS256 signature and the expiration claim. The token must be
/// passed without the "Bearer " prefix.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.validate_exp = true;

    decode::<Claims>(token, &get_keys()?.decoding, &validation)
        .map_err(|e| anyhow!("Token validation failed: {e}"))
}

/// Extract user ID from a validated token
pub fn get_user_id_from_token(token: &str) -> Result<i64> {
    let token_data = validate_token(token)?;
    token_data
        .claims
        .sub
        .parse::<i64>()
        .map_err(|e| anyhow!("Invalid user ID format in token: {e}"))
}

/// Shared test secret. Test binaries across the workspace initialize the
/// global key with this value so tokens minted in one crate's tests validate
/// in another's.
pub const TEST_SECRET: &str = "forum-test-secret-do-not-use-in-production";

/// Initialize the global key with [`TEST_SECRET`], tolerating repeated calls.
pub fn init_test_secret() {
    if !is_initialized() {
        // A concurrent initializer may win the race; either way the secret is TEST_SECRET.
        let _ = initialize_jwt_secret(TEST_SECRET);
    }
}

// ============================================================================
// Tests
// ============================================================================
