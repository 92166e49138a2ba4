/// Auth service - registration, login and user lookup
///
/// Passwords are hashed outside the store lock; only the uniqueness check and
/// the insert are serialized. Tokens come from the shared crypto-core JWT
/// module, which must be initialized at startup.
use crate::error::{AppError, Result};
use crate::models::{AuthRequest, TokenResponse, User};
use crate::security::password;
use crate::store::UserStore;
use crypto_core::jwt;
use std::sync::Arc;
use validator::Validate;

#[derive(Clone)]
pub struct AuthService {
    users: Arc<UserStore>,
}

impl AuthService {
    pub fn new(users: Arc<UserStore>) -> Self {
        Self { users }
    }

    pub fn register(&self, req: AuthRequest) -> Result<(User, TokenResponse)> {
        req.validate()?;

        let username = req.username.trim();
        if username.is_empty() {
            return Err(AppError::ValidationError(
                "username must be 1-32 characters".to_string(),
            ));
        }

        let password_hash = password::hash_password(&req.password)?;
        let user = self.users.insert(username, password_hash)?;
        let token = jwt::generate_access_token(user.id, &user.username)?;

        Ok((user, TokenResponse { token }))
    }

    /// Unknown users and wrong passwords fail identically.
    pub fn login(&self, req: AuthRequest) -> Result<(User, TokenResponse)> {
        let invalid = || AppError::Unauthorized("invalid credentials".to_string());

        let user = self
            .users
            .get_by_username(req.username.trim())
            .map_err(|_| invalid())?;

        if !password::verify_password(&req.password, &user.password_hash)? {
            tracing::warn!(user_id = user.id, "login with wrong password");
            return Err(invalid());
        }

        let token = jwt::generate_access_token(user.id, &user.username)?;
        tracing::info!(user_id = user.id, "user logged in");
        Ok((user, TokenResponse { token }))
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<User> {
        Ok(self.users.get_by_username(username)?)
    }
}
