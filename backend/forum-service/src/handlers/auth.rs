/// Authentication handlers
///
/// Argon2 is CPU-heavy, so hashing and verification run on the blocking pool.
use crate::error::{AppError, Result};
use crate::models::AuthRequest;
use crate::AppState;
use actix_web::{web, HttpResponse};

/// Register endpoint handler
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<AuthRequest>,
) -> Result<HttpResponse> {
    let auth = state.auth.clone();
    let (_, token) = web::block(move || auth.register(payload.into_inner()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(token))
}

/// Login endpoint handler
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<AuthRequest>,
) -> Result<HttpResponse> {
    let auth = state.auth.clone();
    let (_, token) = web::block(move || auth.login(payload.into_inner()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(token))
}
