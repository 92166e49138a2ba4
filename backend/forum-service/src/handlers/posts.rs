/// Post handlers - HTTP endpoints for post operations
use crate::error::Result;
use crate::models::CreatePostRequest;
use crate::AppState;
use actix_middleware::UserId;
use actix_web::{web, HttpResponse};

/// Create a new post
pub async fn create_post(
    state: web::Data<AppState>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = state.posts.create_post(req.into_inner(), user_id.0)?;
    Ok(HttpResponse::Ok().json(post))
}

/// List all posts in creation order
pub async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.posts.get_all_posts())
}

pub async fn list_posts_by_category(
    state: web::Data<AppState>,
    category: web::Path<String>,
) -> HttpResponse {
    HttpResponse::Ok().json(state.posts.get_posts_by_category(&category))
}

/// Get a post by ID, including its comments
pub async fn get_post(state: web::Data<AppState>, post_id: web::Path<i64>) -> Result<HttpResponse> {
    let post = state.posts.get_post(*post_id)?;
    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post; only its author may do so
pub async fn delete_post(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    user_id: UserId,
) -> Result<HttpResponse> {
    state.posts.delete_post(*post_id, user_id.0)?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn upvote_post(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let post = state.posts.upvote_post(*post_id, user_id.0)?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn downvote_post(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let post = state.posts.downvote_post(*post_id, user_id.0)?;
    Ok(HttpResponse::Ok().json(post))
}

pub async fn unvote_post(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    user_id: UserId,
) -> Result<HttpResponse> {
    state.posts.unvote_post(*post_id, user_id.0)?;
    Ok(HttpResponse::Ok().finish())
}

/// Posts authored by the user with login `user_login`
/// GET /user/{user_login}
pub async fn get_user_posts(
    state: web::Data<AppState>,
    user_login: web::Path<String>,
) -> Result<HttpResponse> {
    let user = state.auth.get_user_by_username(&user_login)?;
    Ok(HttpResponse::Ok().json(state.posts.get_posts_by_user(user.id)))
}
