/// HTTP handlers for forum endpoints
///
/// This module contains handlers for:
/// - Auth: Register and login, returning a bearer token
/// - Posts: Create, list, read, delete and vote on posts
/// - Comments: Attach comments to posts and delete them
///
/// `configure` mounts every route relative to the enclosing scope; the binary
/// mounts it under `/api` behind `JwtAuthMiddleware::optional()`.
pub mod auth;
pub mod comments;
pub mod posts;

use crate::error::AppError;
use actix_web::{web, HttpResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(path_config())
        .app_data(json_config())
        .route("/health", web::get().to(health))
        .route("/register", web::post().to(auth::register))
        .route("/login", web::post().to(auth::login))
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list_posts))
                .route(web::post().to(posts::create_post)),
        )
        .route(
            "/posts/{category}",
            web::get().to(posts::list_posts_by_category),
        )
        .service(
            web::resource("/post/{post_id}")
                .route(web::get().to(posts::get_post))
                .route(web::delete().to(posts::delete_post)),
        )
        .route("/post/{post_id}/upvote", web::get().to(posts::upvote_post))
        .route(
            "/post/{post_id}/downvote",
            web::get().to(posts::downvote_post),
        )
        .route("/post/{post_id}/unvote", web::get().to(posts::unvote_post))
        .route(
            "/post/{post_id}/comment",
            web::post().to(comments::add_comment),
        )
        .route(
            "/post/{post_id}/comment/{comment_id}",
            web::delete().to(comments::delete_comment),
        )
        .route("/user/{user_login}", web::get().to(posts::get_user_posts));
}

/// Non-numeric ids are a validation failure rather than a missing route.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(format!("invalid path: {err}")).into())
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(format!("invalid request body: {err}")).into())
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "forum-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
