/// Comment handlers - HTTP endpoints for comment operations
use crate::error::Result;
use crate::models::AddCommentRequest;
use crate::AppState;
use actix_middleware::UserId;
use actix_web::{web, HttpResponse};

/// Attach a comment to a post
pub async fn add_comment(
    state: web::Data<AppState>,
    post_id: web::Path<i64>,
    user_id: UserId,
    req: web::Json<AddCommentRequest>,
) -> Result<HttpResponse> {
    let comment = state
        .comments
        .add_comment(*post_id, user_id.0, req.into_inner())?;
    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment; only its author may do so
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    state
        .comments
        .delete_comment(post_id, comment_id, user_id.0)?;
    Ok(HttpResponse::NoContent().finish())
}
