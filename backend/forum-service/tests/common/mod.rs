#![allow(dead_code)]

use actix_http::Request;
use actix_middleware::{JwtAuthMiddleware, Logging};
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use crypto_core::jwt;
use forum_service::{handlers, AppState};
use serde_json::{json, Value};

/// Build the service the same way the binary mounts it.
pub async fn init_app(
    state: web::Data<AppState>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    jwt::init_test_secret();

    test::init_service(
        App::new().app_data(state).wrap(Logging).service(
            web::scope("/api")
                .wrap(JwtAuthMiddleware::optional())
                .configure(handlers::configure),
        ),
    )
    .await
}

pub fn new_state() -> web::Data<AppState> {
    web::Data::new(AppState::new())
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

/// Register `username` and return its bearer token.
pub async fn register<S, B>(app: &S, username: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({ "username": username, "password": "password123" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(app, req).await;
    body["token"].as_str().expect("token in response").to_string()
}

/// Create a post as the holder of `token` and return its JSON.
pub async fn create_post<S, B>(app: &S, token: &str, payload: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(bearer(token))
        .set_json(payload)
        .to_request();
    test::call_and_read_body_json(app, req).await
}

pub async fn get<S, B>(app: &S, uri: &str, token: Option<&str>) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let mut req = test::TestRequest::get().uri(uri);
    if let Some(token) = token {
        req = req.insert_header(bearer(token));
    }
    test::call_service(app, req.to_request()).await
}
