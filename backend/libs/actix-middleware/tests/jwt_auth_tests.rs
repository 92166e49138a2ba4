use actix_middleware::{JwtAuthMiddleware, Logging, UserId};
use actix_web::dev::Service;
use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpMessage, HttpResponse};
use crypto_core::jwt;

/// Echoes the authenticated user id.
async fn whoami(user_id: UserId) -> HttpResponse {
    HttpResponse::Ok().body(user_id.0.to_string())
}

/// Reports whether a user id was resolved without requiring one.
async fn maybe(user_id: Option<UserId>) -> HttpResponse {
    match user_id {
        Some(id) => HttpResponse::Ok().body(format!("user:{}", id.0)),
        None => HttpResponse::Ok().body("anonymous"),
    }
}

fn bearer(user_id: i64) -> (&'static str, String) {
    let token = jwt::generate_access_token(user_id, "tester").expect("token");
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_required_mode_accepts_valid_token() {
    jwt::init_test_secret();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuthMiddleware::required())
            .route("/me", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(bearer(17))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "17");
}

#[actix_web::test]
async fn test_required_mode_rejects_missing_header() {
    jwt::init_test_secret();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuthMiddleware::required())
            .route("/me", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get().uri("/me").to_request();
    let err = app.call(req).await.err().expect("should be rejected");
    assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_required_mode_rejects_bad_scheme_and_token() {
    jwt::init_test_secret();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuthMiddleware::required())
            .route("/me", web::get().to(whoami)),
    )
    .await;

    for value in ["Basic dXNlcjpwYXNz", "Bearer not-a-token"] {
        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", value))
            .to_request();
        let err = app.call(req).await.err().expect("should be rejected");
        assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
    }
}

#[actix_web::test]
async fn test_optional_mode_lets_anonymous_through() {
    jwt::init_test_secret();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuthMiddleware::optional())
            .route("/maybe", web::get().to(maybe))
            .route("/me", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get().uri("/maybe").to_request();
    assert_eq!(test::call_and_read_body(&app, req).await, "anonymous");

    let req = test::TestRequest::get()
        .uri("/maybe")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    assert_eq!(test::call_and_read_body(&app, req).await, "anonymous");

    let req = test::TestRequest::get()
        .uri("/maybe")
        .insert_header(bearer(5))
        .to_request();
    assert_eq!(test::call_and_read_body(&app, req).await, "user:5");

    // The extractor is the gate for handlers that need an identity.
    let req = test::TestRequest::get().uri("/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_logging_passes_responses_through() {
    jwt::init_test_secret();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuthMiddleware::optional())
            .wrap(Logging)
            .route("/maybe", web::get().to(maybe)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/maybe")
        .insert_header(bearer(8))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_logging_tags_user_and_forwards_rejections() {
    jwt::init_test_secret();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuthMiddleware::required())
            .wrap(Logging)
            .route("/me", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header(bearer(12))
        .to_request();
    let resp = app.call(req).await.expect("authenticated request");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.request().extensions().get::<UserId>().copied(),
        Some(UserId(12))
    );

    let req = test::TestRequest::get().uri("/me").to_request();
    let err = app.call(req).await.err().expect("should be rejected");
    assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
}
