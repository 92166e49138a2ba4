mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{bearer, init_app, new_state, register};
use crypto_core::jwt;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_register_returns_token_for_new_user() {
    let app = init_app(new_state()).await;

    let token = register(&app, "alice").await;
    assert_eq!(jwt::get_user_id_from_token(&token).unwrap(), 1);

    let second = register(&app, "bob").await;
    assert_eq!(jwt::get_user_id_from_token(&second).unwrap(), 2);
}

#[actix_web::test]
async fn test_register_duplicate_username_is_rejected() {
    let app = init_app(new_state()).await;
    register(&app, "alice").await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({ "username": "alice", "password": "another-pass" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("username already exists"));
}

#[actix_web::test]
async fn test_register_validates_payload() {
    let app = init_app(new_state()).await;

    for payload in [
        json!({ "username": "", "password": "password123" }),
        json!({ "username": "alice", "password": "short" }),
        json!({ "username": "x".repeat(33), "password": "password123" }),
        json!({ "username": "alice" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn test_login_with_valid_and_invalid_credentials() {
    let app = init_app(new_state()).await;
    register(&app, "alice").await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "alice", "password": "password123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    assert_eq!(jwt::get_user_id_from_token(token).unwrap(), 1);

    for (username, password) in [("alice", "wrong-password"), ("nobody", "password123")] {
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = init_app(new_state()).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_protected_route_rejects_missing_or_invalid_token() {
    let app = init_app(new_state()).await;
    let payload = json!({ "title": "hello", "category": "music" });

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(payload.clone())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(bearer("not-a-token"))
        .set_json(payload)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_health() {
    let app = init_app(new_state()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "forum-service");
}
