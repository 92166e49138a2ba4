/// Integration tests for crypto-core JWT functionality
///
/// Exercises the public surface the way services use it: one shared secret,
/// tokens minted on login and resolved back to a user id by the middleware.
use crypto_core::jwt::{
    generate_access_token, get_user_id_from_token, init_test_secret, initialize_jwt_secret,
    validate_token,
};

#[test]
fn test_roundtrip_user_id() {
    init_test_secret();

    for user_id in [1_i64, 2, 1_000_000] {
        let token = generate_access_token(user_id, "someone").expect("token");
        assert_eq!(get_user_id_from_token(&token).expect("user id"), user_id);
    }
}

#[test]
fn test_tokens_for_different_users_differ() {
    init_test_secret();

    let a = generate_access_token(1, "alice").unwrap();
    let b = generate_access_token(2, "bob").unwrap();
    assert_ne!(a, b);
    assert_eq!(validate_token(&b).unwrap().claims.username, "bob");
}

#[test]
fn test_empty_secret_rejected() {
    assert!(initialize_jwt_secret("").is_err());
    assert!(initialize_jwt_secret("   ").is_err());
}

#[test]
fn test_garbage_rejected() {
    init_test_secret();

    assert!(get_user_id_from_token("").is_err());
    assert!(get_user_id_from_token("not-a-jwt").is_err());
}
