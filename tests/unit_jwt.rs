use varsity::utils::jwt::{create_token, verify_token};
use varsity_models::users::UserRole;

const SECRET: &str = "test_secret_key_for_testing_purposes";
const REFRESH_SECRET: &str = "test_refresh_secret_key_for_testing";

#[test]
fn test_create_token_success() {
    let result = create_token("S-00001", UserRole::Student, SECRET, 3600);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_create_token_all_roles() {
    for role in [UserRole::Admin, UserRole::Student, UserRole::Faculty] {
        let result = create_token("X-00001", role, SECRET, 3600);
        assert!(result.is_ok());
    }
}

#[test]
fn test_verify_token_round_trip() {
    let token = create_token("S-00001", UserRole::Student, SECRET, 3600).unwrap();
    let claims = verify_token(&token, SECRET).unwrap();

    assert_eq!(claims.id, "S-00001");
    assert_eq!(claims.role, UserRole::Student);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_access_and_refresh_tokens_are_distinct() {
    let access = create_token("S-00001", UserRole::Student, SECRET, 3600).unwrap();
    let refresh = create_token("S-00001", UserRole::Student, REFRESH_SECRET, 604_800).unwrap();

    assert_ne!(access, refresh);

    // Each token only verifies under its own secret.
    assert!(verify_token(&access, SECRET).is_ok());
    assert!(verify_token(&access, REFRESH_SECRET).is_err());
    assert!(verify_token(&refresh, REFRESH_SECRET).is_ok());
    assert!(verify_token(&refresh, SECRET).is_err());
}

#[test]
fn test_verify_token_invalid() {
    let result = verify_token("invalid.token.here", SECRET);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_expired() {
    let token = create_token("S-00001", UserRole::Student, SECRET, -3600).unwrap();
    let result = verify_token(&token, SECRET);

    assert!(result.is_err());
}
