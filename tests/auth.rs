use storecenter_api::{
    error::AppError,
    middleware::auth::{AuthUser, decode_token, ensure_self_or_staff, ensure_staff, issue_token},
    models::UserRole,
    password::{hash_password, verify_password},
    routes::params::{Pagination, UnitQuery},
};
use uuid::Uuid;

fn set_jwt_secret() {
    // Every test writes the same value, so concurrent writers agree.
    unsafe { std::env::set_var("JWT_SECRET", "test-secret") };
}

#[test]
fn password_hash_round_trip() {
    let hash = hash_password("password").unwrap();
    assert!(hash.starts_with("$argon2"));
    assert!(verify_password("password", &hash).unwrap());
    assert!(!verify_password("wrong", &hash).unwrap());
}

#[test]
fn password_hashes_are_salted() {
    let first = hash_password("password").unwrap();
    let second = hash_password("password").unwrap();
    assert_ne!(first, second);
}

#[test]
fn unparsable_hash_is_an_internal_error() {
    let err = verify_password("password", "not-a-hash").unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
}

#[test]
fn hash_for_another_algorithm_is_an_internal_error() {
    // Well-formed PHC string, but not something argon2 can verify.
    let scrypt = "$scrypt$ln=1,r=8,p=1$c2FsdHNhbHQ$AAAAAAAAAAAAAAAAAAAAAA";
    let err = verify_password("password", scrypt).unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));
}

#[test]
fn token_carries_user_and_role() {
    set_jwt_secret();
    let user_id = Uuid::new_v4();
    let token = issue_token(user_id, UserRole::Employee).unwrap();

    let user = decode_token(&token).unwrap();
    assert_eq!(user.user_id, user_id);
    assert_eq!(user.role, UserRole::Employee);
}

#[test]
fn garbage_token_is_unauthorized() {
    set_jwt_secret();
    let err = decode_token("not.a.token").unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[test]
fn staff_checks() {
    let client = AuthUser {
        user_id: Uuid::new_v4(),
        role: UserRole::Client,
    };
    let employee = AuthUser {
        user_id: Uuid::new_v4(),
        role: UserRole::Employee,
    };

    assert!(matches!(ensure_staff(&client), Err(AppError::Forbidden)));
    assert!(ensure_staff(&employee).is_ok());

    assert!(ensure_self_or_staff(&client, client.user_id).is_ok());
    assert!(ensure_self_or_staff(&client, employee.user_id).is_err());
    assert!(ensure_self_or_staff(&employee, client.user_id).is_ok());
}

#[test]
fn roles_parse_from_their_names() {
    for role in UserRole::ALL {
        assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
    }
    assert!("root".parse::<UserRole>().is_err());
    assert!(UserRole::Admin.is_staff());
    assert!(!UserRole::Client.is_staff());
}

#[test]
fn pagination_defaults_and_clamps() {
    assert_eq!(Pagination::default().normalize(), (1, 20, 0));
    let p = Pagination {
        page: Some(3),
        per_page: Some(500),
    };
    assert_eq!(p.normalize(), (3, 100, 200));
    let p = Pagination {
        page: Some(-2),
        per_page: Some(0),
    };
    assert_eq!(p.normalize(), (1, 1, 0));
}

#[test]
fn huge_page_saturates_offset() {
    let query = UnitQuery {
        page: Some(i64::MAX),
        per_page: Some(100),
        ..Default::default()
    };
    let (page, per_page, offset) = query.pagination().normalize();
    assert_eq!(page, i64::MAX);
    assert_eq!(per_page, 100);
    assert_eq!(offset, i64::MAX);
}
