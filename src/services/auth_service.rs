use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, SqlErr};
use sea_orm::ActiveValue::NotSet;
use uuid::Uuid;

use crate::{
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest},
    entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    middleware::auth::issue_token,
    models::{User, UserRole},
    password::{hash_password, verify_password},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Self-service sign-up always creates a client account.
pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<User>> {
    let RegisterRequest {
        username,
        email,
        phone_no,
        password,
    } = payload;

    let email = email.trim().to_lowercase();
    if username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".into()));
    }
    if !email.contains('@') {
        return Err(AppError::BadRequest("Email is invalid".into()));
    }
    if password.is_empty() {
        return Err(AppError::BadRequest("Password is required".into()));
    }

    let exist = Users::find()
        .filter(UserCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exist.is_some() {
        return Err(email_taken());
    }

    let user = UserActive {
        id: Set(Uuid::new_v4()),
        username: Set(username.trim().to_string()),
        email: Set(email),
        role: Set(UserRole::Client.as_str().to_string()),
        phone_no: Set(phone_no),
        password_hash: Set(hash_password(&password)?),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await
    .map_err(map_insert_error)?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(ApiResponse::success("User created", User::from(user), None))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    let user = Users::find()
        .filter(UserCol::Email.eq(email.trim().to_lowercase()))
        .one(&state.orm)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::BadRequest("Invalid email or password".into())),
    };

    if !verify_password(&password, &user.password_hash)? {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let role = user
        .role
        .parse::<UserRole>()
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
    let token = issue_token(user.id, role)?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(ApiResponse::success(
        "Logged in",
        LoginResponse {
            token: format!("Bearer {}", token),
        },
        Some(Meta::empty()),
    ))
}

fn email_taken() -> AppError {
    AppError::BadRequest("Email is already taken".to_string())
}

// A concurrent registration can pass the lookup above and still lose the
// race on the `users.email` unique index.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_taken(),
        _ => AppError::OrmError(err),
    }
}
