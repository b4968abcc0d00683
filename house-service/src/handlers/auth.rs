use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;

use crate::{
    dtos::{
        auth::{LoginRequest, LoginResponse, ProtectedResponse, RegisterRequest, UserResponse},
        MessageResponse,
    },
    middleware::AuthUser,
    startup::AppState,
    utils::ValidatedJson,
};

/// Register a new account.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.auth_service.register(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful".to_string(),
        }),
    ))
}

/// Diagnostic listing of every registered user. Returns stored records
/// verbatim, passwords included; not safe to expose publicly.
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.auth_service.list_users().await?;

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(users))
}

/// Login with email and password.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.auth_service.login(req).await?;

    Ok(Json(LoginResponse { token }))
}

/// Echo the decoded claims back to the caller. Reaching this handler at all
/// means the bearer token verified.
pub async fn protected(user: AuthUser) -> impl IntoResponse {
    let claims = user.0;

    Json(ProtectedResponse {
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
        message: "Access granted to protected route".to_string(),
    })
}
