use axum::extract::State;
use tracing::instrument;

use varsity_core::{ApiResponse, AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::ValidatedBody;

use super::model::{LoginRequest, LoginResponse};
use super::service::AuthService;

/// Login with a business identifier and password, receiving an
/// access/refresh token pair.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Password is incorrect", body = ErrorResponse),
        (status = 404, description = "User does not exist", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<LoginRequest>,
) -> Result<ApiResponse<LoginResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.config.jwt).await?;
    Ok(ApiResponse::ok("User logged in successfully", response))
}
