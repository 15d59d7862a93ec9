use axum::extract::{Path, Query, State};
use tracing::instrument;

use varsity_core::{ApiResponse, AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::ValidatedBody;

use super::model::{CreateUserDto, UpdateUserDto, User, UserFilterParams};
use super::service::UserService;

#[utoipa::path(
    post,
    path = "/api/v1/users/create-user",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created successfully", body = User),
        (status = 409, description = "User id already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<CreateUserDto>,
) -> Result<ApiResponse<User>, AppError> {
    let user =
        UserService::create_user(&state.db, dto, &state.config.default_user_password).await?;
    Ok(ApiResponse::ok("User created successfully", user))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(
        ("searchTerm" = Option<String>, Query, description = "Free-text search over user id and role"),
        ("role" = Option<String>, Query, description = "Filter by exact role"),
        ("needsPasswordChange" = Option<bool>, Query, description = "Filter by forced-password-change flag"),
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default desc)")
    ),
    responses(
        (status = 200, description = "Paginated list of users", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_all_users(
    State(state): State<AppState>,
    Query(filters): Query<UserFilterParams>,
) -> Result<ApiResponse<Vec<User>>, AppError> {
    let (users, meta) = UserService::get_all_users(&state.db, filters).await?;
    Ok(ApiResponse::paginated(
        "Users retrieved successfully",
        meta,
        users,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(
        ("id" = String, Path, description = "Business identifier of the user")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_single_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<User>, AppError> {
    let user = UserService::get_single_user(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(ApiResponse::ok("User retrieved successfully", user))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    params(
        ("id" = String, Path, description = "Business identifier of the user")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedBody(dto): ValidatedBody<UpdateUserDto>,
) -> Result<ApiResponse<User>, AppError> {
    let user = UserService::update_user(&state.db, &id, dto).await?;
    Ok(ApiResponse::ok("User updated successfully", user))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(
        ("id" = String, Path, description = "Business identifier of the user")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<User>, AppError> {
    let user = UserService::delete_user(&state.db, &id).await?;
    Ok(ApiResponse::ok("User deleted successfully", user))
}
