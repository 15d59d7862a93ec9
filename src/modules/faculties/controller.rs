use axum::extract::{Path, Query, State};
use tracing::instrument;

use varsity_core::{ApiResponse, AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::ValidatedBody;

use super::model::{CreateFacultyDto, Faculty, FacultyFilterParams, UpdateFacultyDto};
use super::service::FacultyService;

#[utoipa::path(
    post,
    path = "/api/v1/faculties/create-faculty",
    request_body = CreateFacultyDto,
    responses(
        (status = 200, description = "Faculty created successfully", body = Faculty),
        (status = 409, description = "Faculty id or email already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Faculties"
)]
#[instrument(skip(state))]
pub async fn create_faculty(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<CreateFacultyDto>,
) -> Result<ApiResponse<Faculty>, AppError> {
    let faculty = FacultyService::create_faculty(&state.db, dto).await?;
    Ok(ApiResponse::ok("Faculty created successfully", faculty))
}

#[utoipa::path(
    get,
    path = "/api/v1/faculties",
    params(
        ("searchTerm" = Option<String>, Query, description = "Free-text search over id, email, name and designation"),
        ("email" = Option<String>, Query, description = "Filter by exact email"),
        ("contactNo" = Option<String>, Query, description = "Filter by exact contact number"),
        ("designation" = Option<String>, Query, description = "Filter by exact designation"),
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default desc)")
    ),
    responses(
        (status = 200, description = "Paginated list of faculties", body = [Faculty]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Faculties"
)]
#[instrument(skip(state))]
pub async fn get_all_faculties(
    State(state): State<AppState>,
    Query(filters): Query<FacultyFilterParams>,
) -> Result<ApiResponse<Vec<Faculty>>, AppError> {
    let (faculties, meta) = FacultyService::get_all_faculties(&state.db, filters).await?;
    Ok(ApiResponse::paginated(
        "Faculties retrieved successfully",
        meta,
        faculties,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/faculties/{id}",
    params(
        ("id" = String, Path, description = "Business identifier of the faculty member")
    ),
    responses(
        (status = 200, description = "Faculty details with expanded references", body = Faculty),
        (status = 404, description = "Faculty not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Faculties"
)]
#[instrument(skip(state))]
pub async fn get_single_faculty(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Faculty>, AppError> {
    let faculty = FacultyService::get_single_faculty(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Faculty not found"))?;
    Ok(ApiResponse::ok("Faculty retrieved successfully", faculty))
}

#[utoipa::path(
    patch,
    path = "/api/v1/faculties/{id}",
    params(
        ("id" = String, Path, description = "Business identifier of the faculty member")
    ),
    request_body = UpdateFacultyDto,
    responses(
        (status = 200, description = "Faculty updated successfully", body = Faculty),
        (status = 404, description = "Faculty not found", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Faculties"
)]
#[instrument(skip(state))]
pub async fn update_faculty(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedBody(dto): ValidatedBody<UpdateFacultyDto>,
) -> Result<ApiResponse<Faculty>, AppError> {
    let faculty = FacultyService::update_faculty(&state.db, &id, dto).await?;
    Ok(ApiResponse::ok("Faculty updated successfully", faculty))
}

#[utoipa::path(
    delete,
    path = "/api/v1/faculties/{id}",
    params(
        ("id" = String, Path, description = "Business identifier of the faculty member")
    ),
    responses(
        (status = 200, description = "Faculty deleted successfully", body = Faculty),
        (status = 404, description = "Faculty not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Faculties"
)]
#[instrument(skip(state))]
pub async fn delete_faculty(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Faculty>, AppError> {
    let faculty = FacultyService::delete_faculty(&state.db, &id).await?;
    Ok(ApiResponse::ok("Faculty deleted successfully", faculty))
}
