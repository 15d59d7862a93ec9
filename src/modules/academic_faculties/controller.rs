use axum::extract::{Path, Query, State};
use tracing::instrument;
use uuid::Uuid;

use varsity_core::{ApiResponse, AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::ValidatedBody;

use super::model::{
    AcademicFaculty, AcademicFacultyFilterParams, CreateAcademicFacultyDto,
    UpdateAcademicFacultyDto,
};
use super::service::AcademicFacultyService;

#[utoipa::path(
    post,
    path = "/api/v1/academic-faculties/create-faculty",
    request_body = CreateAcademicFacultyDto,
    responses(
        (status = 200, description = "Academic faculty created successfully", body = AcademicFaculty),
        (status = 409, description = "Title already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Faculties"
)]
#[instrument(skip(state))]
pub async fn create_academic_faculty(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<CreateAcademicFacultyDto>,
) -> Result<ApiResponse<AcademicFaculty>, AppError> {
    let faculty = AcademicFacultyService::create_academic_faculty(&state.db, dto).await?;
    Ok(ApiResponse::ok(
        "Academic faculty created successfully",
        faculty,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/academic-faculties",
    params(
        ("searchTerm" = Option<String>, Query, description = "Free-text search over title"),
        ("title" = Option<String>, Query, description = "Filter by exact title"),
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default desc)")
    ),
    responses(
        (status = 200, description = "Paginated list of academic faculties", body = [AcademicFaculty]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Faculties"
)]
#[instrument(skip(state))]
pub async fn get_all_academic_faculties(
    State(state): State<AppState>,
    Query(filters): Query<AcademicFacultyFilterParams>,
) -> Result<ApiResponse<Vec<AcademicFaculty>>, AppError> {
    let (faculties, meta) =
        AcademicFacultyService::get_all_academic_faculties(&state.db, filters).await?;
    Ok(ApiResponse::paginated(
        "Academic faculties retrieved successfully",
        meta,
        faculties,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/academic-faculties/{id}",
    params(
        ("id" = Uuid, Path, description = "Academic faculty ID")
    ),
    responses(
        (status = 200, description = "Academic faculty details", body = AcademicFaculty),
        (status = 404, description = "Academic faculty not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Faculties"
)]
#[instrument(skip(state))]
pub async fn get_single_academic_faculty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<AcademicFaculty>, AppError> {
    let faculty = AcademicFacultyService::get_single_academic_faculty(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Academic faculty not found"))?;
    Ok(ApiResponse::ok(
        "Academic faculty retrieved successfully",
        faculty,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/academic-faculties/{id}",
    params(
        ("id" = Uuid, Path, description = "Academic faculty ID")
    ),
    request_body = UpdateAcademicFacultyDto,
    responses(
        (status = 200, description = "Academic faculty updated successfully", body = AcademicFaculty),
        (status = 404, description = "Academic faculty not found", body = ErrorResponse),
        (status = 409, description = "Title already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Faculties"
)]
#[instrument(skip(state))]
pub async fn update_academic_faculty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedBody(dto): ValidatedBody<UpdateAcademicFacultyDto>,
) -> Result<ApiResponse<AcademicFaculty>, AppError> {
    let faculty = AcademicFacultyService::update_academic_faculty(&state.db, id, dto).await?;
    Ok(ApiResponse::ok(
        "Academic faculty updated successfully",
        faculty,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/academic-faculties/{id}",
    params(
        ("id" = Uuid, Path, description = "Academic faculty ID")
    ),
    responses(
        (status = 200, description = "Academic faculty deleted successfully", body = AcademicFaculty),
        (status = 404, description = "Academic faculty not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Faculties"
)]
#[instrument(skip(state))]
pub async fn delete_academic_faculty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<AcademicFaculty>, AppError> {
    let faculty = AcademicFacultyService::delete_academic_faculty(&state.db, id).await?;
    Ok(ApiResponse::ok(
        "Academic faculty deleted successfully",
        faculty,
    ))
}
