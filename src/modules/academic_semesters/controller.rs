use axum::extract::{Path, Query, State};
use tracing::instrument;
use uuid::Uuid;

use varsity_core::{ApiResponse, AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::ValidatedBody;

use super::model::{
    AcademicSemester, AcademicSemesterFilterParams, CreateAcademicSemesterDto,
    UpdateAcademicSemesterDto,
};
use super::service::AcademicSemesterService;

#[utoipa::path(
    post,
    path = "/api/v1/academic-semesters/create-semester",
    request_body = CreateAcademicSemesterDto,
    responses(
        (status = 200, description = "Academic semester created successfully", body = AcademicSemester),
        (status = 409, description = "Semester already exists for that year", body = ErrorResponse),
        (status = 422, description = "Validation error (including title/code mismatch)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Semesters"
)]
#[instrument(skip(state))]
pub async fn create_academic_semester(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<CreateAcademicSemesterDto>,
) -> Result<ApiResponse<AcademicSemester>, AppError> {
    let semester = AcademicSemesterService::create_academic_semester(&state.db, dto).await?;
    Ok(ApiResponse::ok(
        "Academic semester created successfully",
        semester,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/academic-semesters",
    params(
        ("searchTerm" = Option<String>, Query, description = "Free-text search over title, code and year"),
        ("title" = Option<String>, Query, description = "Filter by exact title"),
        ("code" = Option<String>, Query, description = "Filter by exact code"),
        ("year" = Option<i32>, Query, description = "Filter by exact year"),
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default desc)")
    ),
    responses(
        (status = 200, description = "Paginated list of academic semesters", body = [AcademicSemester]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Semesters"
)]
#[instrument(skip(state))]
pub async fn get_all_academic_semesters(
    State(state): State<AppState>,
    Query(filters): Query<AcademicSemesterFilterParams>,
) -> Result<ApiResponse<Vec<AcademicSemester>>, AppError> {
    let (semesters, meta) =
        AcademicSemesterService::get_all_academic_semesters(&state.db, filters).await?;
    Ok(ApiResponse::paginated(
        "Academic semesters retrieved successfully",
        meta,
        semesters,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/academic-semesters/{id}",
    params(
        ("id" = Uuid, Path, description = "Academic semester ID")
    ),
    responses(
        (status = 200, description = "Academic semester details", body = AcademicSemester),
        (status = 404, description = "Academic semester not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Semesters"
)]
#[instrument(skip(state))]
pub async fn get_single_academic_semester(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<AcademicSemester>, AppError> {
    let semester = AcademicSemesterService::get_single_academic_semester(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Academic semester not found"))?;
    Ok(ApiResponse::ok(
        "Academic semester retrieved successfully",
        semester,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/academic-semesters/{id}",
    params(
        ("id" = Uuid, Path, description = "Academic semester ID")
    ),
    request_body = UpdateAcademicSemesterDto,
    responses(
        (status = 200, description = "Academic semester updated successfully", body = AcademicSemester),
        (status = 404, description = "Academic semester not found", body = ErrorResponse),
        (status = 409, description = "Semester already exists for that year", body = ErrorResponse),
        (status = 422, description = "Validation error (including title/code mismatch)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Semesters"
)]
#[instrument(skip(state))]
pub async fn update_academic_semester(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedBody(dto): ValidatedBody<UpdateAcademicSemesterDto>,
) -> Result<ApiResponse<AcademicSemester>, AppError> {
    let semester = AcademicSemesterService::update_academic_semester(&state.db, id, dto).await?;
    Ok(ApiResponse::ok(
        "Academic semester updated successfully",
        semester,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/academic-semesters/{id}",
    params(
        ("id" = Uuid, Path, description = "Academic semester ID")
    ),
    responses(
        (status = 200, description = "Academic semester deleted successfully", body = AcademicSemester),
        (status = 404, description = "Academic semester not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Semesters"
)]
#[instrument(skip(state))]
pub async fn delete_academic_semester(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<AcademicSemester>, AppError> {
    let semester = AcademicSemesterService::delete_academic_semester(&state.db, id).await?;
    Ok(ApiResponse::ok(
        "Academic semester deleted successfully",
        semester,
    ))
}
