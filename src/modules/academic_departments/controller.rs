use axum::extract::{Path, Query, State};
use tracing::instrument;
use uuid::Uuid;

use varsity_core::{ApiResponse, AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::ValidatedBody;

use super::model::{
    AcademicDepartment, AcademicDepartmentFilterParams, CreateAcademicDepartmentDto,
    UpdateAcademicDepartmentDto,
};
use super::service::AcademicDepartmentService;

#[utoipa::path(
    post,
    path = "/api/v1/academic-departments/create-department",
    request_body = CreateAcademicDepartmentDto,
    responses(
        (status = 200, description = "Academic department created successfully", body = AcademicDepartment),
        (status = 409, description = "Title already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Departments"
)]
#[instrument(skip(state))]
pub async fn create_academic_department(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<CreateAcademicDepartmentDto>,
) -> Result<ApiResponse<AcademicDepartment>, AppError> {
    let department =
        AcademicDepartmentService::create_academic_department(&state.db, dto).await?;
    Ok(ApiResponse::ok(
        "Academic department created successfully",
        department,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/academic-departments",
    params(
        ("searchTerm" = Option<String>, Query, description = "Free-text search over title"),
        ("title" = Option<String>, Query, description = "Filter by exact title"),
        ("academicFacultyId" = Option<Uuid>, Query, description = "Filter by owning academic faculty"),
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default desc)")
    ),
    responses(
        (status = 200, description = "Paginated list of academic departments", body = [AcademicDepartment]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Departments"
)]
#[instrument(skip(state))]
pub async fn get_all_academic_departments(
    State(state): State<AppState>,
    Query(filters): Query<AcademicDepartmentFilterParams>,
) -> Result<ApiResponse<Vec<AcademicDepartment>>, AppError> {
    let (departments, meta) =
        AcademicDepartmentService::get_all_academic_departments(&state.db, filters).await?;
    Ok(ApiResponse::paginated(
        "Academic departments retrieved successfully",
        meta,
        departments,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/academic-departments/{id}",
    params(
        ("id" = Uuid, Path, description = "Academic department ID")
    ),
    responses(
        (status = 200, description = "Academic department details with expanded faculty", body = AcademicDepartment),
        (status = 404, description = "Academic department not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Departments"
)]
#[instrument(skip(state))]
pub async fn get_single_academic_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<AcademicDepartment>, AppError> {
    let department = AcademicDepartmentService::get_single_academic_department(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Academic department not found"))?;
    Ok(ApiResponse::ok(
        "Academic department retrieved successfully",
        department,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/academic-departments/{id}",
    params(
        ("id" = Uuid, Path, description = "Academic department ID")
    ),
    request_body = UpdateAcademicDepartmentDto,
    responses(
        (status = 200, description = "Academic department updated successfully", body = AcademicDepartment),
        (status = 404, description = "Academic department not found", body = ErrorResponse),
        (status = 409, description = "Title already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Departments"
)]
#[instrument(skip(state))]
pub async fn update_academic_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedBody(dto): ValidatedBody<UpdateAcademicDepartmentDto>,
) -> Result<ApiResponse<AcademicDepartment>, AppError> {
    let department =
        AcademicDepartmentService::update_academic_department(&state.db, id, dto).await?;
    Ok(ApiResponse::ok(
        "Academic department updated successfully",
        department,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/academic-departments/{id}",
    params(
        ("id" = Uuid, Path, description = "Academic department ID")
    ),
    responses(
        (status = 200, description = "Academic department deleted successfully", body = AcademicDepartment),
        (status = 404, description = "Academic department not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Academic Departments"
)]
#[instrument(skip(state))]
pub async fn delete_academic_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<AcademicDepartment>, AppError> {
    let department = AcademicDepartmentService::delete_academic_department(&state.db, id).await?;
    Ok(ApiResponse::ok(
        "Academic department deleted successfully",
        department,
    ))
}
