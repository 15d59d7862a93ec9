use axum::extract::{Path, Query, State};
use tracing::instrument;

use varsity_core::{ApiResponse, AppError, ErrorResponse};

use crate::state::AppState;
use crate::validator::ValidatedBody;

use super::model::{CreateStudentDto, Student, StudentFilterParams, UpdateStudentDto};
use super::service::StudentService;

#[utoipa::path(
    post,
    path = "/api/v1/students/create-student",
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Student created successfully", body = Student),
        (status = 409, description = "Student id or email already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedBody(dto): ValidatedBody<CreateStudentDto>,
) -> Result<ApiResponse<Student>, AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;
    Ok(ApiResponse::ok("Student created successfully", student))
}

#[utoipa::path(
    get,
    path = "/api/v1/students",
    params(
        ("searchTerm" = Option<String>, Query, description = "Free-text search over id, email and name"),
        ("email" = Option<String>, Query, description = "Filter by exact email"),
        ("contactNo" = Option<String>, Query, description = "Filter by exact contact number"),
        ("page" = Option<i64>, Query, description = "Page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 10)"),
        ("sortBy" = Option<String>, Query, description = "Sort field (default createdAt)"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc (default desc)")
    ),
    responses(
        (status = 200, description = "Paginated list of students", body = [Student]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_all_students(
    State(state): State<AppState>,
    Query(filters): Query<StudentFilterParams>,
) -> Result<ApiResponse<Vec<Student>>, AppError> {
    let (students, meta) = StudentService::get_all_students(&state.db, filters).await?;
    Ok(ApiResponse::paginated(
        "Students retrieved successfully",
        meta,
        students,
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    params(
        ("id" = String, Path, description = "Business identifier of the student")
    ),
    responses(
        (status = 200, description = "Student details with expanded references", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_single_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Student>, AppError> {
    let student = StudentService::get_single_student(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found"))?;
    Ok(ApiResponse::ok("Student retrieved successfully", student))
}

#[utoipa::path(
    patch,
    path = "/api/v1/students/{id}",
    params(
        ("id" = String, Path, description = "Business identifier of the student")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedBody(dto): ValidatedBody<UpdateStudentDto>,
) -> Result<ApiResponse<Student>, AppError> {
    let student = StudentService::update_student(&state.db, &id, dto).await?;
    Ok(ApiResponse::ok("Student updated successfully", student))
}

#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    params(
        ("id" = String, Path, description = "Business identifier of the student")
    ),
    responses(
        (status = 200, description = "Student deleted successfully", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Student>, AppError> {
    let student = StudentService::delete_student(&state.db, &id).await?;
    Ok(ApiResponse::ok("Student deleted successfully", student))
}
