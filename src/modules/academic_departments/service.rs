use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use varsity_core::{
    AppError, BindValue, ErrorMessage, ListQuery, PaginationMeta, calculate_pagination,
};
use varsity_models::academic_faculties::AcademicFaculty;

use super::model::{
    AcademicDepartment, AcademicDepartmentFilterParams, CreateAcademicDepartmentDto,
    UpdateAcademicDepartmentDto,
};

/// Joined SELECT expanding the owning academic faculty.
const DEPARTMENT_SELECT: &str = "SELECT \
    d.id, d.title, d.created_at, d.updated_at, \
    af.id AS af_id, af.title AS af_title, af.created_at AS af_created_at, af.updated_at AS af_updated_at \
    FROM academic_departments d \
    LEFT JOIN academic_faculties af ON af.id = d.academic_faculty_id";

/// Columns matched by the free-text search term.
const SEARCHABLE_COLUMNS: [&str; 1] = ["d.title"];

fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "title" => "d.title",
        "updatedAt" => "d.updated_at",
        _ => "d.created_at",
    }
}

#[derive(sqlx::FromRow)]
struct DepartmentRow {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    af_id: Option<Uuid>,
    af_title: Option<String>,
    af_created_at: Option<DateTime<Utc>>,
    af_updated_at: Option<DateTime<Utc>>,
}

impl From<DepartmentRow> for AcademicDepartment {
    fn from(row: DepartmentRow) -> Self {
        let academic_faculty = match (row.af_id, row.af_title, row.af_created_at, row.af_updated_at)
        {
            (Some(id), Some(title), Some(created_at), Some(updated_at)) => Some(AcademicFaculty {
                id,
                title,
                created_at,
                updated_at,
            }),
            _ => None,
        };

        AcademicDepartment {
            id: row.id,
            title: row.title,
            academic_faculty,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_write_error(e: sqlx::Error, title: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::conflict(format!(
                "Academic department with title {title} already exists"
            ));
        }
        if db_err.is_foreign_key_violation() {
            return AppError::validation(vec![ErrorMessage::new(
                "academicFacultyId",
                "Referenced academic faculty does not exist",
            )]);
        }
    }
    AppError::from(e)
}

pub struct AcademicDepartmentService;

impl AcademicDepartmentService {
    #[instrument(skip(db))]
    pub async fn create_academic_department(
        db: &PgPool,
        dto: CreateAcademicDepartmentDto,
    ) -> Result<AcademicDepartment, AppError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO academic_departments (title, academic_faculty_id) \
             VALUES ($1, $2) RETURNING id",
        )
        .bind(&dto.title)
        .bind(dto.academic_faculty_id)
        .fetch_one(db)
        .await
        .map_err(|e| map_write_error(e, &dto.title))?;

        Self::get_single_academic_department(db, id)
            .await?
            .ok_or_else(|| {
                AppError::internal(anyhow::anyhow!("Academic department {id} missing after insert"))
            })
    }

    #[instrument(skip(db, filters))]
    pub async fn get_all_academic_departments(
        db: &PgPool,
        filters: AcademicDepartmentFilterParams,
    ) -> Result<(Vec<AcademicDepartment>, PaginationMeta), AppError> {
        let pagination = calculate_pagination(&filters.pagination);

        let mut query = ListQuery::new();
        if let Some(term) = &filters.search_term {
            query.search(term, &SEARCHABLE_COLUMNS);
        }
        if let Some(title) = &filters.title {
            query.eq_text("d.title", title);
        }
        if let Some(academic_faculty_id) = filters.academic_faculty_id {
            query.eq_uuid("d.academic_faculty_id", academic_faculty_id);
        }
        let where_sql = query.where_sql();

        let count_sql_str = format!("SELECT COUNT(*) FROM academic_departments d{where_sql}");
        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_sql_str);
        for param in query.params() {
            count_sql = match param {
                BindValue::Text(v) => count_sql.bind(v.clone()),
                BindValue::Int(v) => count_sql.bind(*v),
                BindValue::Bool(v) => count_sql.bind(*v),
                BindValue::Uuid(v) => count_sql.bind(*v),
            };
        }

        let data_sql_str = format!(
            "{DEPARTMENT_SELECT}{where_sql} ORDER BY {} {} LIMIT {} OFFSET {}",
            sort_column(&pagination.sort_by),
            pagination.sort_order.as_sql(),
            pagination.limit,
            pagination.skip,
        );
        let mut data_sql = sqlx::query_as::<_, DepartmentRow>(&data_sql_str);
        for param in query.params() {
            data_sql = match param {
                BindValue::Text(v) => data_sql.bind(v.clone()),
                BindValue::Int(v) => data_sql.bind(*v),
                BindValue::Bool(v) => data_sql.bind(*v),
                BindValue::Uuid(v) => data_sql.bind(*v),
            };
        }

        let (total, rows) = tokio::try_join!(count_sql.fetch_one(db), data_sql.fetch_all(db))
            .map_err(AppError::from)?;

        let departments = rows.into_iter().map(AcademicDepartment::from).collect();

        Ok((
            departments,
            PaginationMeta {
                page: pagination.page,
                limit: pagination.limit,
                total,
            },
        ))
    }

    #[instrument(skip(db))]
    pub async fn get_single_academic_department(
        db: &PgPool,
        id: Uuid,
    ) -> Result<Option<AcademicDepartment>, AppError> {
        let sql = format!("{DEPARTMENT_SELECT} WHERE d.id = $1");
        let row = sqlx::query_as::<_, DepartmentRow>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(row.map(AcademicDepartment::from))
    }

    #[instrument(skip(db))]
    pub async fn update_academic_department(
        db: &PgPool,
        id: Uuid,
        dto: UpdateAcademicDepartmentDto,
    ) -> Result<AcademicDepartment, AppError> {
        let existing = Self::get_single_academic_department(db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Academic department not found"))?;

        let title = dto.title.unwrap_or(existing.title);
        let academic_faculty_id = dto
            .academic_faculty_id
            .or_else(|| existing.academic_faculty.as_ref().map(|f| f.id));

        sqlx::query(
            "UPDATE academic_departments SET title = $1, academic_faculty_id = $2, updated_at = NOW() \
             WHERE id = $3",
        )
        .bind(&title)
        .bind(academic_faculty_id)
        .bind(id)
        .execute(db)
        .await
        .map_err(|e| map_write_error(e, &title))?;

        Self::get_single_academic_department(db, id)
            .await?
            .ok_or_else(|| {
                AppError::internal(anyhow::anyhow!("Academic department {id} missing after update"))
            })
    }

    #[instrument(skip(db))]
    pub async fn delete_academic_department(
        db: &PgPool,
        id: Uuid,
    ) -> Result<AcademicDepartment, AppError> {
        let department = Self::get_single_academic_department(db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Academic department not found"))?;

        sqlx::query("DELETE FROM academic_departments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_mapping() {
        assert_eq!(sort_column("title"), "d.title");
        assert_eq!(sort_column("createdAt"), "d.created_at");
    }

    #[test]
    fn test_row_without_faculty_maps_to_none() {
        let now = Utc::now();
        let row = DepartmentRow {
            id: Uuid::new_v4(),
            title: "Computer Science".to_string(),
            created_at: now,
            updated_at: now,
            af_id: None,
            af_title: None,
            af_created_at: None,
            af_updated_at: None,
        };
        let department = AcademicDepartment::from(row);
        assert!(department.academic_faculty.is_none());
    }
}
