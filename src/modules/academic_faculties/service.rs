use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use varsity_core::{AppError, BindValue, ListQuery, PaginationMeta, calculate_pagination};

use super::model::{
    AcademicFaculty, AcademicFacultyFilterParams, CreateAcademicFacultyDto,
    UpdateAcademicFacultyDto,
};

const ACADEMIC_FACULTY_COLUMNS: &str = "id, title, created_at, updated_at";

/// Columns matched by the free-text search term.
const SEARCHABLE_COLUMNS: [&str; 1] = ["title"];

fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "title" => "title",
        "updatedAt" => "updated_at",
        _ => "created_at",
    }
}

pub struct AcademicFacultyService;

impl AcademicFacultyService {
    #[instrument(skip(db))]
    pub async fn create_academic_faculty(
        db: &PgPool,
        dto: CreateAcademicFacultyDto,
    ) -> Result<AcademicFaculty, AppError> {
        let sql = format!(
            "INSERT INTO academic_faculties (title) VALUES ($1) RETURNING {ACADEMIC_FACULTY_COLUMNS}"
        );
        let faculty = sqlx::query_as::<_, AcademicFaculty>(&sql)
            .bind(&dto.title)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::conflict(format!(
                            "Academic faculty with title {} already exists",
                            dto.title
                        ));
                    }
                }
                AppError::from(e)
            })?;

        Ok(faculty)
    }

    #[instrument(skip(db, filters))]
    pub async fn get_all_academic_faculties(
        db: &PgPool,
        filters: AcademicFacultyFilterParams,
    ) -> Result<(Vec<AcademicFaculty>, PaginationMeta), AppError> {
        let pagination = calculate_pagination(&filters.pagination);

        let mut query = ListQuery::new();
        if let Some(term) = &filters.search_term {
            query.search(term, &SEARCHABLE_COLUMNS);
        }
        if let Some(title) = &filters.title {
            query.eq_text("title", title);
        }
        let where_sql = query.where_sql();

        let count_sql_str = format!("SELECT COUNT(*) FROM academic_faculties{where_sql}");
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
            "SELECT {ACADEMIC_FACULTY_COLUMNS} FROM academic_faculties{where_sql} ORDER BY {} {} LIMIT {} OFFSET {}",
            sort_column(&pagination.sort_by),
            pagination.sort_order.as_sql(),
            pagination.limit,
            pagination.skip,
        );
        let mut data_sql = sqlx::query_as::<_, AcademicFaculty>(&data_sql_str);
        for param in query.params() {
            data_sql = match param {
                BindValue::Text(v) => data_sql.bind(v.clone()),
                BindValue::Int(v) => data_sql.bind(*v),
                BindValue::Bool(v) => data_sql.bind(*v),
                BindValue::Uuid(v) => data_sql.bind(*v),
            };
        }

        let (total, faculties) = tokio::try_join!(count_sql.fetch_one(db), data_sql.fetch_all(db))
            .map_err(AppError::from)?;

        Ok((
            faculties,
            PaginationMeta {
                page: pagination.page,
                limit: pagination.limit,
                total,
            },
        ))
    }

    #[instrument(skip(db))]
    pub async fn get_single_academic_faculty(
        db: &PgPool,
        id: Uuid,
    ) -> Result<Option<AcademicFaculty>, AppError> {
        let sql =
            format!("SELECT {ACADEMIC_FACULTY_COLUMNS} FROM academic_faculties WHERE id = $1");
        let faculty = sqlx::query_as::<_, AcademicFaculty>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(faculty)
    }

    #[instrument(skip(db))]
    pub async fn update_academic_faculty(
        db: &PgPool,
        id: Uuid,
        dto: UpdateAcademicFacultyDto,
    ) -> Result<AcademicFaculty, AppError> {
        let existing = Self::get_single_academic_faculty(db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Academic faculty not found"))?;

        let title = dto.title.unwrap_or(existing.title);

        let sql = format!(
            "UPDATE academic_faculties SET title = $1, updated_at = NOW() WHERE id = $2 \
             RETURNING {ACADEMIC_FACULTY_COLUMNS}"
        );
        let faculty = sqlx::query_as::<_, AcademicFaculty>(&sql)
            .bind(&title)
            .bind(id)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::conflict(format!(
                            "Academic faculty with title {title} already exists"
                        ));
                    }
                }
                AppError::from(e)
            })?;

        Ok(faculty)
    }

    #[instrument(skip(db))]
    pub async fn delete_academic_faculty(
        db: &PgPool,
        id: Uuid,
    ) -> Result<AcademicFaculty, AppError> {
        let sql = format!(
            "DELETE FROM academic_faculties WHERE id = $1 RETURNING {ACADEMIC_FACULTY_COLUMNS}"
        );
        let faculty = sqlx::query_as::<_, AcademicFaculty>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("Academic faculty not found"))?;

        Ok(faculty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_mapping() {
        assert_eq!(sort_column("title"), "title");
        assert_eq!(sort_column("createdAt"), "created_at");
        assert_eq!(sort_column("bogus"), "created_at");
    }
}
