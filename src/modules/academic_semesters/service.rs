use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use varsity_core::{
    AppError, BindValue, ErrorMessage, ListQuery, PaginationMeta, calculate_pagination,
};
use varsity_models::academic_semesters::{MONTHS, SEMESTER_TITLES, code_for_title};

use super::model::{
    AcademicSemester, AcademicSemesterFilterParams, CreateAcademicSemesterDto,
    UpdateAcademicSemesterDto,
};

const SEMESTER_COLUMNS: &str = "id, title, code, year, start_month, end_month, created_at, updated_at";

/// Columns matched by the free-text search term. The year is cast so a
/// numeric search term still matches.
const SEARCHABLE_COLUMNS: [&str; 3] = ["title", "code", "year::text"];

fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "title" => "title",
        "code" => "code",
        "year" => "year",
        "updatedAt" => "updated_at",
        _ => "created_at",
    }
}

/// Semantic checks the field-level validator cannot express: title, code
/// and month membership, plus the title/code pairing (Autumn is 01,
/// Summer 02, Fall 03).
fn check_semester_fields(
    title: &str,
    code: &str,
    start_month: &str,
    end_month: &str,
) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if !SEMESTER_TITLES.contains(&title) {
        errors.push(ErrorMessage::new(
            "title",
            format!("title must be one of {}", SEMESTER_TITLES.join(", ")),
        ));
    } else if code_for_title(title) != Some(code) {
        errors.push(ErrorMessage::new("code", "Invalid Semester Code"));
    }

    if !MONTHS.contains(&start_month) {
        errors.push(ErrorMessage::new("startMonth", "Invalid month name"));
    }
    if !MONTHS.contains(&end_month) {
        errors.push(ErrorMessage::new("endMonth", "Invalid month name"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(errors))
    }
}

pub struct AcademicSemesterService;

impl AcademicSemesterService {
    #[instrument(skip(db))]
    pub async fn create_academic_semester(
        db: &PgPool,
        dto: CreateAcademicSemesterDto,
    ) -> Result<AcademicSemester, AppError> {
        check_semester_fields(&dto.title, &dto.code, &dto.start_month, &dto.end_month)?;

        let sql = format!(
            "INSERT INTO academic_semesters (title, code, year, start_month, end_month) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {SEMESTER_COLUMNS}"
        );
        let semester = sqlx::query_as::<_, AcademicSemester>(&sql)
            .bind(&dto.title)
            .bind(&dto.code)
            .bind(dto.year)
            .bind(&dto.start_month)
            .bind(&dto.end_month)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::conflict(format!(
                            "Academic semester {} {} already exists",
                            dto.title, dto.year
                        ));
                    }
                }
                AppError::from(e)
            })?;

        Ok(semester)
    }

    #[instrument(skip(db, filters))]
    pub async fn get_all_academic_semesters(
        db: &PgPool,
        filters: AcademicSemesterFilterParams,
    ) -> Result<(Vec<AcademicSemester>, PaginationMeta), AppError> {
        let pagination = calculate_pagination(&filters.pagination);

        let mut query = ListQuery::new();
        if let Some(term) = &filters.search_term {
            query.search(term, &SEARCHABLE_COLUMNS);
        }
        if let Some(title) = &filters.title {
            query.eq_text("title", title);
        }
        if let Some(code) = &filters.code {
            query.eq_text("code", code);
        }
        if let Some(year) = filters.year {
            query.eq_int("year", year as i64);
        }
        let where_sql = query.where_sql();

        let count_sql_str = format!("SELECT COUNT(*) FROM academic_semesters{where_sql}");
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
            "SELECT {SEMESTER_COLUMNS} FROM academic_semesters{where_sql} ORDER BY {} {} LIMIT {} OFFSET {}",
            sort_column(&pagination.sort_by),
            pagination.sort_order.as_sql(),
            pagination.limit,
            pagination.skip,
        );
        let mut data_sql = sqlx::query_as::<_, AcademicSemester>(&data_sql_str);
        for param in query.params() {
            data_sql = match param {
                BindValue::Text(v) => data_sql.bind(v.clone()),
                BindValue::Int(v) => data_sql.bind(*v),
                BindValue::Bool(v) => data_sql.bind(*v),
                BindValue::Uuid(v) => data_sql.bind(*v),
            };
        }

        let (total, semesters) = tokio::try_join!(count_sql.fetch_one(db), data_sql.fetch_all(db))
            .map_err(AppError::from)?;

        Ok((
            semesters,
            PaginationMeta {
                page: pagination.page,
                limit: pagination.limit,
                total,
            },
        ))
    }

    #[instrument(skip(db))]
    pub async fn get_single_academic_semester(
        db: &PgPool,
        id: Uuid,
    ) -> Result<Option<AcademicSemester>, AppError> {
        let sql = format!("SELECT {SEMESTER_COLUMNS} FROM academic_semesters WHERE id = $1");
        let semester = sqlx::query_as::<_, AcademicSemester>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(semester)
    }

    #[instrument(skip(db))]
    pub async fn update_academic_semester(
        db: &PgPool,
        id: Uuid,
        dto: UpdateAcademicSemesterDto,
    ) -> Result<AcademicSemester, AppError> {
        let existing = Self::get_single_academic_semester(db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Academic semester not found"))?;

        let title = dto.title.unwrap_or(existing.title);
        let code = dto.code.unwrap_or(existing.code);
        let year = dto.year.unwrap_or(existing.year);
        let start_month = dto.start_month.unwrap_or(existing.start_month);
        let end_month = dto.end_month.unwrap_or(existing.end_month);

        // The merged record must still be consistent, whichever half of
        // the title/code pair the patch touched.
        check_semester_fields(&title, &code, &start_month, &end_month)?;

        let sql = format!(
            "UPDATE academic_semesters SET title = $1, code = $2, year = $3, start_month = $4, \
             end_month = $5, updated_at = NOW() WHERE id = $6 RETURNING {SEMESTER_COLUMNS}"
        );
        let semester = sqlx::query_as::<_, AcademicSemester>(&sql)
            .bind(&title)
            .bind(&code)
            .bind(year)
            .bind(&start_month)
            .bind(&end_month)
            .bind(id)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::conflict(format!(
                            "Academic semester {title} {year} already exists"
                        ));
                    }
                }
                AppError::from(e)
            })?;

        Ok(semester)
    }

    #[instrument(skip(db))]
    pub async fn delete_academic_semester(
        db: &PgPool,
        id: Uuid,
    ) -> Result<AcademicSemester, AppError> {
        let sql =
            format!("DELETE FROM academic_semesters WHERE id = $1 RETURNING {SEMESTER_COLUMNS}");
        let semester = sqlx::query_as::<_, AcademicSemester>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("Academic semester not found"))?;

        Ok(semester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_semester_fields_valid() {
        assert!(check_semester_fields("Autumn", "01", "January", "April").is_ok());
        assert!(check_semester_fields("Fall", "03", "September", "December").is_ok());
    }

    #[test]
    fn test_check_semester_fields_code_mismatch() {
        let err = check_semester_fields("Autumn", "02", "January", "April").unwrap_err();
        match err {
            AppError::Validation(messages) => {
                assert_eq!(messages.len(), 1);
                assert_eq!(messages[0].path, "code");
                assert_eq!(messages[0].message, "Invalid Semester Code");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_check_semester_fields_unknown_title() {
        let err = check_semester_fields("Winter", "01", "January", "April").unwrap_err();
        match err {
            AppError::Validation(messages) => {
                assert_eq!(messages[0].path, "title");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_check_semester_fields_bad_months() {
        let err = check_semester_fields("Autumn", "01", "Janvier", "Smarch").unwrap_err();
        match err {
            AppError::Validation(messages) => {
                let paths: Vec<_> = messages.iter().map(|m| m.path.as_str()).collect();
                assert_eq!(paths, vec!["startMonth", "endMonth"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_sort_column_mapping() {
        assert_eq!(sort_column("year"), "year");
        assert_eq!(sort_column("code"), "code");
        assert_eq!(sort_column("anything"), "created_at");
    }
}
