use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use varsity_core::{
    AppError, BindValue, ErrorMessage, ListQuery, PaginationMeta, calculate_pagination,
};
use varsity_models::academic_departments::AcademicDepartment;
use varsity_models::academic_faculties::AcademicFaculty;
use varsity_models::name::HumanName;

use super::model::{CreateFacultyDto, Faculty, FacultyFilterParams, UpdateFacultyDto};

const FACULTY_SELECT: &str = "SELECT \
    f.id, f.faculty_id, f.first_name, f.middle_name, f.last_name, \
    f.email, f.contact_no, f.designation, f.created_at, f.updated_at, \
    af.id AS af_id, af.title AS af_title, af.created_at AS af_created_at, af.updated_at AS af_updated_at, \
    ad.id AS ad_id, ad.title AS ad_title, ad.created_at AS ad_created_at, ad.updated_at AS ad_updated_at \
    FROM faculties f \
    LEFT JOIN academic_faculties af ON af.id = f.academic_faculty_id \
    LEFT JOIN academic_departments ad ON ad.id = f.academic_department_id";

/// Columns matched by the free-text search term.
const SEARCHABLE_COLUMNS: [&str; 6] = [
    "f.faculty_id",
    "f.email",
    "f.first_name",
    "f.middle_name",
    "f.last_name",
    "f.designation",
];

fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "facultyId" => "f.faculty_id",
        "email" => "f.email",
        "firstName" => "f.first_name",
        "lastName" => "f.last_name",
        "designation" => "f.designation",
        "updatedAt" => "f.updated_at",
        _ => "f.created_at",
    }
}

#[derive(sqlx::FromRow)]
struct FacultyRow {
    id: Uuid,
    faculty_id: String,
    first_name: String,
    middle_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    contact_no: Option<String>,
    designation: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    af_id: Option<Uuid>,
    af_title: Option<String>,
    af_created_at: Option<DateTime<Utc>>,
    af_updated_at: Option<DateTime<Utc>>,
    ad_id: Option<Uuid>,
    ad_title: Option<String>,
    ad_created_at: Option<DateTime<Utc>>,
    ad_updated_at: Option<DateTime<Utc>>,
}

impl From<FacultyRow> for Faculty {
    fn from(row: FacultyRow) -> Self {
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
        let academic_department =
            match (row.ad_id, row.ad_title, row.ad_created_at, row.ad_updated_at) {
                (Some(id), Some(title), Some(created_at), Some(updated_at)) => {
                    Some(AcademicDepartment {
                        id,
                        title,
                        // References are expanded one level deep
                        academic_faculty: None,
                        created_at,
                        updated_at,
                    })
                }
                _ => None,
            };

        Faculty {
            id: row.id,
            faculty_id: row.faculty_id,
            name: HumanName {
                first_name: row.first_name,
                middle_name: row.middle_name,
                last_name: row.last_name,
            },
            email: row.email,
            contact_no: row.contact_no,
            designation: row.designation,
            academic_faculty,
            academic_department,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_write_error(e: sqlx::Error, faculty_id: &str, email: Option<&str>) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("faculties_email_key") => AppError::conflict(format!(
                    "Faculty with email {} already exists",
                    email.unwrap_or_default()
                )),
                _ => AppError::conflict(format!("Faculty with id {faculty_id} already exists")),
            };
        }
        if db_err.is_foreign_key_violation() {
            return AppError::validation(vec![ErrorMessage::new(
                "academicFacultyId",
                "Referenced academic faculty or department does not exist",
            )]);
        }
    }
    AppError::from(e)
}

pub struct FacultyService;

impl FacultyService {
    #[instrument(skip(db, dto))]
    pub async fn create_faculty(db: &PgPool, dto: CreateFacultyDto) -> Result<Faculty, AppError> {
        sqlx::query(
            "INSERT INTO faculties \
             (faculty_id, first_name, middle_name, last_name, email, contact_no, designation, academic_faculty_id, academic_department_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&dto.faculty_id)
        .bind(&dto.name.first_name)
        .bind(&dto.name.middle_name)
        .bind(&dto.name.last_name)
        .bind(&dto.email)
        .bind(&dto.contact_no)
        .bind(&dto.designation)
        .bind(dto.academic_faculty_id)
        .bind(dto.academic_department_id)
        .execute(db)
        .await
        .map_err(|e| map_write_error(e, &dto.faculty_id, dto.email.as_deref()))?;

        Self::get_single_faculty(db, &dto.faculty_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(anyhow::anyhow!(
                    "Faculty {} missing after insert",
                    dto.faculty_id
                ))
            })
    }

    #[instrument(skip(db, filters))]
    pub async fn get_all_faculties(
        db: &PgPool,
        filters: FacultyFilterParams,
    ) -> Result<(Vec<Faculty>, PaginationMeta), AppError> {
        let pagination = calculate_pagination(&filters.pagination);

        let mut query = ListQuery::new();
        if let Some(term) = &filters.search_term {
            query.search(term, &SEARCHABLE_COLUMNS);
        }
        if let Some(email) = &filters.email {
            query.eq_text("f.email", email);
        }
        if let Some(contact_no) = &filters.contact_no {
            query.eq_text("f.contact_no", contact_no);
        }
        if let Some(designation) = &filters.designation {
            query.eq_text("f.designation", designation);
        }
        let where_sql = query.where_sql();

        let count_sql_str = format!("SELECT COUNT(*) FROM faculties f{where_sql}");
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
            "{FACULTY_SELECT}{where_sql} ORDER BY {} {} LIMIT {} OFFSET {}",
            sort_column(&pagination.sort_by),
            pagination.sort_order.as_sql(),
            pagination.limit,
            pagination.skip,
        );
        let mut data_sql = sqlx::query_as::<_, FacultyRow>(&data_sql_str);
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

        let faculties = rows.into_iter().map(Faculty::from).collect();

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
    pub async fn get_single_faculty(
        db: &PgPool,
        faculty_id: &str,
    ) -> Result<Option<Faculty>, AppError> {
        let sql = format!("{FACULTY_SELECT} WHERE f.faculty_id = $1");
        let row = sqlx::query_as::<_, FacultyRow>(&sql)
            .bind(faculty_id)
            .fetch_optional(db)
            .await?;

        Ok(row.map(Faculty::from))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_faculty(
        db: &PgPool,
        faculty_id: &str,
        dto: UpdateFacultyDto,
    ) -> Result<Faculty, AppError> {
        let existing = Self::get_single_faculty(db, faculty_id)
            .await?
            .ok_or_else(|| AppError::not_found("Faculty not found"))?;

        let mut name = existing.name;
        if let Some(patch) = dto.name {
            name.apply(patch);
        }
        let email = dto.email.or(existing.email);
        let contact_no = dto.contact_no.or(existing.contact_no);
        let designation = dto.designation.or(existing.designation);
        let academic_faculty_id = dto
            .academic_faculty_id
            .or_else(|| existing.academic_faculty.as_ref().map(|f| f.id));
        let academic_department_id = dto
            .academic_department_id
            .or_else(|| existing.academic_department.as_ref().map(|d| d.id));

        sqlx::query(
            "UPDATE faculties SET \
             first_name = $1, middle_name = $2, last_name = $3, email = $4, contact_no = $5, \
             designation = $6, academic_faculty_id = $7, academic_department_id = $8, updated_at = NOW() \
             WHERE faculty_id = $9",
        )
        .bind(&name.first_name)
        .bind(&name.middle_name)
        .bind(&name.last_name)
        .bind(&email)
        .bind(&contact_no)
        .bind(&designation)
        .bind(academic_faculty_id)
        .bind(academic_department_id)
        .bind(faculty_id)
        .execute(db)
        .await
        .map_err(|e| map_write_error(e, faculty_id, email.as_deref()))?;

        Self::get_single_faculty(db, faculty_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(anyhow::anyhow!("Faculty {faculty_id} missing after update"))
            })
    }

    #[instrument(skip(db))]
    pub async fn delete_faculty(db: &PgPool, faculty_id: &str) -> Result<Faculty, AppError> {
        let faculty = Self::get_single_faculty(db, faculty_id)
            .await?
            .ok_or_else(|| AppError::not_found("Faculty not found"))?;

        sqlx::query("DELETE FROM faculties WHERE faculty_id = $1")
            .bind(faculty_id)
            .execute(db)
            .await?;

        Ok(faculty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_mapping() {
        assert_eq!(sort_column("facultyId"), "f.faculty_id");
        assert_eq!(sort_column("designation"), "f.designation");
        assert_eq!(sort_column("unknown"), "f.created_at");
    }
}
