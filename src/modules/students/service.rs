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

use super::model::{CreateStudentDto, Student, StudentFilterParams, UpdateStudentDto};

/// Joined SELECT expanding the academic references, Mongoose-populate
/// style. Alias prefixes keep the reference columns apart from the
/// student's own.
const STUDENT_SELECT: &str = "SELECT \
    s.id, s.student_id, s.first_name, s.middle_name, s.last_name, \
    s.email, s.contact_no, s.created_at, s.updated_at, \
    af.id AS af_id, af.title AS af_title, af.created_at AS af_created_at, af.updated_at AS af_updated_at, \
    ad.id AS ad_id, ad.title AS ad_title, ad.created_at AS ad_created_at, ad.updated_at AS ad_updated_at \
    FROM students s \
    LEFT JOIN academic_faculties af ON af.id = s.academic_faculty_id \
    LEFT JOIN academic_departments ad ON ad.id = s.academic_department_id";

/// Columns matched by the free-text search term.
const SEARCHABLE_COLUMNS: [&str; 5] = [
    "s.student_id",
    "s.email",
    "s.first_name",
    "s.middle_name",
    "s.last_name",
];

fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "studentId" => "s.student_id",
        "email" => "s.email",
        "firstName" => "s.first_name",
        "lastName" => "s.last_name",
        "updatedAt" => "s.updated_at",
        _ => "s.created_at",
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: Uuid,
    student_id: String,
    first_name: String,
    middle_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    contact_no: Option<String>,
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

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
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

        Student {
            id: row.id,
            student_id: row.student_id,
            name: HumanName {
                first_name: row.first_name,
                middle_name: row.middle_name,
                last_name: row.last_name,
            },
            email: row.email,
            contact_no: row.contact_no,
            academic_faculty,
            academic_department,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_write_error(e: sqlx::Error, student_id: &str, email: Option<&str>) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("students_email_key") => AppError::conflict(format!(
                    "Student with email {} already exists",
                    email.unwrap_or_default()
                )),
                _ => AppError::conflict(format!("Student with id {student_id} already exists")),
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

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        sqlx::query(
            "INSERT INTO students \
             (student_id, first_name, middle_name, last_name, email, contact_no, academic_faculty_id, academic_department_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&dto.student_id)
        .bind(&dto.name.first_name)
        .bind(&dto.name.middle_name)
        .bind(&dto.name.last_name)
        .bind(&dto.email)
        .bind(&dto.contact_no)
        .bind(dto.academic_faculty_id)
        .bind(dto.academic_department_id)
        .execute(db)
        .await
        .map_err(|e| map_write_error(e, &dto.student_id, dto.email.as_deref()))?;

        Self::get_single_student(db, &dto.student_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(anyhow::anyhow!(
                    "Student {} missing after insert",
                    dto.student_id
                ))
            })
    }

    #[instrument(skip(db, filters))]
    pub async fn get_all_students(
        db: &PgPool,
        filters: StudentFilterParams,
    ) -> Result<(Vec<Student>, PaginationMeta), AppError> {
        let pagination = calculate_pagination(&filters.pagination);

        let mut query = ListQuery::new();
        if let Some(term) = &filters.search_term {
            query.search(term, &SEARCHABLE_COLUMNS);
        }
        if let Some(email) = &filters.email {
            query.eq_text("s.email", email);
        }
        if let Some(contact_no) = &filters.contact_no {
            query.eq_text("s.contact_no", contact_no);
        }
        let where_sql = query.where_sql();

        let count_sql_str = format!("SELECT COUNT(*) FROM students s{where_sql}");
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
            "{STUDENT_SELECT}{where_sql} ORDER BY {} {} LIMIT {} OFFSET {}",
            sort_column(&pagination.sort_by),
            pagination.sort_order.as_sql(),
            pagination.limit,
            pagination.skip,
        );
        let mut data_sql = sqlx::query_as::<_, StudentRow>(&data_sql_str);
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

        let students = rows.into_iter().map(Student::from).collect();

        Ok((
            students,
            PaginationMeta {
                page: pagination.page,
                limit: pagination.limit,
                total,
            },
        ))
    }

    #[instrument(skip(db))]
    pub async fn get_single_student(
        db: &PgPool,
        student_id: &str,
    ) -> Result<Option<Student>, AppError> {
        let sql = format!("{STUDENT_SELECT} WHERE s.student_id = $1");
        let row = sqlx::query_as::<_, StudentRow>(&sql)
            .bind(student_id)
            .fetch_optional(db)
            .await?;

        Ok(row.map(Student::from))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        student_id: &str,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let existing = Self::get_single_student(db, student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        let mut name = existing.name;
        if let Some(patch) = dto.name {
            name.apply(patch);
        }
        let email = dto.email.or(existing.email);
        let contact_no = dto.contact_no.or(existing.contact_no);
        let academic_faculty_id = dto
            .academic_faculty_id
            .or_else(|| existing.academic_faculty.as_ref().map(|f| f.id));
        let academic_department_id = dto
            .academic_department_id
            .or_else(|| existing.academic_department.as_ref().map(|d| d.id));

        sqlx::query(
            "UPDATE students SET \
             first_name = $1, middle_name = $2, last_name = $3, email = $4, contact_no = $5, \
             academic_faculty_id = $6, academic_department_id = $7, updated_at = NOW() \
             WHERE student_id = $8",
        )
        .bind(&name.first_name)
        .bind(&name.middle_name)
        .bind(&name.last_name)
        .bind(&email)
        .bind(&contact_no)
        .bind(academic_faculty_id)
        .bind(academic_department_id)
        .bind(student_id)
        .execute(db)
        .await
        .map_err(|e| map_write_error(e, student_id, email.as_deref()))?;

        Self::get_single_student(db, student_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(anyhow::anyhow!("Student {student_id} missing after update"))
            })
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, student_id: &str) -> Result<Student, AppError> {
        let student = Self::get_single_student(db, student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(student_id)
            .execute(db)
            .await?;

        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_mapping() {
        assert_eq!(sort_column("studentId"), "s.student_id");
        assert_eq!(sort_column("email"), "s.email");
        assert_eq!(sort_column("createdAt"), "s.created_at");
        assert_eq!(sort_column("; DROP TABLE students"), "s.created_at");
    }

    #[test]
    fn test_row_without_references_maps_to_none() {
        let row = StudentRow {
            id: Uuid::new_v4(),
            student_id: "S-00001".to_string(),
            first_name: "Ann".to_string(),
            middle_name: None,
            last_name: Some("Lee".to_string()),
            email: Some("ann@example.edu".to_string()),
            contact_no: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            af_id: None,
            af_title: None,
            af_created_at: None,
            af_updated_at: None,
            ad_id: None,
            ad_title: None,
            ad_created_at: None,
            ad_updated_at: None,
        };

        let student = Student::from(row);
        assert!(student.academic_faculty.is_none());
        assert!(student.academic_department.is_none());
        assert_eq!(student.name.first_name, "Ann");
    }

    #[test]
    fn test_row_with_references_expands_them() {
        let faculty_id = Uuid::new_v4();
        let department_id = Uuid::new_v4();
        let now = Utc::now();
        let row = StudentRow {
            id: Uuid::new_v4(),
            student_id: "S-00001".to_string(),
            first_name: "Ann".to_string(),
            middle_name: None,
            last_name: None,
            email: Some("ann@example.edu".to_string()),
            contact_no: None,
            created_at: now,
            updated_at: now,
            af_id: Some(faculty_id),
            af_title: Some("Science & Engineering".to_string()),
            af_created_at: Some(now),
            af_updated_at: Some(now),
            ad_id: Some(department_id),
            ad_title: Some("Computer Science".to_string()),
            ad_created_at: Some(now),
            ad_updated_at: Some(now),
        };

        let student = Student::from(row);
        let faculty = student.academic_faculty.unwrap();
        assert_eq!(faculty.id, faculty_id);
        assert_eq!(faculty.title, "Science & Engineering");
        let department = student.academic_department.unwrap();
        assert_eq!(department.id, department_id);
        assert!(department.academic_faculty.is_none());
    }
}
