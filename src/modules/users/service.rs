use sqlx::PgPool;
use tracing::instrument;

use varsity_core::{
    AppError, BindValue, ListQuery, PaginationMeta, calculate_pagination, hash_password,
};

use super::model::{CreateUserDto, UpdateUserDto, User, UserFilterParams, UserRole};

const USER_COLUMNS: &str = "id, user_id, role, needs_password_change, created_at, updated_at";

/// Columns matched by the free-text search term.
const SEARCHABLE_COLUMNS: [&str; 2] = ["user_id", "role"];

fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "userId" => "user_id",
        "role" => "role",
        "needsPasswordChange" => "needs_password_change",
        "updatedAt" => "updated_at",
        _ => "created_at",
    }
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto, default_password))]
    pub async fn create_user(
        db: &PgPool,
        dto: CreateUserDto,
        default_password: &str,
    ) -> Result<User, AppError> {
        let password = dto
            .password
            .unwrap_or_else(|| default_password.to_string());
        let hashed_password = hash_password(&password)?;

        let user_id = match dto.user_id {
            Some(user_id) => user_id,
            None => Self::generate_user_id(db, dto.role).await?,
        };

        let sql = format!(
            "INSERT INTO users (user_id, password, role) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&user_id)
            .bind(&hashed_password)
            .bind(dto.role)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::conflict(format!(
                            "User with id {user_id} already exists"
                        ));
                    }
                }
                AppError::from(e)
            })?;

        Ok(user)
    }

    /// Generates the next role-prefixed business identifier, e.g.
    /// `S-00042`. Zero-padding keeps lexicographic and numeric order in
    /// agreement, so `ORDER BY user_id DESC LIMIT 1` yields the latest.
    async fn generate_user_id(db: &PgPool, role: UserRole) -> Result<String, AppError> {
        let prefix = role.id_prefix();

        let last: Option<String> = sqlx::query_scalar(
            "SELECT user_id FROM users WHERE user_id LIKE $1 ORDER BY user_id DESC LIMIT 1",
        )
        .bind(format!("{prefix}-%"))
        .fetch_optional(db)
        .await?;

        let next = last
            .as_deref()
            .and_then(|id| id.rsplit('-').next())
            .and_then(|suffix| suffix.parse::<u32>().ok())
            .map_or(1, |n| n + 1);

        Ok(format!("{prefix}-{next:05}"))
    }

    #[instrument(skip(db, filters))]
    pub async fn get_all_users(
        db: &PgPool,
        filters: UserFilterParams,
    ) -> Result<(Vec<User>, PaginationMeta), AppError> {
        let pagination = calculate_pagination(&filters.pagination);

        let mut query = ListQuery::new();
        if let Some(term) = &filters.search_term {
            query.search(term, &SEARCHABLE_COLUMNS);
        }
        if let Some(role) = filters.role {
            query.eq_text("role", role.as_str());
        }
        if let Some(needs_password_change) = filters.needs_password_change {
            query.eq_bool("needs_password_change", needs_password_change);
        }
        let where_sql = query.where_sql();

        let count_sql_str = format!("SELECT COUNT(*) FROM users{where_sql}");
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
            "SELECT {USER_COLUMNS} FROM users{where_sql} ORDER BY {} {} LIMIT {} OFFSET {}",
            sort_column(&pagination.sort_by),
            pagination.sort_order.as_sql(),
            pagination.limit,
            pagination.skip,
        );
        let mut data_sql = sqlx::query_as::<_, User>(&data_sql_str);
        for param in query.params() {
            data_sql = match param {
                BindValue::Text(v) => data_sql.bind(v.clone()),
                BindValue::Int(v) => data_sql.bind(*v),
                BindValue::Bool(v) => data_sql.bind(*v),
                BindValue::Uuid(v) => data_sql.bind(*v),
            };
        }

        let (total, users) = tokio::try_join!(count_sql.fetch_one(db), data_sql.fetch_all(db))
            .map_err(AppError::from)?;

        Ok((
            users,
            PaginationMeta {
                page: pagination.page,
                limit: pagination.limit,
                total,
            },
        ))
    }

    #[instrument(skip(db))]
    pub async fn get_single_user(db: &PgPool, user_id: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .fetch_optional(db)
            .await?;

        Ok(user)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &PgPool,
        user_id: &str,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let existing = Self::get_single_user(db, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let role = dto.role.unwrap_or(existing.role);
        let needs_password_change = dto
            .needs_password_change
            .unwrap_or(existing.needs_password_change);

        let user = if let Some(password) = dto.password {
            let hashed_password = hash_password(&password)?;
            let sql = format!(
                "UPDATE users SET role = $1, needs_password_change = $2, password = $3, updated_at = NOW() \
                 WHERE user_id = $4 RETURNING {USER_COLUMNS}"
            );
            sqlx::query_as::<_, User>(&sql)
                .bind(role)
                .bind(needs_password_change)
                .bind(&hashed_password)
                .bind(user_id)
                .fetch_one(db)
                .await?
        } else {
            let sql = format!(
                "UPDATE users SET role = $1, needs_password_change = $2, updated_at = NOW() \
                 WHERE user_id = $3 RETURNING {USER_COLUMNS}"
            );
            sqlx::query_as::<_, User>(&sql)
                .bind(role)
                .bind(needs_password_change)
                .bind(user_id)
                .fetch_one(db)
                .await?
        };

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, user_id: &str) -> Result<User, AppError> {
        let sql = format!("DELETE FROM users WHERE user_id = $1 RETURNING {USER_COLUMNS}");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_mapping() {
        assert_eq!(sort_column("userId"), "user_id");
        assert_eq!(sort_column("needsPasswordChange"), "needs_password_change");
        assert_eq!(sort_column("createdAt"), "created_at");
        assert_eq!(sort_column("somethingElse"), "created_at");
    }
}
