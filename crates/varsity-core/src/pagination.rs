use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Deserializes an optional integer that may arrive as a string.
///
/// Query strings always carry values as text, and `#[serde(flatten)]`
/// routes them through serde's content buffer, so `page=2` reaches us as
/// `"2"`. Empty strings are treated as absent.
pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Same as [`deserialize_optional_i64`] for `i32` filter fields (e.g. a
/// semester year).
pub fn deserialize_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i32>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Same as [`deserialize_optional_i64`] for boolean filter fields.
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref() {
        None | Some("") => Ok(None),
        Some("true") | Some("1") => Ok(Some(true)),
        Some("false") | Some("0") => Ok(Some(false)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid boolean value: {other}"
        ))),
    }
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Raw pagination query parameters, flattened into every entity's filter
/// params.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOptions {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// Resolved pagination values, every gap filled with a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub skip: i64,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

/// Turns raw pagination options into concrete page/limit/skip/sort values.
///
/// Defaults: page 1, limit 10, sort by `createdAt` descending. Never
/// fails; out-of-range values are clamped.
pub fn calculate_pagination(options: &PaginationOptions) -> Pagination {
    let page = options.page.unwrap_or(1).max(1);
    let limit = options.limit.unwrap_or(10).clamp(1, 100);
    let skip = (page - 1) * limit;
    let sort_by = options
        .sort_by
        .clone()
        .unwrap_or_else(|| "createdAt".to_string());
    let sort_order = options.sort_order.unwrap_or_default();

    Pagination {
        page,
        limit,
        skip,
        sort_by,
        sort_order,
    }
}

/// Pagination metadata returned in the `meta` field of list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}
