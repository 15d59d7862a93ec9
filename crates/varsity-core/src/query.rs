//! WHERE-clause builder for list endpoints.
//!
//! Every list endpoint combines an optional free-text search term (an
//! OR-group of case-insensitive matches over a fixed set of columns) with
//! exact-match clauses for each supplied filter field, all ANDed together.
//! Column names are always caller-supplied constants from a per-entity
//! allow-list; only values travel as bind parameters.

use uuid::Uuid;

/// A value to bind into a list query, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Uuid(Uuid),
}

#[derive(Debug, Default)]
pub struct ListQuery {
    conditions: Vec<String>,
    params: Vec<BindValue>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an OR-group of `ILIKE %term%` matches across `columns`.
    ///
    /// A blank term adds nothing, so an unfiltered list request returns
    /// every row.
    pub fn search(&mut self, term: &str, columns: &[&str]) {
        let term = term.trim();
        if term.is_empty() || columns.is_empty() {
            return;
        }

        let mut matches = Vec::with_capacity(columns.len());
        for column in columns {
            self.params.push(BindValue::Text(format!("%{term}%")));
            matches.push(format!("{} ILIKE ${}", column, self.params.len()));
        }
        self.conditions.push(format!("({})", matches.join(" OR ")));
    }

    pub fn eq_text(&mut self, column: &str, value: &str) {
        self.params.push(BindValue::Text(value.to_string()));
        self.conditions
            .push(format!("{} = ${}", column, self.params.len()));
    }

    pub fn eq_int(&mut self, column: &str, value: i64) {
        self.params.push(BindValue::Int(value));
        self.conditions
            .push(format!("{} = ${}", column, self.params.len()));
    }

    pub fn eq_bool(&mut self, column: &str, value: bool) {
        self.params.push(BindValue::Bool(value));
        self.conditions
            .push(format!("{} = ${}", column, self.params.len()));
    }

    pub fn eq_uuid(&mut self, column: &str, value: Uuid) {
        self.params.push(BindValue::Uuid(value));
        self.conditions
            .push(format!("{} = ${}", column, self.params.len()));
    }

    /// Renders the WHERE clause (with a leading space), or an empty string
    /// when no condition was added.
    pub fn where_sql(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn params(&self) -> &[BindValue] {
        &self.params
    }
}
