//! # Varsity Core
//!
//! Core types, errors, and utilities for the Varsity API.
//!
//! This crate provides the foundational types used throughout the Varsity
//! application:
//!
//! - [`errors`]: Application error kinds with HTTP response conversion and
//!   the uniform failure envelope
//! - [`pagination`]: Pagination helper turning query parameters into
//!   page/limit/skip/sort values
//! - [`query`]: Composable WHERE-clause builder for list endpoints
//!   (search-term + exact-match filters over allow-listed columns)
//! - [`response`]: The uniform success envelope returned by every handler
//! - [`password`]: Password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use varsity_core::{AppError, ApiResponse, ListQuery, calculate_pagination};
//!
//! let pagination = calculate_pagination(&options);
//!
//! let mut query = ListQuery::new();
//! query.search("ann", &["first_name", "last_name"]);
//! query.eq_text("email", "ann@example.com");
//!
//! let sql = format!("SELECT * FROM students{}", query.where_sql());
//! ```

pub mod errors;
pub mod pagination;
pub mod password;
pub mod query;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorMessage, ErrorResponse};
pub use pagination::{Pagination, PaginationMeta, PaginationOptions, SortOrder, calculate_pagination};
pub use password::{hash_password, verify_password};
pub use query::{BindValue, ListQuery};
pub use response::ApiResponse;
