//! # Varsity Models
//!
//! Domain models and DTOs for the Varsity API.
//!
//! One module per entity, each containing the persisted entity struct, the
//! create/update DTOs with their `validator` rules, and the enumerated
//! filter parameters accepted by the entity's list endpoint. Wire casing is
//! camelCase throughout.
//!
//! # Modules
//!
//! - [`name`]: Structured person name and its partial-update patch
//! - [`users`]: Application accounts (business id, role, password flags)
//! - [`students`]: Student records with academic references
//! - [`faculties`]: Teaching-staff records with academic references
//! - [`academic_faculties`]: Academic faculty title entities
//! - [`academic_semesters`]: Semester title/code/year entities
//! - [`academic_departments`]: Department entities referencing a faculty
//! - [`auth`]: Login request/response and JWT claims

pub mod academic_departments;
pub mod academic_faculties;
pub mod academic_semesters;
pub mod auth;
pub mod faculties;
pub mod name;
pub mod students;
pub mod users;
