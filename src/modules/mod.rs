pub mod academic_departments;
pub mod academic_faculties;
pub mod academic_semesters;
pub mod auth;
pub mod faculties;
pub mod students;
pub mod users;
