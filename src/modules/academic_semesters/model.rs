// Re-export academic semester models from the shared crate
pub use varsity_models::academic_semesters::*;
