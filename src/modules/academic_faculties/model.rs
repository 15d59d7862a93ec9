// Re-export academic faculty models from the shared crate
pub use varsity_models::academic_faculties::*;
