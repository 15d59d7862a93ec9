// Re-export academic department models from the shared crate
pub use varsity_models::academic_departments::*;
