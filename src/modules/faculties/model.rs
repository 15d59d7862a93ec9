// Re-export faculty models from the shared crate
pub use varsity_models::faculties::*;
