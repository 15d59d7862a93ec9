// Re-export user models from the shared crate
pub use varsity_models::users::*;
