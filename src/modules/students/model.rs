// Re-export student models from the shared crate
pub use varsity_models::students::*;
