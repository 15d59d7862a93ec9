// Re-export auth models from the shared crate
pub use varsity_models::auth::*;
