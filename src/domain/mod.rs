//! Domain layer: form data model, validation errors and validation rules.

pub mod models;
pub mod services;
pub mod errors;

pub use models::*;
pub use services::*;
pub use errors::*;
