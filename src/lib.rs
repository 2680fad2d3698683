// Library exports for the binary and integration tests

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use config::Settings;
pub use error::{AppError, Result};
