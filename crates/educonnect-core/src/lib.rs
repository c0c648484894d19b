//! EduConnect Core Library
//!
//! This crate provides the domain models, error types, configuration, and upload
//! validation shared by all EduConnect components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{BaseConfig, Config, PhotoServiceConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::{UploadValidator, ValidationError};
