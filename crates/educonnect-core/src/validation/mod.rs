//! Upload validation
//!
//! Checks the client-declared content type and the payload size of a photo
//! upload. The declared type is trusted; payload bytes are never sniffed.

use crate::constants::{DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_MAX_FILE_SIZE_MB};
use crate::error::AppError;

/// Validation errors for uploaded photos
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid content type: {content_type} (allowed: {allowed:?})")]
    InvalidContentType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidContentType { allowed, .. } => {
                AppError::UnsupportedContentType(format!(
                    "Invalid file type. Allowed types: {}",
                    allowed.join(", ")
                ))
            }
            ValidationError::FileTooLarge { max, .. } => AppError::PayloadTooLarge(format!(
                "File too large. Maximum size is {} MB",
                max / 1024 / 1024
            )),
        }
    }
}

/// Photo upload validator
#[derive(Clone, Debug)]
pub struct UploadValidator {
    max_file_size: usize,
    allowed_content_types: Vec<String>,
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024,
            DEFAULT_ALLOWED_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl UploadValidator {
    pub fn new(max_file_size: usize, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_content_types,
        }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Validate the declared content type by exact membership in the allow-list.
    ///
    /// No case folding and no parameter stripping: `IMAGE/PNG` or
    /// `image/png; q=1` are rejected. The accepted value is stored as declared.
    pub fn validate_content_type(&self, content_type: &str) -> Result<String, ValidationError> {
        if !self.allowed_content_types.iter().any(|ct| ct == content_type) {
            return Err(ValidationError::InvalidContentType {
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(content_type.to_string())
    }

    /// Validate payload size. Empty payloads are accepted.
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }
}
