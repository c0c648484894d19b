//! Service-wide error type
//!
//! Every failure a request can hit is an [`AppError`]. How it is shown to a
//! client (status, code, wording) and how loudly it is logged is described by
//! [`ErrorMetadata`], so the HTTP layer never matches on variants itself.
//!
//! `From<mongodb::error::Error>` is gated behind the `mongodb` feature.

/// Severity an error is logged at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Caller mistakes: bad multipart, bad query, wrong type
    Debug,
    /// Caller hit a limit
    Warn,
    /// The service or its store failed
    Error,
}

/// How an error presents itself over HTTP and in logs.
pub trait ErrorMetadata {
    fn http_status_code(&self) -> u16;

    /// Stable machine-readable code, e.g. `"DATABASE_ERROR"`
    fn error_code(&self) -> &'static str;

    /// Whether retrying the same request may succeed
    fn is_recoverable(&self) -> bool;

    fn suggested_action(&self) -> Option<&'static str>;

    /// Text placed in the response `detail` field
    fn client_message(&self) -> String;

    /// Sensitive errors never expose their internal text to clients
    fn is_sensitive(&self) -> bool;

    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error: {message}")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

struct Profile {
    status: u16,
    code: &'static str,
    recoverable: bool,
    action: Option<&'static str>,
    sensitive: bool,
    level: LogLevel,
}

const RETRY_LATER: Option<&str> = Some("Retry after a short delay");

impl AppError {
    fn profile(&self) -> Profile {
        match self {
            AppError::Database(_) => Profile {
                status: 500,
                code: "DATABASE_ERROR",
                recoverable: true,
                action: RETRY_LATER,
                sensitive: true,
                level: LogLevel::Error,
            },
            AppError::InvalidInput(_) => Profile {
                status: 400,
                code: "INVALID_INPUT",
                recoverable: false,
                action: Some("Check request parameters and try again"),
                sensitive: false,
                level: LogLevel::Debug,
            },
            AppError::UnsupportedContentType(_) => Profile {
                status: 400,
                code: "UNSUPPORTED_CONTENT_TYPE",
                recoverable: false,
                action: Some("Upload a JPEG, PNG, GIF or WebP image"),
                sensitive: false,
                level: LogLevel::Debug,
            },
            AppError::PayloadTooLarge(_) => Profile {
                status: 413,
                code: "PAYLOAD_TOO_LARGE",
                recoverable: false,
                action: Some("Reduce file size and try again"),
                sensitive: false,
                level: LogLevel::Warn,
            },
            AppError::Internal(_) | AppError::InternalWithSource { .. } => Profile {
                status: 500,
                code: "INTERNAL_ERROR",
                recoverable: true,
                action: RETRY_LATER,
                sensitive: true,
                level: LogLevel::Error,
            },
        }
    }

    /// Variant name, reported as `error_type` outside production
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::UnsupportedContentType(_) => "UnsupportedContentType",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Display text followed by up to five `Caused by:` lines.
    pub fn detailed_message(&self) -> String {
        const MAX_CAUSES: usize = 5;

        let mut details = self.to_string();
        let causes: Vec<String> = std::iter::successors(std::error::Error::source(self), |e| {
            e.source()
        })
        .map(|e| e.to_string())
        .collect();

        for cause in causes.iter().take(MAX_CAUSES) {
            details.push_str("\n  Caused by: ");
            details.push_str(cause);
        }
        if causes.len() > MAX_CAUSES {
            details.push_str("\n  ... (truncated)");
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        self.profile().status
    }

    fn error_code(&self) -> &'static str {
        self.profile().code
    }

    fn is_recoverable(&self) -> bool {
        self.profile().recoverable
    }

    fn suggested_action(&self) -> Option<&'static str> {
        self.profile().action
    }

    fn is_sensitive(&self) -> bool {
        self.profile().sensitive
    }

    fn log_level(&self) -> LogLevel {
        self.profile().level
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Database(_) => "Failed to access database".to_string(),
            AppError::InvalidInput(msg)
            | AppError::UnsupportedContentType(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
        }
    }
}
