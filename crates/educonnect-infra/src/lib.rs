//! EduConnect Infrastructure Library
//!
//! Shared infrastructure for the EduConnect API:
//! - Middleware (request ID)
//! - Telemetry initialization
//! - Error response body
//! - Best-effort upload notifications

#[cfg(feature = "middleware")]
pub mod middleware;

#[cfg(feature = "observability-basic")]
pub mod telemetry;

pub mod error;

#[cfg(feature = "notify")]
pub mod notify;

#[cfg(feature = "middleware")]
pub use middleware::{get_request_id, request_id_middleware, RequestId, REQUEST_ID_HEADER};

#[cfg(feature = "observability-basic")]
pub use telemetry::{init_telemetry, shutdown_telemetry};

pub use error::ErrorResponse;

#[cfg(feature = "notify")]
pub use notify::{
    NotifierConfig, NotifierHandle, NotifyOutcome, UploadNotification, UploadNotifier,
};
