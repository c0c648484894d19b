//! EduConnect API Library
//!
//! HTTP handlers, services, and application setup for the photo and
//! attendance endpoints.

mod api_doc;
pub mod constants;
mod handlers;
pub mod middleware;
pub mod services;
pub mod setup;
mod utils;

pub mod error;
pub mod state;

pub use error::HttpAppError;
pub use setup::App;
pub use state::AppState;
