//! Domain services behind the HTTP handlers

pub mod attendance;
pub mod photo;

pub use attendance::AttendanceReader;
pub use photo::PhotoService;
