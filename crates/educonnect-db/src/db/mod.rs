//! MongoDB repositories
//!
//! `DatabaseClient` owns the driver handle and hands out repositories bound to
//! the configured photo and attendance collections.

pub mod attendance;
pub mod client;
pub mod photo;

pub use attendance::MongoAttendanceRepository;
pub use client::DatabaseClient;
pub use photo::MongoPhotoRepository;
