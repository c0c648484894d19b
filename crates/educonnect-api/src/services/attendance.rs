use std::sync::Arc;

use educonnect_core::models::AttendanceRecord;
use educonnect_core::AppError;
use educonnect_db::{sanitize_document, AttendanceRepository};

/// Reads the whole attendance collection and makes every record JSON-safe.
#[derive(Clone)]
pub struct AttendanceReader {
    repository: Arc<dyn AttendanceRepository>,
}

impl AttendanceReader {
    pub fn new(repository: Arc<dyn AttendanceRepository>) -> Self {
        Self { repository }
    }

    /// All records, or an error. Never a partial list.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        let documents = self.repository.fetch_all().await?;
        Ok(documents.into_iter().map(sanitize_document).collect())
    }
}
