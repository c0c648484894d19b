use async_trait::async_trait;
use educonnect_core::AppError;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::traits::AttendanceRepository;

/// Repository for the attendance collection. Documents have no fixed schema.
#[derive(Clone)]
pub struct MongoAttendanceRepository {
    collection: Collection<Document>,
}

impl MongoAttendanceRepository {
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection::<Document>(collection),
        }
    }
}

#[async_trait]
impl AttendanceRepository for MongoAttendanceRepository {
    #[tracing::instrument(
        skip(self),
        fields(db.collection = %self.collection.name(), db.operation = "find")
    )]
    async fn fetch_all(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        tracing::debug!(count = documents.len(), "Fetched attendance records");
        Ok(documents)
    }
}
