use async_trait::async_trait;
use educonnect_core::models::PhotoDocument;
use educonnect_core::AppError;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::document::{id_to_string, photo_to_document};
use crate::traits::PhotoRepository;

/// Repository for the photo collection
#[derive(Clone)]
pub struct MongoPhotoRepository {
    database: Database,
    collection: Collection<Document>,
}

impl MongoPhotoRepository {
    pub fn new(database: Database, collection: &str) -> Self {
        let collection = database.collection::<Document>(collection);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl PhotoRepository for MongoPhotoRepository {
    #[tracing::instrument(
        skip(self, photo),
        fields(db.collection = %self.collection.name(), db.operation = "insert", file_size = photo.file_size)
    )]
    async fn insert_photo(&self, photo: &PhotoDocument) -> Result<String, AppError> {
        let result = self.collection.insert_one(photo_to_document(photo)).await?;
        Ok(id_to_string(&result.inserted_id))
    }

    #[tracing::instrument(
        skip(self),
        fields(db.collection = %self.collection.name(), db.operation = "find")
    )]
    async fn list_photo_documents(
        &self,
        limit: u64,
        skip: u64,
    ) -> Result<Vec<Document>, AppError> {
        // A zero limit means "no limit" to the driver
        if limit == 0 {
            return Ok(Vec::new());
        }

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let cursor = self
            .collection
            .find(doc! {})
            .projection(doc! { "image_data": 0 })
            .skip(skip)
            .limit(limit)
            .await?;

        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
