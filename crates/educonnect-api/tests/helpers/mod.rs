//! Test helpers: in-memory repositories, test config, and app setup.
//!
//! No database is required; repositories keep documents in memory and can be
//! switched into a failing mode to exercise store errors.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{http::StatusCode, routing::get, Router};
use axum_test::TestServer;
use educonnect_api::setup::routes;
use educonnect_api::AppState;
use educonnect_core::models::PhotoDocument;
use educonnect_core::{AppError, BaseConfig, Config, PhotoServiceConfig};
use educonnect_db::bson::{oid::ObjectId, Document};
use educonnect_db::{photo_to_document, AttendanceRepository, PhotoRepository};
use educonnect_infra::{NotifierConfig, NotifierHandle, UploadNotifier};
use tokio::net::TcpListener;

pub const MIB: usize = 1024 * 1024;

/// Photo collection kept in insertion order
#[derive(Default)]
pub struct InMemoryPhotoRepository {
    documents: Mutex<Vec<Document>>,
    failing: AtomicBool,
}

impl InMemoryPhotoRepository {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn stored_documents(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database(
                "server selection timeout: no available servers".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PhotoRepository for InMemoryPhotoRepository {
    async fn insert_photo(&self, photo: &PhotoDocument) -> Result<String, AppError> {
        self.check()?;
        let mut document = photo_to_document(photo);
        let id = ObjectId::new();
        document.insert("_id", id);
        self.documents.lock().unwrap().push(document);
        Ok(id.to_hex())
    }

    async fn list_photo_documents(
        &self,
        limit: u64,
        skip: u64,
    ) -> Result<Vec<Document>, AppError> {
        self.check()?;
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .map(|doc| {
                let mut doc = doc.clone();
                doc.remove("image_data");
                doc
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

#[derive(Default)]
pub struct InMemoryAttendanceRepository {
    documents: Mutex<Vec<Document>>,
    failing: AtomicBool,
}

impl InMemoryAttendanceRepository {
    pub fn insert(&self, document: Document) {
        self.documents.lock().unwrap().push(document);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn fetch_all(&self) -> Result<Vec<Document>, AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database("connection reset by peer".to_string()));
        }
        Ok(self.documents.lock().unwrap().clone())
    }
}

/// Local stand-in for the downstream photo consumer
pub struct NotifyTarget {
    pub url: String,
    pub hits: Arc<AtomicUsize>,
}

impl NotifyTarget {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub async fn start_notify_target(status: StatusCode) -> NotifyTarget {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/fetch-classroom-photos",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                status
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind notify target");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    NotifyTarget {
        url: format!("http://{}/fetch-classroom-photos", addr),
        hits,
    }
}

/// A URL nothing listens on
pub async fn refused_notify_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}/fetch-classroom-photos", addr)
}

pub struct TestApp {
    pub server: TestServer,
    pub photos: Arc<InMemoryPhotoRepository>,
    pub attendance: Arc<InMemoryAttendanceRepository>,
    pub notifier: Option<NotifierHandle>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Wait for queued notifications to be attempted.
    pub async fn drain_notifications(&mut self) {
        if let Some(handle) = self.notifier.take() {
            handle.shutdown().await;
        }
    }
}

/// Setup test app with notifications disabled.
pub async fn setup_test_app() -> TestApp {
    build_test_app(None).await
}

/// Setup test app whose notifier calls `url`.
pub async fn setup_test_app_with_notify_url(url: String) -> TestApp {
    build_test_app(Some(url)).await
}

async fn build_test_app(notify_url: Option<String>) -> TestApp {
    let config = create_test_config(notify_url.clone().unwrap_or_default());

    let (notifier, handle) = match notify_url {
        Some(url) => {
            let (notifier, handle) = UploadNotifier::spawn(NotifierConfig {
                url,
                timeout: Duration::from_secs(2),
                queue_capacity: 16,
            })
            .expect("Failed to start notifier");
            (notifier, Some(handle))
        }
        None => (UploadNotifier::disabled(), None),
    };

    let photos = Arc::new(InMemoryPhotoRepository::default());
    let attendance = Arc::new(InMemoryAttendanceRepository::default());

    let state = Arc::new(AppState::new(
        &config,
        photos.clone(),
        attendance.clone(),
        notifier,
    ));

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        photos,
        attendance,
        notifier: handle,
    }
}

pub fn create_test_config(notify_url: String) -> Config {
    let base = BaseConfig {
        server_port: 8000,
        cors_origins: vec!["http://localhost:5173".to_string()],
        db_max_connections: 5,
        db_timeout_seconds: 5,
        http_concurrency_limit: 64,
        request_timeout_secs: 30,
        environment: "test".to_string(),
    };
    Config(Box::new(PhotoServiceConfig {
        base,
        mongo_db_url: "mongodb://localhost:27017".to_string(),
        mongo_db_url_is_fallback: false,
        photos_database: "Classroom_photos".to_string(),
        photos_collection: "images".to_string(),
        attendance_database: "Classroom_photos".to_string(),
        attendance_collection: "attendance".to_string(),
        max_file_size_bytes: 10 * MIB,
        allowed_content_types: vec![
            "image/jpeg".into(),
            "image/png".into(),
            "image/gif".into(),
            "image/webp".into(),
        ],
        notify_url,
        notify_timeout_seconds: 2,
        notify_queue_capacity: 16,
    }))
}
