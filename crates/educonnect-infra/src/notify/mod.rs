//! Best-effort upload notifications
//!
//! After a photo is stored the API hands an [`UploadNotification`] to the
//! [`UploadNotifier`]. A detached worker issues one bounded `GET` against the
//! configured URL per notification and logs the outcome. Nothing is retried and
//! nothing flows back to the request that triggered it.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

/// Configuration for the notification worker
#[derive(Clone, Debug)]
pub struct NotifierConfig {
    pub url: String,
    pub timeout: Duration,
    pub queue_capacity: usize,
}

/// A stored photo that downstream consumers should pick up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadNotification {
    pub photo_id: String,
    pub filename: String,
}

/// Result of a single delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Endpoint answered with a 2xx status
    Delivered(u16),
    /// Endpoint answered with a non-2xx status
    Rejected(u16),
    /// Connection error, timeout or any other transport failure
    Failed(String),
}

/// Sending half used by request handlers. Cheap to clone.
#[derive(Clone, Debug)]
pub struct UploadNotifier {
    tx: Option<mpsc::Sender<UploadNotification>>,
}

/// Owns the worker task. Dropping it leaves the worker running until every
/// notifier clone is gone; call [`NotifierHandle::shutdown`] to stop it.
pub struct NotifierHandle {
    shutdown_tx: mpsc::Sender<()>,
    worker: JoinHandle<()>,
}

impl UploadNotifier {
    /// Start the worker and return the sender plus its shutdown handle.
    pub fn spawn(config: NotifierConfig) -> Result<(Self, NotifierHandle)> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build notification HTTP client")?;

        let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let worker = tokio::spawn(async move {
            Self::worker_loop(client, config, rx, shutdown_rx).await;
        });

        Ok((
            Self { tx: Some(tx) },
            NotifierHandle {
                shutdown_tx,
                worker,
            },
        ))
    }

    /// A notifier that drops every notification.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Queue a notification without waiting.
    ///
    /// A full queue or a stopped worker drops the notification with a warning.
    pub fn notify(&self, notification: UploadNotification) {
        let Some(tx) = &self.tx else {
            tracing::debug!(
                photo_id = %notification.photo_id,
                "Upload notifications disabled, skipping"
            );
            return;
        };

        if let Err(e) = tx.try_send(notification) {
            let (reason, notification) = match e {
                mpsc::error::TrySendError::Full(n) => ("queue full", n),
                mpsc::error::TrySendError::Closed(n) => ("worker stopped", n),
            };
            tracing::warn!(
                photo_id = %notification.photo_id,
                reason,
                "Dropping upload notification"
            );
        }
    }

    async fn worker_loop(
        client: Client,
        config: NotifierConfig,
        mut rx: mpsc::Receiver<UploadNotification>,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        let mut in_flight = JoinSet::new();

        tracing::info!(
            url = %config.url,
            timeout_ms = config.timeout.as_millis() as u64,
            "Upload notifier started"
        );

        loop {
            tokio::select! {
                received = rx.recv() => {
                    let Some(notification) = received else {
                        break;
                    };
                    let client = client.clone();
                    let url = config.url.clone();
                    in_flight.spawn(async move {
                        deliver(&client, &url, &notification).await;
                    });
                }
                Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
                _ = shutdown_rx.recv() => {
                    tracing::info!("Upload notifier shutting down");
                    break;
                }
            }
        }

        // Accepted notifications still get their single attempt
        rx.close();
        while let Ok(notification) = rx.try_recv() {
            let client = client.clone();
            let url = config.url.clone();
            in_flight.spawn(async move {
                deliver(&client, &url, &notification).await;
            });
        }

        // Each attempt is bounded by the client timeout
        while in_flight.join_next().await.is_some() {}
        tracing::debug!("Upload notifier stopped");
    }
}

impl NotifierHandle {
    /// Stop the worker once queued and in-flight deliveries have finished.
    pub async fn shutdown(self) {
        if let Err(e) = self.shutdown_tx.send(()).await {
            tracing::warn!(
                error = %e,
                "Failed to send shutdown signal to upload notifier"
            );
        }
        if let Err(e) = self.worker.await {
            tracing::error!(error = %e, "Upload notifier task failed");
        }
    }
}

/// Issue one `GET` against `url` and log what happened.
pub async fn deliver(
    client: &Client,
    url: &str,
    notification: &UploadNotification,
) -> NotifyOutcome {
    let outcome = match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                NotifyOutcome::Delivered(status.as_u16())
            } else {
                NotifyOutcome::Rejected(status.as_u16())
            }
        }
        Err(e) if e.is_timeout() => NotifyOutcome::Failed(format!("timed out: {}", e)),
        Err(e) => NotifyOutcome::Failed(e.to_string()),
    };

    match &outcome {
        NotifyOutcome::Delivered(status) => tracing::info!(
            photo_id = %notification.photo_id,
            filename = %notification.filename,
            status,
            "Upload notification delivered"
        ),
        NotifyOutcome::Rejected(status) => tracing::warn!(
            photo_id = %notification.photo_id,
            filename = %notification.filename,
            status,
            "Upload notification rejected"
        ),
        NotifyOutcome::Failed(error) => tracing::warn!(
            photo_id = %notification.photo_id,
            filename = %notification.filename,
            error = %error,
            "Upload notification failed"
        ),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::net::TcpListener;

    fn notification() -> UploadNotification {
        UploadNotification {
            photo_id: "65f1c0ffee0000000000beef".to_string(),
            filename: "a.png".to_string(),
        }
    }

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/fetch-classroom-photos", addr)
    }

    async fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/fetch-classroom-photos", addr)
    }

    fn counting_router(hits: Arc<AtomicUsize>, status: StatusCode) -> Router {
        Router::new().route(
            "/fetch-classroom-photos",
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    status
                }
            }),
        )
    }

    fn client(timeout: Duration) -> Client {
        Client::builder().timeout(timeout).build().unwrap()
    }

    #[tokio::test]
    async fn test_deliver_success() {
        let hits = Arc::new(AtomicUsize::new(0));
        let url = serve(counting_router(hits.clone(), StatusCode::OK)).await;

        let outcome = deliver(&client(Duration::from_secs(5)), &url, &notification()).await;

        assert_eq!(outcome, NotifyOutcome::Delivered(200));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_deliver_error_status_is_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let url = serve(counting_router(hits, StatusCode::INTERNAL_SERVER_ERROR)).await;

        let outcome = deliver(&client(Duration::from_secs(5)), &url, &notification()).await;

        assert_eq!(outcome, NotifyOutcome::Rejected(500));
    }

    #[tokio::test]
    async fn test_deliver_connection_refused() {
        let url = refused_url().await;

        let outcome = deliver(&client(Duration::from_secs(5)), &url, &notification()).await;

        assert!(matches!(outcome, NotifyOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_deliver_times_out() {
        let router = Router::new().route(
            "/fetch-classroom-photos",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::OK
            }),
        );
        let url = serve(router).await;

        let outcome = deliver(&client(Duration::from_millis(200)), &url, &notification()).await;

        match outcome {
            NotifyOutcome::Failed(error) => assert!(error.contains("timed out")),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_worker_sends_one_request_per_notification() {
        let hits = Arc::new(AtomicUsize::new(0));
        let url = serve(counting_router(hits.clone(), StatusCode::OK)).await;

        let (notifier, handle) = UploadNotifier::spawn(NotifierConfig {
            url,
            timeout: Duration::from_secs(5),
            queue_capacity: 8,
        })
        .unwrap();

        notifier.notify(notification());
        notifier.notify(notification());
        notifier.notify(notification());

        handle.shutdown().await;

        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_worker_survives_failing_endpoint() {
        let (notifier, handle) = UploadNotifier::spawn(NotifierConfig {
            url: refused_url().await,
            timeout: Duration::from_secs(1),
            queue_capacity: 8,
        })
        .unwrap();

        notifier.notify(notification());
        tokio::time::sleep(Duration::from_millis(100)).await;
        notifier.notify(notification());

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_notify_after_shutdown_does_not_panic() {
        let (notifier, handle) = UploadNotifier::spawn(NotifierConfig {
            url: refused_url().await,
            timeout: Duration::from_secs(1),
            queue_capacity: 1,
        })
        .unwrap();

        handle.shutdown().await;
        notifier.notify(notification());
    }

    #[test]
    fn test_disabled_notifier_drops_silently() {
        let notifier = UploadNotifier::disabled();
        assert!(!notifier.is_enabled());
        notifier.notify(notification());
    }
}
