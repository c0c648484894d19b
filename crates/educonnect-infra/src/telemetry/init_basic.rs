use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "educonnect=debug,tower_http=debug";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Production emits JSON lines; other
/// environments use the compact human-readable format.
pub fn init_telemetry(
    service_name: &str,
    service_version: &str,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if json_output {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init()?;
    }

    tracing::info!(
        service = service_name,
        version = service_version,
        json = json_output,
        "Tracing initialized"
    );
    Ok(())
}

pub async fn shutdown_telemetry() {
    tracing::debug!("Telemetry shutdown");
}
