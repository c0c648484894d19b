use educonnect_core::Config;

// Use mimalloc as the global allocator
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    // Database, notifier, services and routes
    let app = educonnect_api::setup::initialize_app(config.clone()).await?;

    let result = educonnect_api::setup::server::start_server(&config, app.router.clone()).await;

    app.shutdown().await;

    result
}
