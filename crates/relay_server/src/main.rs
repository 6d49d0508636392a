use relay_service::RelayConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    tracing::info!("Starting standalone chat relay...");

    let config = RelayConfig::from_env();
    if let Err(e) = relay_service::server::run(config).await {
        tracing::error!("Failed to run chat relay: {}", e);
        std::process::exit(1);
    }
}
