use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_api::{config, server};

#[tokio::main]
async fn main() {
    // .env may carry RUST_LOG, so load it before the subscriber
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = config::Config::from_env();

    if let Err(e) = server::run(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
