//! Docsmith service entry point.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use docsmith::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let config = Config::from_env().context("configuration error")?;
    info!("using API key from {}", config.key_source);
    info!(model = %config.model, port = config.port, "starting docsmith");

    docsmith::server::run(config).await
}
