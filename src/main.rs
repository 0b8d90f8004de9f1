//! Coindeck - A terminal dashboard for cryptocurrency markets.
//!
//! Logs go to a daily rolling file since the terminal is owned by the UI.

use anyhow::Context;
use coindeck::{App, Config, config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let log_dir = config::log_dir().context("resolving log directory")?;
    let appender = tracing_appender::rolling::daily(log_dir, "coindeck.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coindeck=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default().context("loading configuration")?;
    tracing::info!(
        currency = %config.api.vs_currency,
        news_key = config.news.api_key.is_some(),
        "starting coindeck"
    );

    // Run the application
    let mut app = App::new(config).await?;
    app.run().await?;

    Ok(())
}
