//! cardscrape - wiki card catalog scraper and fixture pipeline.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging based on verbosity
    let default_filter = if cardscrape::cli::is_verbose() {
        "cardscrape=info"
    } else {
        "cardscrape=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cardscrape::cli::run().await
}
