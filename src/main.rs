use anyhow::Result;
use clap::Parser;
use company_research::cli::{handle_research_command, ResearchCli};
use company_research::{ApiClient, ClientConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = ResearchCli::parse();

    let mut config = ClientConfig::load();
    if let Some(base_url) = cli.base_url.clone() {
        config = config.with_base_url(base_url);
    }
    let client = ApiClient::new(config)?;
    info!(
        "Using analysis service at {} (timeout {:?})",
        client.base_url(),
        client.timeout()
    );
    handle_research_command(&client, cli.command).await
}
