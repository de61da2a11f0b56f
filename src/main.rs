use clap::Parser;
use soilviz::{Cli, SoilServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Cli::parse().into_config();
    let server = SoilServer::new(config).await?;
    server.start().await
}
