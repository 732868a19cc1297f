use anyhow::Result;
use clap::Parser;

use jobseeker::cli::{run, Cli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(true))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(cli).await
}
