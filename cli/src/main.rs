use anyhow::Result;
use clap::Parser;
use counterdex_cli::{Args, run};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "counterdex_engine=info,counterdex_cli=info";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = run(&args).await?;
    println!("{report}");
    Ok(())
}
