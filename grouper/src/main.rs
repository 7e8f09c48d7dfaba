use anyhow::Result;
use clap::Parser;
use grouper::Args;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    grouper::run(args)?;
    Ok(())
}
