use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use receiver_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "dink-receiver")]
#[command(about = "Receiver for Dink webhook notifications", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen address, e.g. 0.0.0.0:3245
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, notices) = AppConfig::load(args.config).await?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
        config.validate()?;
    }

    let _guard = receiver_bootstrap::logging::init_tracing(&config);
    for notice in &notices {
        tracing::warn!("{}", notice);
    }
    tracing::info!(
        bind_addr = %config.bind_addr,
        archive_backend = ?config.archive_backend,
        "starting dink-receiver"
    );

    receiver_bootstrap::run_standalone(config).await
}
