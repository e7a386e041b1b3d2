use anyhow::Result;
use clap::Parser;
use common::ClientConfig;
use common::config::DEFAULT_LOG_LEVEL;
use console::Console;
use console::cli::Cli;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if let Some(session_path) = cli.session_path.clone() {
        config = config.with_session_path(session_path);
    }

    // Logs go to stderr so command output stays pipeable
    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting hotel console");

    let mut console = Console::open(&config)?;

    tokio::select! {
        output = console.run(cli.command) => {
            println!("{}", output?.render()?);
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted; pending requests were cancelled");
        }
    }

    Ok(())
}
