use std::path::PathBuf;

use clap::Parser;
use glossa::{Config, Glossa};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "glossa", version, about = "Segment CJK text and look up its words")]
struct Cli {
    /// JSON config profile; environment variables are used when absent
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };

    let glossa = Glossa::new(config);
    commands::run(cli.command, &glossa).await
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
