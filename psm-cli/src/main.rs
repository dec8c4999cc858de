//! PSM CLI - render and inspect the political stability map data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "psm-cli",
    version,
    about = "Political stability choropleth and arms-deliveries toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: psm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    psm_cmd::run(cli.command).await
}
