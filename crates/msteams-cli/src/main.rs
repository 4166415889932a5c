//! msteams CLI — send MessageCards to Teams incoming webhooks.

mod commands;

use clap::Parser;
use commands::{Cli, execute};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(cli).await
}
