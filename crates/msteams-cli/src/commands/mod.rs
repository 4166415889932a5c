//! CLI command definitions and dispatch.

pub mod card;
pub mod preview;
pub mod send;

use clap::{Parser, Subcommand};
use msteams_core::{MsTeamsConfig, WebhookClient};

/// msteams CLI — post MessageCards to Microsoft Teams incoming webhooks.
#[derive(Parser)]
#[command(
    name = "msteams",
    version,
    about = "Send MessageCards to Microsoft Teams incoming webhooks",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Webhook URL (overrides config and MSTEAMS_WEBHOOK_URL).
    #[arg(long, global = true, env = "MSTEAMS_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Emit JSON log lines.
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a card from flags and send it.
    Send(card::CardArgs),

    /// Send a card stored as JSON or YAML.
    SendFile(send::SendFileArgs),

    /// Build a card from flags and print its JSON instead of sending it.
    Preview(card::CardArgs),

    /// Print the JSON Schema of the MessageCard format.
    Schema,
}

/// Execute the CLI command.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let mut config = MsTeamsConfig::load()?;
    if cli.webhook_url.is_some() {
        config.webhook_url = cli.webhook_url;
    }
    if cli.timeout.is_some() {
        config.timeout_secs = cli.timeout;
    }
    if cli.log_json {
        config.telemetry.json = true;
    }

    msteams_core::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Send(args) => send::send(&args, &config).await,
        Commands::SendFile(args) => send::send_file(&args, &config).await,
        Commands::Preview(args) => preview::preview(&args),
        Commands::Schema => preview::schema(),
    }
}

/// Build a webhook client from the resolved configuration.
fn client(config: &MsTeamsConfig) -> anyhow::Result<WebhookClient> {
    Ok(WebhookClient::from_config(config)?)
}
