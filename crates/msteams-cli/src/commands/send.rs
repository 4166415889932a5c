//! `msteams send` / `msteams send-file` — deliver a card to the webhook.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use colored::Colorize;
use msteams_card::MessageCard;
use msteams_core::{MsTeamsConfig, WebhookError};

use super::card::CardArgs;

#[derive(Args)]
pub struct SendFileArgs {
    /// Path to a card in JSON (.json) or YAML (.yaml, .yml).
    pub path: PathBuf,
}

pub async fn send(args: &CardArgs, config: &MsTeamsConfig) -> anyhow::Result<()> {
    let card = args.build()?;
    deliver(card, config).await
}

pub async fn send_file(args: &SendFileArgs, config: &MsTeamsConfig) -> anyhow::Result<()> {
    let card = load_card(&args.path)?;
    deliver(card, config).await
}

/// Read a card file, choosing the format by extension.
pub fn load_card(path: &Path) -> anyhow::Result<MessageCard> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let card = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => MessageCard::from_yaml(&raw),
        _ => MessageCard::from_json(&raw),
    }
    .with_context(|| format!("invalid card in {}", path.display()))?;

    tracing::debug!(path = %path.display(), sections = card.sections.len(), "Loaded card file");

    Ok(card)
}

async fn deliver(card: MessageCard, config: &MsTeamsConfig) -> anyhow::Result<()> {
    let mut client = super::client(config)?;
    client.set_card(card);

    match client.send_message().await {
        Ok(()) => {
            println!("  {} Message card delivered.", "✓".green().bold());
            Ok(())
        }
        Err(WebhookError::Delivery { status, body }) => {
            println!("  {} Webhook answered {}", "✗".red().bold(), status.to_string().red());
            if !body.is_empty() {
                println!("    {}", body.dimmed());
            }
            Err(WebhookError::Delivery { status, body }.into())
        }
        Err(e) => Err(e.into()),
    }
}
