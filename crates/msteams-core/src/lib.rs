//! # msteams-core
//!
//! Client SDK for Microsoft Teams incoming webhooks.
//!
//! This crate provides:
//! - [`WebhookClient`] — owns a [`MessageCard`](msteams_card::MessageCard)
//!   and delivers it with a single HTTP POST
//! - [`WebhookError`] — encoding, transport and delivery failures
//! - [`MsTeamsConfig`] — file and environment configuration
//! - [`telemetry::init_telemetry`] — tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use msteams_core::WebhookClient;
//! use msteams_core::msteams_card::{OsType, UriTarget};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = WebhookClient::new("https://example.webhook.office.com/webhookb2/...")?;
//!
//!     let card = client.new_message_card("Hi", "Testing OpenURI", "this is my summary");
//!     card.set_theme_color("2DC72D");
//!     card.add_section("foo", "bar", true);
//!     card.create_open_uri_action(
//!         "Test Open URI",
//!         vec![UriTarget::new(OsType::Windows, "https://www.example.com")],
//!     );
//!
//!     client.send_message().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-exports
pub use client::WebhookClient;
pub use config::{MsTeamsConfig, TelemetryConfig};
pub use error::{WebhookError, WebhookResult};

// Re-export msteams-card types for convenience
pub use msteams_card;
