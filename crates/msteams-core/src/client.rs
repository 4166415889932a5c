//! Webhook client — posts MessageCards to a Teams incoming webhook.
//!
//! The client owns exactly one card at a time. Build it through
//! [`WebhookClient::new_message_card`] or [`WebhookClient::card_mut`], then
//! call [`WebhookClient::send_message`]. Each send is a single POST; there
//! are no retries.

use std::fmt;
use std::time::Duration;

use msteams_card::MessageCard;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::MsTeamsConfig;
use crate::error::{WebhookError, WebhookResult};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for a single Teams incoming webhook.
#[derive(Clone)]
pub struct WebhookClient {
    /// Webhook URL. The path carries the webhook's credentials.
    url: Url,

    /// HTTP client.
    http: Client,

    /// The card being built.
    card: MessageCard,
}

impl fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookClient")
            .field("host", &self.url.host_str())
            .field("card", &self.card)
            .finish_non_exhaustive()
    }
}

impl WebhookClient {
    /// Create a client for the given webhook URL.
    pub fn new(url: &str) -> WebhookResult<Self> {
        Self::with_http_client(url, Client::new())
    }

    /// Create a client with a custom HTTP client.
    pub fn with_http_client(url: &str, http: Client) -> WebhookResult<Self> {
        Ok(Self {
            url: Url::parse(url)?,
            http,
            card: MessageCard::default(),
        })
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(url: &str, timeout: Duration) -> WebhookResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(WebhookError::transport)?;
        Self::with_http_client(url, http)
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &MsTeamsConfig) -> WebhookResult<Self> {
        let url = config.webhook_url.as_deref().ok_or_else(|| {
            WebhookError::Config("no webhook URL configured (set MSTEAMS_WEBHOOK_URL)".into())
        })?;
        match config.timeout() {
            Some(timeout) => Self::with_timeout(url, timeout),
            None => Self::new(url),
        }
    }

    /// Create from `~/.msteams/config.toml` and environment variables.
    ///
    /// Reads `MSTEAMS_WEBHOOK_URL` and `MSTEAMS_TIMEOUT_SECS`.
    pub fn from_env() -> WebhookResult<Self> {
        Self::from_config(&MsTeamsConfig::load()?)
    }

    /// The webhook URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    // ── Card Operations ──────────────────────────────────────

    /// Replace the held card with a new one and return it for building.
    pub fn new_message_card(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        summary: impl Into<String>,
    ) -> &mut MessageCard {
        self.card = MessageCard::new(title, text, summary);
        &mut self.card
    }

    pub fn card(&self) -> &MessageCard {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut MessageCard {
        &mut self.card
    }

    /// Replace the held card.
    pub fn set_card(&mut self, card: MessageCard) {
        self.card = card;
    }

    /// Take the held card, leaving an empty one in its place.
    pub fn take_card(&mut self) -> MessageCard {
        std::mem::take(&mut self.card)
    }

    // ── Delivery ─────────────────────────────────────────────

    /// Send the held card.
    pub async fn send_message(&self) -> WebhookResult<()> {
        self.post_card(&self.card).await
    }

    /// Encode `card` and POST it to the webhook.
    ///
    /// Succeeds only on HTTP 200. Any other status yields
    /// [`WebhookError::Delivery`] with the full response body.
    pub async fn post_card(&self, card: &MessageCard) -> WebhookResult<()> {
        let payload = serde_json::to_vec(card)?;

        tracing::debug!(
            host = self.url.host_str().unwrap_or_default(),
            bytes = payload.len(),
            sections = card.sections.len(),
            actions = card.potential_actions.len(),
            "Posting message card"
        );

        let response = self
            .http
            .post(self.url.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await
            .map_err(WebhookError::transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.map_err(WebhookError::transport)?;
            tracing::warn!(status = status.as_u16(), body = %body, "Webhook rejected message card");
            return Err(WebhookError::Delivery {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "Message card delivered");
        Ok(())
    }
}
