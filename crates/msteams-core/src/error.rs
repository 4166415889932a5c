//! Webhook error types.

use thiserror::Error;

/// Errors that can occur when delivering a MessageCard.
///
/// Every failure of a send is exactly one of `Encoding`, `Transport` or
/// `Delivery`; none are retried.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The card could not be serialized to JSON.
    #[error("failed to encode message card: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The request could not be sent or no response was received.
    #[error("failed to reach webhook: {0}")]
    Transport(#[source] reqwest::Error),

    /// The webhook answered with a status other than 200.
    #[error("webhook rejected message card with status {status}: {body}")]
    Delivery { status: u16, body: String },

    /// The webhook URL could not be parsed.
    #[error("invalid webhook URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Missing or malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl WebhookError {
    /// Wrap a transport failure, stripping the URL so the webhook token
    /// embedded in its path never reaches logs or error messages.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        WebhookError::Transport(err.without_url())
    }

    /// HTTP status of a rejected delivery.
    pub fn status(&self) -> Option<u16> {
        match self {
            WebhookError::Delivery { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Webhook Result type alias.
pub type WebhookResult<T> = Result<T, WebhookError>;
