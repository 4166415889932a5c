//! Configuration for the msteams SDK and CLI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{WebhookError, WebhookResult};

/// Environment variable holding the webhook URL.
pub const WEBHOOK_URL_ENV: &str = "MSTEAMS_WEBHOOK_URL";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "MSTEAMS_TIMEOUT_SECS";

/// msteams configuration — typically stored at `~/.msteams/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MsTeamsConfig {
    /// Incoming webhook URL (or read from MSTEAMS_WEBHOOK_URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl MsTeamsConfig {
    /// `~/.msteams/config.toml`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(".msteams").join("config.toml"))
    }

    /// Load the default config file (if present) and apply environment
    /// overrides on top.
    pub fn load() -> WebhookResult<Self> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Load a config file without environment overrides.
    pub fn load_from(path: &Path) -> WebhookResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            WebhookError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&raw)
            .map_err(|e| WebhookError::Config(format!("invalid {}: {e}", path.display())))
    }

    /// Apply MSTEAMS_WEBHOOK_URL and MSTEAMS_TIMEOUT_SECS.
    pub fn apply_env(&mut self) -> WebhookResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> WebhookResult<()> {
        if let Some(url) = lookup(WEBHOOK_URL_ENV).filter(|u| !u.is_empty()) {
            self.webhook_url = Some(url);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|t| !t.is_empty()) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                WebhookError::Config(format!("{TIMEOUT_ENV} must be a whole number, got {raw:?}"))
            })?;
            self.timeout_secs = Some(secs);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Telemetry/observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Emit JSON log lines instead of the compact human format.
    #[serde(default)]
    pub json: bool,

    /// Export spans over OTLP.
    #[serde(default)]
    pub otlp_enabled: bool,

    /// OTLP exporter endpoint.
    #[serde(default = "default_otlp_endpoint")]
    pub otlp_endpoint: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json: false,
            otlp_enabled: false,
            otlp_endpoint: default_otlp_endpoint(),
        }
    }
}

fn default_otlp_endpoint() -> String {
    "http://localhost:4317".into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
webhook_url = "https://example.webhook.office.com/webhookb2/abc"
timeout_secs = 10

[telemetry]
json = true
"#,
        )
        .unwrap();

        let config = MsTeamsConfig::load_from(&path).unwrap();
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://example.webhook.office.com/webhookb2/abc")
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert!(config.telemetry.json);
        assert!(!config.telemetry.otlp_enabled);
        assert_eq!(config.telemetry.otlp_endpoint, "http://localhost:4317");
    }

    #[test]
    fn test_load_from_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MsTeamsConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, WebhookError::Config(_)));
    }

    #[test]
    fn test_load_from_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();

        let err = MsTeamsConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, WebhookError::Config(_)));
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut config = MsTeamsConfig {
            webhook_url: Some("https://from-file".into()),
            timeout_secs: Some(30),
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            (WEBHOOK_URL_ENV, "https://from-env"),
            (TIMEOUT_ENV, "5"),
        ]);

        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.webhook_url.as_deref(), Some("https://from-env"));
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let mut config = MsTeamsConfig {
            webhook_url: Some("https://from-file".into()),
            ..Default::default()
        };
        config.apply_overrides(|_| Some(String::new())).unwrap();
        assert_eq!(config.webhook_url.as_deref(), Some("https://from-file"));
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn test_invalid_timeout_override() {
        let mut config = MsTeamsConfig::default();
        let err = config
            .apply_overrides(|key| (key == TIMEOUT_ENV).then(|| "ten".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }
}
