use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Connection settings for the text-generation endpoint.
///
/// Deserializable so a host can pass it in as JSON; every field has a
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub endpoint: String,
    /// Sent as the `key` query parameter when present.
    pub api_key: Option<String>,
    /// Per-attempt timeout. Default: **20 s**.
    pub timeout_secs: u64,
    /// Extra attempts after a network failure. Clamped to 1.
    pub max_retries: u8,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: 20,
            max_retries: 1,
        }
    }
}

impl AssistantConfig {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn retries(&self) -> u8 {
        self.max_retries.min(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: AssistantConfig =
            serde_json::from_str(r#"{ "api_key": "k", "max_retries": 5 }"#).unwrap();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.api_key.as_deref(), Some("k"));
        assert_eq!(cfg.retries(), 1);
        assert_eq!(cfg.timeout(), Duration::from_secs(20));
    }

    #[test]
    fn zero_timeout_is_raised() {
        let cfg = AssistantConfig {
            timeout_secs: 0,
            ..AssistantConfig::default()
        };
        assert_eq!(cfg.timeout(), Duration::from_secs(1));
    }
}
