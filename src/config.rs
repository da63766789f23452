//! Server configuration from environment variables
//!
//! Every variable is optional; unset or unparseable values fall back to the
//! defaults below.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://127.0.0.1:8000/api/chat";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub chat_endpoint: String,
    pub chat_timeout: Duration,
    pub crop_delay: Duration,
    pub disease_delay: Duration,
    /// Remote classifier; `None` keeps the simulated one
    pub disease_classifier_url: Option<String>,
    pub session_idle: Duration,
    pub max_upload_bytes: usize,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            chat_timeout: Duration::from_secs(10),
            crop_delay: Duration::from_millis(2000),
            disease_delay: Duration::from_millis(3000),
            disease_classifier_url: None,
            session_idle: Duration::from_secs(1800),
            max_upload_bytes: 10 * 1024 * 1024,
            static_dir: "static".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        Self {
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            chat_endpoint: lookup("CHAT_ENDPOINT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.chat_endpoint),
            chat_timeout: parsed("CHAT_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.chat_timeout),
            crop_delay: parsed("CROP_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.crop_delay),
            disease_delay: parsed("DISEASE_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.disease_delay),
            disease_classifier_url: lookup("DISEASE_CLASSIFIER_URL").filter(|v| !v.trim().is_empty()),
            session_idle: parsed("SESSION_IDLE_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_idle),
            max_upload_bytes: parsed("MAX_UPLOAD_BYTES")
                .map(|n| n as usize)
                .unwrap_or(defaults.max_upload_bytes),
            static_dir: lookup("STATIC_DIR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.static_dir),
        }
    }

    /// Instant responses, for tests and demos
    pub fn without_delays(mut self) -> Self {
        self.crop_delay = Duration::ZERO;
        self.disease_delay = Duration::ZERO;
        self
    }

    pub fn log_summary(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  PORT: {}", self.port);
        tracing::info!("  CHAT_ENDPOINT: {}", self.chat_endpoint);
        tracing::info!("  CHAT_TIMEOUT_SECS: {}", self.chat_timeout.as_secs());
        tracing::info!("  CROP_DELAY_MS: {}", self.crop_delay.as_millis());
        tracing::info!("  DISEASE_DELAY_MS: {}", self.disease_delay.as_millis());
        tracing::info!(
            "  DISEASE_CLASSIFIER_URL: {}",
            self.disease_classifier_url.as_deref().unwrap_or("(simulated)")
        );
        tracing::info!("  SESSION_IDLE_SECS: {}", self.session_idle.as_secs());
        tracing::info!("  MAX_UPLOAD_BYTES: {}", self.max_upload_bytes);
        tracing::info!("  STATIC_DIR: {}", self.static_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().max_upload_bytes, 10_485_760);
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("PORT", "8080"),
            ("CHAT_ENDPOINT", "http://chat.local/api/chat"),
            ("CROP_DELAY_MS", "0"),
            ("DISEASE_CLASSIFIER_URL", "http://vision.local/classify"),
            ("SESSION_IDLE_SECS", "60"),
        ]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.chat_endpoint, "http://chat.local/api/chat");
        assert_eq!(cfg.crop_delay, Duration::ZERO);
        assert_eq!(cfg.disease_delay, Duration::from_secs(3));
        assert_eq!(cfg.disease_classifier_url.as_deref(), Some("http://vision.local/classify"));
        assert_eq!(cfg.session_idle, Duration::from_secs(60));
    }

    #[test]
    fn test_garbage_falls_back() {
        let cfg = config(&[("PORT", "eighty"), ("CHAT_TIMEOUT_SECS", "-1"), ("DISEASE_CLASSIFIER_URL", " ")]);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.chat_timeout, Duration::from_secs(10));
        assert_eq!(cfg.disease_classifier_url, None);
    }
}
