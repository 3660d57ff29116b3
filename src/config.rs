use crate::logger::LogLevel;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ENDPOINT: &str = "/generate_images";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub output_dir: Option<String>,
    pub log_level: Option<LogLevel>,
    /// One JSON object per log line instead of colored text.
    pub log_json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: None,
            endpoint: None,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = env::var("DREAM_WEAVER_URL").ok();
        let endpoint = env::var("DREAM_WEAVER_ENDPOINT").ok();
        let timeout_secs = env::var("DREAM_WEAVER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok());

        ClientConfig {
            base_url,
            endpoint,
            timeout_secs,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Full URL of the generation endpoint.
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let endpoint = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// No timeout unless one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            client: ClientConfig::default(),
            output_dir: None,
            log_level: None,
            log_json: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let output_dir = env::var("DREAM_WEAVER_OUTPUT_DIR").ok();
        let log_level = env::var("DREAM_WEAVER_LOG_LEVEL")
            .ok()
            .and_then(|s| LogLevel::parse(&s));
        let log_json = env::var("DREAM_WEAVER_LOG_JSON")
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        Config {
            client: ClientConfig::from_env(),
            output_dir,
            log_level,
            log_json,
        }
    }

    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    pub fn with_log_json(mut self, enabled: bool) -> Self {
        self.log_json = enabled;
        self
    }

    pub fn output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(".")
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_points_at_local_server() {
        let config = ClientConfig::new();
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:5000/generate_images");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn joins_base_and_endpoint_without_double_slashes() {
        let config = ClientConfig::new()
            .with_base_url("https://weaver.example.com/")
            .with_endpoint("/api/generate_images")
            .with_timeout_secs(90);
        assert_eq!(
            config.endpoint_url(),
            "https://weaver.example.com/api/generate_images"
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn output_dir_defaults_to_current_directory() {
        assert_eq!(Config::new().output_dir(), ".");
        assert_eq!(Config::new().with_output_dir("out").output_dir(), "out");
    }

    #[test]
    fn log_json_flag_accepts_common_truthy_spellings() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(value), "{value}");
        }
        for value in ["", "0", "false", "off", "json"] {
            assert!(!parse_flag(value), "{value}");
        }
        assert!(!Config::new().log_json);
        assert!(Config::new().with_log_json(true).log_json);
    }
}
