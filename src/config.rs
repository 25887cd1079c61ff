use std::fmt;
use std::time::Duration;

use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File};
use axum::http::HeaderValue;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DEEPL_API_URL: &str = "https://api-free.deepl.com/v2/translate";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://translate.shaily.dev",
    "http://localhost:5173", // Vite dev server
    "http://localhost:3000", // frontend container
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DEEPL_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("invalid DeepL timeout: {0} s")]
    InvalidTimeout(u64),
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
    #[error(transparent)]
    Source(#[from] ::config::ConfigError),
}

/// Process-wide settings, loaded once at startup and read-only afterwards
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub deepl: DeepLConfig,
    pub cors: CorsConfig,
    pub log_filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct DeepLConfig {
    pub api_key: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from defaults, an optional file, and the environment.
    ///
    /// Later sources win. Nested keys use `GATEWAY__SECTION__KEY`, e.g.
    /// `GATEWAY__SERVER__PORT=9000`, and the credential always comes from
    /// `DEEPL_API_KEY` when it is set.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("deepl.api_key", std::env::var("DEEPL_API_KEY").ok())?;

        Self::from_builder(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let builder = ::config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("deepl.api_key", "")?
            .set_default("deepl.api_url", DEFAULT_DEEPL_API_URL)?
            .set_default("deepl.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("cors.allowed_origins", DEFAULT_ALLOWED_ORIGINS.to_vec())?
            .set_default("log_filter", "translation_gateway=info,tower_http=info")?;
        Ok(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deepl.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.deepl.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(self.deepl.timeout_secs));
        }
        self.cors.origin_headers()?;
        Ok(())
    }
}

impl DeepLConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// keep the credential out of logs
impl fmt::Debug for DeepLConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepLConfig")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl CorsConfig {
    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use ::config::FileFormat;

    use super::*;

    fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
        Config::from_builder(
            Config::defaults()
                .expect("defaults")
                .add_source(File::from_str(yaml, FileFormat::Yaml)),
        )
    }

    #[test]
    fn defaults_fill_everything_but_the_key() {
        let config = from_yaml("deepl:\n  api_key: abc\n").expect("config");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.deepl.api_url, DEFAULT_DEEPL_API_URL);
        assert_eq!(config.deepl.timeout(), Duration::from_secs(30));
        assert_eq!(config.cors.allowed_origins, DEFAULT_ALLOWED_ORIGINS.to_vec());
    }

    #[test]
    fn missing_key_refuses_to_load() {
        assert!(matches!(from_yaml("{}"), Err(ConfigError::MissingApiKey)));
        assert!(matches!(
            from_yaml("deepl:\n  api_key: '   '\n"),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn file_overrides_defaults() {
        let yaml = r#"
server:
  port: 9100
deepl:
  api_key: abc
  api_url: http://127.0.0.1:1234/v2/translate
  timeout_secs: 5
cors:
  allowed_origins:
    - https://example.org
"#;
        let config = from_yaml(yaml).expect("config");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.deepl.timeout_secs, 5);
        assert_eq!(config.deepl.api_url, "http://127.0.0.1:1234/v2/translate");
        assert_eq!(config.cors.allowed_origins, vec!["https://example.org"]);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let yaml = "deepl:\n  api_key: abc\n  timeout_secs: 0\n";
        assert!(matches!(from_yaml(yaml), Err(ConfigError::InvalidTimeout(0))));
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let yaml = "deepl:\n  api_key: abc\ncors:\n  allowed_origins: [\"bad\\norigin\"]\n";
        assert!(matches!(from_yaml(yaml), Err(ConfigError::InvalidOrigin(_))));
    }

    #[test]
    fn debug_output_hides_key() {
        let config = from_yaml("deepl:\n  api_key: super-secret\n").expect("config");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
    }
}
