use crate::config::error::{ConfigError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Root client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the platform, e.g. "https://app.example.com".
    /// Mount prefixes belong in `console_path`/`connect_path`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the console (organization-scoped) GraphQL endpoint
    #[serde(default = "default_console_path")]
    pub console_path: String,

    /// Path of the connect (identity and session) GraphQL endpoint
    #[serde(default = "default_connect_path")]
    pub connect_path: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Bearer token used instead of a session cookie (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Settings for generated end-to-end fixtures
    #[serde(default)]
    pub fixtures: FixtureConfig,
}

/// Fixture user settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Password given to every generated user
    #[serde(default = "default_password")]
    pub password: String,

    /// Domain of generated e-mail addresses
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_console_path() -> String {
    "/api/console/v1/graphql".to_string()
}
fn default_connect_path() -> String {
    "/api/connect/v1/graphql".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("govern-e2e/{}", env!("CARGO_PKG_VERSION"))
}
fn default_password() -> String {
    "E2e-Passw0rd!".to_string()
}
fn default_email_domain() -> String {
    "e2e.govern.test".to_string()
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            password: default_password(),
            email_domain: default_email_domain(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            console_path: default_console_path(),
            connect_path: default_connect_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            api_token: None,
            fixtures: FixtureConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults pointed at another server, e.g. a mock server in tests.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn console_url(&self) -> Result<Url> {
        self.endpoint(&self.console_path)
    }

    pub fn connect_url(&self) -> Result<Url> {
        self.endpoint(&self.connect_path)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError(format!(
                "base_url must use http or https, got {}",
                base.scheme()
            )));
        }
        if base.path() != "/" {
            return Err(ConfigError::ValidationError(format!(
                "base_url must not carry a path, got {:?}; put it in console_path and connect_path",
                base.path()
            )));
        }
        for (name, path) in [
            ("console_path", &self.console_path),
            ("connect_path", &self.connect_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must start with '/', got {path:?}"
                )));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration loader with layered merging support
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration with layered merging:
    /// 1. Start with defaults (from Default implementations)
    /// 2. Merge config file if provided
    /// 3. Override with environment variables (GOVERN_ prefix)
    pub fn load(&self) -> Result<ClientConfig> {
        let mut builder = Config::builder();

        let defaults_json = serde_json::to_string(&ClientConfig::default())?;
        builder = builder.add_source(File::from_str(&defaults_json, config::FileFormat::Json));

        if let Some(ref path) = self.config_path {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            } else {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
        }

        // Double underscore for nesting: GOVERN_FIXTURES__PASSWORD=secret
        builder = builder.add_source(
            Environment::with_prefix("GOVERN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: ClientConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(base_url = %config.base_url, "loaded client configuration");
        Ok(config)
    }

    /// Locate the default config file in standard locations:
    /// 1. Current directory: ./govern.toml
    /// 2. XDG config: ~/.config/govern/config.toml
    /// 3. Home directory: ~/.govern.toml
    pub fn find_config_file() -> Option<PathBuf> {
        let cwd_config = PathBuf::from("./govern.toml");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("govern").join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".govern.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// Load configuration from default locations
    pub fn load_default() -> Result<ClientConfig> {
        let loader = match Self::find_config_file() {
            Some(config_path) => ConfigLoader::new().with_file(config_path),
            None => ConfigLoader::new(),
        };
        loader.load()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
