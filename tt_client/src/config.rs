//! Client configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::path::PathBuf;
use team_trivia::auth::DEFAULT_ACCESS_HASH;

pub const TEAMS_PATH_VAR: &str = "TRIVIA_TEAMS_PATH";
pub const QUESTIONS_PATH_VAR: &str = "TRIVIA_QUESTIONS_PATH";
pub const ACCESS_HASH_VAR: &str = "TRIVIA_ACCESS_HASH";
pub const SKIP_ACCESS_VAR: &str = "TRIVIA_SKIP_ACCESS";

/// Complete client configuration loaded from environment variables
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ClientConfig {
    /// Teams JSON document
    pub teams_path: PathBuf,
    /// Questions JSON document
    pub questions_path: PathBuf,
    /// Hex SHA-256 digest of the access code
    pub access_hash: String,
    /// Open team setup without asking for a code
    pub skip_access: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            teams_path: PathBuf::from("teams.json"),
            questions_path: PathBuf::from("questions.json"),
            access_hash: DEFAULT_ACCESS_HASH.to_string(),
            skip_access: false,
        }
    }
}

/// Values given on the command line. These win over the environment.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub teams_path: Option<PathBuf>,
    pub questions_path: Option<PathBuf>,
    pub access_hash: Option<String>,
    pub skip_access: bool,
}

impl ClientConfig {
    /// Load configuration from environment variables, applying command line
    /// overrides on top.
    ///
    /// # Errors
    ///
    /// Returns error if the resulting configuration fails [`Self::validate`].
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let teams_path = overrides
            .teams_path
            .or_else(|| std::env::var_os(TEAMS_PATH_VAR).map(PathBuf::from))
            .unwrap_or(defaults.teams_path);

        let questions_path = overrides
            .questions_path
            .or_else(|| std::env::var_os(QUESTIONS_PATH_VAR).map(PathBuf::from))
            .unwrap_or(defaults.questions_path);

        let access_hash = overrides
            .access_hash
            .or_else(|| std::env::var(ACCESS_HASH_VAR).ok())
            .unwrap_or(defaults.access_hash);

        let skip_access = overrides.skip_access || parse_env_or(SKIP_ACCESS_VAR, false);

        let config = ClientConfig {
            teams_path,
            questions_path,
            access_hash: access_hash.trim().to_lowercase(),
            skip_access,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.teams_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: TEAMS_PATH_VAR.to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.questions_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: QUESTIONS_PATH_VAR.to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.access_hash.len() != 64
            || !self.access_hash.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid {
                var: ACCESS_HASH_VAR.to_string(),
                reason: "Must be a SHA-256 digest (64 hex digits)".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
