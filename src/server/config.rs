use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FILESERVER_ROOT: &str = ".";

/// Longest chirp accepted, in characters.
pub const DEFAULT_CHIRP_MAX_LENGTH: usize = 140;

/// Words masked out of accepted chirps.
pub const DEFAULT_FORBIDDEN_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Deployment platform the server runs on.
///
/// Destructive admin operations such as resetting the database are only available on
/// `Dev`. Any `PLATFORM` value other than `dev` is treated as `Production`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Dev,
    Production,
}

impl Platform {
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dev") {
            Self::Dev
        } else {
            Self::Production
        }
    }
}

/// Length limit and word list applied to every chirp.
///
/// Built once at startup and shared read-only across request handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpRules {
    pub max_length: usize,
    /// Lowercase words; matched against lowercased tokens.
    pub forbidden_words: Vec<String>,
}

impl Default for ChirpRules {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_CHIRP_MAX_LENGTH,
            forbidden_words: DEFAULT_FORBIDDEN_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub platform: Platform,
    pub bind_addr: SocketAddr,
    pub fileserver_root: String,
    pub chirp_rules: ChirpRules,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let bind_addr_value =
            lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                value: bind_addr_value.clone(),
            })?;

        let mut chirp_rules = ChirpRules::default();
        if let Some(value) = lookup("CHIRP_MAX_LENGTH") {
            chirp_rules.max_length = match value.parse::<usize>() {
                Ok(max_length) if max_length > 0 => max_length,
                _ => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "CHIRP_MAX_LENGTH".to_string(),
                        value,
                    }
                    .into())
                }
            };
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            platform: Platform::from_env_value(&required("PLATFORM")?),
            bind_addr,
            fileserver_root: lookup("FILESERVER_ROOT")
                .unwrap_or_else(|| DEFAULT_FILESERVER_ROOT.to_string()),
            chirp_rules,
        })
    }
}
