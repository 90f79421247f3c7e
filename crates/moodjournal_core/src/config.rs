//! Runtime configuration resolved from environment variables.
//!
//! # Responsibility
//! - Select the entry store backend and its location.
//! - Carry logging and demo-seeding switches to the binary.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - Resolution never touches the filesystem.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_STORE: &str = "MOODJOURNAL_STORE";
pub const ENV_DB_PATH: &str = "MOODJOURNAL_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "MOODJOURNAL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "MOODJOURNAL_LOG_DIR";
pub const ENV_SEED_DEMO: &str = "MOODJOURNAL_SEED_DEMO";

const SQLITE_FILE_NAME: &str = "moodjournal.sqlite3";
const JSON_FILE_NAME: &str = "moodjournal.json";

/// Entry store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Json,
    /// Volatile; nothing survives the process.
    Memory,
}

impl StoreKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(Self::Sqlite),
            "json" => Some(Self::Json),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Json => "json",
            Self::Memory => "memory",
        }
    }

    /// Default store location under the system temp directory.
    pub fn default_path(self) -> PathBuf {
        let file_name = match self {
            Self::Json => JSON_FILE_NAME,
            Self::Sqlite | Self::Memory => SQLITE_FILE_NAME,
        };
        std::env::temp_dir().join(file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidStore(String),
    InvalidLogLevel(String),
    InvalidBool { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStore(value) => write!(
                f,
                "unsupported {ENV_STORE} `{value}`; expected sqlite|json|memory"
            ),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::InvalidBool { key, value } => {
                write!(f, "invalid {key} `{value}`; expected true|false")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    pub store: StoreKind,
    /// Database or JSON file path; ignored by the memory store.
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
    /// Populate an empty store with the demo journal on startup.
    pub seed_demo: bool,
}

impl JournalConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let store = match read(ENV_STORE) {
            Some(value) => StoreKind::parse(&value).ok_or(ConfigError::InvalidStore(value))?,
            None => StoreKind::Sqlite,
        };
        let db_path = read(ENV_DB_PATH).map_or_else(|| store.default_path(), PathBuf::from);
        let log_level = match read(ENV_LOG_LEVEL) {
            Some(value) => normalize_level(&value).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };
        let log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        let seed_demo = match read(ENV_SEED_DEMO) {
            Some(value) => parse_bool(ENV_SEED_DEMO, &value)?,
            None => true,
        };

        Ok(Self {
            store,
            db_path,
            log_level,
            log_dir,
            seed_demo,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ConfigError, JournalConfig, StoreKind, ENV_DB_PATH, ENV_LOG_LEVEL, ENV_SEED_DEMO, ENV_STORE,
    };
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn resolve(vars: &[(&str, &str)]) -> Result<JournalConfig, ConfigError> {
        let map = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect::<HashMap<_, _>>();
        JournalConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_to_sqlite_with_demo_seeding() {
        let config = resolve(&[]).unwrap();
        assert_eq!(config.store, StoreKind::Sqlite);
        assert_eq!(config.db_path, StoreKind::Sqlite.default_path());
        assert!(config.seed_demo);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn reads_explicit_values() {
        let config = resolve(&[
            (ENV_STORE, " JSON "),
            (ENV_DB_PATH, "/var/lib/journal.json"),
            (ENV_LOG_LEVEL, "warning"),
            (ENV_SEED_DEMO, "false"),
        ])
        .unwrap();
        assert_eq!(config.store, StoreKind::Json);
        assert_eq!(config.db_path, PathBuf::from("/var/lib/journal.json"));
        assert_eq!(config.log_level, "warn");
        assert!(!config.seed_demo);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = resolve(&[(ENV_STORE, "  "), (ENV_DB_PATH, "")]).unwrap();
        assert_eq!(config.store, StoreKind::Sqlite);
        assert_eq!(config.db_path, StoreKind::Sqlite.default_path());
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            resolve(&[(ENV_STORE, "mysql")]).unwrap_err(),
            ConfigError::InvalidStore("mysql".to_string())
        );
        assert!(matches!(
            resolve(&[(ENV_SEED_DEMO, "maybe")]).unwrap_err(),
            ConfigError::InvalidBool { .. }
        ));
        assert!(matches!(
            resolve(&[(ENV_LOG_LEVEL, "verbose")]).unwrap_err(),
            ConfigError::InvalidLogLevel(_)
        ));
    }
}
