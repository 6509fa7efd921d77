//! Configuration persistence.
//!
//! The configuration is a small JSON record under the per-user application
//! directory. The store supplies hard-coded defaults and heals the file in
//! place: a missing or unparseable file is rewritten wholesale with the
//! default record, never merged field by field. A field absent from the file
//! is therefore a parse failure, not a partial default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{SenderError, SenderResult};

/// Per-user application directory name.
pub const CONFIG_DIR: &str = ".gmail-hotkey-sender";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Sender configuration.
///
/// Deliberately derives `Deserialize` without per-field defaults: the record
/// is either parsed in full or replaced in full by [`SenderConfig::default`].
/// No field-level validation is applied on load; out-of-range values such as
/// a negative `rate_limit` are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderConfig {
    /// Path to the OAuth2 client credentials file.
    pub credentials_file: String,
    /// Path to the cached OAuth2 token file.
    pub token_file: String,
    /// Subject used when none is given on the command line.
    pub default_subject: String,
    /// Body used when none is given on the command line.
    pub default_body: String,
    /// Advisory daily send limit. Never enforced by any component.
    pub rate_limit: i64,
    /// Whether successful sends are appended to the sent-email log.
    pub log_sent_emails: bool,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            credentials_file: "credentials.json".to_string(),
            token_file: "token.json".to_string(),
            default_subject: String::new(),
            default_body: String::new(),
            rate_limit: 100,
            log_sent_emails: true,
        }
    }
}

/// File-backed configuration store.
///
/// # Example
///
/// ```no_run
/// use gmail_hotkey_sender::config::ConfigStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = ConfigStore::open(None)?;
/// let config = store.load();
/// assert!(!config.credentials_file.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Returns the default configuration path,
    /// `<home>/.gmail-hotkey-sender/config.json`.
    ///
    /// Fails when the home directory cannot be determined; without it the
    /// process has no writable location for config or logs, so callers are
    /// expected to abort startup on this error.
    pub fn default_path() -> SenderResult<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SenderError::home_dir("unable to determine the user home directory"))?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Opens the store at the override path when given, else at
    /// [`ConfigStore::default_path`], creating the parent directory and its
    /// parents as needed.
    pub fn open(override_path: Option<PathBuf>) -> SenderResult<Self> {
        let path = match override_path {
            Some(path) => path,
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                SenderError::config_write(format!(
                    "failed to create config directory {}",
                    parent.display()
                ))
                .with_cause(err)
            })?;
        }

        Ok(Self { path })
    }

    /// Opens the store at an explicit path without touching the filesystem.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, healing the file when necessary.
    ///
    /// Missing file: the default record is persisted and returned. Parse
    /// failure: a warning is logged and the file is overwritten with the
    /// default record, which is returned; the parse error is not surfaced.
    /// A healed file parses cleanly, so a second load triggers no further
    /// writes. On success the parsed record is returned verbatim.
    pub fn load(&self) -> SenderConfig {
        match fs::read_to_string(&self.path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "invalid JSON in config file, rewriting defaults"
                    );
                    let config = SenderConfig::default();
                    self.save(&config);
                    config
                }
            },
            Err(_) => {
                let config = SenderConfig::default();
                self.save(&config);
                config
            }
        }
    }

    /// Saves the configuration, logging and swallowing any failure.
    pub fn save(&self, config: &SenderConfig) {
        if let Err(err) = self.try_save(config) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to save config");
        }
    }

    /// Saves the configuration, surfacing the failure to the caller.
    ///
    /// Serializes with stable 2-space indentation and overwrites the whole
    /// file.
    pub fn try_save(&self, config: &SenderConfig) -> SenderResult<()> {
        let data = serde_json::to_string_pretty(config).map_err(|err| {
            SenderError::config_write("failed to serialize config").with_cause(err)
        })?;
        fs::write(&self.path, data).map_err(|err| {
            SenderError::config_write(format!("failed to write {}", self.path.display()))
                .with_cause(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_returns_defaults_and_persists_them() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));

        let config = store.load();
        assert_eq!(config, SenderConfig::default());

        // The file left behind is valid JSON containing exactly the defaults.
        let on_disk: SenderConfig =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk, SenderConfig::default());
    }

    #[test]
    fn test_load_malformed_file_heals_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let store = ConfigStore::at(&path);
        let config = store.load();
        assert_eq!(config, SenderConfig::default());

        // Healed file is valid, so a second load parses it and returns the
        // same record without another heal.
        let healed = fs::read_to_string(&path).unwrap();
        let again = store.load();
        assert_eq!(again, config);
        assert_eq!(fs::read_to_string(&path).unwrap(), healed);
    }

    #[test]
    fn test_missing_field_heals_wholesale_not_partially() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        // rate_limit is absent; the record must be replaced in full, not
        // merged around the present fields.
        fs::write(
            &path,
            r#"{
  "credentials_file": "custom.json",
  "token_file": "token.json",
  "default_subject": "kept?",
  "default_body": "",
  "log_sent_emails": false
}"#,
        )
        .unwrap();

        let config = ConfigStore::at(&path).load();
        assert_eq!(config, SenderConfig::default());
        assert_eq!(config.credentials_file, "credentials.json");
    }

    #[test]
    fn test_round_trip_preserves_arbitrary_values() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));

        let config = SenderConfig {
            credentials_file: "work-creds.json".to_string(),
            token_file: "/tmp/token.json".to_string(),
            default_subject: "weekly report".to_string(),
            default_body: "see attachment".to_string(),
            rate_limit: -5,
            log_sent_emails: false,
        };

        store.try_save(&config).unwrap();
        assert_eq!(store.load(), config);

        // Load-then-save-then-load is identity.
        store.try_save(&store.load()).unwrap();
        assert_eq!(store.load(), config);
    }

    #[test]
    fn test_save_uses_two_space_indentation() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("config.json"));

        store.try_save(&SenderConfig::default()).unwrap();
        let data = fs::read_to_string(store.path()).unwrap();
        assert!(data.contains("\n  \"credentials_file\""));
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.json");

        let store = ConfigStore::open(Some(path.clone())).unwrap();
        assert_eq!(store.path(), path);
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // Point at a path whose parent does not exist; save must not panic
        // and must not surface the error.
        let store = ConfigStore::at(dir.path().join("missing").join("config.json"));
        store.save(&SenderConfig::default());
        assert!(!store.path().exists());
    }
}
