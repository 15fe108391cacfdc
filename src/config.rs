//! Configuration loading for the flashcard trainer.
//!
//! Configuration follows a precedence chain:
//! 1. Command-line flags (highest priority, applied by the binary)
//! 2. Environment variables
//! 3. An explicit `--config` file
//! 4. Project config (`.flashcards/config.toml`)
//! 5. User config (`~/.flashcards/config.toml`)
//! 6. Defaults (lowest priority)
//!
//! All configuration is optional. A config file that fails to parse is
//! reported and ignored.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{FailOpen, Result};
use crate::util::read_to_string_limited;

/// Name of the per-project and per-user config directory.
pub const CONFIG_DIR_NAME: &str = ".flashcards";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Card files used at startup and exit.
    pub files: FilesConfig,
    /// Quiz behavior.
    pub quiz: QuizConfig,
}

/// Card files used at startup and exit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilesConfig {
    /// Cards to import before the first prompt.
    pub import_from: Option<PathBuf>,
    /// Where to export cards on exit.
    pub export_to: Option<PathBuf>,
}

/// Quiz behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    /// Fixed seed for question selection. Random when unset.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration for `cwd`, with an optional explicit config file.
    pub fn load_with(cwd: &Path, explicit: Option<&Path>) -> Self {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config() {
            config = config.merge(user_config);
        }

        if let Some(project_config) = Self::load_project_config(cwd) {
            config = config.merge(project_config);
        }

        // Implicit layers may be absent; an explicit file that fails is logged.
        if let Some(path) = explicit {
            let explicit_config = Self::load_from_file(path)
                .fail_open_default(&format!("loading config {}", path.display()));
            config = config.merge(explicit_config);
        }

        config.apply_env_overrides();

        config
    }

    /// Load user config from `<home>/config.toml`.
    fn load_user_config() -> Option<Config> {
        let path = flashcards_home()?.join("config.toml");
        Self::load_from_file(&path).ok()
    }

    /// Load project config from `.flashcards/config.toml` in the given directory.
    fn load_project_config(cwd: &Path) -> Option<Config> {
        Self::load_from_file(&project_config_path(cwd)).ok()
    }

    /// Load config from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = read_to_string_limited(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // FLASHCARDS_IMPORT_FROM
        if let Ok(val) = env::var("FLASHCARDS_IMPORT_FROM") {
            if val.is_empty() {
                tracing::warn!("FLASHCARDS_IMPORT_FROM is empty, ignoring");
            } else {
                self.files.import_from = Some(PathBuf::from(val));
            }
        }

        // FLASHCARDS_EXPORT_TO
        if let Ok(val) = env::var("FLASHCARDS_EXPORT_TO") {
            if val.is_empty() {
                tracing::warn!("FLASHCARDS_EXPORT_TO is empty, ignoring");
            } else {
                self.files.export_to = Some(PathBuf::from(val));
            }
        }

        // FLASHCARDS_SEED
        if let Ok(val) = env::var("FLASHCARDS_SEED") {
            match val.parse::<u64>() {
                Ok(n) => self.quiz.seed = Some(n),
                Err(_) => eprintln!(
                    "Warning: Invalid FLASHCARDS_SEED value '{}'. \
                    Expected a non-negative integer. Ignoring it.",
                    val
                ),
            }
        }
    }

    /// Merge another config into this one.
    ///
    /// Every field set in `other` wins; unset fields keep the value from
    /// `self`. Because all fields are optional, a layer only needs to list
    /// what it changes.
    fn merge(mut self, other: Config) -> Self {
        if other.files.import_from.is_some() {
            self.files.import_from = other.files.import_from;
        }
        if other.files.export_to.is_some() {
            self.files.export_to = other.files.export_to;
        }
        if other.quiz.seed.is_some() {
            self.quiz.seed = other.quiz.seed;
        }
        self
    }

    /// Apply command-line flags on top of the loaded config.
    pub fn with_overrides(
        self,
        import_from: Option<PathBuf>,
        export_to: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Self {
        self.merge(Config {
            files: FilesConfig {
                import_from,
                export_to,
            },
            quiz: QuizConfig { seed },
        })
    }
}

/// Get the flashcards home directory.
///
/// Checks the `FLASHCARDS_HOME` environment variable first, then falls back
/// to `~/.flashcards`. An empty `FLASHCARDS_HOME` is ignored.
pub fn flashcards_home() -> Option<PathBuf> {
    if let Ok(home) = env::var("FLASHCARDS_HOME") {
        if home.is_empty() {
            tracing::warn!("FLASHCARDS_HOME is empty, using default");
        } else {
            let path = PathBuf::from(&home);
            if path.is_absolute() {
                return Some(path);
            }
            if let Ok(canonical) = path.canonicalize() {
                return Some(canonical);
            }
            tracing::warn!("FLASHCARDS_HOME is relative and doesn't exist, using as-is");
            return Some(path);
        }
    }

    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME))
}

/// Get the project config path for a working directory.
///
/// Returns `<cwd>/.flashcards/config.toml`.
pub fn project_config_path(cwd: &Path) -> PathBuf {
    cwd.join(CONFIG_DIR_NAME).join("config.toml")
}

/// Get the crash log path.
///
/// Returns `<home>/crash.log`.
pub fn crash_log_path() -> Option<PathBuf> {
    flashcards_home().map(|h| h.join("crash.log"))
}
