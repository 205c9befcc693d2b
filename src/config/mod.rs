use crate::core::calculator::hours::HourPolicy;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_lunch_break")]
    pub lunch_break_minutes: i64,
    #[serde(default)]
    pub lunch_threshold_minutes: i64,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_lunch_break() -> i64 {
    60
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            lunch_break_minutes: default_lunch_break(),
            lunch_threshold_minutes: 0,
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ojtlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ojtlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ojtlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ojtlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// `--db` / `database` value to a path: `~/` expanded, relative paths
    /// taken from the current directory.
    pub fn resolve_db_path(raw: &str) -> PathBuf {
        let p = expand_tilde(raw);
        if p.is_absolute() {
            return p;
        }
        env::current_dir().map(|cwd| cwd.join(&p)).unwrap_or(p)
    }

    pub fn database_path(&self) -> PathBuf {
        Self::resolve_db_path(&self.database)
    }

    pub fn hour_policy(&self) -> HourPolicy {
        HourPolicy {
            lunch_break_minutes: self.lunch_break_minutes,
            lunch_threshold_minutes: self.lunch_threshold_minutes,
        }
    }

    /// Create the config directory, write the config file (skipped in test
    /// mode) and return the database path to initialize.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
