use crate::core::persistence::STORAGE_KEY;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_name_prefix")]
    pub default_name_prefix: String,
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
    #[serde(default = "default_watch_seconds")]
    pub watch_seconds: u64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}
fn default_name_prefix() -> String {
    "Stopwatch".to_string()
}
fn default_frame_interval() -> u64 {
    250
}
fn default_watch_seconds() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            storage_key: default_storage_key(),
            default_name_prefix: default_name_prefix(),
            frame_interval_ms: default_frame_interval(),
            watch_seconds: default_watch_seconds(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rstopwatch")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rstopwatch")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstopwatch.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rstopwatch.sqlite")
    }

    /// Parse a YAML document; missing fields take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from file, or return defaults if not found.
    ///
    /// A file that cannot be read or parsed is reported and ignored.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path)
            .map_err(AppError::from)
            .and_then(|content| Self::from_yaml(&content))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring configuration file {}: {}",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Initialize the configuration file. Returns the database path to use.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.database)
    }
}
