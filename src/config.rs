//! Application configuration management.
//!
//! This module handles the persistent configuration for moodbox: where the song
//! catalog lives, where mood playlists are stored, the seek step and volume used by
//! the player, and the log file the player writes to. Configuration is stored in
//! the user's config directory (typically ~/.config/moodbox/config.toml).

use crate::constants::{APP_DIR_NAME, DEFAULT_CATALOG_FILE, MOODS_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_KEYS: &[&str] = &[
    "catalog_path",
    "moods_file",
    "seek_seconds",
    "volume",
    "log_file",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moods_file: Option<String>,
    #[serde(default = "default_seek_seconds")]
    pub seek_seconds: u64,
    #[serde(default = "default_volume")]
    pub volume: f32,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

fn default_seek_seconds() -> u64 {
    5
}

fn default_volume() -> f32 {
    1.0
}

fn default_log_file() -> String {
    std::env::temp_dir()
        .join("moodbox.log")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            moods_file: None,
            seek_seconds: default_seek_seconds(),
            volume: default_volume(),
            log_file: default_log_file(),
        }
    }

    pub fn config_dir() -> Result<PathBuf, Box<dyn Error>> {
        // Check for XDG_CONFIG_HOME first (useful for testing)
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config).join(APP_DIR_NAME)
        } else {
            dirs::config_dir()
                .ok_or("Unable to find config directory")?
                .join(APP_DIR_NAME)
        };
        Ok(config_dir)
    }

    pub fn config_path() -> Result<PathBuf, Box<dyn Error>> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self, Box<dyn Error>> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            // Return default config instead of error
            return Ok(Default::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()?;
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;

        Ok(())
    }

    pub fn exists() -> Result<bool, Box<dyn Error>> {
        Ok(Self::config_path()?.exists())
    }

    /// Catalog path with `~` expanded. An explicit override wins over the config.
    pub fn catalog_file(&self, override_path: Option<&str>) -> PathBuf {
        let raw = override_path.unwrap_or(&self.catalog_path);
        PathBuf::from(shellexpand::tilde(raw).as_ref())
    }

    pub fn moods_path(&self) -> Result<PathBuf, Box<dyn Error>> {
        match &self.moods_file {
            Some(path) => Ok(PathBuf::from(shellexpand::tilde(path).as_ref())),
            None => Ok(Self::config_dir()?.join(MOODS_FILE_NAME)),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_file).as_ref())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        match key {
            "catalog_path" => {
                if value.trim().is_empty() {
                    return Err("catalog_path cannot be empty".into());
                }
                self.catalog_path = value.to_string();
            }
            "moods_file" => {
                self.moods_file = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "seek_seconds" => {
                let seconds = value
                    .parse::<u64>()
                    .map_err(|_| "seek_seconds must be a whole number of seconds")?;
                if seconds == 0 {
                    return Err("seek_seconds must be at least 1".into());
                }
                self.seek_seconds = seconds;
            }
            "volume" => {
                let volume = value
                    .parse::<f32>()
                    .map_err(|_| "volume must be a number")?;
                if !(0.0..=2.0).contains(&volume) {
                    return Err("volume must be between 0.0 and 2.0".into());
                }
                self.volume = volume;
            }
            "log_file" => self.log_file = value.to_string(),
            _ => return Err(format!("Unknown configuration key: {key}").into()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Use a mutex to ensure tests that modify environment variables don't run concurrently
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.catalog_path, "data.json");
        assert!(config.moods_file.is_none());
        assert_eq!(config.seek_seconds, 5);
        assert_eq!(config.volume, 1.0);
        assert!(config.log_file.ends_with("moodbox.log"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("seek_seconds = 10\n").unwrap();
        assert_eq!(config.seek_seconds, 10);
        assert_eq!(config.catalog_path, "data.json");
        assert_eq!(config.volume, 1.0);
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::new();

        config.set_value("catalog_path", "~/music/data.json").unwrap();
        assert_eq!(config.catalog_path, "~/music/data.json");

        config.set_value("seek_seconds", "10").unwrap();
        assert_eq!(config.seek_seconds, 10);
        assert!(config.set_value("seek_seconds", "0").is_err());
        assert!(config.set_value("seek_seconds", "soon").is_err());

        config.set_value("volume", "0.5").unwrap();
        assert_eq!(config.volume, 0.5);
        assert!(config.set_value("volume", "3.0").is_err());
        assert!(config.set_value("volume", "loud").is_err());

        config.set_value("moods_file", "/tmp/moods.json").unwrap();
        assert_eq!(config.moods_file.as_deref(), Some("/tmp/moods.json"));
        config.set_value("moods_file", "").unwrap();
        assert!(config.moods_file.is_none());

        assert!(config.set_value("catalog_path", " ").is_err());
        assert!(config.set_value("unknown_key", "value").is_err());
    }

    #[test]
    fn test_catalog_file_override() {
        let config = Config::new();
        assert_eq!(config.catalog_file(None), PathBuf::from("data.json"));
        assert_eq!(
            config.catalog_file(Some("/srv/music/data.json")),
            PathBuf::from("/srv/music/data.json")
        );
    }

    #[test]
    fn test_moods_path_defaults_to_config_dir() {
        let _guard = ENV_MUTEX.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let original_xdg = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let mut config = Config::new();
        assert_eq!(
            config.moods_path().unwrap(),
            temp_dir.path().join("moodbox").join("moods.json")
        );

        config.moods_file = Some("/data/moods.json".to_string());
        assert_eq!(
            config.moods_path().unwrap(),
            PathBuf::from("/data/moods.json")
        );

        // Clean up - restore original value if it existed
        unsafe {
            if let Some(original) = original_xdg {
                std::env::set_var("XDG_CONFIG_HOME", original);
            } else {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_MUTEX.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let original_xdg = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let mut config = Config::new();
        config.catalog_path = "/music/data.json".to_string();
        config.seek_seconds = 15;
        config.save().unwrap();

        let config_path = Config::config_path().unwrap();
        assert!(config_path.starts_with(temp_dir.path().join("moodbox")));
        assert!(Config::exists().unwrap());

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.catalog_path, "/music/data.json");
        assert_eq!(loaded.seek_seconds, 15);

        // Clean up - restore original value if it existed
        unsafe {
            if let Some(original) = original_xdg {
                std::env::set_var("XDG_CONFIG_HOME", original);
            } else {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }
}
