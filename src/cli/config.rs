use moodbox::config::{CONFIG_KEYS, Config};
use owo_colors::OwoColorize;
use std::error::Error;
use std::process::Command;

pub fn handle_config_view() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;

    println!("{} {}", "Config:".bold(), Config::config_path()?.display());
    println!("  catalog_path: {}", config.catalog_path.cyan());
    println!("  moods_file: {}", config.moods_path()?.display());
    println!("  seek_seconds: {}", config.seek_seconds);
    println!("  volume: {}", config.volume);
    println!("  log_file: {}", config.log_file);

    if !Config::exists()? {
        println!();
        println!("{} defaults shown, run 'moodbox init' to save them", "Note:".yellow());
    }

    Ok(())
}

pub fn handle_config_set(key: &str, value: &str) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load()?;

    config
        .set_value(key, value)
        .map_err(|e| format!("{e} (keys: {})", CONFIG_KEYS.join(", ")))?;
    config.save()?;

    println!("{} {key} = {value}", "Updated".green());

    Ok(())
}

/// Open the config file in `$EDITOR`, then check that it still parses and its
/// values are in range.
pub fn handle_config_edit() -> Result<(), Box<dyn Error>> {
    if !Config::exists()? {
        return Err("moodbox not initialized. Run 'moodbox init' first.".into());
    }

    let config_path = Config::config_path()?;
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    let status = Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                format!("Editor '{editor}' not found. Set $EDITOR to a valid editor path.")
            }
            _ => format!("Failed to launch editor '{editor}': {e}"),
        })?;

    if !status.success() {
        return Err(format!("Editor '{editor}' exited with error").into());
    }

    let edited = Config::load().map_err(|e| format!("Configuration no longer parses: {e}"))?;

    // Run every value back through the setter so range checks apply
    let mut checked = Config::new();
    checked.set_value("catalog_path", &edited.catalog_path)?;
    checked.set_value("seek_seconds", &edited.seek_seconds.to_string())?;
    checked.set_value("volume", &edited.volume.to_string())?;

    if !edited.catalog_file(None).exists() {
        println!(
            "{} catalog {} does not exist",
            "Warning:".yellow(),
            edited.catalog_path
        );
    }
    println!("{}", "Configuration saved".green());

    Ok(())
}
