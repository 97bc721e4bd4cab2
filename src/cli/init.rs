use dialoguer::{Input, theme::ColorfulTheme};
use moodbox::config::Config;
use moodbox::constants::DEFAULT_CATALOG_FILE;
use owo_colors::OwoColorize;
use std::error::Error;
use std::path::Path;

pub fn handle_init(catalog: Option<&str>) -> Result<(), Box<dyn Error>> {
    // Check if already initialized
    if Config::exists()? {
        return Err(
            "moodbox is already initialized. Use 'moodbox config set catalog_path <path>' to change the catalog."
                .into(),
        );
    }

    let catalog = match catalog {
        Some(path) => path.to_string(),
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Catalog file")
            .default(DEFAULT_CATALOG_FILE.to_string())
            .interact_text()?,
    };

    // Store absolute paths so the player works from any directory
    let expanded = shellexpand::tilde(&catalog).to_string();
    let catalog_path = Path::new(&expanded);
    let catalog_path = if catalog_path.is_relative() {
        std::env::current_dir()?.join(catalog_path)
    } else {
        catalog_path.to_path_buf()
    };

    if !catalog_path.exists() {
        println!(
            "{} {} does not exist yet",
            "Warning:".yellow(),
            catalog_path.display()
        );
    }

    let mut config = Config::new();
    config.catalog_path = catalog_path.to_string_lossy().to_string();
    config.save()?;

    println!("{}", "moodbox initialized successfully!".green());
    println!("Catalog: {}", catalog_path.display());
    println!("Moods: {}", config.moods_path()?.display());
    println!(
        "Configuration saved to: {}",
        Config::config_path()?.display()
    );

    Ok(())
}
