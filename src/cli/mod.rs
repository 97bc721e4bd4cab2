pub mod check;
pub mod config;
pub mod init;
pub mod lyrics;
pub mod mood;
pub mod play;
pub mod songs;

use moodbox::catalog::Catalog;
use moodbox::config::Config;
use moodbox::moods::MoodStore;
use moodbox::utils::progress::create_progress_spinner;
use moodbox::utils::validation::validate_catalog_file;
use std::error::Error;

/// Load the catalog named on the command line, or the configured one.
pub fn load_catalog(
    config: &Config,
    override_path: Option<&str>,
) -> Result<Catalog, Box<dyn Error>> {
    let path = config.catalog_file(override_path);
    validate_catalog_file(&path)?;

    let spinner = create_progress_spinner("Reading catalog...");
    let catalog = Catalog::load(&path);
    spinner.finish_and_clear();
    catalog
}

pub fn open_moods(config: &Config) -> Result<MoodStore, Box<dyn Error>> {
    MoodStore::open(&config.moods_path()?)
}
