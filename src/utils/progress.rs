//! Progress indicators shared by the CLI commands.
//!
//! Spinners cover work of unknown length such as reading the catalog, bars cover
//! per-song work such as the asset check.

use crate::constants::SPINNER_CHARS;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner with the shared character sequence, for catalog and store loading.
///
/// ```ignore
/// let spinner = create_progress_spinner("Reading catalog...");
/// let catalog = Catalog::load(&path)?;
/// spinner.finish_and_clear();
/// ```
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.magenta} {msg}")
            .unwrap()
            .tick_strings(SPINNER_CHARS),
    );
    spinner.set_message(message.to_string());
    spinner
}

/// Bar that counts songs, for the asset check.
pub fn create_song_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.magenta} [{bar:40.magenta/blue}] {pos}/{len} songs {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb
}
