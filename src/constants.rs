//! Project-wide constants used across multiple modules.
//!
//! This module centralizes constant definitions to avoid duplication and ensure
//! consistency between the CLI and the player.

/// Spinner animation characters for progress indicators
pub const SPINNER_CHARS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Name of the application directory under the user's config directory
pub const APP_DIR_NAME: &str = "moodbox";

/// Catalog file looked up when nothing else is configured
pub const DEFAULT_CATALOG_FILE: &str = "data.json";

/// File name of the mood store inside the config directory
pub const MOODS_FILE_NAME: &str = "moods.json";

/// Label of the playlist that holds the whole catalog
pub const ALL_SONGS_LABEL: &str = "All Songs";

/// Shown in the lyrics panel for songs without lyrics
pub const MELODY_PLACEHOLDER: &str = "(Melody)";

/// Shown instead of a title when the catalog could not be loaded
pub const LOAD_ERROR_TITLE: &str = "Error loading";

/// Shown in the cover slot when a song has no cover art
pub const COVER_PLACEHOLDER: &str = "♪";
