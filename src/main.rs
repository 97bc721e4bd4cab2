//! moodbox - a terminal music player with synced lyrics and mood playlists.
//!
//! The catalog is a `data.json` file listing songs, their audio and cover
//! files, and timestamped lyric lines. The player (optional feature) plays
//! the catalog in order, highlights the current lyric line, and lets you
//! collect songs into named moods that persist between sessions.
//!
//! The remaining commands work on the same files without opening the player:
//! listing songs, checking that assets exist, printing lyrics, and managing
//! moods from the shell.

use clap::{CommandFactory, Parser, Subcommand, builder::PossibleValuesParser};
use clap_complete::{Generator, Shell, generate};
use moodbox::config::CONFIG_KEYS;
use std::error::Error;
use std::io;

mod cli;

#[cfg(feature = "player")]
mod player;

#[derive(Parser)]
#[command(name = "moodbox")]
#[command(about = "Terminal music player with synced lyrics and mood playlists")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize moodbox configuration
    Init {
        /// Catalog file to use (prompts if not provided)
        #[arg(short, long)]
        catalog: Option<String>,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Open the player
    Play {
        /// Start with the first song matching this pattern
        pattern: Option<String>,
        /// Catalog file (defaults to the configured one)
        #[arg(short, long)]
        catalog: Option<String>,
        /// Start with this mood as the playlist
        #[arg(short, long)]
        mood: Option<String>,
    },
    /// List the songs in the catalog
    Songs {
        /// Catalog file (defaults to the configured one)
        #[arg(short, long)]
        catalog: Option<String>,
    },
    /// Check that every audio and cover file exists
    Check {
        /// Catalog file (defaults to the configured one)
        #[arg(short, long)]
        catalog: Option<String>,
    },
    /// Print the lyrics of a song
    Lyrics {
        /// Song title or search pattern
        pattern: String,
        /// Mark the line active at this many seconds
        #[arg(long)]
        at: Option<f64>,
        /// Catalog file (defaults to the configured one)
        #[arg(short, long)]
        catalog: Option<String>,
    },
    /// Manage mood playlists
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// View current configuration
    View,
    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_parser = PossibleValuesParser::new(CONFIG_KEYS.iter().copied()))]
        key: String,
        /// Configuration value
        value: String,
    },
    /// Edit configuration file in your editor
    Edit,
}

#[derive(Subcommand)]
enum MoodAction {
    /// List all moods
    List,
    /// Create an empty mood
    Create {
        /// Mood name
        name: String,
    },
    /// Delete a mood
    Delete {
        /// Mood name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a song to a mood
    Add {
        /// Mood name
        mood: String,
        /// Song title or search pattern
        song: String,
        /// Catalog file (defaults to the configured one)
        #[arg(short, long)]
        catalog: Option<String>,
    },
    /// Show the songs in a mood
    Show {
        /// Mood name
        name: String,
    },
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { catalog } => {
            cli::init::handle_init(catalog.as_deref())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::View => {
                cli::config::handle_config_view()?;
            }
            ConfigAction::Set { key, value } => {
                cli::config::handle_config_set(&key, &value)?;
            }
            ConfigAction::Edit => {
                cli::config::handle_config_edit()?;
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        Commands::Play {
            pattern,
            catalog,
            mood,
        } => {
            cli::play::handle_play(pattern.as_deref(), catalog.as_deref(), mood.as_deref())?;
        }
        Commands::Songs { catalog } => {
            cli::songs::handle_songs(catalog.as_deref())?;
        }
        Commands::Check { catalog } => {
            cli::check::handle_check(catalog.as_deref())?;
        }
        Commands::Lyrics {
            pattern,
            at,
            catalog,
        } => {
            cli::lyrics::handle_lyrics(&pattern, at, catalog.as_deref())?;
        }
        Commands::Mood { action } => match action {
            MoodAction::List => {
                cli::mood::handle_mood_list()?;
            }
            MoodAction::Create { name } => {
                cli::mood::handle_mood_create(&name)?;
            }
            MoodAction::Delete { name, yes } => {
                cli::mood::handle_mood_delete(&name, yes)?;
            }
            MoodAction::Add {
                mood,
                song,
                catalog,
            } => {
                cli::mood::handle_mood_add(&mood, &song, catalog.as_deref())?;
            }
            MoodAction::Show { name } => {
                cli::mood::handle_mood_show(&name)?;
            }
        },
    }

    Ok(())
}
