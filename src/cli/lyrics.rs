use moodbox::config::Config;
use moodbox::constants::MELODY_PLACEHOLDER;
use moodbox::lyrics::{active_line, format_time};
use owo_colors::OwoColorize;
use std::error::Error;

pub fn handle_lyrics(
    pattern: &str,
    at: Option<f64>,
    catalog: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let catalog = super::load_catalog(&config, catalog)?;

    let index = catalog
        .find(pattern)
        .ok_or_else(|| format!("No song matches '{pattern}'"))?;
    let song = &catalog.songs[index];

    println!("{} {}", song.title.bold(), format!("· {}", song.artist).dimmed());
    println!();

    if song.lyrics.is_empty() {
        println!("  {}", MELODY_PLACEHOLDER.dimmed());
        return Ok(());
    }

    let active = at.and_then(|time| active_line(&song.lyrics, time));
    for (i, line) in song.lyrics.iter().enumerate() {
        let stamp = format!("[{:>5}]", format_time(line.time));
        if Some(i) == active {
            println!("{} {} {}", stamp.magenta(), "▶".magenta(), line.text.bold());
        } else {
            println!("{}   {}", stamp.dimmed(), line.text);
        }
    }

    Ok(())
}
