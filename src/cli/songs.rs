use moodbox::config::Config;
use moodbox::lyrics::format_time;
use owo_colors::OwoColorize;
use std::error::Error;

pub fn handle_songs(catalog: Option<&str>) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let catalog = super::load_catalog(&config, catalog)?;

    if catalog.is_empty() {
        println!("The catalog has no songs.");
        return Ok(());
    }

    for (i, song) in catalog.songs.iter().enumerate() {
        let lyrics = if song.lyrics.is_empty() {
            String::new()
        } else {
            format!("  {} lines", song.lyrics.len())
        };
        println!(
            "{:>3}. {} {} {}{}",
            i + 1,
            song.title.bold(),
            format!("· {}", song.artist).dimmed(),
            format_time(song.duration).cyan(),
            lyrics.dimmed()
        );
    }

    let total: f64 = catalog.songs.iter().map(|s| s.duration).sum();
    println!();
    println!("{} songs, {}", catalog.len(), format_time(total));

    Ok(())
}
