use dialoguer::{Confirm, theme::ColorfulTheme};
use moodbox::config::Config;
use moodbox::lyrics::format_time;
use moodbox::moods::MoodStore;
use moodbox::utils::validation::validate_mood_name;
use owo_colors::OwoColorize;
use std::error::Error;

fn find_mood(store: &MoodStore, name: &str) -> Result<usize, Box<dyn Error>> {
    store
        .find_by_name(name)
        .ok_or_else(|| format!("No mood named '{name}'. See 'moodbox mood list'.").into())
}

pub fn handle_mood_list() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let store = super::open_moods(&config)?;

    if store.is_empty() {
        println!("No moods yet. Create one with 'moodbox mood create <name>'.");
        return Ok(());
    }

    for mood in store.moods() {
        let created = mood
            .created_at()
            .map(|t| t.with_timezone(&chrono::Local).format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!(
            "{} {} {}",
            mood.name.bold(),
            format!("({} songs)", mood.songs.len()).dimmed(),
            created.dimmed()
        );
    }

    Ok(())
}

pub fn handle_mood_create(name: &str) -> Result<(), Box<dyn Error>> {
    let name = validate_mood_name(name)?;
    let config = Config::load()?;
    let mut store = super::open_moods(&config)?;

    if store.find_by_name(name).is_some() {
        println!("{} a mood named '{name}' already exists", "Note:".yellow());
    }

    store.create(name)?;
    println!("{} Created mood {}", "✓".green(), name.bold());

    Ok(())
}

pub fn handle_mood_delete(name: &str, yes: bool) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let mut store = super::open_moods(&config)?;
    let index = find_mood(&store, name)?;

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete mood '{}'?", store.moods()[index].name))
            .default(false)
            .interact()?;

    if !confirmed {
        println!("Kept.");
        return Ok(());
    }

    let removed = store.delete(index)?;
    println!("{} Deleted mood {}", "✓".green(), removed.name.bold());

    Ok(())
}

pub fn handle_mood_add(
    mood: &str,
    song: &str,
    catalog: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let catalog = super::load_catalog(&config, catalog)?;
    let mut store = super::open_moods(&config)?;

    let mood_index = find_mood(&store, mood)?;
    let song_index = catalog
        .find(song)
        .ok_or_else(|| format!("No song matches '{song}'"))?;
    let song = &catalog.songs[song_index];

    store.add_song(mood_index, song)?;
    println!(
        "{} Added {} to {}",
        "✓".green(),
        song.title.bold(),
        store.moods()[mood_index].name.bold()
    );

    Ok(())
}

pub fn handle_mood_show(name: &str) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let store = super::open_moods(&config)?;
    let mood = &store.moods()[find_mood(&store, name)?];

    println!("{}", mood.name.bold());
    if mood.songs.is_empty() {
        println!("  {}", "empty".dimmed());
        return Ok(());
    }

    for (i, song) in mood.songs.iter().enumerate() {
        println!(
            "{:>3}. {} {} {}",
            i + 1,
            song.title,
            format!("· {}", song.artist).dimmed(),
            format_time(song.duration).cyan()
        );
    }

    Ok(())
}
