use std::error::Error;

pub fn handle_play(
    pattern: Option<&str>,
    catalog: Option<&str>,
    mood: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "player")]
    {
        crate::player::run(crate::player::StartOptions {
            catalog,
            mood,
            pattern,
        })
    }

    #[cfg(not(feature = "player"))]
    {
        let _ = (pattern, catalog, mood);
        use owo_colors::OwoColorize;
        println!("{} {}", "🎵".magenta(), "moodbox player".bold());
        println!();
        println!(
            "{} Playback requires the 'player' feature to be enabled.",
            "Note:".yellow()
        );
        println!();
        println!("To enable it, install with:");
        println!("  {}", "cargo install moodbox --features player".cyan());
        println!();
        println!("Catalog and mood commands work without it, see 'moodbox --help'.");

        Ok(())
    }
}
