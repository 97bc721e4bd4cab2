use moodbox::config::Config;
use moodbox::utils::progress::create_song_bar;
use owo_colors::OwoColorize;
use std::error::Error;

/// Verify that every audio and cover file the catalog references exists.
pub fn handle_check(catalog: Option<&str>) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let catalog = super::load_catalog(&config, catalog)?;

    println!(
        "Checking {} songs under {}",
        catalog.len(),
        catalog.base_dir().display()
    );

    let pb = create_song_bar(catalog.len() as u64);
    let problems = catalog.check_assets(Some(&pb));
    pb.finish_and_clear();

    if problems.is_empty() {
        println!("{} All assets found", "✓".green());
        return Ok(());
    }

    println!("{} Found {} missing files:\n", "✗".red(), problems.len());
    for problem in &problems {
        println!("  {} ({})", problem.song.bold(), problem.kind);
        println!("    {}", problem.path.display().dimmed());
    }

    Err(format!("Asset check failed: {} missing files", problems.len()).into())
}
