//! Main application state and control flow for the player.
//!
//! This module ties the catalog, the current playlist, the mood store and the
//! audio engine together. It owns the event loop: poll the keyboard, advance the
//! playback state (position, lyrics, end of track), redraw. Failures never leave
//! the loop; they turn into a status line message and a log entry.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use moodbox::catalog::Catalog;
use moodbox::config::Config;
use moodbox::lyrics::LyricsView;
use moodbox::moods::{MoodError, MoodStore};
use moodbox::playlist::Playlist;

use super::audio::AudioEngine;
use super::mood_dialog::{MoodDialog, MoodDialogFocus, MoodDialogMode};
use super::search::SongSearch;
use super::ui;

const STATUS_TIMEOUT: Duration = Duration::from_secs(3);
const VOLUME_STEP: f32 = 0.1;

/// How the player should start.
#[derive(Debug, Default)]
pub struct StartOptions<'a> {
    pub catalog: Option<&'a str>,
    pub mood: Option<&'a str>,
    pub pattern: Option<&'a str>,
}

pub struct App {
    pub should_quit: bool,
    pub catalog: Catalog,
    pub playlist: Playlist,
    pub moods: MoodStore,
    pub is_playing: bool,
    pub audio_engine: Option<AudioEngine>,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub lyrics: LyricsView,
    pub load_error: Option<String>,
    pub mood_dialog: Option<MoodDialog>,
    pub search: Option<SongSearch>,
    pub status_message: Option<String>,
    status_timer: Option<Instant>,
    track_loaded: bool,
    seek_step: f32,
    volume: f32,
}

impl App {
    pub fn new(catalog: Catalog, moods: MoodStore, config: &Config) -> Self {
        let playlist = Playlist::all_songs(&catalog.songs);
        Self {
            should_quit: false,
            catalog,
            playlist,
            moods,
            is_playing: false,
            audio_engine: None,
            position: Duration::ZERO,
            duration: None,
            lyrics: LyricsView::default(),
            load_error: None,
            mood_dialog: None,
            search: None,
            status_message: None,
            status_timer: None,
            track_loaded: false,
            seek_step: config.seek_seconds as f32,
            volume: config.volume,
        }
    }

    pub fn attach_engine(&mut self, mut engine: AudioEngine) {
        engine.set_volume(self.volume);
        self.audio_engine = Some(engine);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_timer = Some(Instant::now());
    }

    fn clear_expired_status(&mut self) {
        if let Some(timer) = self.status_timer
            && timer.elapsed() > STATUS_TIMEOUT
        {
            self.status_message = None;
            self.status_timer.take();
        }
    }

    /// Make `index` the current track. Keeps playing if the player was playing.
    pub fn load_song(&mut self, index: usize) {
        if self.playlist.is_empty() {
            self.lyrics.clear();
            self.position = Duration::ZERO;
            self.duration = None;
            return;
        }

        let song = match self.playlist.select(index) {
            Ok(song) => song.clone(),
            Err(e) => {
                log::warn!("{e}");
                return;
            }
        };

        self.lyrics = LyricsView::new(&song.lyrics);
        self.position = Duration::ZERO;
        // Zero or out-of-range durations count as unknown
        self.duration = Duration::try_from_secs_f64(song.duration)
            .ok()
            .filter(|d| !d.is_zero());
        self.track_loaded = false;

        let path = self.catalog.resolve(&song.audio_path);
        let mut failure = None;
        if let Some(engine) = &mut self.audio_engine {
            match engine.load_file(&path, self.duration) {
                Ok(()) => {
                    self.track_loaded = true;
                    self.duration = engine.duration.or(self.duration);
                    if self.is_playing {
                        engine.play();
                    }
                }
                Err(e) => failure = Some(e),
            }
        }

        if let Some(e) = failure {
            log::error!("Could not load '{}': {e}", song.title);
            self.set_status(format!("Could not play '{}'", song.title));
        }

        info!(
            "Now on '{}' by {} ({} of {})",
            song.title,
            song.artist,
            index + 1,
            self.playlist.len()
        );
    }

    pub fn toggle_playback(&mut self) {
        self.is_playing = !self.is_playing;

        let Some(engine) = &self.audio_engine else {
            if self.is_playing {
                self.set_status("Audio output unavailable");
            }
            return;
        };

        if !self.is_playing {
            engine.pause();
        } else if self.track_loaded {
            engine.play();
        } else if let Some(title) = self.playlist.current_song().map(|s| s.title.clone()) {
            self.set_status(format!("Could not play '{title}'"));
        }
    }

    pub fn next_song(&mut self) {
        if let Some(index) = self.playlist.next_index() {
            self.load_song(index);
        }
    }

    pub fn prev_song(&mut self) {
        if let Some(index) = self.playlist.prev_index() {
            self.load_song(index);
        }
    }

    /// Advance position, lyrics and end-of-track handling. Called every tick.
    pub fn update_playback_state(&mut self) {
        let mut ended = false;

        if let Some(engine) = &self.audio_engine {
            self.position = engine.position();
            ended = self.track_loaded && self.is_playing && engine.is_finished();
        }

        if ended {
            info!("Track ended");
            self.next_song();
            return;
        }

        self.lyrics.update(self.position.as_secs_f64());
    }

    /// Playback progress from 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        match self.duration {
            Some(duration) if !duration.is_zero() => {
                (self.position.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    pub fn seek(&mut self, seconds: f32) {
        if let Some(engine) = &mut self.audio_engine
            && let Err(e) = engine.seek_relative(seconds)
        {
            log::warn!("{e}");
        }
    }

    /// Jump to a fraction of the track, the way clicking the progress bar would.
    pub fn seek_to_fraction(&mut self, fraction: f32) {
        let Some(duration) = self.duration else {
            return;
        };
        let target = duration.mul_f32(fraction.clamp(0.0, 1.0));
        if let Some(engine) = &mut self.audio_engine
            && let Err(e) = engine.seek_to(target)
        {
            log::warn!("{e}");
        }
    }

    pub fn change_volume(&mut self, delta: f32) {
        self.volume = (self.volume + delta).clamp(0.0, 2.0);
        if let Some(engine) = &mut self.audio_engine {
            engine.set_volume(self.volume);
        }
        self.set_status(format!("Volume {:.0}%", self.volume * 100.0));
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn open_mood_dialog(&mut self, mode: MoodDialogMode) {
        self.mood_dialog = Some(MoodDialog::new(mode, self.moods.len()));
    }

    pub fn close_mood_dialog(&mut self) {
        self.mood_dialog = None;
    }

    /// Moods position of the playlist currently playing, if it is a mood.
    pub fn active_mood(&self) -> Option<usize> {
        self.playlist
            .mood_id()
            .and_then(|id| self.moods.position_of(id))
    }

    pub fn create_mood(&mut self) {
        let Some(dialog) = &self.mood_dialog else {
            return;
        };
        let name = dialog.new_name.clone();

        match self.moods.create(&name) {
            Ok(_) => {
                let count = self.moods.len();
                if let Some(dialog) = &mut self.mood_dialog {
                    dialog.new_name.clear();
                    dialog.refresh(count);
                    dialog.select_last();
                    dialog.focus = MoodDialogFocus::MoodList;
                }
            }
            Err(e) => {
                log::warn!("Could not create mood: {e}");
                self.set_status(e.to_string());
            }
        }
    }

    pub fn delete_mood(&mut self, index: usize) {
        match self.moods.delete(index) {
            Ok(mood) => self.set_status(format!("Deleted {}", mood.name)),
            Err(e) => {
                log::error!("Could not delete mood: {e}");
                self.set_status(e.to_string());
            }
        }

        let count = self.moods.len();
        if let Some(dialog) = &mut self.mood_dialog {
            dialog.refresh(count);
        }
    }

    pub fn add_current_song_to_mood(&mut self, index: usize) {
        let Some(song) = self.playlist.current_song().cloned() else {
            self.set_status("Nothing to add");
            return;
        };

        match self.moods.add_song(index, &song) {
            Ok(()) => {
                let name = self
                    .moods
                    .get(index)
                    .map(|m| m.name.clone())
                    .unwrap_or_default();
                self.set_status(format!("Added to {name}"));
                self.close_mood_dialog();
            }
            Err(e) => match e.downcast_ref::<MoodError>() {
                Some(MoodError::DuplicateSong { mood, .. }) => {
                    self.set_status(format!("Already in {mood}"));
                }
                _ => {
                    log::error!("Could not add song to mood: {e}");
                    self.set_status(e.to_string());
                }
            },
        }
    }

    pub fn play_mood(&mut self, index: usize) {
        let Some(mood) = self.moods.get(index) else {
            return;
        };

        match Playlist::from_mood(mood) {
            Ok(playlist) => {
                info!("Playing mood '{}'", mood.name);
                self.playlist = playlist;
                self.is_playing = true;
                self.load_song(0);
                self.close_mood_dialog();
                if self.audio_engine.is_none() {
                    self.set_status("Audio output unavailable");
                }
            }
            Err(e) => {
                log::info!("{e}");
                self.set_status("Empty mood.");
            }
        }
    }

    pub fn show_all_songs(&mut self) {
        self.playlist = Playlist::all_songs(&self.catalog.songs);
        self.load_song(0);
        self.close_mood_dialog();
    }

    pub fn open_search(&mut self) {
        self.search = Some(SongSearch::new(&self.catalog.songs));
    }

    pub fn play_search_selection(&mut self) {
        let Some(index) = self.search.as_ref().and_then(|s| s.selected_song()) else {
            return;
        };
        self.search = None;
        self.playlist = Playlist::all_songs(&self.catalog.songs);
        self.load_song(index);
    }
}

pub fn run(options: StartOptions) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;

    // Initialize logging
    init_logging(&config)?;
    info!("Starting moodbox player");

    let catalog_path = config.catalog_file(options.catalog);
    let (catalog, load_error) = match Catalog::load(&catalog_path) {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            log::error!("{e}");
            (Catalog::default(), Some(e.to_string()))
        }
    };

    let moods_path = config.moods_path()?;
    let (moods, moods_error) = match MoodStore::open(&moods_path) {
        Ok(store) => (store, None),
        Err(e) => {
            log::error!("{e}");
            (MoodStore::empty(&moods_path), Some(e.to_string()))
        }
    };

    let mut app = App::new(catalog, moods, &config);
    app.load_error = load_error;
    if let Some(e) = moods_error {
        app.set_status(e);
    }

    match AudioEngine::new() {
        Ok(engine) => app.attach_engine(engine),
        Err(e) => {
            log::error!("No audio output: {e}");
            app.set_status("Audio output unavailable");
        }
    }

    start_playback(&mut app, &options);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        log::error!("Player stopped: {e}");
    }
    res
}

fn start_playback(app: &mut App, options: &StartOptions) {
    if let Some(name) = options.mood {
        match app.moods.find_by_name(name) {
            Some(index) => {
                app.play_mood(index);
                return;
            }
            None => app.set_status(format!("No mood named {name}")),
        }
    }

    if let Some(pattern) = options.pattern {
        match app.catalog.find(pattern) {
            Some(index) => {
                app.load_song(index);
                return;
            }
            None => app.set_status(format!("No song matches '{pattern}'")),
        }
    }

    app.load_song(0);
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        app.update_playback_state();
        app.clear_expired_status();

        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for events with a short timeout to allow continuous rendering
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key_event(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: event::KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.mood_dialog.is_some() {
        handle_mood_dialog_keys(app, key);
    } else if app.search.is_some() {
        handle_search_keys(app, key);
    } else {
        handle_player_keys(app, key);
    }
}

fn handle_mood_dialog_keys(app: &mut App, key: event::KeyEvent) {
    let Some(dialog) = app.mood_dialog.as_mut() else {
        return;
    };

    // A pending delete swallows the next key: 'y' confirms, anything else cancels
    if let Some(index) = dialog.pending_delete {
        if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            app.delete_mood(index);
        } else {
            dialog.cancel_delete();
        }
        return;
    }

    match (dialog.focus, key.code) {
        (_, KeyCode::Esc) => app.close_mood_dialog(),
        (_, KeyCode::Tab) => dialog.toggle_focus(),
        (MoodDialogFocus::NameField, KeyCode::Enter) => app.create_mood(),
        (MoodDialogFocus::NameField, KeyCode::Backspace) => dialog.pop_char(),
        (MoodDialogFocus::NameField, KeyCode::Char(c)) => dialog.push_char(c),
        (MoodDialogFocus::MoodList, KeyCode::Up | KeyCode::Char('k')) => dialog.navigate_up(),
        (MoodDialogFocus::MoodList, KeyCode::Down | KeyCode::Char('j')) => {
            dialog.navigate_down()
        }
        (MoodDialogFocus::MoodList, KeyCode::Char('d')) => dialog.request_delete(),
        (MoodDialogFocus::MoodList, KeyCode::Char('A')) => {
            if dialog.mode == MoodDialogMode::Browse {
                app.show_all_songs();
            }
        }
        (MoodDialogFocus::MoodList, KeyCode::Enter) => {
            let mode = dialog.mode;
            if let Some(index) = dialog.selected() {
                match mode {
                    MoodDialogMode::Browse => app.play_mood(index),
                    MoodDialogMode::AddSong => app.add_current_song_to_mood(index),
                }
            }
        }
        _ => {}
    }
}

fn handle_search_keys(app: &mut App, key: event::KeyEvent) {
    let songs = &app.catalog.songs;
    let Some(search) = app.search.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.search = None,
        KeyCode::Enter => app.play_search_selection(),
        KeyCode::Up => search.select_previous(),
        KeyCode::Down => search.select_next(),
        KeyCode::Backspace => search.pop_char(songs),
        KeyCode::Char(c) => search.push_char(c, songs),
        _ => {}
    }
}

fn handle_player_keys(app: &mut App, key: event::KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char(' ') => app.toggle_playback(),
        KeyCode::Char('n') | KeyCode::Down => app.next_song(),
        KeyCode::Char('p') | KeyCode::Up => app.prev_song(),
        KeyCode::Left => {
            let step = app.seek_step;
            app.seek(-step);
        }
        KeyCode::Right => {
            let step = app.seek_step;
            app.seek(step);
        }
        KeyCode::Char(c @ '0'..='9') => {
            let tenth = c.to_digit(10).unwrap_or(0) as f32;
            app.seek_to_fraction(tenth / 10.0);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => app.change_volume(VOLUME_STEP),
        KeyCode::Char('-') => app.change_volume(-VOLUME_STEP),
        KeyCode::Char('m') => app.open_mood_dialog(MoodDialogMode::Browse),
        KeyCode::Char('a') => {
            if app.playlist.current_song().is_some() {
                app.open_mood_dialog(MoodDialogMode::AddSong);
            } else {
                app.set_status("Nothing to add");
            }
        }
        KeyCode::Char('A') => app.show_all_songs(),
        KeyCode::Char('/') => app.open_search(),
        _ => {}
    }
}

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    use simplelog::{LevelFilter, WriteLogger};
    use std::fs::File;

    let log_file = config.log_path();
    WriteLogger::init(
        LevelFilter::Debug,
        simplelog::Config::default(),
        File::create(&log_file)
            .map_err(|e| format!("Could not create log file {}: {e}", log_file.display()))?,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::audio::test_support::{engine_or_skip, write_test_wav};
    use super::*;
    use moodbox::catalog::{LyricLine, Song};
    use moodbox::playlist::PlaylistSource;
    use std::thread;
    use tempfile::TempDir;

    fn song(title: &str, lyrics: Vec<LyricLine>) -> Song {
        Song {
            title: title.to_string(),
            artist: "Nicole".to_string(),
            audio_path: format!("{title}.mp3"),
            cover_path: None,
            duration: 100.0,
            lyrics,
        }
    }

    fn app_with(songs: Vec<Song>) -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let catalog_path = temp_dir.path().join("data.json");
        let json = serde_json::json!({ "songs": songs });
        std::fs::write(&catalog_path, json.to_string()).unwrap();

        let catalog = Catalog::load(&catalog_path).unwrap();
        let moods = MoodStore::open(&temp_dir.path().join("moods.json")).unwrap();
        let app = App::new(catalog, moods, &Config::new());
        (temp_dir, app)
    }

    /// Catalog of short generated tones with an output device attached.
    fn app_with_tones(seconds: f32) -> Option<(TempDir, App)> {
        let engine = engine_or_skip()?;
        let songs = ["One", "Two", "Three"]
            .iter()
            .map(|title| Song {
                audio_path: format!("{title}.wav"),
                ..song(title, Vec::new())
            })
            .collect();
        let (dir, mut app) = app_with(songs);
        for title in ["One", "Two", "Three"] {
            write_test_wav(&dir.path().join(format!("{title}.wav")), seconds);
        }
        app.attach_engine(engine);
        Some((dir, app))
    }

    fn test_app() -> (TempDir, App) {
        let songs = vec![
            song(
                "First",
                vec![
                    LyricLine {
                        text: "hello".to_string(),
                        time: 1.0,
                    },
                    LyricLine {
                        text: "again".to_string(),
                        time: 3.0,
                    },
                ],
            ),
            song("Second", Vec::new()),
            song("Third", Vec::new()),
        ];
        app_with(songs)
    }

    #[test]
    fn test_new_app_initial_state() {
        let (_dir, app) = test_app();

        assert!(!app.should_quit);
        assert!(!app.is_playing);
        assert!(app.audio_engine.is_none());
        assert_eq!(app.playlist.len(), 3);
        assert_eq!(app.playlist.label(), "All Songs");
        assert!(app.mood_dialog.is_none());
        assert!(app.search.is_none());
        assert_eq!(app.progress(), 0.0);
    }

    #[test]
    fn test_load_song_resets_lyrics_and_duration() {
        let (_dir, mut app) = test_app();

        app.load_song(0);
        assert_eq!(app.lyrics.lines().len(), 2);
        assert_eq!(app.duration, Some(Duration::from_secs(100)));

        app.load_song(1);
        assert!(app.lyrics.is_empty());
        assert_eq!(app.playlist.current_index(), 1);
    }

    #[test]
    fn test_unusable_durations_are_unknown() {
        let huge = Song {
            duration: 1e20,
            ..song("Endless", Vec::new())
        };
        let negative = Song {
            duration: -3.0,
            ..song("Backwards", Vec::new())
        };
        let (_dir, mut app) = app_with(vec![huge, negative]);

        app.load_song(0);
        assert_eq!(app.duration, None);
        assert_eq!(app.progress(), 0.0);

        app.load_song(1);
        assert_eq!(app.duration, None);
    }

    #[test]
    fn test_empty_playlist_clears_lyrics() {
        let (_dir, mut app) = test_app();
        app.load_song(0);
        assert!(!app.lyrics.is_empty());

        app.catalog.songs.clear();
        app.show_all_songs();
        assert!(app.lyrics.is_empty());
        assert_eq!(app.duration, None);
    }

    #[test]
    fn test_track_end_advances_to_next_song() {
        let Some((_dir, mut app)) = app_with_tones(0.2) else {
            return;
        };

        app.load_song(0);
        app.toggle_playback();
        assert!(app.is_playing);

        for _ in 0..60 {
            thread::sleep(Duration::from_millis(50));
            app.update_playback_state();
            if app.playlist.current_index() != 0 {
                break;
            }
        }

        assert_eq!(app.playlist.current_index(), 1);
        assert!(app.is_playing);
    }

    #[test]
    fn test_next_song_keeps_playing() {
        let Some((_dir, mut app)) = app_with_tones(2.0) else {
            return;
        };

        app.load_song(0);
        let engine = app.audio_engine.as_ref().unwrap();
        assert!(engine.is_paused());

        app.toggle_playback();
        app.next_song();
        assert_eq!(app.playlist.current_index(), 1);
        assert!(!app.audio_engine.as_ref().unwrap().is_paused());

        // Paused stays paused across track changes
        app.toggle_playback();
        app.next_song();
        assert!(app.audio_engine.as_ref().unwrap().is_paused());
    }

    #[test]
    fn test_toggle_reports_unloadable_track() {
        let Some(engine) = engine_or_skip() else {
            return;
        };
        let (_dir, mut app) = test_app();
        app.attach_engine(engine);

        // The catalog's mp3 files were never written
        app.load_song(0);
        app.status_message = None;

        app.toggle_playback();
        assert!(app.is_playing);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Could not play 'First'")
        );
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let (_dir, mut app) = test_app();
        app.load_song(0);

        app.prev_song();
        assert_eq!(app.playlist.current_index(), 2);

        app.next_song();
        assert_eq!(app.playlist.current_index(), 0);

        app.next_song();
        assert_eq!(app.playlist.current_song().unwrap().title, "Second");
    }

    #[test]
    fn test_lyrics_follow_position() {
        let (_dir, mut app) = test_app();
        app.load_song(0);

        app.position = Duration::from_secs_f64(3.5);
        app.update_playback_state();
        assert_eq!(app.lyrics.active(), Some(1));

        app.position = Duration::from_millis(500);
        app.update_playback_state();
        assert_eq!(app.lyrics.active(), None);
    }

    #[test]
    fn test_progress() {
        let (_dir, mut app) = test_app();
        app.load_song(0);

        app.position = Duration::from_secs(25);
        assert!((app.progress() - 0.25).abs() < f64::EPSILON);

        app.position = Duration::from_secs(500);
        assert_eq!(app.progress(), 1.0);
    }

    #[test]
    fn test_toggle_playback_without_engine() {
        let (_dir, mut app) = test_app();

        app.toggle_playback();
        assert!(app.is_playing);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Audio output unavailable")
        );

        app.toggle_playback();
        assert!(!app.is_playing);
    }

    #[test]
    fn test_create_mood_from_dialog() {
        let (_dir, mut app) = test_app();
        app.open_mood_dialog(MoodDialogMode::Browse);

        app.create_mood();
        assert_eq!(app.moods.len(), 0);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Mood name cannot be empty")
        );

        for c in "Rainy day".chars() {
            app.mood_dialog.as_mut().unwrap().push_char(c);
        }
        app.create_mood();

        assert_eq!(app.moods.len(), 1);
        assert_eq!(app.moods.moods()[0].name, "Rainy day");
        let dialog = app.mood_dialog.as_ref().unwrap();
        assert!(dialog.new_name.is_empty());
        assert_eq!(dialog.focus, MoodDialogFocus::MoodList);
    }

    #[test]
    fn test_add_current_song_rejects_duplicates() {
        let (_dir, mut app) = test_app();
        app.moods.create("Chill").unwrap();
        app.load_song(1);

        app.open_mood_dialog(MoodDialogMode::AddSong);
        app.add_current_song_to_mood(0);
        assert_eq!(app.status_message.as_deref(), Some("Added to Chill"));
        assert!(app.mood_dialog.is_none());

        app.open_mood_dialog(MoodDialogMode::AddSong);
        app.add_current_song_to_mood(0);
        assert_eq!(app.status_message.as_deref(), Some("Already in Chill"));
        assert_eq!(app.moods.moods()[0].songs.len(), 1);
    }

    #[test]
    fn test_play_mood() {
        let (_dir, mut app) = test_app();
        app.moods.create("Empty").unwrap();
        app.moods.create("Full").unwrap();
        app.load_song(2);
        app.add_current_song_to_mood(1);

        app.play_mood(0);
        assert_eq!(app.status_message.as_deref(), Some("Empty mood."));
        assert_eq!(app.playlist.label(), "All Songs");

        app.play_mood(1);
        assert!(app.is_playing);
        assert_eq!(app.playlist.label(), "Full");
        assert!(matches!(
            app.playlist.source(),
            PlaylistSource::Mood { name, .. } if name == "Full"
        ));
        assert_eq!(app.playlist.current_song().unwrap().title, "Third");
        assert_eq!(app.active_mood(), Some(1));

        app.show_all_songs();
        assert_eq!(app.playlist.len(), 3);
        assert_eq!(app.active_mood(), None);
    }

    #[test]
    fn test_delete_mood_confirmation() {
        let (_dir, mut app) = test_app();
        app.moods.create("Keep").unwrap();
        app.moods.create("Drop").unwrap();
        app.open_mood_dialog(MoodDialogMode::Browse);

        let press = |code| event::KeyEvent::new(code, KeyModifiers::NONE);

        handle_key_event(&mut app, press(KeyCode::Down));
        handle_key_event(&mut app, press(KeyCode::Char('d')));
        // Anything but 'y' cancels
        handle_key_event(&mut app, press(KeyCode::Char('n')));
        assert_eq!(app.moods.len(), 2);

        handle_key_event(&mut app, press(KeyCode::Char('d')));
        handle_key_event(&mut app, press(KeyCode::Char('y')));
        assert_eq!(app.moods.len(), 1);
        assert_eq!(app.moods.moods()[0].name, "Keep");
    }

    #[test]
    fn test_search_selection_switches_to_all_songs() {
        let (_dir, mut app) = test_app();
        app.moods.create("Mine").unwrap();
        app.load_song(0);
        app.add_current_song_to_mood(0);
        app.play_mood(0);

        app.open_search();
        let songs = app.catalog.songs.clone();
        for c in "third".chars() {
            app.search.as_mut().unwrap().push_char(c, &songs);
        }
        app.play_search_selection();

        assert!(app.search.is_none());
        assert_eq!(app.playlist.label(), "All Songs");
        assert_eq!(app.playlist.current_song().unwrap().title, "Third");
    }

    #[test]
    fn test_player_keys() {
        let (_dir, mut app) = test_app();
        app.load_song(0);
        let press = |code| event::KeyEvent::new(code, KeyModifiers::NONE);

        handle_key_event(&mut app, press(KeyCode::Char('n')));
        assert_eq!(app.playlist.current_index(), 1);

        handle_key_event(&mut app, press(KeyCode::Char('m')));
        assert!(app.mood_dialog.is_some());
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(app.mood_dialog.is_none());

        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
