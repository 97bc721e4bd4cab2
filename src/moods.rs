//! Mood playlists and their persistent store.
//!
//! A mood is a named list of songs copied out of the catalog. All moods live in a
//! single JSON file that is rewritten wholesale after every change, so the store on
//! disk always mirrors the in-memory list.

use crate::catalog::Song;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl Mood {
    pub fn contains_title(&self, title: &str) -> bool {
        self.songs.iter().any(|s| s.title == title)
    }

    /// Creation time, decoded from the millisecond timestamp in the id.
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.id
            .parse::<i64>()
            .ok()
            .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoodError {
    EmptyName,
    NotFound(usize),
    DuplicateSong { mood: String, song: String },
}

impl fmt::Display for MoodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodError::EmptyName => write!(f, "Mood name cannot be empty"),
            MoodError::NotFound(index) => write!(f, "No mood at position {index}"),
            MoodError::DuplicateSong { mood, song } => {
                write!(f, "'{song}' is already in {mood}")
            }
        }
    }
}

impl Error for MoodError {}

pub struct MoodStore {
    path: PathBuf,
    moods: Vec<Mood>,
}

impl MoodStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let moods = if path.exists() {
            let contents = fs::read_to_string(path)?;
            if contents.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&contents)
                    .map_err(|e| format!("Invalid mood store {}: {e}", path.display()))?
            }
        } else {
            Vec::new()
        };

        log::info!("Loaded {} moods from {}", moods.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            moods,
        })
    }

    /// Store with no moods that will write to `path` on the first change.
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            moods: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }

    pub fn get(&self, index: usize) -> Option<&Mood> {
        self.moods.get(index)
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.moods.iter().position(|m| m.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        let name = name.trim().to_lowercase();
        self.moods
            .iter()
            .position(|m| m.name.to_lowercase() == name)
    }

    /// Write the whole mood list to disk. Mutations roll back when this fails, so
    /// the list in memory never holds changes the file does not.
    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
        }

        let json = serde_json::to_string_pretty(&self.moods)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        log::debug!("Saved {} moods to {}", self.moods.len(), self.path.display());
        Ok(())
    }

    /// Create an empty mood and persist. Returns its position.
    pub fn create(&mut self, name: &str) -> Result<usize, Box<dyn Error>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MoodError::EmptyName.into());
        }

        let id = self.next_id(chrono::Utc::now().timestamp_millis());
        self.moods.push(Mood {
            id,
            name: name.to_string(),
            songs: Vec::new(),
        });
        if let Err(e) = self.save() {
            self.moods.pop();
            return Err(e);
        }

        log::info!("Created mood '{name}'");
        Ok(self.moods.len() - 1)
    }

    pub fn delete(&mut self, index: usize) -> Result<Mood, Box<dyn Error>> {
        if index >= self.moods.len() {
            return Err(MoodError::NotFound(index).into());
        }

        let removed = self.moods.remove(index);
        if let Err(e) = self.save() {
            self.moods.insert(index, removed);
            return Err(e);
        }

        log::info!("Deleted mood '{}'", removed.name);
        Ok(removed)
    }

    /// Append a copy of `song` to the mood at `index`. Titles are unique per mood.
    pub fn add_song(&mut self, index: usize, song: &Song) -> Result<(), Box<dyn Error>> {
        let mood = self
            .moods
            .get_mut(index)
            .ok_or(MoodError::NotFound(index))?;

        if mood.contains_title(&song.title) {
            return Err(MoodError::DuplicateSong {
                mood: mood.name.clone(),
                song: song.title.clone(),
            }
            .into());
        }

        mood.songs.push(song.clone());
        if let Err(e) = self.save() {
            self.moods[index].songs.pop();
            return Err(e);
        }

        log::info!("Added '{}' to mood '{}'", song.title, self.moods[index].name);
        Ok(())
    }

    fn next_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        while self.moods.iter().any(|m| m.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn song(title: &str) -> Song {
        Song {
            title: title.to_string(),
            artist: "Artist".to_string(),
            audio_path: format!("{title}.mp3"),
            cover_path: None,
            duration: 120.0,
            lyrics: Vec::new(),
        }
    }

    fn temp_store() -> (TempDir, MoodStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = MoodStore::open(&temp_dir.path().join("moods.json")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_open_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("moods.json");
        fs::write(&path, "[{ broken").unwrap();

        assert!(MoodStore::open(&path).is_err());
    }

    #[test]
    fn test_create_trims_and_persists() {
        let (_dir, mut store) = temp_store();

        let index = store.create("  Sunday Morning  ").unwrap();
        assert_eq!(index, 0);
        assert_eq!(store.moods()[0].name, "Sunday Morning");
        assert!(store.moods()[0].songs.is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let (_dir, mut store) = temp_store();

        let err = store.create("   ").unwrap_err();
        assert_eq!(
            err.downcast_ref::<MoodError>(),
            Some(&MoodError::EmptyName)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_unique_within_same_millisecond() {
        let (_dir, mut store) = temp_store();
        store.moods.push(Mood {
            id: "1000".to_string(),
            name: "a".to_string(),
            songs: Vec::new(),
        });
        store.moods.push(Mood {
            id: "1001".to_string(),
            name: "b".to_string(),
            songs: Vec::new(),
        });

        assert_eq!(store.next_id(1000), "1002");
        assert_eq!(store.next_id(5), "5");
    }

    #[test]
    fn test_add_song_rejects_duplicate_title() {
        let (_dir, mut store) = temp_store();
        store.create("Chill").unwrap();

        store.add_song(0, &song("Quiet Rain")).unwrap();
        let err = store.add_song(0, &song("Quiet Rain")).unwrap_err();

        match err.downcast_ref::<MoodError>() {
            Some(MoodError::DuplicateSong { mood, song }) => {
                assert_eq!(mood, "Chill");
                assert_eq!(song, "Quiet Rain");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.moods()[0].songs.len(), 1);
    }

    #[test]
    fn test_add_song_to_missing_mood() {
        let (_dir, mut store) = temp_store();
        assert!(store.add_song(3, &song("x")).is_err());
    }

    #[test]
    fn test_delete() {
        let (_dir, mut store) = temp_store();
        store.create("One").unwrap();
        store.create("Two").unwrap();

        let removed = store.delete(0).unwrap();
        assert_eq!(removed.name, "One");
        assert_eq!(store.len(), 1);
        assert_eq!(store.moods()[0].name, "Two");

        assert!(store.delete(5).is_err());
    }

    #[test]
    fn test_failed_save_leaves_moods_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("moods.json");
        let mut store = MoodStore::open(&good).unwrap();
        store.create("Keep").unwrap();
        store.add_song(0, &song("Quiet Rain")).unwrap();

        // A regular file where the store's directory should be
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        store.path = blocker.join("moods.json");

        assert!(store.create("Ghost").is_err());
        assert_eq!(store.len(), 1);

        assert!(store.add_song(0, &song("Neon Nights")).is_err());
        assert_eq!(store.moods()[0].songs.len(), 1);

        assert!(store.delete(0).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.moods()[0].name, "Keep");
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let (_dir, mut store) = temp_store();
        store.create("Road Trip").unwrap();

        assert_eq!(store.find_by_name("road trip"), Some(0));
        assert_eq!(store.find_by_name("ROAD TRIP "), Some(0));
        assert_eq!(store.find_by_name("road"), None);
    }

    #[test]
    fn test_created_at_from_id() {
        let mood = Mood {
            id: "1700000000000".to_string(),
            name: "x".to_string(),
            songs: Vec::new(),
        };
        let created = mood.created_at().unwrap();
        assert_eq!(created.timestamp(), 1_700_000_000);

        let mood = Mood {
            id: "not-a-number".to_string(),
            ..mood
        };
        assert!(mood.created_at().is_none());
    }
}
