//! The list of songs currently being played.
//!
//! A playlist is either the whole catalog or a copy of one mood's songs. Moving
//! past either end wraps around.

use crate::catalog::Song;
use crate::constants::ALL_SONGS_LABEL;
use crate::moods::Mood;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistSource {
    AllSongs,
    Mood { id: String, name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistError {
    EmptyMood(String),
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistError::EmptyMood(name) => write!(f, "Mood '{name}' is empty"),
            PlaylistError::OutOfRange { index, len } => {
                write!(f, "Track {index} out of range (playlist has {len})")
            }
        }
    }
}

impl Error for PlaylistError {}

#[derive(Debug, Clone)]
pub struct Playlist {
    songs: Vec<Song>,
    current: usize,
    source: PlaylistSource,
}

impl Playlist {
    pub fn all_songs(songs: &[Song]) -> Self {
        Self {
            songs: songs.to_vec(),
            current: 0,
            source: PlaylistSource::AllSongs,
        }
    }

    pub fn from_mood(mood: &Mood) -> Result<Self, PlaylistError> {
        if mood.songs.is_empty() {
            return Err(PlaylistError::EmptyMood(mood.name.clone()));
        }

        Ok(Self {
            songs: mood.songs.clone(),
            current: 0,
            source: PlaylistSource::Mood {
                id: mood.id.clone(),
                name: mood.name.clone(),
            },
        })
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.songs.get(self.current)
    }

    pub fn source(&self) -> &PlaylistSource {
        &self.source
    }

    pub fn mood_id(&self) -> Option<&str> {
        match &self.source {
            PlaylistSource::Mood { id, .. } => Some(id),
            PlaylistSource::AllSongs => None,
        }
    }

    pub fn label(&self) -> &str {
        match &self.source {
            PlaylistSource::AllSongs => ALL_SONGS_LABEL,
            PlaylistSource::Mood { name, .. } => name,
        }
    }

    pub fn next_index(&self) -> Option<usize> {
        if self.songs.is_empty() {
            return None;
        }
        Some((self.current + 1) % self.songs.len())
    }

    pub fn prev_index(&self) -> Option<usize> {
        if self.songs.is_empty() {
            return None;
        }
        if self.current == 0 {
            Some(self.songs.len() - 1)
        } else {
            Some(self.current - 1)
        }
    }

    pub fn next(&mut self) -> Option<&Song> {
        let index = self.next_index()?;
        self.current = index;
        self.current_song()
    }

    pub fn previous(&mut self) -> Option<&Song> {
        let index = self.prev_index()?;
        self.current = index;
        self.current_song()
    }

    pub fn select(&mut self, index: usize) -> Result<&Song, PlaylistError> {
        if index >= self.songs.len() {
            return Err(PlaylistError::OutOfRange {
                index,
                len: self.songs.len(),
            });
        }
        self.current = index;
        Ok(&self.songs[index])
    }
}
