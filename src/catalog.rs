//! Song catalog loaded from a JSON file.
//!
//! The catalog file has the shape `{ "songs": [ ... ] }` where every song carries
//! its title, artist, audio path, optional cover path, duration in seconds and a
//! list of timed lyric lines. Asset paths are resolved against the directory that
//! holds the catalog file, so a catalog can be moved together with its media.

use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub audio_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_path: Option<String>,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub lyrics: Vec<LyricLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    pub text: String,
    pub time: f64,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    songs: Vec<Song>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssetKind {
    Audio,
    Cover,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Audio => write!(f, "audio"),
            AssetKind::Cover => write!(f, "cover"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetProblem {
    pub song: String,
    pub kind: AssetKind,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub songs: Vec<Song>,
    base_dir: PathBuf,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Could not read catalog {}: {e}", path.display()))?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let catalog = Self::from_json(&contents, base_dir)
            .map_err(|e| format!("Invalid catalog {}: {e}", path.display()))?;
        log::info!(
            "Loaded {} songs from {}",
            catalog.songs.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(contents: &str, base_dir: PathBuf) -> Result<Self, Box<dyn Error>> {
        let file: CatalogFile = serde_json::from_str(contents)?;
        Ok(Self {
            songs: file.songs,
            base_dir,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Resolve an asset path from the catalog relative to the catalog's directory.
    pub fn resolve(&self, asset: &str) -> PathBuf {
        resolve_asset(&self.base_dir, asset)
    }

    /// Find a song by exact title, falling back to a substring of "title artist".
    pub fn find(&self, pattern: &str) -> Option<usize> {
        let needle = pattern.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.songs
            .iter()
            .position(|s| s.title.to_lowercase() == needle)
            .or_else(|| {
                self.songs.iter().position(|s| {
                    format!("{} {}", s.title, s.artist)
                        .to_lowercase()
                        .contains(&needle)
                })
            })
    }

    /// Check that every referenced audio and cover file exists.
    ///
    /// Songs are checked in parallel. The returned problems keep catalog order.
    pub fn check_assets(&self, progress: Option<&ProgressBar>) -> Vec<AssetProblem> {
        self.songs
            .par_iter()
            .flat_map_iter(|song| {
                let problems = self.song_problems(song);
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                problems
            })
            .collect()
    }

    fn song_problems(&self, song: &Song) -> Vec<AssetProblem> {
        let mut problems = Vec::new();

        let audio = self.resolve(&song.audio_path);
        if !audio.is_file() {
            problems.push(AssetProblem {
                song: song.title.clone(),
                kind: AssetKind::Audio,
                path: audio,
            });
        }

        if let Some(cover) = &song.cover_path {
            let cover = self.resolve(cover);
            if !cover.is_file() {
                problems.push(AssetProblem {
                    song: song.title.clone(),
                    kind: AssetKind::Cover,
                    path: cover,
                });
            }
        }

        problems
    }
}

pub fn resolve_asset(base_dir: &Path, asset: &str) -> PathBuf {
    let expanded = shellexpand::tilde(asset);
    let path = Path::new(expanded.as_ref());
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
