//! Song metadata and the bundled song catalog

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Metadata for a single song.
///
/// Immutable once constructed; two songs are equal when all their fields
/// are equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    /// Source URI or path handed to the audio device.
    pub file: String,
    /// Cover art URI or path, rendered by the displays.
    pub cover: String,
}

impl Song {
    pub fn new(title: &str, artist: &str, file: &str, cover: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            file: file.to_string(),
            cover: cover.to_string(),
        }
    }
}

/// Ordered, read-only catalog of songs available to the player.
///
/// Not a playlist: entries are fixed for the session and looked up by index
/// from the key bindings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SongLibrary {
    songs: Vec<Song>,
}

impl SongLibrary {
    /// Demo catalog used when no library file is configured.
    pub fn builtin() -> Self {
        Self {
            songs: vec![
                Song::new(
                    "Better Day",
                    "Penguin Music",
                    "songs/better-day.mp3",
                    "songs/better-day.webp",
                ),
                Song::new(
                    "Fear of the Dark",
                    "Iron Maiden",
                    "songs/fear-of-the-dark.mp3",
                    "songs/fear-of-the-dark.webp",
                ),
                Song::new(
                    "Midnight Drive",
                    "Aurora Fields",
                    "songs/midnight-drive.mp3",
                    "songs/midnight-drive.webp",
                ),
            ],
        }
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let library: SongLibrary = serde_json::from_str(&content)?;
        Ok(library)
    }

    /// Load the catalog named in the settings, falling back to the built-in
    /// demo catalog when no file is configured or loading fails.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(library) if !library.is_empty() => {
                    tracing::info!(path = %path.display(), songs = library.len(), "Song library loaded");
                    library
                }
                Ok(_) => {
                    tracing::warn!(path = %path.display(), "Song library is empty, using built-in catalog");
                    Self::builtin()
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Could not load song library, using built-in catalog");
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
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
}
