// SPDX-License-Identifier: MPL-2.0
//! Video catalog: the fixed, ordered list of playable records.
//!
//! The catalog is built once at startup, either from the bundled records or
//! from a TOML file, and is read-only afterwards. Its order is both the
//! display order and the playback order: "next" is the cyclic successor.
//!
//! # Catalog file format
//!
//! ```toml
//! [[videos]]
//! id = 1
//! title = "Elephants Dream"
//! artist = "Blender Foundation"
//! poster = "/assets/elephants.jpg"
//! media = "/assets/elephants.mp4"
//! ```

use crate::domain::video::VideoId;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A single playable entry. Never mutated after the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: VideoId,
    pub title: String,
    pub artist: String,
    /// Still image shown before playback starts.
    pub poster: String,
    /// Playable media reference handed to the surface.
    pub media: String,
}

impl VideoRecord {
    pub fn new(
        id: VideoId,
        title: impl Into<String>,
        artist: impl Into<String>,
        poster: impl Into<String>,
        media: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            poster: poster.into(),
            media: media.into(),
        }
    }
}

/// Ordered, non-empty collection of records with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<VideoRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty lists and duplicate ids.
    pub fn new(records: Vec<VideoRecord>) -> std::result::Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.value() == 0 {
                return Err(CatalogError::InvalidId(0));
            }
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        Ok(Self { records })
    }

    /// The three-video showcase bundled with the widget.
    pub fn builtin() -> Self {
        Self {
            records: vec![
                VideoRecord::new(
                    VideoId::new(1),
                    "Ceiça - O Clipe",
                    "Manoel Gomes",
                    "/assets/manoelgomes.jpeg",
                    "/assets/videomanoelgomes.mp4",
                ),
                VideoRecord::new(
                    VideoId::new(2),
                    "Elephants Dream",
                    "Filme",
                    "/assets/elephants.jpg",
                    "/assets/elephants.mp4",
                ),
                VideoRecord::new(
                    VideoId::new(3),
                    "Video do Gato",
                    "Miau",
                    "/assets/gato.jpeg",
                    "/assets/gato.mp4",
                ),
            ],
        }
    }

    /// Returns every record in display order.
    pub fn all(&self) -> &[VideoRecord] {
        &self.records
    }

    /// Returns the record with exactly this id.
    pub fn find_by_id(&self, id: VideoId) -> Option<&VideoRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns the position of `id` in display order.
    pub fn index_of(&self, id: VideoId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Returns the cyclic successor of `after_id`.
    ///
    /// An id that is not in the catalog restarts at the first record.
    pub fn next(&self, after_id: VideoId) -> &VideoRecord {
        let next_index = match self.index_of(after_id) {
            Some(idx) => (idx + 1) % self.records.len(),
            None => 0,
        };
        &self.records[next_index]
    }

    /// Returns the first record.
    pub fn first(&self) -> &VideoRecord {
        &self.records[0]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// File loading
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    videos: Vec<CatalogEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogEntry {
    id: i64,
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    poster: String,
    media: String,
}

impl TryFrom<CatalogEntry> for VideoRecord {
    type Error = CatalogError;

    fn try_from(entry: CatalogEntry) -> std::result::Result<Self, Self::Error> {
        let id = u32::try_from(entry.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(CatalogError::InvalidId(entry.id))?;
        Ok(VideoRecord::new(
            VideoId::new(id),
            entry.title,
            entry.artist,
            entry.poster,
            entry.media,
        ))
    }
}

/// Parses a catalog from TOML text.
pub fn parse(content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(content)?;
    let records = file
        .videos
        .into_iter()
        .map(VideoRecord::try_from)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Catalog::new(records)?)
}

/// Loads a catalog from a TOML file.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let catalog = parse(&content)?;
    log::debug!(
        "Loaded {} videos from catalog {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}
