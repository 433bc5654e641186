//! File-backed provider reading a JSON catalog at startup.
//!
//! The catalog stands in for a real scraping engine: one file holds
//! every entry the source knows about, with episode lists and their
//! extended fields embedded. Searches are case-insensitive substring
//! matches over titles.
//!
//! ```text
//! {
//!   "entries": [
//!     { "handle": "dune-2021", "title": "Dune (2021)", "kind": "film", ... },
//!     { "handle": "expanse", "title": "The Expanse", "kind": "series",
//!       "episodes": [ { "handle": "expanse/1x01", "season": 1, ... } ] }
//!   ],
//!   "settings": [ { "id": "output_language", ... } ]
//! }
//! ```

use super::MetadataProvider;
use crate::error::{MedzError, Result};
use crate::model::{Episode, EpisodeDetails, ItemDetails, ItemKind, SearchResult, Setting};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogEpisode {
    handle: String,
    season: u32,
    number: u32,
    title: String,
    #[serde(default)]
    plot: Option<String>,
    #[serde(default)]
    aired: Option<NaiveDate>,
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    credits: Vec<String>,
    #[serde(default)]
    actors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogEntry {
    handle: String,
    title: String,
    kind: ItemKind,
    #[serde(default)]
    plot: Option<String>,
    #[serde(default)]
    premiered: Option<NaiveDate>,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    episodes: Vec<CatalogEpisode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    entries: Vec<CatalogEntry>,
    #[serde(default = "default_settings")]
    settings: Vec<Setting>,
}

fn default_settings() -> Vec<Setting> {
    vec![
        Setting::new("output_language", "Preferred metadata language", "en"),
        Setting::new("fetch_thumbnails", "Fetch thumbnail URLs", "true"),
    ]
}

/// Production [`MetadataProvider`] backed by a JSON catalog file.
pub struct CatalogProvider {
    entries: Vec<CatalogEntry>,
    settings: Vec<Setting>,
}

impl CatalogProvider {
    /// Load a catalog from the given path, or fail with `Io` /
    /// `Serialization`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(MedzError::Io)?;
        let file: CatalogFile =
            serde_json::from_str(&content).map_err(MedzError::Serialization)?;
        Ok(Self {
            entries: file.entries,
            settings: file.settings,
        })
    }

    fn entry(&self, handle: &str) -> Result<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .ok_or_else(|| MedzError::Provider(format!("unknown handle '{}'", handle)))
    }
}

impl MetadataProvider for CatalogProvider {
    fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = query.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&query))
            .map(|e| SearchResult {
                handle: e.handle.clone(),
                title: e.title.clone(),
            })
            .collect())
    }

    fn fetch_details(&self, handle: &str) -> Result<ItemDetails> {
        let entry = self.entry(handle)?;
        Ok(ItemDetails {
            handle: entry.handle.clone(),
            title: entry.title.clone(),
            kind: entry.kind,
            plot: entry.plot.clone(),
            premiered: entry.premiered,
            rating: entry.rating,
        })
    }

    fn fetch_episodes(&self, details: &ItemDetails) -> Result<Vec<Episode>> {
        let entry = self.entry(&details.handle)?;
        Ok(entry
            .episodes
            .iter()
            .map(|ep| Episode {
                handle: ep.handle.clone(),
                season: ep.season,
                number: ep.number,
                title: ep.title.clone(),
            })
            .collect())
    }

    fn fetch_episode_details(&self, episode: &Episode) -> Result<EpisodeDetails> {
        let ep = self
            .entries
            .iter()
            .flat_map(|e| e.episodes.iter())
            .find(|ep| ep.handle == episode.handle)
            .ok_or_else(|| {
                MedzError::Provider(format!("unknown episode handle '{}'", episode.handle))
            })?;
        Ok(EpisodeDetails {
            title: ep.title.clone(),
            plot: ep.plot.clone(),
            aired: ep.aired,
            director: ep.director.clone(),
            rating: ep.rating,
            thumbnail: ep.thumbnail.clone(),
            credits: ep.credits.clone(),
            actors: ep.actors.clone(),
        })
    }

    fn list_settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn set_setting(&mut self, id: &str, value: &str) -> Result<()> {
        match self.settings.iter_mut().find(|s| s.id == id) {
            Some(setting) => {
                setting.value = value.to_string();
                Ok(())
            }
            None => Err(MedzError::UnknownSetting {
                id: id.to_string(),
                valid: self.settings.iter().map(|s| s.id.clone()).collect(),
            }),
        }
    }
}
