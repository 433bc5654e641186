use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The capability class of a looked-up item. Episode operations are
/// only defined for kinds that carry episodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Film,
    Series,
}

impl ItemKind {
    pub fn supports_episodes(&self) -> bool {
        matches!(self, ItemKind::Series)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Film => write!(f, "film"),
            ItemKind::Series => write!(f, "series"),
        }
    }
}

/// A single hit from a lookup: a title plus an opaque provider handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub handle: String,
    pub title: String,
}

/// The fully resolved record for one selected search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub handle: String,
    pub title: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub premiered: Option<NaiveDate>,
    #[serde(default)]
    pub rating: Option<f32>,
}

/// One entry of a series' episode list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub handle: String,
    pub season: u32,
    pub number: u32,
    pub title: String,
}

impl std::fmt::Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{:02} {}", self.season, self.number, self.title)
    }
}

/// Extended per-episode fields, fetched lazily.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDetails {
    pub title: String,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub aired: Option<NaiveDate>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub credits: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
}

/// A provider setting: fixed id, human label, current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl Setting {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}
