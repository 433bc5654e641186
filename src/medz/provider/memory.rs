use super::MetadataProvider;
use crate::error::{MedzError, Result};
use crate::model::{Episode, EpisodeDetails, ItemDetails, ItemKind, SearchResult, Setting};

/// In-memory metadata source for testing and development.
/// Holds a fixed set of items; nothing is fetched from anywhere.
#[derive(Default)]
pub struct InMemoryProvider {
    items: Vec<MemoryItem>,
    settings: Vec<Setting>,
}

struct MemoryItem {
    details: ItemDetails,
    episodes: Vec<(Episode, EpisodeDetails)>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn item(&self, handle: &str) -> Result<&MemoryItem> {
        self.items
            .iter()
            .find(|i| i.details.handle == handle)
            .ok_or_else(|| MedzError::Provider(format!("unknown handle '{}'", handle)))
    }
}

impl MetadataProvider for InMemoryProvider {
    fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = query.to_lowercase();
        Ok(self
            .items
            .iter()
            .filter(|i| i.details.title.to_lowercase().contains(&query))
            .map(|i| SearchResult {
                handle: i.details.handle.clone(),
                title: i.details.title.clone(),
            })
            .collect())
    }

    fn fetch_details(&self, handle: &str) -> Result<ItemDetails> {
        Ok(self.item(handle)?.details.clone())
    }

    fn fetch_episodes(&self, details: &ItemDetails) -> Result<Vec<Episode>> {
        Ok(self
            .item(&details.handle)?
            .episodes
            .iter()
            .map(|(ep, _)| ep.clone())
            .collect())
    }

    fn fetch_episode_details(&self, episode: &Episode) -> Result<EpisodeDetails> {
        self.items
            .iter()
            .flat_map(|i| i.episodes.iter())
            .find(|(ep, _)| ep.handle == episode.handle)
            .map(|(_, details)| details.clone())
            .ok_or_else(|| {
                MedzError::Provider(format!("unknown episode handle '{}'", episode.handle))
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

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct ProviderFixture {
        pub provider: InMemoryProvider,
    }

    impl Default for ProviderFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ProviderFixture {
        pub fn new() -> Self {
            Self {
                provider: InMemoryProvider::new(),
            }
        }

        pub fn with_film(mut self, title: &str) -> Self {
            self.provider.items.push(MemoryItem {
                details: ItemDetails {
                    handle: handle_for(title),
                    title: title.to_string(),
                    kind: ItemKind::Film,
                    plot: Some(format!("The plot of {}", title)),
                    premiered: None,
                    rating: Some(7.0),
                },
                episodes: Vec::new(),
            });
            self
        }

        pub fn with_series(mut self, title: &str, episode_titles: &[&str]) -> Self {
            let series_handle = handle_for(title);
            let episodes = episode_titles
                .iter()
                .enumerate()
                .map(|(i, ep_title)| {
                    let number = (i + 1) as u32;
                    let episode = Episode {
                        handle: format!("{}/1x{:02}", series_handle, number),
                        season: 1,
                        number,
                        title: ep_title.to_string(),
                    };
                    let details = EpisodeDetails {
                        title: ep_title.to_string(),
                        plot: Some(format!("The plot of {}", ep_title)),
                        director: Some("A. Director".to_string()),
                        credits: vec!["A. Writer".to_string()],
                        actors: vec!["B. Lead".to_string(), "C. Support".to_string()],
                        ..EpisodeDetails::default()
                    };
                    (episode, details)
                })
                .collect();
            self.provider.items.push(MemoryItem {
                details: ItemDetails {
                    handle: series_handle,
                    title: title.to_string(),
                    kind: ItemKind::Series,
                    plot: Some(format!("The plot of {}", title)),
                    premiered: None,
                    rating: Some(8.0),
                },
                episodes,
            });
            self
        }

        pub fn with_setting(mut self, id: &str, label: &str, value: &str) -> Self {
            self.provider.settings.push(Setting::new(id, label, value));
            self
        }
    }

    fn handle_for(title: &str) -> String {
        title
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect::<String>()
            .to_lowercase()
            .replace(' ', "-")
    }
}
