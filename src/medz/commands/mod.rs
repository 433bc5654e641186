use crate::model::{Episode, EpisodeDetails, ItemDetails, SearchResult, Setting};

pub mod details;
pub mod dump;
pub mod episodes;
pub mod lookup;
pub mod settings;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured outcome of one command, free of presentation concerns.
/// The binary decides how each field is rendered.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub results: Vec<SearchResult>,
    pub details: Option<ItemDetails>,
    pub episodes: Vec<Episode>,
    pub episode: Option<EpisodeDetails>,
    pub settings: Vec<Setting>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_results(mut self, results: Vec<SearchResult>) -> Self {
        self.results = results;
        self
    }

    pub fn with_details(mut self, details: ItemDetails) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_episodes(mut self, episodes: Vec<Episode>) -> Self {
        self.episodes = episodes;
        self
    }

    pub fn with_episode(mut self, episode: EpisodeDetails) -> Self {
        self.episode = Some(episode);
        self
    }

    pub fn with_settings(mut self, settings: Vec<Setting>) -> Self {
        self.settings = settings;
        self
    }
}
