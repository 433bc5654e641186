//! # Provider Layer
//!
//! This module defines the metadata-source abstraction for medz. The
//! [`MetadataProvider`] trait lets the session core work against any
//! backend that can answer searches and resolve detail records.
//!
//! ## Design Rationale
//!
//! The source is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryProvider` (no files or network)
//! - Allow **future backends** (HTTP APIs, scraper engines) without
//!   changing the session core
//! - Keep the drilldown logic **decoupled** from where the metadata
//!   actually comes from
//!
//! ## Implementations
//!
//! - [`catalog::CatalogProvider`]: production backend reading a JSON
//!   catalog file at startup
//! - [`memory::InMemoryProvider`]: in-memory backend for tests, with a
//!   fixture builder
//!
//! Handles returned inside [`SearchResult`] and [`Episode`] are opaque
//! to the core: only the provider that produced them interprets them.

use crate::error::Result;
use crate::model::{Episode, EpisodeDetails, ItemDetails, SearchResult, Setting};

pub mod catalog;
pub mod memory;

/// Abstract interface to a media-metadata source.
///
/// All methods are synchronous; the session processes one command to
/// completion at a time. A search may legitimately return an empty
/// list; transport or parse failures surface as `MedzError::Provider`.
pub trait MetadataProvider {
    /// Search the source for items matching a free-form query
    fn search(&self, query: &str) -> Result<Vec<SearchResult>>;

    /// Resolve a search-result handle into a full detail record
    fn fetch_details(&self, handle: &str) -> Result<ItemDetails>;

    /// List the episodes of an item. Callers check the item's
    /// capability class first; providers may assume it holds.
    fn fetch_episodes(&self, details: &ItemDetails) -> Result<Vec<Episode>>;

    /// Resolve an episode handle into its extended fields
    fn fetch_episode_details(&self, episode: &Episode) -> Result<EpisodeDetails>;

    /// The source's settings, in a stable order
    fn list_settings(&self) -> Vec<Setting>;

    /// Update a setting's value. The id is validated by the caller;
    /// value semantics are the provider's own concern.
    fn set_setting(&mut self, id: &str, value: &str) -> Result<()>;
}
