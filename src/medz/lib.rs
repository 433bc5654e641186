//! # Medz Architecture
//!
//! Medz is a **UI-agnostic drilldown library** over media-metadata
//! sources, with an interactive shell as its only client so far. The
//! session logic lives in the library; the binary is a thin REPL.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  REPL binary (main.rs)                                     │
//! │  - Reads lines, prints CmdResults and errors               │
//! │  - The ONLY place that knows about stdout/stderr           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Dispatch + API (dispatch.rs, api.rs)                      │
//! │  - Splits each line into verb + remainder                  │
//! │  - Routes to the matching handler, owns the SessionState   │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Pure drilldown logic, returns structured CmdResults     │
//! │  - No I/O assumptions whatsoever                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Provider Layer (provider/)                                │
//! │  - Abstract MetadataProvider trait                         │
//! │  - CatalogProvider (production), InMemoryProvider (tests)  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session memory
//!
//! The whole point of the shell is stateful drilldown: `lookup`
//! remembers its results so `details <n>` can address them by number,
//! and a selected series remembers its episode list so
//! `episode_details <n>` can do the same one level down.
//! [`session::SessionState`] is that memory; it is created empty,
//! mutated only by command handlers, and discarded with the session.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`dispatch`]: Verb parsing and routing
//! - [`commands`]: Logic for each command
//! - [`provider`]: Metadata-source abstraction and backends
//! - [`model`]: Core data types (`SearchResult`, `ItemDetails`, ...)
//! - [`session`]: The session's navigational memory
//! - [`index`]: 1-based user index resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod index;
pub mod model;
pub mod provider;
pub mod session;
