//! # API Facade
//!
//! [`MedzApi`] is a thin facade over the command layer: it owns the
//! provider and the session state and exposes one method per
//! operation. All UI clients (the REPL binary, tests) drive the
//! session through it; nothing here writes to stdout or formats text.
//!
//! Generic over [`MetadataProvider`] so the same facade runs against
//! the catalog backend in production and `InMemoryProvider` in tests.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::provider::MetadataProvider;
use crate::session::SessionState;

pub struct MedzApi<P: MetadataProvider> {
    provider: P,
    session: SessionState,
}

impl<P: MetadataProvider> MedzApi<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            session: SessionState::new(),
        }
    }

    pub fn lookup(&mut self, query: &str) -> Result<CmdResult> {
        commands::lookup::run(&self.provider, &mut self.session, query)
    }

    pub fn details(&mut self, which: &str) -> Result<CmdResult> {
        commands::details::run(&self.provider, &mut self.session, which)
    }

    pub fn episode_list(&mut self) -> Result<CmdResult> {
        commands::episodes::list(&self.provider, &mut self.session)
    }

    pub fn episode_details(&mut self, which: &str) -> Result<CmdResult> {
        commands::episodes::details(&self.provider, &mut self.session, which)
    }

    pub fn settings(&self) -> Result<CmdResult> {
        commands::settings::list(&self.provider)
    }

    pub fn set_setting(&mut self, id: &str, value: &str) -> Result<CmdResult> {
        commands::settings::set(&mut self.provider, id, value)
    }

    pub fn dump(&self) -> Result<CmdResult> {
        commands::dump::run(&self.session)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        self.session.reset();
        Ok(CmdResult::default())
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }
}
