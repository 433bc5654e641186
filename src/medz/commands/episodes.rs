//! Episode drilldown: `episode_list` and `episode_details`.
//!
//! Both require a current selection whose kind carries episodes. The
//! episode list is fetched once per selection and cached on the
//! session, so `episode_details` works with or without a prior
//! `episode_list`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MedzError, Result};
use crate::index;
use crate::provider::MetadataProvider;
use crate::session::SessionState;

pub fn list<P: MetadataProvider>(
    provider: &P,
    session: &mut SessionState,
) -> Result<CmdResult> {
    let title = ensure_episodes(provider, session)?;

    let mut cmd_result = CmdResult::default();
    if session.episodes().is_empty() {
        cmd_result.add_message(CmdMessage::warning(format!("No episodes for '{}'", title)));
    } else {
        cmd_result.add_message(CmdMessage::info(format!("Episodes of '{}'", title)));
    }
    Ok(cmd_result.with_episodes(session.episodes().to_vec()))
}

pub fn details<P: MetadataProvider>(
    provider: &P,
    session: &mut SessionState,
    which: &str,
) -> Result<CmdResult> {
    ensure_episodes(provider, session)?;

    let pos = index::resolve(which, session.episodes().len())?;
    let episode = &session.episodes()[pos];
    let episode_details = provider.fetch_episode_details(episode)?;

    let mut cmd_result = CmdResult::default().with_episode(episode_details);
    cmd_result.add_message(CmdMessage::success(format!("Episode: {}", episode)));
    Ok(cmd_result)
}

/// Checks selection and capability, fetches the episode list if the
/// cache is empty, and returns the selection's title.
fn ensure_episodes<P: MetadataProvider>(
    provider: &P,
    session: &mut SessionState,
) -> Result<String> {
    let selection = session.current_selection()?;
    if !selection.kind.supports_episodes() {
        return Err(MedzError::Unsupported(selection.title.clone()));
    }
    let title = selection.title.clone();

    if session.episodes().is_empty() {
        let episodes = provider.fetch_episodes(selection)?;
        session.record_episodes(episodes);
    }
    Ok(title)
}
