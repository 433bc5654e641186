use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::SessionState;

/// Summarizes the session's navigational memory. Never fails.
pub fn run(session: &SessionState) -> Result<CmdResult> {
    let mut cmd_result = CmdResult::default()
        .with_results(session.results().to_vec())
        .with_episodes(session.episodes().to_vec());

    if session.results().is_empty() {
        cmd_result.add_message(CmdMessage::info("No lookup results"));
    }
    match session.current_selection() {
        Ok(details) => {
            cmd_result.add_message(CmdMessage::info(format!(
                "Current selection: '{}' ({})",
                details.title, details.kind
            )));
            cmd_result.details = Some(details.clone());
        }
        Err(_) => cmd_result.add_message(CmdMessage::info("No current selection")),
    }
    Ok(cmd_result)
}
