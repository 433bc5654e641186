use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::provider::MetadataProvider;
use crate::session::SessionState;

pub fn run<P: MetadataProvider>(
    provider: &P,
    session: &mut SessionState,
    query: &str,
) -> Result<CmdResult> {
    let results = provider.search(query)?;

    let mut cmd_result = CmdResult::default();
    if results.is_empty() {
        cmd_result.add_message(CmdMessage::info(format!("No results for '{}'", query)));
    } else {
        cmd_result.add_message(CmdMessage::success(format!(
            "Found {} results for '{}'",
            results.len(),
            query
        )));
    }

    session.record_lookup(results.clone());
    Ok(cmd_result.with_results(results))
}
