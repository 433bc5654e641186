use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index;
use crate::provider::MetadataProvider;
use crate::session::SessionState;

pub fn run<P: MetadataProvider>(
    provider: &P,
    session: &mut SessionState,
    which: &str,
) -> Result<CmdResult> {
    let pos = index::resolve(which, session.results().len())?;
    let result = &session.results()[pos];

    let details = provider.fetch_details(&result.handle)?;
    let mut cmd_result =
        CmdResult::default().with_details(details.clone());
    cmd_result.add_message(CmdMessage::success(format!(
        "Details for '{}'",
        details.title
    )));

    session.record_selection(details);
    Ok(cmd_result)
}
