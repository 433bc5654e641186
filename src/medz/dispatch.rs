//! Line dispatch: the routing table of the session.
//!
//! Each input line is split on the first whitespace run into a verb
//! and a trimmed remainder, then routed to the matching [`MedzApi`]
//! operation. Every failure comes back as a [`MedzError`] for the
//! caller to report; nothing here ends the session.

use crate::api::MedzApi;
use crate::commands::CmdResult;
use crate::error::{MedzError, Result};
use crate::provider::MetadataProvider;
use log::debug;

/// Routes one input line. Empty input is a no-op (`Ok(None)`).
pub fn dispatch<P: MetadataProvider>(
    api: &mut MedzApi<P>,
    line: &str,
) -> Result<Option<CmdResult>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    debug!("executing command: '{}'", line);

    let (verb, rest) = split_verb(line);
    let result = match verb {
        "lookup" => api.lookup(rest)?,
        "details" => api.details(rest)?,
        "episode_list" => api.episode_list()?,
        "episode_details" => api.episode_details(rest)?,
        "settings" => api.settings()?,
        "set" => {
            let (id, value) = split_verb(rest);
            api.set_setting(id, value)?
        }
        "dump" => api.dump()?,
        "reset" => api.reset()?,
        unknown => return Err(MedzError::UnrecognizedCommand(unknown.to_string())),
    };
    Ok(Some(result))
}

/// Splits on the first whitespace run; the remainder comes back
/// trimmed and may be empty.
fn split_verb(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::memory::fixtures::ProviderFixture;

    fn api() -> MedzApi<crate::provider::memory::InMemoryProvider> {
        let fixture = ProviderFixture::new()
            .with_film("Dune (1984)")
            .with_film("Dune (2021)")
            .with_series("Dune: Part Two", &[])
            .with_series("The Expanse", &["Dulcinea", "The Big Empty"])
            .with_setting("output_language", "Preferred metadata language", "en");
        MedzApi::new(fixture.provider)
    }

    #[test]
    fn empty_line_is_a_no_op() {
        let mut api = api();
        assert!(dispatch(&mut api, "").unwrap().is_none());
        assert!(dispatch(&mut api, "   \t ").unwrap().is_none());
    }

    #[test]
    fn unknown_verb_is_an_error() {
        let mut api = api();
        assert!(matches!(
            dispatch(&mut api, "frobnicate 3"),
            Err(MedzError::UnrecognizedCommand(v)) if v == "frobnicate"
        ));
    }

    #[test]
    fn splits_verb_on_first_whitespace_run() {
        assert_eq!(split_verb("lookup the   expanse"), ("lookup", "the   expanse"));
        assert_eq!(split_verb("lookup   dune"), ("lookup", "dune"));
        assert_eq!(split_verb("reset"), ("reset", ""));
    }

    #[test]
    fn routes_the_dune_drilldown() {
        let mut api = api();

        let result = dispatch(&mut api, "lookup dune").unwrap().unwrap();
        assert_eq!(result.results.len(), 3);

        let result = dispatch(&mut api, "details 2").unwrap().unwrap();
        assert_eq!(result.details.unwrap().title, "Dune (2021)");

        // A film selection has no episodes
        assert!(matches!(
            dispatch(&mut api, "episode_list"),
            Err(MedzError::Unsupported(_))
        ));

        // A series selection does
        dispatch(&mut api, "details 3").unwrap();
        let result = dispatch(&mut api, "episode_list").unwrap().unwrap();
        assert!(result.episodes.is_empty());
    }

    #[test]
    fn episode_commands_require_details_first() {
        let mut api = api();
        dispatch(&mut api, "lookup expanse").unwrap();

        assert!(matches!(
            dispatch(&mut api, "episode_list"),
            Err(MedzError::NoSelection)
        ));
        assert!(matches!(
            dispatch(&mut api, "episode_details 1"),
            Err(MedzError::NoSelection)
        ));
    }

    #[test]
    fn fresh_lookup_invalidates_the_selection() {
        let mut api = api();
        dispatch(&mut api, "lookup expanse").unwrap();
        dispatch(&mut api, "details 1").unwrap();
        dispatch(&mut api, "lookup dune").unwrap();

        assert!(matches!(
            dispatch(&mut api, "episode_list"),
            Err(MedzError::NoSelection)
        ));
    }

    #[test]
    fn set_partitions_key_and_value() {
        let mut api = api();
        dispatch(&mut api, "set output_language pt br").unwrap();

        let result = dispatch(&mut api, "settings").unwrap().unwrap();
        assert_eq!(result.settings[0].value, "pt br");
    }

    #[test]
    fn set_with_unknown_key_lists_valid_keys() {
        let mut api = api();
        let err = dispatch(&mut api, "set colour blue").unwrap_err();
        assert!(err.to_string().contains("output_language"));
    }

    #[test]
    fn failed_commands_leave_the_session_usable() {
        let mut api = api();
        dispatch(&mut api, "lookup expanse").unwrap();

        let _ = dispatch(&mut api, "details 99");
        let _ = dispatch(&mut api, "nonsense");

        // The result list survived both failures
        let result = dispatch(&mut api, "details 1").unwrap().unwrap();
        assert_eq!(result.details.unwrap().title, "The Expanse");
    }
}
