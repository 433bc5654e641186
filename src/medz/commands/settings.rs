//! The settings registry: list the provider's settings and update one
//! by id. The id must be one of the provider's known ids; value
//! content is the provider's concern and passes through untouched.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MedzError, Result};
use crate::provider::MetadataProvider;

pub fn list<P: MetadataProvider>(provider: &P) -> Result<CmdResult> {
    Ok(CmdResult::default().with_settings(provider.list_settings()))
}

pub fn set<P: MetadataProvider>(provider: &mut P, id: &str, value: &str) -> Result<CmdResult> {
    // Validate the id before delegating so a failed set never reaches
    // the provider.
    let valid: Vec<String> = provider.list_settings().into_iter().map(|s| s.id).collect();
    if !valid.iter().any(|known| known == id) {
        return Err(MedzError::UnknownSetting {
            id: id.to_string(),
            valid,
        });
    }

    provider.set_setting(id, value)?;
    let mut cmd_result = CmdResult::default();
    cmd_result.add_message(CmdMessage::success(format!("{} = {}", id, value)));
    Ok(cmd_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::memory::fixtures::ProviderFixture;

    fn fixture() -> ProviderFixture {
        ProviderFixture::new()
            .with_setting("output_language", "Preferred metadata language", "en")
            .with_setting("fetch_thumbnails", "Fetch thumbnail URLs", "true")
    }

    #[test]
    fn lists_settings_in_order() {
        let f = fixture();
        let result = list(&f.provider).unwrap();
        assert_eq!(result.settings.len(), 2);
        assert_eq!(result.settings[0].id, "output_language");
        assert_eq!(result.settings[1].id, "fetch_thumbnails");
    }

    #[test]
    fn set_updates_a_known_id() {
        let mut f = fixture();
        set(&mut f.provider, "output_language", "de").unwrap();

        let result = list(&f.provider).unwrap();
        assert_eq!(result.settings[0].value, "de");
    }

    #[test]
    fn set_accepts_any_value_content() {
        // Content validation is the provider's concern, not ours:
        // an unrecognized locale still goes through.
        let mut f = fixture();
        set(&mut f.provider, "output_language", "xx").unwrap();

        let result = list(&f.provider).unwrap();
        assert_eq!(result.settings[0].value, "xx");
    }

    #[test]
    fn unknown_id_reports_valid_ids_and_mutates_nothing() {
        let mut f = fixture();
        let err = set(&mut f.provider, "colour", "blue").unwrap_err();
        match err {
            MedzError::UnknownSetting { id, valid } => {
                assert_eq!(id, "colour");
                assert_eq!(valid, vec!["output_language", "fetch_thumbnails"]);
            }
            other => panic!("expected UnknownSetting, got {:?}", other),
        }

        let result = list(&f.provider).unwrap();
        assert_eq!(result.settings[0].value, "en");
        assert_eq!(result.settings[1].value, "true");
    }
}
