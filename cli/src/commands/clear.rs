//! `clear`: delete the stored draft.

use anyhow::{Context, Result};
use archfolio_shared::DraftStorage;

use super::CliDrafts;

/// Remove the draft slot. Clearing an empty slot succeeds; a slot that
/// cannot be read or removed is an error.
pub fn run(drafts: &mut CliDrafts) -> Result<()> {
    let key = drafts.config().storage_key.clone();
    let path = drafts.storage().path_for(&key);

    let existing = drafts
        .storage()
        .get_item(&key)
        .with_context(|| format!("failed to read draft slot {}", path.display()))?;
    drafts
        .storage()
        .remove_item(&key)
        .with_context(|| format!("failed to clear draft in {}", path.display()))?;

    if existing.is_some() {
        tracing::info!("Draft cleared.");
    } else {
        tracing::info!("No draft to clear.");
    }
    Ok(())
}
