//! `import`: seed the draft slot from a Markdown file.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use archfolio_shared::DraftSnapshot;

use super::CliDrafts;
use crate::utils::{draft_from_markdown, DraftOverrides};

/// Persist `file` as the current draft through the same guards the editor
/// uses.
pub fn run(
    drafts: &mut CliDrafts,
    file: &Path,
    id: Option<String>,
    tags: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("failed to read markdown file {}", file.display()))?;
    let form = draft_from_markdown(
        &content,
        DraftOverrides {
            tags,
            category,
        },
    )?;

    let snapshot = DraftSnapshot::new(form, id);
    if !snapshot.is_recoverable() {
        anyhow::bail!("{} has no title or content; nothing to import", file.display());
    }

    drafts.persist(snapshot);
    if drafts.is_degraded() {
        anyhow::bail!(
            "failed to write draft to {}",
            drafts.storage().path_for(&drafts.config().storage_key).display()
        );
    }
    let stored = drafts
        .load()
        .context("draft was not written; check that the draft directory is writable")?;

    tracing::info!(
        "Draft \"{}\" stored at {}",
        stored.form_data.title,
        drafts.storage().path_for(&drafts.config().storage_key).display()
    );
    Ok(())
}
