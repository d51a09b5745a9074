//! `show`: print the stored draft.

use anyhow::{Context, Result};
use archfolio_shared::DraftSnapshot;

use super::CliDrafts;
use crate::cli::ShowFormat;

/// Render the stored draft. A missing or blank draft is not an error.
pub fn run(drafts: &CliDrafts, format: ShowFormat) -> Result<String> {
    let Some(snapshot) = drafts.load().filter(DraftSnapshot::is_recoverable) else {
        return Ok(format!(
            "No recoverable draft under key `{}`.",
            drafts.config().storage_key
        ));
    };

    match format {
        ShowFormat::Json => {
            serde_json::to_string_pretty(&snapshot).context("failed to encode draft as JSON")
        },
        ShowFormat::Summary => {
            let message = drafts.recovery_message().unwrap_or_default();
            Ok(render_summary(&snapshot, &message))
        },
    }
}

/// Human-readable listing of the main draft fields.
pub fn render_summary(snapshot: &DraftSnapshot, message: &str) -> String {
    let form = &snapshot.form_data;
    let mut lines = vec![message.to_string(), String::new()];
    lines.push(format!("title:       {}", form.title.trim()));
    if let Some(id) = snapshot.id.as_deref() {
        lines.push(format!("article id:  {id}"));
    }
    lines.push(format!("category:    {}", form.category));
    if !form.tags.is_empty() {
        let tags = form
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("tags:        {tags}"));
    }
    if !form.description.trim().is_empty() {
        lines.push(format!("description: {}", form.description.trim()));
    }
    lines.push(format!("content:     {} words", form.content.split_whitespace().count()));
    if snapshot.is_uploading {
        lines.push(format!("upload:      interrupted at {}%", snapshot.upload_progress));
    } else if let Some(url) = snapshot.uploaded_image_url.as_deref() {
        lines.push(format!("image:       {url}"));
    }
    lines.join("\n")
}
