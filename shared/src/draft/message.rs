//! Text shown in the recovery prompt.

use super::DraftSnapshot;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const TITLE_PREVIEW_CHARS: usize = 60;

/// Summarize `snapshot` for the recovery prompt, relative to `now_ms`.
pub fn recovery_message_for(snapshot: &DraftSnapshot, now_ms: i64) -> String {
    let title = snapshot.form_data.title.trim();
    let label = if title.is_empty() {
        "Untitled draft".to_string()
    } else {
        format!("\"{}\"", truncate_chars(title, TITLE_PREVIEW_CHARS))
    };
    let elapsed = format_elapsed(now_ms.saturating_sub(snapshot.last_saved));
    let mut message = format!("Unsaved draft {label} found, last saved {elapsed}.");
    if snapshot.is_uploading {
        message.push_str(" An image upload was interrupted and will need to be retried.");
    }
    message
}

/// Human phrase for an elapsed duration, e.g. `"5 minutes ago"`.
pub fn format_elapsed(elapsed_ms: i64) -> String {
    let elapsed_ms = elapsed_ms.max(0);
    if elapsed_ms < MINUTE_MS {
        return "just now".to_string();
    }
    let (value, unit) = if elapsed_ms < HOUR_MS {
        (elapsed_ms / MINUTE_MS, "minute")
    } else if elapsed_ms < DAY_MS {
        (elapsed_ms / HOUR_MS, "hour")
    } else {
        (elapsed_ms / DAY_MS, "day")
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push('…');
    out
}
