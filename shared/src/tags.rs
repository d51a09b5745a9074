//! Hashtag input parsing for the tag field of the editor.

/// Longest tag kept, in characters.
pub const MAX_TAG_LEN: usize = 32;
/// Maximum number of tags on one article.
pub const MAX_TAGS: usize = 10;

/// Parse free-form tag input such as `"#rust, #Bridges  steel"`.
///
/// Tags are split on commas and whitespace, a leading `#` is stripped, and
/// the result is lowercased and restricted to alphanumerics, `-` and `_`.
/// Duplicates keep their first position.
pub fn parse_tag_input(raw: &str) -> Vec<String> {
    merge_tags(&[], raw)
}

/// Append tags parsed from `raw` to `existing` under the same rules as
/// [`parse_tag_input`].
pub fn merge_tags(existing: &[String], raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);
    let candidates = existing
        .iter()
        .map(String::as_str)
        .chain(raw.split(|c: char| c == ',' || c.is_whitespace()));

    for candidate in candidates {
        if tags.len() >= MAX_TAGS {
            break;
        }
        if let Some(tag) = normalize_tag(candidate) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Normalize a single tag, returning `None` when nothing usable remains.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag: String = raw
        .trim()
        .trim_start_matches('#')
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .flat_map(char::to_lowercase)
        .take(MAX_TAG_LEN)
        .collect();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_hashes_and_splits_on_commas_and_spaces() {
        let tags = parse_tag_input("#Rust, #bridges  steel,,#");
        assert_eq!(tags, vec!["rust", "bridges", "steel"]);
    }

    #[test]
    fn parse_dedupes_preserving_first_occurrence() {
        let tags = parse_tag_input("concrete #Concrete timber concrete");
        assert_eq!(tags, vec!["concrete", "timber"]);
    }

    #[test]
    fn parse_caps_tag_count_and_length() {
        let raw = (0..20).map(|i| format!("#t{i}")).collect::<Vec<_>>().join(" ");
        assert_eq!(parse_tag_input(&raw).len(), MAX_TAGS);

        let long = "a".repeat(MAX_TAG_LEN + 8);
        let tags = parse_tag_input(&long);
        assert_eq!(tags[0].chars().count(), MAX_TAG_LEN);
    }

    #[test]
    fn merge_keeps_existing_order() {
        let existing = vec!["lagos".to_string(), "bridges".to_string()];
        let merged = merge_tags(&existing, "#infrastructure #lagos");
        assert_eq!(merged, vec!["lagos", "bridges", "infrastructure"]);
    }

    #[test]
    fn normalize_drops_punctuation() {
        assert_eq!(normalize_tag("#mid-century!"), Some("mid-century".to_string()));
        assert_eq!(normalize_tag("!!!"), None);
    }
}
