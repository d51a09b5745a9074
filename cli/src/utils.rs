//! Markdown import helpers.

use anyhow::{Context, Result};
use archfolio_shared::{
    tags::{merge_tags, parse_tag_input},
    ArticleCategory, DraftFormData,
};
use gray_matter::{engine::YAML, Matter};
use serde::Deserialize;

/// Tags in frontmatter, either a YAML list or a hashtag string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FrontmatterTags {
    /// `tags: [steel, bridges]`
    List(Vec<String>),
    /// `tags: "#steel #bridges"`
    Text(String),
}

/// Recognized frontmatter keys.
#[derive(Debug, Default, Deserialize)]
pub struct Frontmatter {
    /// Article title.
    pub title: Option<String>,
    /// Teaser text.
    pub description: Option<String>,
    /// Category slug or label.
    pub category: Option<String>,
    /// Tags.
    pub tags: Option<FrontmatterTags>,
}

/// Command-line values that win over frontmatter.
#[derive(Debug, Default, Clone)]
pub struct DraftOverrides {
    /// Hashtag input.
    pub tags: Option<String>,
    /// Category slug or label.
    pub category: Option<String>,
}

/// Split a Markdown document into frontmatter and body.
pub fn parse_markdown(content: &str) -> Result<(Frontmatter, String)> {
    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(content);

    let frontmatter = parsed
        .data
        .map(|data| data.deserialize::<Frontmatter>())
        .transpose()?
        .unwrap_or_default();

    Ok((frontmatter, parsed.content))
}

/// Normalize frontmatter tags with the editor's hashtag rules.
pub fn normalize_frontmatter_tags(tags: Option<FrontmatterTags>) -> Vec<String> {
    match tags {
        Some(FrontmatterTags::List(list)) => merge_tags(&list, ""),
        Some(FrontmatterTags::Text(text)) => parse_tag_input(&text),
        None => Vec::new(),
    }
}

/// Build draft form fields from a Markdown document.
pub fn draft_from_markdown(content: &str, overrides: DraftOverrides) -> Result<DraftFormData> {
    let (frontmatter, body) = parse_markdown(content).context("failed to parse frontmatter")?;

    let category = match overrides.category.or(frontmatter.category) {
        Some(raw) => raw.parse::<ArticleCategory>()?,
        None => ArticleCategory::default(),
    };
    let tags = match overrides.tags {
        Some(raw) => parse_tag_input(&raw),
        None => normalize_frontmatter_tags(frontmatter.tags),
    };

    Ok(DraftFormData {
        title: frontmatter.title.unwrap_or_default().trim().to_string(),
        content: body.trim().to_string(),
        description: frontmatter.description.unwrap_or_default().trim().to_string(),
        category,
        tags,
        pending_image: None,
    })
}
