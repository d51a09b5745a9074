//! Fixed set of article categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Category an article is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    /// Buildings, design, and theory.
    #[default]
    Architecture,
    /// Structural and civil engineering.
    Engineering,
    /// Interior design.
    Interiors,
    /// Cities and planning.
    Urbanism,
    /// Materials, energy, and climate.
    Sustainability,
    /// Site work and building practice.
    Construction,
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown article category: {0}")]
pub struct UnknownCategory(pub String);

impl ArticleCategory {
    /// Every category in display order.
    pub const ALL: [ArticleCategory; 6] = [
        ArticleCategory::Architecture,
        ArticleCategory::Engineering,
        ArticleCategory::Interiors,
        ArticleCategory::Urbanism,
        ArticleCategory::Sustainability,
        ArticleCategory::Construction,
    ];

    /// Lowercase identifier used in URLs and serialized data.
    pub fn slug(self) -> &'static str {
        match self {
            ArticleCategory::Architecture => "architecture",
            ArticleCategory::Engineering => "engineering",
            ArticleCategory::Interiors => "interiors",
            ArticleCategory::Urbanism => "urbanism",
            ArticleCategory::Sustainability => "sustainability",
            ArticleCategory::Construction => "construction",
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            ArticleCategory::Architecture => "Architecture",
            ArticleCategory::Engineering => "Engineering",
            ArticleCategory::Interiors => "Interiors",
            ArticleCategory::Urbanism => "Urbanism",
            ArticleCategory::Sustainability => "Sustainability",
            ArticleCategory::Construction => "Construction",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArticleCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ArticleCategory::ALL
            .into_iter()
            .find(|category| {
                category.slug().eq_ignore_ascii_case(needle)
                    || category.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownCategory(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slug_and_label_case_insensitively() {
        assert_eq!("urbanism".parse(), Ok(ArticleCategory::Urbanism));
        assert_eq!(" Interiors ".parse(), Ok(ArticleCategory::Interiors));
        assert_eq!("ENGINEERING".parse(), Ok(ArticleCategory::Engineering));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "gardening".parse::<ArticleCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("gardening".to_string()));
    }

    #[test]
    fn serializes_as_slug() {
        let json = serde_json::to_string(&ArticleCategory::Sustainability).unwrap();
        assert_eq!(json, "\"sustainability\"");
    }
}
