//! Client-local draft autosave: the persisted snapshot, its storage
//! boundary, and the manager that ties an editing form to both.

pub mod manager;
pub mod message;
pub mod storage;

use serde::{Deserialize, Serialize};

use crate::{category::ArticleCategory, Article, ArticleInput};

/// Image selected in the editor but not uploaded yet.
///
/// Only metadata lives here; the binary handle stays with the UI and is
/// never written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    /// Original file name.
    pub file_name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type reported by the browser.
    pub mime_type: String,
}

/// Editable fields of the article form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DraftFormData {
    /// Headline.
    pub title: String,
    /// Rich text body.
    pub content: String,
    /// Short teaser.
    pub description: String,
    /// Fixed category.
    pub category: ArticleCategory,
    /// Ordered tag list.
    pub tags: Vec<String>,
    /// Transient; dropped on serialization.
    #[serde(skip)]
    pub pending_image: Option<PendingImage>,
}

impl DraftFormData {
    /// True when the title or content holds something besides whitespace.
    pub fn has_meaningful_content(&self) -> bool {
        !self.title.trim().is_empty() || !self.content.trim().is_empty()
    }

    /// Form fields of an article fetched for editing.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            description: article.description.clone(),
            category: article.category,
            tags: article.tags.clone(),
            pending_image: None,
        }
    }

    /// Build the remote create/update payload.
    pub fn to_article_input(&self, featured_image: Option<String>, publish: bool) -> ArticleInput {
        ArticleInput {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            category: self.category,
            featured_image,
            publish,
        }
    }
}

/// The persisted unit: one per storage slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    /// Form fields.
    pub form_data: DraftFormData,
    /// Epoch milliseconds of the latest write.
    pub last_saved: i64,
    /// An image upload is in flight.
    pub is_uploading: bool,
    /// Upload progress in percent, 0 to 100.
    pub upload_progress: u8,
    /// Durable URL of a finished upload.
    pub uploaded_image_url: Option<String>,
    /// Id of an existing unpublished article being edited.
    pub id: Option<String>,
}

impl DraftSnapshot {
    /// Snapshot for an existing article, or a new one when `id` is `None`.
    pub fn new(form_data: DraftFormData, id: Option<String>) -> Self {
        Self {
            form_data,
            id,
            ..Self::default()
        }
    }

    /// Whether this snapshot is worth offering for recovery.
    pub fn is_recoverable(&self) -> bool {
        self.form_data.has_meaningful_content()
    }

    /// Remote payload carrying the uploaded image, if any.
    pub fn to_article_input(&self, publish: bool) -> ArticleInput {
        self.form_data
            .to_article_input(self.uploaded_image_url.clone(), publish)
    }
}

/// Source of wall-clock time in epoch milliseconds.
pub trait Clock {
    /// Current time.
    fn now_ms(&self) -> i64;
}

/// [`Clock`] backed by the system clock.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_image_is_not_serialized() {
        let mut snapshot = DraftSnapshot::new(
            DraftFormData {
                title: "Bridges of Lagos".to_string(),
                ..DraftFormData::default()
            },
            None,
        );
        snapshot.form_data.pending_image = Some(PendingImage {
            file_name: "hero.jpg".to_string(),
            size_bytes: 2048,
            mime_type: "image/jpeg".to_string(),
        });

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("hero.jpg"));
        assert!(json.contains("\"formData\""));
        assert!(json.contains("\"lastSaved\""));

        let restored: DraftSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.form_data.pending_image, None);
        assert_eq!(restored.form_data.title, "Bridges of Lagos");
    }

    #[test]
    fn whitespace_only_is_not_recoverable() {
        let snapshot = DraftSnapshot::new(
            DraftFormData {
                content: "   \n\t".to_string(),
                description: "only a teaser".to_string(),
                ..DraftFormData::default()
            },
            None,
        );
        assert!(!snapshot.is_recoverable());
    }

    #[test]
    fn article_input_carries_uploaded_image() {
        let mut snapshot = DraftSnapshot::new(
            DraftFormData {
                title: "  Timber towers ".to_string(),
                content: "<p>Mass timber</p>".to_string(),
                category: ArticleCategory::Engineering,
                tags: vec!["timber".to_string()],
                ..DraftFormData::default()
            },
            Some("a-1".to_string()),
        );
        snapshot.uploaded_image_url = Some("https://cdn.example.com/t.jpg".to_string());

        let input = snapshot.to_article_input(true);
        assert_eq!(input.title, "Timber towers");
        assert_eq!(input.featured_image.as_deref(), Some("https://cdn.example.com/t.jpg"));
        assert_eq!(input.category, ArticleCategory::Engineering);
        assert!(input.publish);
    }
}
