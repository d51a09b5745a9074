//! Shared models and the draft autosave core used by the Archfolio frontend
//! and CLI.

use serde::{Deserialize, Serialize};

pub mod category;
pub mod config;
pub mod draft;
pub mod tags;

pub use category::{ArticleCategory, UnknownCategory};
pub use config::AutosaveConfig;
pub use draft::{
    manager::{DraftAutosaveManager, DraftSessionState, FormEdit},
    storage::{DraftStorage, MemoryStorage, StorageError},
    Clock, DraftFormData, DraftSnapshot, PendingImage,
};
#[cfg(not(target_arch = "wasm32"))]
pub use draft::{storage::FileStorage, SystemClock};

// 完整文章数据模型
/// A published or unpublished article as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Remote identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Short teaser shown in listings.
    pub description: String,
    /// Rich text body (HTML or Markdown).
    pub content: String,
    /// Ordered tag list.
    pub tags: Vec<String>,
    /// Fixed category.
    pub category: ArticleCategory,
    /// Hero image URL, if any.
    pub featured_image: Option<String>,
    /// Whether the article is publicly visible.
    pub published: bool,
}

/// Payload for creating or updating an article remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleInput {
    /// Headline.
    pub title: String,
    /// Short teaser.
    pub description: String,
    /// Rich text body.
    pub content: String,
    /// Ordered tag list.
    pub tags: Vec<String>,
    /// Fixed category.
    pub category: ArticleCategory,
    /// Hero image URL from a completed upload.
    pub featured_image: Option<String>,
    /// Publish immediately instead of saving as unpublished.
    pub publish: bool,
}
