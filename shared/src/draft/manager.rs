//! Draft autosave manager.
//!
//! One manager belongs to one editing session. It tracks the in-memory form,
//! writes it to a single storage slot, and decides whether a new session
//! should offer to restore work left behind by an earlier one. Every storage
//! failure is logged and swallowed: autosave is a convenience, so the worst
//! outcome is behaving as if no draft existed.

use super::{
    message::recovery_message_for, storage::DraftStorage, Clock, DraftFormData, DraftSnapshot,
    PendingImage,
};
use crate::{category::ArticleCategory, config::AutosaveConfig};

/// Where an editing session stands with respect to its draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftSessionState {
    /// Nothing meaningful typed yet; nothing is persisted.
    Empty,
    /// Unsaved changes exist.
    Dirty,
    /// The latest changes are in storage.
    Saved,
    /// A recoverable draft from an earlier session awaits a decision.
    RecoveryOffered,
    /// The earlier draft was loaded into the form.
    Recovered,
    /// The earlier draft was thrown away.
    Discarded,
    /// The article was saved remotely; the draft is finished.
    Published,
}

/// A single field-level change coming from the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    /// New title.
    Title(String),
    /// New body.
    Content(String),
    /// New teaser.
    Description(String),
    /// New category.
    Category(ArticleCategory),
    /// Replace the tag list.
    Tags(Vec<String>),
    /// Select or drop an image awaiting upload.
    PendingImage(Option<PendingImage>),
}

/// Keeps an editing form and its stored snapshot in step.
#[derive(Debug)]
pub struct DraftAutosaveManager<S, C> {
    storage: S,
    clock: C,
    config: AutosaveConfig,
    current: DraftSnapshot,
    state: DraftSessionState,
    last_written_ms: i64,
    degraded: bool,
}

impl<S: DraftStorage, C: Clock> DraftAutosaveManager<S, C> {
    /// Manager for a brand-new draft.
    pub fn new(storage: S, clock: C, config: AutosaveConfig) -> Self {
        Self {
            storage,
            clock,
            config,
            current: DraftSnapshot::default(),
            state: DraftSessionState::Empty,
            last_written_ms: 0,
            degraded: false,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &AutosaveConfig {
        &self.config
    }

    /// Underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current session state.
    pub fn state(&self) -> DraftSessionState {
        self.state
    }

    /// In-memory snapshot tracked for this session.
    pub fn current(&self) -> &DraftSnapshot {
        &self.current
    }

    /// True once a write failed; autosave is off for the rest of the
    /// session.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Start editing an existing article fetched from the server. Nothing is
    /// written until the user changes something. A pending recovery prompt
    /// stays open; after a publish this starts a fresh autosave session.
    pub fn hydrate(&mut self, form_data: DraftFormData, id: Option<String>, featured_image: Option<String>) {
        self.current = DraftSnapshot::new(form_data, id);
        self.current.uploaded_image_url = featured_image;
        if self.state != DraftSessionState::RecoveryOffered {
            self.state = DraftSessionState::Empty;
        }
    }

    /// Write `snapshot` to the draft slot, replacing whatever was there.
    ///
    /// Blank drafts are skipped so an emptied form never overwrites a
    /// recoverable one. `last_saved` is stamped with the current time and
    /// never moves backwards within a session. A successful write makes
    /// `snapshot` the tracked state.
    pub fn persist(&mut self, mut snapshot: DraftSnapshot) {
        let Some(saved_at) = self.write_snapshot(&snapshot) else {
            return;
        };
        snapshot.last_saved = saved_at;
        if snapshot.form_data.pending_image.is_none() {
            snapshot.form_data.pending_image = self.current.form_data.pending_image.take();
        }
        self.current = snapshot;
        self.state = DraftSessionState::Saved;
    }

    /// Read the stored snapshot. Missing, unreadable, or malformed data all
    /// yield `None`.
    pub fn load(&self) -> Option<DraftSnapshot> {
        let raw = match self.storage.get_item(&self.config.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("Failed to read draft from storage: {err}");
                return None;
            },
        };
        match serde_json::from_str::<DraftSnapshot>(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::debug!("Ignoring malformed draft in storage: {err}");
                None
            },
        }
    }

    /// Whether storage holds a draft with a non-blank title or content.
    pub fn has_recoverable_draft(&self) -> bool {
        self.load().is_some_and(|snapshot| snapshot.is_recoverable())
    }

    /// Prompt text describing the stored draft, if it is recoverable.
    pub fn recovery_message(&self) -> Option<String> {
        self.load()
            .filter(DraftSnapshot::is_recoverable)
            .map(|snapshot| recovery_message_for(&snapshot, self.clock.now_ms()))
    }

    /// Delete the stored draft unconditionally.
    pub fn clear(&mut self) {
        if let Err(err) = self.storage.remove_item(&self.config.storage_key) {
            tracing::warn!("Failed to clear draft from storage: {err}");
        }
    }

    /// Record upload progress and re-persist so an abandoned session still
    /// shows the interrupted upload. `uploaded_url` of `None` leaves any
    /// earlier URL in place.
    pub fn set_upload_state(&mut self, is_uploading: bool, progress: u8, uploaded_url: Option<String>) {
        self.current.is_uploading = is_uploading;
        self.current.upload_progress = progress.min(100);
        if uploaded_url.is_some() {
            self.current.uploaded_image_url = uploaded_url;
        }
        if self.accepts_writes() {
            self.save_current();
        }
    }

    /// Called once when the editor mounts.
    pub fn begin_session(&mut self) -> DraftSessionState {
        self.state = if self.has_recoverable_draft() {
            DraftSessionState::RecoveryOffered
        } else {
            DraftSessionState::Empty
        };
        self.state
    }

    /// Take the stored draft into the form and clear the slot so it is not
    /// offered again. Returns `None` if the draft vanished in the meantime.
    ///
    /// An upload cannot outlive the session that started it, so the restored
    /// draft is never mid-upload; a finished upload URL is kept. A session
    /// editing an existing article keeps that article's id.
    pub fn recover(&mut self) -> Option<DraftSnapshot> {
        let Some(mut snapshot) = self.load().filter(DraftSnapshot::is_recoverable) else {
            self.state = DraftSessionState::Empty;
            return None;
        };
        snapshot.is_uploading = false;
        snapshot.upload_progress = 0;
        if self.current.id.is_some() {
            snapshot.id = self.current.id.clone();
        }
        self.last_written_ms = self.last_written_ms.max(snapshot.last_saved);
        self.current = snapshot.clone();
        self.clear();
        self.state = DraftSessionState::Recovered;
        Some(snapshot)
    }

    /// Throw away the stored draft and start from a blank form.
    pub fn discard(&mut self) {
        self.clear();
        self.current = DraftSnapshot::new(DraftFormData::default(), self.current.id.clone());
        self.state = DraftSessionState::Discarded;
    }

    /// Manual reset from the editor: clear storage and the form.
    pub fn reset(&mut self) {
        self.clear();
        self.current = DraftSnapshot::new(DraftFormData::default(), self.current.id.clone());
        self.state = DraftSessionState::Empty;
    }

    /// Apply one field edit. A form with content becomes dirty and is
    /// written on the next [`tick`](Self::tick).
    ///
    /// Edits made while a recovery decision is pending stay in memory so the
    /// older draft is not overwritten before the user chooses.
    pub fn update_form(&mut self, edit: FormEdit) {
        let form = &mut self.current.form_data;
        match edit {
            FormEdit::Title(title) => form.title = title,
            FormEdit::Content(content) => form.content = content,
            FormEdit::Description(description) => form.description = description,
            FormEdit::Category(category) => form.category = category,
            FormEdit::Tags(tags) => form.tags = tags,
            FormEdit::PendingImage(image) => form.pending_image = image,
        }

        if !self.accepts_writes() {
            return;
        }
        if self.current.is_recoverable() {
            self.state = DraftSessionState::Dirty;
        } else {
            self.state = DraftSessionState::Empty;
        }
    }

    /// Periodic autosave, also run when the editor goes away. Writes only
    /// when there are unsaved changes.
    pub fn tick(&mut self) {
        if self.state == DraftSessionState::Dirty {
            self.save_current();
        }
    }

    /// The article was saved remotely. Clears the draft and stops autosave.
    pub fn mark_published(&mut self, id: Option<String>) {
        self.clear();
        if id.is_some() {
            self.current.id = id;
        }
        self.state = DraftSessionState::Published;
    }

    fn accepts_writes(&self) -> bool {
        !matches!(
            self.state,
            DraftSessionState::Published | DraftSessionState::RecoveryOffered
        )
    }

    fn save_current(&mut self) {
        let snapshot = self.current.clone();
        if let Some(saved_at) = self.write_snapshot(&snapshot) {
            self.current.last_saved = saved_at;
            if self.state == DraftSessionState::Dirty {
                self.state = DraftSessionState::Saved;
            }
        }
    }

    fn write_snapshot(&mut self, snapshot: &DraftSnapshot) -> Option<i64> {
        if self.degraded || self.state == DraftSessionState::Published {
            return None;
        }
        if !snapshot.is_recoverable() {
            tracing::debug!("Skipping autosave of blank draft");
            return None;
        }

        let saved_at = self
            .clock
            .now_ms()
            .max(self.last_written_ms)
            .max(snapshot.last_saved);
        let stamped = DraftSnapshot {
            last_saved: saved_at,
            ..snapshot.clone()
        };

        let raw = match serde_json::to_string(&stamped) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Failed to serialize draft: {err}");
                return None;
            },
        };
        if let Err(err) = self.storage.set_item(&self.config.storage_key, &raw) {
            tracing::warn!("Draft autosave disabled for this session: {err}");
            self.degraded = true;
            return None;
        }

        self.last_written_ms = saved_at;
        Some(saved_at)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::draft::storage::{MemoryStorage, StorageError};

    #[derive(Debug)]
    struct FakeClock(Cell<i64>);

    impl FakeClock {
        fn at(ms: i64) -> Self {
            Self(Cell::new(ms))
        }

        fn set(&self, ms: i64) {
            self.0.set(ms);
        }
    }

    impl Clock for &FakeClock {
        fn now_ms(&self) -> i64 {
            self.0.get()
        }
    }

    struct UnavailableStorage;

    impl DraftStorage for UnavailableStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn manager<'a>(
        storage: &'a MemoryStorage,
        clock: &'a FakeClock,
    ) -> DraftAutosaveManager<&'a MemoryStorage, &'a FakeClock> {
        DraftAutosaveManager::new(storage, clock, AutosaveConfig::default())
    }

    fn snapshot(title: &str, content: &str) -> DraftSnapshot {
        DraftSnapshot::new(
            DraftFormData {
                title: title.to_string(),
                content: content.to_string(),
                description: "A survey".to_string(),
                category: ArticleCategory::Urbanism,
                tags: vec!["lagos".to_string()],
                pending_image: None,
            },
            None,
        )
    }

    #[test]
    fn persist_then_load_returns_snapshot_with_fresh_timestamp() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(5_000);
        let mut drafts = manager(&storage, &clock);

        let mut original = snapshot("Bridges of Lagos", "<p>Third Mainland</p>");
        original.last_saved = 1_000;
        drafts.persist(original.clone());

        let loaded = drafts.load().expect("draft stored");
        assert!(loaded.last_saved >= original.last_saved);
        assert_eq!(loaded.last_saved, 5_000);
        assert_eq!(DraftSnapshot { last_saved: original.last_saved, ..loaded }, original);
    }

    #[test]
    fn blank_persist_never_overwrites_existing_draft() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        drafts.persist(snapshot("", "   "));
        assert!(storage.is_empty());

        drafts.persist(snapshot("Kept", ""));
        drafts.persist(snapshot(" ", "\n"));
        assert_eq!(drafts.load().map(|s| s.form_data.title), Some("Kept".to_string()));
    }

    #[test]
    fn last_saved_never_moves_backwards() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(10_000);
        let mut drafts = manager(&storage, &clock);

        drafts.persist(snapshot("Clock skew", ""));
        clock.set(4_000);
        drafts.persist(snapshot("Clock skew", "later edit"));

        assert_eq!(drafts.load().map(|s| s.last_saved), Some(10_000));
    }

    #[test]
    fn clear_removes_draft() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        drafts.persist(snapshot("Gone soon", ""));
        drafts.clear();
        assert_eq!(drafts.load(), None);
        assert!(!drafts.has_recoverable_draft());
    }

    #[test]
    fn recoverable_iff_title_or_content_present() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let drafts = manager(&storage, &clock);

        let mut blank = snapshot("", "  ");
        let raw = serde_json::to_string(&blank).unwrap();
        storage.set_item(&AutosaveConfig::default().storage_key, &raw).unwrap();
        assert!(!drafts.has_recoverable_draft());
        assert_eq!(drafts.recovery_message(), None);

        blank.form_data.content = "<p>x</p>".to_string();
        let raw = serde_json::to_string(&blank).unwrap();
        storage.set_item(&AutosaveConfig::default().storage_key, &raw).unwrap();
        assert!(drafts.has_recoverable_draft());
    }

    #[test]
    fn malformed_data_reads_as_absent() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let drafts = manager(&storage, &clock);
        let key = AutosaveConfig::default().storage_key;

        for raw in ["{\"formData\":{\"title\":\"cut", "[1,2,3]", "{\"lastSaved\":\"yesterday\"}", ""] {
            storage.set_item(&key, raw).unwrap();
            assert_eq!(drafts.load(), None, "raw value {raw:?}");
            assert!(!drafts.has_recoverable_draft());
        }
    }

    #[test]
    fn recover_then_discard_scenario() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1_000);
        let mut first = manager(&storage, &clock);
        first.persist(snapshot("Bridges of Lagos", ""));

        clock.set(1_000 + 5 * 60 * 1000);
        let mut second = manager(&storage, &clock);
        assert_eq!(second.begin_session(), DraftSessionState::RecoveryOffered);
        assert_eq!(
            second.recovery_message().as_deref(),
            Some("Unsaved draft \"Bridges of Lagos\" found, last saved 5 minutes ago.")
        );

        let recovered = second.recover().expect("draft recovered");
        assert_eq!(recovered.form_data.title, "Bridges of Lagos");
        assert_eq!(second.current().form_data.title, "Bridges of Lagos");
        assert_eq!(second.state(), DraftSessionState::Recovered);
        assert_eq!(second.load(), None);

        let mut third = manager(&storage, &clock);
        second.update_form(FormEdit::Content("<p>Eko Bridge</p>".to_string()));
        second.tick();
        assert_eq!(third.begin_session(), DraftSessionState::RecoveryOffered);
        third.discard();
        assert_eq!(third.state(), DraftSessionState::Discarded);
        assert_eq!(third.load(), None);
        assert_eq!(third.current().form_data, DraftFormData::default());
    }

    #[test]
    fn whitespace_only_draft_offers_no_recovery() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        drafts.update_form(FormEdit::Content("   ".to_string()));
        assert_eq!(drafts.state(), DraftSessionState::Empty);
        assert!(!drafts.has_recoverable_draft());
        assert_eq!(drafts.begin_session(), DraftSessionState::Empty);
    }

    #[test]
    fn upload_state_persists_without_touching_text() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        drafts.update_form(FormEdit::Title("Steel".to_string()));
        drafts.update_form(FormEdit::Content("<p>Girders</p>".to_string()));
        drafts.set_upload_state(true, 45, None);

        let loaded = drafts.load().expect("draft stored");
        assert!(loaded.is_uploading);
        assert_eq!(loaded.upload_progress, 45);
        assert_eq!(loaded.form_data.title, "Steel");
        assert_eq!(loaded.form_data.content, "<p>Girders</p>");

        drafts.set_upload_state(false, 250, Some("https://cdn.example.com/steel.jpg".to_string()));
        drafts.set_upload_state(false, 100, None);
        let loaded = drafts.load().expect("draft stored");
        assert_eq!(loaded.upload_progress, 100);
        assert_eq!(loaded.uploaded_image_url.as_deref(), Some("https://cdn.example.com/steel.jpg"));
    }

    #[test]
    fn edits_move_through_dirty_and_saved() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        assert_eq!(drafts.state(), DraftSessionState::Empty);
        drafts.update_form(FormEdit::Tags(vec!["concrete".to_string()]));
        assert_eq!(drafts.state(), DraftSessionState::Empty);
        assert!(storage.is_empty());

        drafts.update_form(FormEdit::Title("Brutalism".to_string()));
        assert_eq!(drafts.state(), DraftSessionState::Dirty);
        assert!(storage.is_empty());

        drafts.tick();
        assert_eq!(drafts.state(), DraftSessionState::Saved);
        assert_eq!(drafts.load().map(|s| s.form_data.tags), Some(vec!["concrete".to_string()]));

        clock.set(2);
        drafts.tick();
        assert_eq!(drafts.load().map(|s| s.last_saved), Some(1));

        drafts.update_form(FormEdit::Content("<p>Barbican</p>".to_string()));
        assert_eq!(drafts.state(), DraftSessionState::Dirty);
        drafts.tick();
        assert_eq!(drafts.load().map(|s| s.last_saved), Some(2));
    }

    #[test]
    fn published_session_stops_persisting() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        drafts.update_form(FormEdit::Title("Final".to_string()));
        drafts.mark_published(Some("article-9".to_string()));
        assert_eq!(drafts.load(), None);

        drafts.update_form(FormEdit::Content("late change".to_string()));
        drafts.tick();
        drafts.set_upload_state(true, 10, None);
        drafts.persist(snapshot("Final", "again"));
        assert!(storage.is_empty());
        assert_eq!(drafts.current().id.as_deref(), Some("article-9"));
    }

    #[test]
    fn edits_during_recovery_prompt_do_not_overwrite_stored_draft() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        manager(&storage, &clock).persist(snapshot("Older work", ""));

        let mut drafts = manager(&storage, &clock);
        drafts.begin_session();
        drafts.update_form(FormEdit::Title("Newer".to_string()));
        assert_eq!(drafts.load().map(|s| s.form_data.title), Some("Older work".to_string()));
    }

    #[test]
    fn write_failure_degrades_to_noop() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        storage.set_reject_writes(true);
        drafts.update_form(FormEdit::Title("Quota".to_string()));
        drafts.tick();
        assert!(drafts.is_degraded());
        assert_eq!(drafts.state(), DraftSessionState::Dirty);

        storage.set_reject_writes(false);
        drafts.tick();
        assert!(storage.is_empty());
    }

    #[test]
    fn unavailable_storage_never_surfaces_errors() {
        let clock = FakeClock::at(1);
        let mut drafts =
            DraftAutosaveManager::new(UnavailableStorage, &clock, AutosaveConfig::default());

        assert_eq!(drafts.begin_session(), DraftSessionState::Empty);
        drafts.update_form(FormEdit::Title("Offline".to_string()));
        drafts.tick();
        drafts.clear();
        assert_eq!(drafts.load(), None);
        assert_eq!(drafts.recovery_message(), None);
        assert_eq!(drafts.current().form_data.title, "Offline");
    }

    #[test]
    fn persisted_snapshot_is_what_upload_updates_apply_to() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(7);
        let mut drafts = manager(&storage, &clock);

        drafts.persist(snapshot("Bridges of Lagos", "<p>x</p>"));
        assert_eq!(drafts.state(), DraftSessionState::Saved);
        assert_eq!(drafts.current().form_data.title, "Bridges of Lagos");
        assert_eq!(drafts.current().last_saved, 7);

        drafts.set_upload_state(true, 45, None);
        let loaded = drafts.load().expect("draft stored");
        assert!(loaded.is_uploading);
        assert_eq!(loaded.upload_progress, 45);
        assert_eq!(loaded.form_data.title, "Bridges of Lagos");
        assert_eq!(loaded.form_data.content, "<p>x</p>");
    }

    #[test]
    fn persist_keeps_selected_image_handle() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);
        let image = PendingImage {
            file_name: "facade.png".to_string(),
            size_bytes: 512,
            mime_type: "image/png".to_string(),
        };

        drafts.update_form(FormEdit::PendingImage(Some(image.clone())));
        drafts.persist(snapshot("Facades", ""));
        assert_eq!(drafts.current().form_data.pending_image, Some(image));
    }

    #[test]
    fn recovered_draft_is_not_mid_upload() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut first = manager(&storage, &clock);
        first.update_form(FormEdit::Title("Cantilevers".to_string()));
        first.set_upload_state(false, 100, Some("https://cdn.example.com/a.jpg".to_string()));
        first.set_upload_state(true, 45, None);
        assert!(first.load().is_some_and(|s| s.is_uploading));

        let mut second = manager(&storage, &clock);
        assert_eq!(second.begin_session(), DraftSessionState::RecoveryOffered);
        assert!(second
            .recovery_message()
            .is_some_and(|message| message.contains("interrupted")));

        let recovered = second.recover().expect("draft recovered");
        assert!(!recovered.is_uploading);
        assert!(!second.current().is_uploading);
        assert_eq!(second.current().upload_progress, 0);
        assert_eq!(
            second.current().uploaded_image_url.as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn recovery_keeps_id_of_article_being_edited() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        manager(&storage, &clock).persist(snapshot("Unsaved new piece", ""));

        let mut drafts = manager(&storage, &clock);
        drafts.begin_session();
        drafts.hydrate(
            DraftFormData {
                title: "Existing".to_string(),
                ..DraftFormData::default()
            },
            Some("article-3".to_string()),
            None,
        );
        let recovered = drafts.recover().expect("draft recovered");
        assert_eq!(recovered.form_data.title, "Unsaved new piece");
        assert_eq!(recovered.id.as_deref(), Some("article-3"));
        assert_eq!(drafts.current().id.as_deref(), Some("article-3"));
    }

    #[test]
    fn new_session_recovers_stored_id() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut stored = snapshot("Half done", "");
        stored.id = Some("article-8".to_string());
        manager(&storage, &clock).persist(stored);

        let mut drafts = manager(&storage, &clock);
        drafts.begin_session();
        drafts.recover();
        assert_eq!(drafts.current().id.as_deref(), Some("article-8"));
    }

    #[test]
    fn hydrate_starts_clean_session_without_writing() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        drafts.hydrate(
            DraftFormData {
                title: "Glass pavilions".to_string(),
                ..DraftFormData::default()
            },
            Some("article-1".to_string()),
            Some("https://cdn.example.com/p.jpg".to_string()),
        );
        assert_eq!(drafts.state(), DraftSessionState::Empty);
        assert_eq!(drafts.current().id.as_deref(), Some("article-1"));
        assert_eq!(
            drafts.current().uploaded_image_url.as_deref(),
            Some("https://cdn.example.com/p.jpg")
        );
        drafts.tick();
        assert!(storage.is_empty());

        drafts.update_form(FormEdit::Description("Steel and light".to_string()));
        drafts.tick();
        assert_eq!(drafts.load().and_then(|s| s.id), Some("article-1".to_string()));
    }

    #[test]
    fn hydrate_leaves_recovery_prompt_open() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        manager(&storage, &clock).persist(snapshot("Older work", ""));

        let mut drafts = manager(&storage, &clock);
        drafts.begin_session();
        drafts.hydrate(DraftFormData::default(), Some("article-2".to_string()), None);
        assert_eq!(drafts.state(), DraftSessionState::RecoveryOffered);
        assert!(drafts.has_recoverable_draft());
    }

    #[test]
    fn reset_clears_form_and_storage_but_keeps_id() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        drafts.hydrate(DraftFormData::default(), Some("article-4".to_string()), None);
        drafts.update_form(FormEdit::Title("Scrap this".to_string()));
        drafts.tick();
        assert!(drafts.has_recoverable_draft());

        drafts.reset();
        assert_eq!(drafts.state(), DraftSessionState::Empty);
        assert_eq!(drafts.load(), None);
        assert_eq!(drafts.current().form_data, DraftFormData::default());
        assert_eq!(drafts.current().id.as_deref(), Some("article-4"));
    }

    #[test]
    fn hydrate_after_publish_resumes_autosave() {
        let storage = MemoryStorage::new();
        let clock = FakeClock::at(1);
        let mut drafts = manager(&storage, &clock);

        drafts.update_form(FormEdit::Title("Saved remotely".to_string()));
        drafts.mark_published(Some("article-5".to_string()));
        drafts.hydrate(
            DraftFormData {
                title: "Saved remotely".to_string(),
                ..DraftFormData::default()
            },
            Some("article-5".to_string()),
            None,
        );
        assert_eq!(drafts.state(), DraftSessionState::Empty);

        drafts.update_form(FormEdit::Content("<p>Second pass</p>".to_string()));
        drafts.tick();
        let stored = drafts.load().expect("draft stored");
        assert_eq!(stored.id.as_deref(), Some("article-5"));
        assert_eq!(stored.form_data.content, "<p>Second pass</p>");
    }
}
