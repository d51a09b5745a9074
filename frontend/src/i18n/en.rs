#![allow(dead_code, reason = "not every string is used by every build")]

pub mod common {
    pub const SITE_NAME: &str = "Archfolio";
    pub const LOADING: &str = "Loading...";
    pub const WRITE: &str = "Write";
    pub const HOME: &str = "Home";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod home {
    pub const HEADLINE: &str = "Writing about buildings, bridges, and the cities between them";
    pub const SUBHEAD: &str =
        "Essays on architecture and engineering from practitioners who build things.";
    pub const START_WRITING: &str = "Start a new article";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "The page you are looking for does not exist.";
}

pub mod recovery_prompt {
    pub const TITLE: &str = "Restore unsaved work?";
    pub const RESUME: &str = "Resume draft";
    pub const DISCARD: &str = "Discard";
}

pub mod tag_input {
    pub const PLACEHOLDER: &str = "#steel #bridges, press Enter to add";
    pub const REMOVE_ARIA_TEMPLATE: &str = "Remove tag {}";
    pub const LIMIT_REACHED: &str = "Tag limit reached";
}

pub mod editor {
    pub const NEW_TITLE: &str = "New article";
    pub const EDIT_TITLE: &str = "Edit article";
    pub const FIELD_TITLE: &str = "Title";
    pub const FIELD_DESCRIPTION: &str = "Description";
    pub const FIELD_CATEGORY: &str = "Category";
    pub const FIELD_TAGS: &str = "Tags";
    pub const FIELD_CONTENT: &str = "Content";
    pub const FIELD_IMAGE: &str = "Featured image";
    pub const PREVIEW: &str = "Preview";
    pub const SAVE_DRAFT: &str = "Save as unpublished";
    pub const PUBLISH: &str = "Publish";
    pub const RESET: &str = "Clear form";
    pub const SAVING: &str = "Saving...";
    pub const STATUS_EMPTY: &str = "Start typing to enable autosave";
    pub const STATUS_DIRTY: &str = "Unsaved changes";
    pub const STATUS_SAVED_TEMPLATE: &str = "Draft saved at {}";
    pub const STATUS_RECOVERED: &str = "Draft restored";
    pub const STATUS_PUBLISHED: &str = "Saved to server";
    pub const STATUS_DEGRADED: &str = "Autosave unavailable in this browser";
    pub const UPLOADING_TEMPLATE: &str = "Uploading image... {}%";
    pub const UPLOADED: &str = "Image uploaded";
    pub const TITLE_REQUIRED: &str = "A title is required before saving";
    pub const NOT_FOUND: &str = "Article not found";
    pub const DEBUG_HEADING: &str = "Stored draft (debug)";
    pub const DEBUG_EMPTY: &str = "(nothing stored)";
}

pub mod header {
    pub const NAV_ARIA: &str = "Main navigation";
    pub const LOGO_ALT: &str = "Archfolio logo";
}

pub mod footer {
    pub const TAGLINE: &str = "Architecture and engineering, written down.";
}
