//! Autosave configuration, injected into the manager and the editor.

/// Storage slot holding the single article draft.
pub const DEFAULT_STORAGE_KEY: &str = "archfolio:draft:article";
/// Periodic autosave interval while the form is dirty.
pub const DEFAULT_INTERVAL_MS: u32 = 30 * 1000;
const MIN_INTERVAL_MS: u32 = 1000;

/// Settings for one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutosaveConfig {
    /// Key of the single draft slot.
    pub storage_key: String,
    /// Autosave tick interval in milliseconds.
    pub interval_ms: u32,
    /// Show the raw stored snapshot in the editor.
    pub debug_overlay: bool,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            debug_overlay: false,
        }
    }
}

impl AutosaveConfig {
    /// Build a config from optional raw overrides, e.g. compile-time
    /// environment values. Unparseable values fall back to defaults.
    pub fn from_overrides(interval_ms: Option<&str>, debug: Option<&str>) -> Self {
        let defaults = Self::default();
        let interval_ms = interval_ms
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .map(|ms| ms.max(MIN_INTERVAL_MS))
            .unwrap_or(defaults.interval_ms);
        let debug_overlay = debug
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(defaults.debug_overlay);

        Self {
            interval_ms,
            debug_overlay,
            ..defaults
        }
    }

    /// Use a different storage slot.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
