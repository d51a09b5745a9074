/// Configuration for the frontend application
use archfolio_shared::AutosaveConfig;

/// Base URL for static assets
/// - For local development: "/"
/// - For GitHub Pages: "/archfolio/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/archfolio/";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

/// Autosave settings baked in at build time.
///
/// `ARCHFOLIO_AUTOSAVE_INTERVAL_MS` overrides the tick interval and
/// `ARCHFOLIO_DEBUG=1` enables the stored-draft debug panel.
pub fn autosave_config() -> AutosaveConfig {
    AutosaveConfig::from_overrides(
        option_env!("ARCHFOLIO_AUTOSAVE_INTERVAL_MS"),
        option_env!("ARCHFOLIO_DEBUG"),
    )
}
