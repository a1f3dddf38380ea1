use serde::{Deserialize, Serialize};

/// Start page loaded when no settings file overrides it.
pub const DEFAULT_START_URL: &str = "https://example.com";

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    pub start_url: String,
    /// Overrides the engine's user agent when set.
    pub user_agent: Option<String>,
    /// Hide system chrome and present edge to edge.
    pub immersive: bool,
    pub web_view: WebViewSettings,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            user_agent: None,
            immersive: true,
            web_view: WebViewSettings::default(),
        }
    }
}

/// Capabilities applied to the rendering surface at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WebViewSettings {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub support_zoom: bool,
    pub built_in_zoom_controls: bool,
    pub display_zoom_controls: bool,
    pub support_multiple_windows: bool,
    pub use_wide_view_port: bool,
    pub load_with_overview_mode: bool,
    pub javascript_can_open_windows_automatically: bool,
    pub allow_file_access: bool,
    pub allow_content_access: bool,
    pub allow_file_access_from_file_urls: bool,
    pub allow_universal_access_from_file_urls: bool,
    pub cache_mode: CacheMode,
    pub mixed_content_mode: MixedContentMode,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            support_zoom: false,
            built_in_zoom_controls: false,
            display_zoom_controls: false,
            support_multiple_windows: false,
            use_wide_view_port: true,
            load_with_overview_mode: true,
            javascript_can_open_windows_automatically: true,
            allow_file_access: true,
            allow_content_access: true,
            allow_file_access_from_file_urls: true,
            allow_universal_access_from_file_urls: true,
            cache_mode: CacheMode::Default,
            mixed_content_mode: MixedContentMode::AlwaysAllow,
        }
    }
}

impl WebViewSettings {
    /// Zoom is only reachable when both the page and the built-in controls allow it.
    pub fn zoom_enabled(&self) -> bool {
        self.support_zoom && self.built_in_zoom_controls
    }
}

/// Cache policy for the rendering surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    Default,
    CacheElseNetwork,
    NoCache,
    CacheOnly,
}

/// Whether an https page may load http sub-resources.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MixedContentMode {
    AlwaysAllow,
    NeverAllow,
    CompatibilityMode,
}

/// Force-dark hint handed to the rendering surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ForceDark {
    Off,
    On,
}
