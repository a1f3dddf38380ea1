/// What the rendering surface should do with a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the surface load the URL itself.
    Allow,
    /// The shell took care of it; the surface must not navigate.
    Handled,
}

/// Result of classifying a navigation URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Inline,
    External(ExternalIntent),
}

/// Launch flags attached to an external request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchFlags {
    pub new_task: bool,
}

/// A request to open a URI in another application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIntent {
    /// The URI as it appeared in the page.
    pub original: String,
    /// The URI to hand to the OS resolver.
    pub uri: String,
    pub package: Option<String>,
    pub action: Option<String>,
    pub fallback_url: Option<String>,
    pub flags: LaunchFlags,
}

/// Outcome of a back action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    WentBack,
    MovedToBackground,
}
