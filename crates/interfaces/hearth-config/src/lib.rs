//! Central configuration constants for browsing defaults.

/// Search endpoint used when shared or typed text is not a URL.
/// `%s` is replaced with the percent-encoded query.
pub const SEARCH_URL_TEMPLATE: &str = "https://duckduckgo.com/html/?q=%s";

/// TV endpoint DIAL-initiated launches navigate to.
pub const YOUTUBE_TV_URL: &str = "https://www.youtube.com/tv";

/// Turbo (content blocking) mode ships enabled.
pub const DEFAULT_TURBO_MODE: bool = true;
