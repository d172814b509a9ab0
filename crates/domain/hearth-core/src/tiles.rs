use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::session::Screenshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileSource {
    /// Shipped with the app as a default home-screen entry.
    Bundled,
    /// Pinned by the user from the toolbar.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedTile {
    pub url: String,
    pub title: Option<String>,
    pub source: TileSource,
    pub screenshot: Option<Screenshot>,
}

impl PinnedTile {
    pub fn bundled(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: Some(title.into()),
            source: TileSource::Bundled,
            screenshot: None,
        }
    }

    pub fn custom(url: impl Into<String>, screenshot: Option<Screenshot>) -> Self {
        Self {
            url: url.into(),
            title: None,
            source: TileSource::Custom,
            screenshot,
        }
    }
}

/// Pinned sites keyed by URL. Membership of the current URL is what the
/// toolbar's pin button reflects.
pub type TileMap = BTreeMap<String, PinnedTile>;
