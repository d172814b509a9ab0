use serde::{Deserialize, Serialize};

use crate::urls;

/// Captured page image the host compositor hands us when a site gets pinned.
/// The bytes stay opaque to this layer (typically encoded PNG).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_url: String,
    pub back_enabled: bool,
    pub forward_enabled: bool,
    pub turbo_mode_active: bool,
    pub desktop_mode_active: bool,
    pub fullscreen_active: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_url: urls::APP_URL_HOME.to_string(),
            back_enabled: false,
            forward_enabled: false,
            // Turbo mode ships enabled; users opt out per session.
            turbo_mode_active: true,
            desktop_mode_active: false,
            fullscreen_active: false,
        }
    }
}

/// Back/forward stack persisted by the host across process death.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub stack: Vec<String>,
    pub index: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("session snapshot has no entries")]
    Empty,
    #[error("snapshot index {index} out of bounds for {len} entries")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl SessionSnapshot {
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.stack.is_empty() {
            return Err(SnapshotError::Empty);
        }
        if self.index >= self.stack.len() {
            return Err(SnapshotError::IndexOutOfBounds {
                index: self.index,
                len: self.stack.len(),
            });
        }
        Ok(())
    }

    pub fn current_url(&self) -> Option<&str> {
        self.stack.get(self.index).map(String::as_str)
    }
}
