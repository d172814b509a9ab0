use std::sync::Mutex;

use hearth_core::urls;
use hearth_core::{Screenshot, SessionSnapshot, SessionState, SnapshotError};

use crate::app_core::Store;
use crate::ports::SessionRepo;

/// Session repository backed by an in-process back/forward stack.
///
/// An embedded engine would sit behind the same operations; state changes
/// publish through the store either way. Capability flags are recomputed
/// from the stack position on every mutation.
pub struct InMemorySessionRepo {
    state: Store<SessionState>,
    stack: Mutex<NavStack>,
    screenshot: Mutex<Option<Screenshot>>,
}

struct NavStack {
    entries: Vec<String>,
    index: usize,
}

struct NavPosition {
    current_url: String,
    back_enabled: bool,
    forward_enabled: bool,
}

impl NavStack {
    fn position(&self) -> NavPosition {
        NavPosition {
            current_url: self.entries[self.index].clone(),
            back_enabled: self.index > 0,
            forward_enabled: self.index + 1 < self.entries.len(),
        }
    }
}

impl NavPosition {
    fn apply(self, state: &mut SessionState) {
        state.current_url = self.current_url;
        state.back_enabled = self.back_enabled;
        state.forward_enabled = self.forward_enabled;
    }
}

impl InMemorySessionRepo {
    pub fn new() -> Self {
        Self {
            state: Store::new(SessionState {
                turbo_mode_active: hearth_config::DEFAULT_TURBO_MODE,
                ..SessionState::default()
            }),
            stack: Mutex::new(NavStack {
                entries: vec![urls::APP_URL_HOME.to_string()],
                index: 0,
            }),
            screenshot: Mutex::new(None),
        }
    }

    /// Load a page, truncating any forward history.
    pub fn navigate_to(&self, url: &str) {
        let url = urls::normalize(url);
        let position = {
            let mut stack = self.stack.lock().unwrap();
            let keep = stack.index + 1;
            stack.entries.truncate(keep);
            stack.entries.push(url);
            stack.index += 1;
            stack.position()
        };
        self.state.update(|s| position.apply(s));
    }

    pub fn set_fullscreen(&self, active: bool) {
        self.state.update(|s| s.fullscreen_active = active);
    }

    /// Host compositor hands us the latest page capture for pinning.
    pub fn set_screenshot(&self, screenshot: Screenshot) {
        *self.screenshot.lock().unwrap() = Some(screenshot);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let stack = self.stack.lock().unwrap();
        SessionSnapshot {
            stack: stack.entries.clone(),
            index: stack.index,
        }
    }

    pub fn restore(&self, snapshot: SessionSnapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;
        let position = {
            let mut stack = self.stack.lock().unwrap();
            stack.entries = snapshot.stack;
            stack.index = snapshot.index;
            stack.position()
        };
        self.state.update(|s| position.apply(s));
        Ok(())
    }
}

impl Default for InMemorySessionRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepo for InMemorySessionRepo {
    fn state(&self) -> Store<SessionState> {
        self.state.clone()
    }

    fn exit_fullscreen_and_back(&self) {
        let moved = {
            let mut stack = self.stack.lock().unwrap();
            if stack.index == 0 {
                None
            } else {
                stack.index -= 1;
                Some(stack.position())
            }
        };
        match moved {
            Some(position) => self.state.update(|s| {
                s.fullscreen_active = false;
                position.apply(s);
            }),
            None => self.state.update(|s| s.fullscreen_active = false),
        }
    }

    fn go_forward(&self) {
        let moved = {
            let mut stack = self.stack.lock().unwrap();
            if stack.index + 1 >= stack.entries.len() {
                None
            } else {
                stack.index += 1;
                Some(stack.position())
            }
        };
        if let Some(position) = moved {
            self.state.update(|s| position.apply(s));
        }
    }

    fn reload(&self) {
        // The engine reloads the page; session state is unchanged, so the
        // store just republishes it.
        self.state.push_current();
    }

    fn push_current_value(&self) {
        self.state.push_current();
    }

    fn set_turbo_mode(&self, enabled: bool) {
        self.state.update(|s| s.turbo_mode_active = enabled);
    }

    fn set_desktop_mode(&self, enabled: bool) {
        self.state.update(|s| s.desktop_mode_active = enabled);
    }

    fn current_screenshot(&self) -> Option<Screenshot> {
        self.screenshot.lock().unwrap().clone()
    }
}
