use hearth_core::{Screenshot, SessionState, TileMap};

use crate::app_core::Store;
use crate::telemetry::NavigationEvent;

pub trait SessionRepo: Send + Sync + 'static {
    /// Handle to the observable session state.
    fn state(&self) -> Store<SessionState>;
    /// Leave fullscreen if active, then step back in history.
    fn exit_fullscreen_and_back(&self);
    fn go_forward(&self);
    fn reload(&self);
    /// Re-publish the current state unchanged.
    fn push_current_value(&self);
    fn set_turbo_mode(&self, enabled: bool);
    fn set_desktop_mode(&self, enabled: bool);
    fn current_screenshot(&self) -> Option<Screenshot>;
}

pub trait PinnedTileRepo: Send + Sync + 'static {
    /// Handle to the observable pinned-tile map.
    fn tiles(&self) -> Store<TileMap>;
    fn add_pinned_tile(&self, url: &str, screenshot: Option<Screenshot>);
    fn remove_pinned_tile(&self, url: &str);
}

pub trait TelemetrySink: Send + Sync + 'static {
    /// Fire-and-forget click report from the navigation overlay.
    fn overlay_click_event(
        &self,
        event: NavigationEvent,
        turbo_checked: bool,
        pin_checked: bool,
        desktop_mode_checked: bool,
    );
}
