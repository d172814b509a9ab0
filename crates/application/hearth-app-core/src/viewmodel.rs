use hearth_core::urls;
use hearth_core::{SessionState, TileMap};

/// Derived toolbar state. Fully determined by the session and pinned-tile
/// snapshots; recomputed on every upstream change, never mutated directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarVm {
    pub back_enabled: bool,
    pub forward_enabled: bool,
    pub refresh_enabled: bool,
    pub pin_enabled: bool,
    pub pin_checked: bool,
    pub turbo_checked: bool,
    pub desktop_mode_enabled: bool,
    pub desktop_mode_checked: bool,
    pub url_bar_text: String,
}

pub fn toolbar_vm(session: &SessionState, tiles: &TileMap) -> ToolbarVm {
    let on_home = urls::is_home(&session.current_url);
    ToolbarVm {
        back_enabled: session.back_enabled,
        forward_enabled: session.forward_enabled,
        refresh_enabled: !on_home,
        pin_enabled: !on_home,
        pin_checked: tiles.contains_key(&session.current_url),
        turbo_checked: session.turbo_mode_active,
        desktop_mode_enabled: !on_home,
        desktop_mode_checked: session.desktop_mode_active,
        url_bar_text: urls::to_url_bar_display(&session.current_url),
    }
}
