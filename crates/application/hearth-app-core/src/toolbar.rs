use std::sync::Arc;

use hearth_core::urls;

use crate::app_core::{combine_latest, ActionEvents, OverlayAction, Store, Toast, ToolbarCommand};
use crate::ports::{PinnedTileRepo, SessionRepo, TelemetrySink};
use crate::telemetry::{NavigationEvent, TelemetryOverrides};
use crate::viewmodel::{toolbar_vm, ToolbarVm};

/// Toolbar view-model.
///
/// Projects the session and pinned-tile stores into [`ToolbarVm`] and turns
/// button clicks into repository mutations plus one-shot overlay actions.
/// UI-thread confined: every operation runs synchronously on the caller's
/// stack.
pub struct ToolbarViewModel<S, P, T> {
    session_repo: Arc<S>,
    tile_repo: Arc<P>,
    telemetry: Arc<T>,
    state: Store<ToolbarVm>,
    events: ActionEvents,
}

impl<S, P, T> ToolbarViewModel<S, P, T>
where
    S: SessionRepo,
    P: PinnedTileRepo,
    T: TelemetrySink,
{
    pub fn new(session_repo: Arc<S>, tile_repo: Arc<P>, telemetry: Arc<T>) -> Self {
        let events = ActionEvents::new();
        let overlay = events.clone();
        let state = combine_latest(
            &session_repo.state(),
            &tile_repo.tiles(),
            move |session, tiles| {
                // Landing on the home screen raises the overlay on every
                // recompute, not just the first.
                if urls::is_home(&session.current_url) {
                    overlay.emit(OverlayAction::SetOverlayVisible(true));
                }
                toolbar_vm(session, tiles)
            },
        );

        Self {
            session_repo,
            tile_repo,
            telemetry,
            state,
            events,
        }
    }

    /// Latest derived state.
    pub fn state(&self) -> ToolbarVm {
        self.state.get()
    }

    /// Observable handle to the derived state.
    pub fn state_store(&self) -> Store<ToolbarVm> {
        self.state.clone()
    }

    pub fn events(&self) -> &ActionEvents {
        &self.events
    }

    pub fn dispatch(&self, command: ToolbarCommand) {
        match command {
            ToolbarCommand::Back => self.back_button_clicked(),
            ToolbarCommand::Forward => self.forward_button_clicked(),
            ToolbarCommand::Reload => self.reload_button_clicked(),
            ToolbarCommand::TogglePin => self.pin_button_clicked(),
            ToolbarCommand::ToggleTurbo => self.turbo_button_clicked(),
            ToolbarCommand::ToggleDesktopMode => self.desktop_mode_button_clicked(),
        }
    }

    pub fn back_button_clicked(&self) {
        self.session_repo.exit_fullscreen_and_back();
        self.set_overlay_visible(false);
    }

    pub fn forward_button_clicked(&self) {
        self.session_repo.go_forward();
        self.set_overlay_visible(false);
    }

    pub fn reload_button_clicked(&self) {
        self.session_repo.reload();
        self.session_repo.push_current_value();
        self.set_overlay_visible(false);
    }

    pub fn pin_button_clicked(&self) {
        let pin_checked = self.state.get().pin_checked;
        let url = self.session_repo.state().get().current_url;

        self.send_overlay_click_telemetry(
            NavigationEvent::PinAction,
            TelemetryOverrides::pin(!pin_checked),
        );

        if pin_checked {
            self.tile_repo.remove_pinned_tile(&url);
            self.events
                .emit(OverlayAction::ShowTopToast(Toast::SiteUnpinned));
        } else {
            self.tile_repo
                .add_pinned_tile(&url, self.session_repo.current_screenshot());
            self.events
                .emit(OverlayAction::ShowTopToast(Toast::SitePinned));
        }
        self.set_overlay_visible(false);
    }

    pub fn turbo_button_clicked(&self) {
        let session = self.session_repo.state().get();
        let turbo_active = session.turbo_mode_active;

        self.session_repo.set_turbo_mode(!turbo_active);
        self.session_repo.reload();

        self.send_overlay_click_telemetry(
            NavigationEvent::Turbo,
            TelemetryOverrides::turbo(!turbo_active),
        );
        // Toggling turbo from the home screen keeps the overlay up.
        if !urls::is_home(&session.current_url) {
            self.set_overlay_visible(false);
        }
    }

    pub fn desktop_mode_button_clicked(&self) {
        let desktop_checked = self.state.get().desktop_mode_checked;

        self.send_overlay_click_telemetry(
            NavigationEvent::DesktopMode,
            TelemetryOverrides::desktop_mode(!desktop_checked),
        );

        self.session_repo.set_desktop_mode(!desktop_checked);
        let toast = if desktop_checked {
            Toast::MobileSiteRequested
        } else {
            Toast::DesktopSiteRequested
        };
        self.events.emit(OverlayAction::ShowBottomToast(toast));
        self.set_overlay_visible(false);
    }

    fn send_overlay_click_telemetry(&self, event: NavigationEvent, overrides: TelemetryOverrides) {
        let latest = self.state.get();
        let (turbo, pin, desktop) = overrides.resolve(&latest);
        self.telemetry.overlay_click_event(event, turbo, pin, desktop);
    }

    fn set_overlay_visible(&self, visible: bool) {
        self.events
            .emit(OverlayAction::SetOverlayVisible(visible));
    }
}
