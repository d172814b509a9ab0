use serde::Serialize;

use crate::viewmodel::ToolbarVm;

/// Overlay buttons that report click telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationEvent {
    PinAction,
    Turbo,
    DesktopMode,
}

/// Payload a telemetry sink receives for an overlay click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlayClickEvent {
    pub event: NavigationEvent,
    pub turbo_checked: bool,
    pub pin_checked: bool,
    pub desktop_mode_checked: bool,
}

/// Per-flag overrides for a click report.
///
/// A toggle handler substitutes its own just-inverted flag; the other flags
/// pass through from the latest observed toolbar state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryOverrides {
    pub turbo_checked: Option<bool>,
    pub pin_checked: Option<bool>,
    pub desktop_mode_checked: Option<bool>,
}

impl TelemetryOverrides {
    pub fn turbo(value: bool) -> Self {
        Self {
            turbo_checked: Some(value),
            ..Self::default()
        }
    }

    pub fn pin(value: bool) -> Self {
        Self {
            pin_checked: Some(value),
            ..Self::default()
        }
    }

    pub fn desktop_mode(value: bool) -> Self {
        Self {
            desktop_mode_checked: Some(value),
            ..Self::default()
        }
    }

    /// Resolve against the latest observed state: overridden flags win,
    /// everything else passes through.
    pub fn resolve(&self, latest: &ToolbarVm) -> (bool, bool, bool) {
        (
            self.turbo_checked.unwrap_or(latest.turbo_checked),
            self.pin_checked.unwrap_or(latest.pin_checked),
            self.desktop_mode_checked.unwrap_or(latest.desktop_mode_checked),
        )
    }
}
