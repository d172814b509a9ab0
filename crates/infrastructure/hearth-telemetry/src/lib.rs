//! Telemetry sink emitting structured ping records on the `telemetry`
//! tracing target. A host subscriber decides where they go; this crate never
//! blocks, retries, or reports back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use hearth_app_core::{NavigationEvent, OverlayClickEvent, TelemetrySink};

/// Envelope wrapped around every emitted event.
#[derive(Debug, Clone, Serialize)]
pub struct Ping {
    pub ping_id: Uuid,
    pub created: DateTime<Utc>,
    #[serde(flatten)]
    pub event: OverlayClickEvent,
}

pub struct TracingTelemetry;

impl Default for TracingTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl TracingTelemetry {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySink for TracingTelemetry {
    fn overlay_click_event(
        &self,
        event: NavigationEvent,
        turbo_checked: bool,
        pin_checked: bool,
        desktop_mode_checked: bool,
    ) {
        let ping = Ping {
            ping_id: Uuid::new_v4(),
            created: Utc::now(),
            event: OverlayClickEvent {
                event,
                turbo_checked,
                pin_checked,
                desktop_mode_checked,
            },
        };
        match serde_json::to_string(&ping) {
            Ok(payload) => info!(target: "telemetry", %payload, "overlay click"),
            Err(e) => warn!(target: "telemetry", "dropping unserializable ping: {e}"),
        }
    }
}
