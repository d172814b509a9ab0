pub mod app_core;
pub mod intent;
pub mod pinned;
pub mod ports;
pub mod session;
pub mod telemetry;
pub mod toolbar;
pub mod viewmodel;

pub use app_core::*;
pub use intent::{ClassifiedIntent, IntentSource, LaunchAction, LaunchRequest, DIAL_PARAMS_KEY};
pub use pinned::InMemoryPinnedTileRepo;
pub use ports::{PinnedTileRepo, SessionRepo, TelemetrySink};
pub use session::InMemorySessionRepo;
pub use telemetry::{NavigationEvent, OverlayClickEvent, TelemetryOverrides};
pub use toolbar::ToolbarViewModel;
pub use viewmodel::{toolbar_vm, ToolbarVm};
