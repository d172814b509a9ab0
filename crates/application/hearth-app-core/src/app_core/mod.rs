pub mod commands;
pub mod events;
pub mod store;

pub use commands::ToolbarCommand;
pub use events::{ActionEvents, Consumable, OverlayAction, Toast};
pub use store::{combine_latest, Store};
