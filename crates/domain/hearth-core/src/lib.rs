pub mod session;
pub mod tiles;
pub mod urls;

pub use session::{Screenshot, SessionSnapshot, SessionState, SnapshotError};
pub use tiles::{PinnedTile, TileMap, TileSource};
