use hearth_core::{PinnedTile, Screenshot, TileMap};

use crate::app_core::Store;
use crate::ports::PinnedTileRepo;

/// Pinned-tile repository. The host persists the map as JSON; this layer
/// only maintains it.
pub struct InMemoryPinnedTileRepo {
    tiles: Store<TileMap>,
}

impl InMemoryPinnedTileRepo {
    pub fn new() -> Self {
        Self {
            tiles: Store::new(TileMap::new()),
        }
    }

    /// Seed the default home-screen entries shipped with the app.
    pub fn with_bundled<I, U, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (U, T)>,
        U: Into<String>,
        T: Into<String>,
    {
        let mut tiles = TileMap::new();
        for (url, title) in entries {
            let tile = PinnedTile::bundled(url, title);
            tiles.insert(tile.url.clone(), tile);
        }
        Self {
            tiles: Store::new(tiles),
        }
    }
}

impl Default for InMemoryPinnedTileRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl PinnedTileRepo for InMemoryPinnedTileRepo {
    fn tiles(&self) -> Store<TileMap> {
        self.tiles.clone()
    }

    fn add_pinned_tile(&self, url: &str, screenshot: Option<Screenshot>) {
        self.tiles.update(|tiles| {
            tiles.insert(url.to_string(), PinnedTile::custom(url, screenshot));
        });
    }

    fn remove_pinned_tile(&self, url: &str) {
        self.tiles.update(|tiles| {
            tiles.remove(url);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::TileSource;

    #[test]
    fn bundled_seeding_and_custom_pins_coexist() {
        let repo = InMemoryPinnedTileRepo::with_bundled([
            ("https://video.example", "Video"),
            ("https://news.example", "News"),
        ]);
        repo.add_pinned_tile("https://blog.example", None);

        let tiles = repo.tiles().get();
        assert_eq!(tiles.len(), 3);
        assert_eq!(
            tiles["https://video.example"].source,
            TileSource::Bundled
        );
        assert_eq!(tiles["https://blog.example"].source, TileSource::Custom);

        repo.remove_pinned_tile("https://blog.example");
        assert!(!repo.tiles().get().contains_key("https://blog.example"));
    }
}
