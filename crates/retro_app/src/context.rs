//! Explicit dependency container handed to the screens

use anyhow::{Context, Result};
use retro_store::{
    ClientStateStore, FileStore, Game, GameId, KeyValueStore, MemoryStore, StoreOptions,
};
use retro_theme::{ThemeBundle, ThemeResolver};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::source::GamesSource;

/// Theme resolver plus client state, owned together
pub struct AppContext<S: KeyValueStore = Box<dyn KeyValueStore>> {
    theme: ThemeResolver,
    store: ClientStateStore<S>,
}

impl AppContext<Box<dyn KeyValueStore>> {
    /// Build a context from configuration.
    ///
    /// Uses a [`FileStore`] in `storage.dir` when set, otherwise an
    /// in-memory store.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let persistence: Box<dyn KeyValueStore> = match &config.storage.dir {
            Some(dir) => {
                let store = FileStore::open(dir)
                    .with_context(|| format!("Failed to open storage at {}", dir.display()))?;
                info!("AppContext::from_config - file storage at {}", dir.display());
                Box::new(store)
            }
            None => {
                info!("AppContext::from_config - in-memory storage");
                Box::new(MemoryStore::new())
            }
        };

        let options = StoreOptions::default().write_failure(config.storage.write_failure);
        let theme = ThemeResolver::new(ThemeBundle::default())
            .with_selection(config.theme.selection)
            .with_system_preference(config.theme.system);

        Ok(Self::new(
            theme,
            ClientStateStore::open_with(persistence, options),
        ))
    }
}

impl<S: KeyValueStore> AppContext<S> {
    pub fn new(theme: ThemeResolver, store: ClientStateStore<S>) -> Self {
        Self { theme, store }
    }

    pub fn theme(&self) -> &ThemeResolver {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeResolver {
        &mut self.theme
    }

    pub fn store(&self) -> &ClientStateStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ClientStateStore<S> {
        &mut self.store
    }

    /// Fetch the full list and replace the games cache with it.
    ///
    /// On a fetch error the cache is left untouched.
    pub fn refresh_games(&mut self, source: &dyn GamesSource) -> Result<usize> {
        let games = source.fetch_games().context("Failed to fetch games")?;
        let count = games.len();
        self.store.replace_games(games);
        Ok(count)
    }

    /// The game with `id`, from the cache when present, otherwise fetched.
    ///
    /// A fetched game is not added to the cache.
    pub fn load_game(&self, source: &dyn GamesSource, id: GameId) -> Result<Game> {
        if let Some(game) = self.store.game(id) {
            debug!("AppContext::load_game - {} served from cache", id);
            return Ok(game.clone());
        }

        debug!("AppContext::load_game - {} not cached, fetching", id);
        source
            .fetch_game(id)
            .with_context(|| format!("Failed to fetch game {id}"))
    }
}
