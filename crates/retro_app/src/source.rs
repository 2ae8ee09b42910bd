//! Where game data comes from

use retro_store::{Game, GameId};

/// A provider of game data, typically the remote games API.
///
/// Fetch errors are surfaced to the caller untouched; nothing is cached by
/// the source itself.
pub trait GamesSource {
    fn fetch_games(&self) -> anyhow::Result<Vec<Game>>;

    fn fetch_game(&self, id: GameId) -> anyhow::Result<Game>;
}
