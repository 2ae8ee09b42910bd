//! Retro Games client state
//!
//! The single source of truth for what the screens show:
//!
//! - the games list last fetched from the API (volatile)
//! - the user's favorites and reviews (persisted through a [`KeyValueStore`])
//!
//! ```rust,ignore
//! use retro_store::{ClientStateStore, FileStore};
//!
//! let mut store = ClientStateStore::open(FileStore::open("state")?);
//! store.toggle_favorite(1020, None)?;
//! store.append_review(1020, "Still holds up")?;
//! assert_eq!(store.reviews_for(1020)[0], "Still holds up");
//! ```

mod error;
mod events;
mod game;
mod persistence;
mod sections;
mod store;

pub use error::{PersistenceError, StoreError};
pub use events::{StoreEvent, SubscriptionId};
pub use game::{
    Company, Game, GameId, Genre, ImageRef, InvolvedCompany, Rating, ReleaseDate,
};
pub use persistence::{FileStore, KeyValueStore, MemoryStore, FAVORITES_KEY, REVIEWS_KEY};
pub use sections::{sections_by_year, GameSection};
pub use store::{ClientStateStore, StoreOptions, WriteFailurePolicy};
