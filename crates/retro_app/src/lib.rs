//! Retro Games application wiring
//!
//! Loads [`AppConfig`], sets up logging, and builds the [`AppContext`] that
//! owns the theme resolver and the client state store.
//!
//! ```rust,ignore
//! use retro_app::{init_logging, AppConfig, AppContext};
//!
//! let config = AppConfig::load("retro.toml".as_ref())?;
//! init_logging(&config.logging.filter);
//! let mut app = AppContext::from_config(&config)?;
//! app.refresh_games(&api)?;
//! ```

mod config;
mod context;
mod logging;
mod source;

pub use config::{AppConfig, LoggingConfig, StorageConfig, ThemeConfig};
pub use context::AppContext;
pub use logging::init_logging;
pub use source::GamesSource;
