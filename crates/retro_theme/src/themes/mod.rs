//! Built-in themes

mod retro;

pub use retro::{palette, RetroTheme};
