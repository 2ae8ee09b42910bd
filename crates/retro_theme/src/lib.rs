//! Retro Games Theme System
//!
//! Light/dark theming for the Retro Games screens, independent of any UI
//! toolkit.
//!
//! # Overview
//!
//! - **Tokens**: color roles grouped as background / text / tint / border,
//!   plus a shared spacing scale
//! - **Variants**: a [`ThemeBundle`] holding the light and dark [`Theme`]
//! - **Selection**: an explicit [`ThemeSelection`] or the host appearance,
//!   resolved by [`resolve_active_variant`]
//! - **Styles**: [`StyleDescriptor`]s (records, theme functions, nested lists)
//!   folded into one flat record by [`themed`]
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use retro_theme::{ColorRole, StyleDescriptor, Theme, ThemeResolver, ThemeSelection, ViewStyle};
//!
//! let mut resolver = ThemeResolver::default();
//! resolver.set_selection(ThemeSelection::Dark);
//!
//! let screen = StyleDescriptor::themed(|theme: &Theme| {
//!     ViewStyle::new()
//!         .flex(1.0)
//!         .bg(theme.color(ColorRole::BackgroundPrimary))
//!         .px(theme.spacing().md)
//! });
//! let style: ViewStyle = resolver.themed(&screen);
//! ```

pub mod color;
pub mod descriptor;
pub mod resolver;
pub mod style;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use color::{change_hex_alpha, Color, ColorParseError};
pub use descriptor::{themed, StyleDescriptor, StyleEntry, ThemedStyle};
pub use resolver::ThemeResolver;
pub use style::{
    Align, FlexDirection, StyleMap, StyleRecord, StyleValue, TextAlign, TextStyle, ViewStyle,
};
pub use theme::{
    resolve_active_variant, ColorScheme, Theme, ThemeBundle, ThemeSelection, UnknownSchemeError,
};
pub use themes::RetroTheme;
pub use tokens::*;
