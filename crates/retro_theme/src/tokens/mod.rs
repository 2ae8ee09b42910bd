//! Design tokens for theming
//!
//! - Colors, grouped by role (background, text, tint, border)
//! - Spacing (margins, padding, gaps)

mod color;
mod spacing;

pub use color::*;
pub use spacing::*;
