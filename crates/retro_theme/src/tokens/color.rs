//! Color role tokens for theming

use crate::color::Color;

/// Semantic color role keys for dynamic access
///
/// Every role exists in both theme variants, so [`ThemeColors::get`] is total.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    // Background colors
    BackgroundPrimary,
    BackgroundSecondary,
    BackgroundAccent,
    BackgroundAccentMuted,
    BackgroundBrand,
    BackgroundReflection,
    BackgroundTransparent,

    // Text colors
    TextBase,
    TextAccent,
    TextBrand,
    TextBaseMuted,
    TextOverlay,

    // Icon tints
    TintAccent,
    TintBaseMuted,
    TintBase,

    // Border colors
    BorderBase,
    BorderAccent,
    BorderTransparent,
}

impl ColorRole {
    /// Full role list, in declaration order.
    pub fn all() -> &'static [ColorRole] {
        const ROLES: [ColorRole; 18] = [
            ColorRole::BackgroundPrimary,
            ColorRole::BackgroundSecondary,
            ColorRole::BackgroundAccent,
            ColorRole::BackgroundAccentMuted,
            ColorRole::BackgroundBrand,
            ColorRole::BackgroundReflection,
            ColorRole::BackgroundTransparent,
            ColorRole::TextBase,
            ColorRole::TextAccent,
            ColorRole::TextBrand,
            ColorRole::TextBaseMuted,
            ColorRole::TextOverlay,
            ColorRole::TintAccent,
            ColorRole::TintBaseMuted,
            ColorRole::TintBase,
            ColorRole::BorderBase,
            ColorRole::BorderAccent,
            ColorRole::BorderTransparent,
        ];
        &ROLES
    }

    /// Dotted path of the role, e.g. `background.primary`
    pub fn path(self) -> &'static str {
        match self {
            Self::BackgroundPrimary => "background.primary",
            Self::BackgroundSecondary => "background.secondary",
            Self::BackgroundAccent => "background.accent",
            Self::BackgroundAccentMuted => "background.accentMuted",
            Self::BackgroundBrand => "background.brand",
            Self::BackgroundReflection => "background.reflection",
            Self::BackgroundTransparent => "background.transparent",
            Self::TextBase => "text.base",
            Self::TextAccent => "text.accent",
            Self::TextBrand => "text.brand",
            Self::TextBaseMuted => "text.baseMuted",
            Self::TextOverlay => "text.overlay",
            Self::TintAccent => "tint.accent",
            Self::TintBaseMuted => "tint.baseMuted",
            Self::TintBase => "tint.base",
            Self::BorderBase => "border.base",
            Self::BorderAccent => "border.accent",
            Self::BorderTransparent => "border.transparent",
        }
    }

    /// Parse a dotted role path. Unknown paths return `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().iter().copied().find(|role| role.path() == path)
    }
}

/// Surface and fill colors
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub accent_muted: Color,
    pub brand: Color,
    pub reflection: Color,
    pub transparent: Color,
}

/// Foreground text colors
#[derive(Clone, Debug, PartialEq)]
pub struct TextColors {
    pub base: Color,
    pub accent: Color,
    pub brand: Color,
    pub base_muted: Color,
    pub overlay: Color,
}

/// Icon tint colors
#[derive(Clone, Debug, PartialEq)]
pub struct TintColors {
    pub accent: Color,
    pub base_muted: Color,
    pub base: Color,
}

/// Border colors
#[derive(Clone, Debug, PartialEq)]
pub struct BorderColors {
    pub base: Color,
    pub accent: Color,
    pub transparent: Color,
}

/// Complete set of color roles for one theme variant
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeColors {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub tint: TintColors,
    pub border: BorderColors,
}

impl ThemeColors {
    /// Get a color by role key
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::BackgroundPrimary => self.background.primary,
            ColorRole::BackgroundSecondary => self.background.secondary,
            ColorRole::BackgroundAccent => self.background.accent,
            ColorRole::BackgroundAccentMuted => self.background.accent_muted,
            ColorRole::BackgroundBrand => self.background.brand,
            ColorRole::BackgroundReflection => self.background.reflection,
            ColorRole::BackgroundTransparent => self.background.transparent,
            ColorRole::TextBase => self.text.base,
            ColorRole::TextAccent => self.text.accent,
            ColorRole::TextBrand => self.text.brand,
            ColorRole::TextBaseMuted => self.text.base_muted,
            ColorRole::TextOverlay => self.text.overlay,
            ColorRole::TintAccent => self.tint.accent,
            ColorRole::TintBaseMuted => self.tint.base_muted,
            ColorRole::TintBase => self.tint.base,
            ColorRole::BorderBase => self.border.base,
            ColorRole::BorderAccent => self.border.accent,
            ColorRole::BorderTransparent => self.border.transparent,
        }
    }

    /// Look up a role by dotted path, e.g. `text.base`
    pub fn get_path(&self, path: &str) -> Option<Color> {
        ColorRole::from_path(path).map(|role| self.get(role))
    }

    /// Palette manipulator: `color` at `percent` opacity
    pub fn change_hex_alpha(&self, color: Color, percent: f32) -> Color {
        color.change_hex_alpha(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_paths_round_trip() {
        for role in ColorRole::all() {
            assert_eq!(ColorRole::from_path(role.path()), Some(*role));
        }
        assert_eq!(ColorRole::from_path("background.nope"), None);
        assert_eq!(ColorRole::from_path(""), None);
    }
}
