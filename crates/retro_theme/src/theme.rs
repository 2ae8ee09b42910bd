//! Theme variants, the light/dark bundle, and variant selection

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::tokens::{ColorRole, SpacingTokens, ThemeColors};

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized scheme or selection names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color scheme `{0}` (expected light, dark or system)")]
pub struct UnknownSchemeError(pub String);

impl FromStr for ColorScheme {
    type Err = UnknownSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownSchemeError(s.to_string())),
        }
    }
}

/// Which variant the user asked for
///
/// `System` defers to the host's appearance setting.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSelection {
    Light,
    Dark,
    #[default]
    #[serde(alias = "unset")]
    System,
}

impl ThemeSelection {
    /// The explicitly selected scheme, if any
    pub fn scheme(self) -> Option<ColorScheme> {
        match self {
            Self::Light => Some(ColorScheme::Light),
            Self::Dark => Some(ColorScheme::Dark),
            Self::System => None,
        }
    }
}

impl From<ColorScheme> for ThemeSelection {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::Light,
            ColorScheme::Dark => Self::Dark,
        }
    }
}

impl From<Option<ColorScheme>> for ThemeSelection {
    fn from(scheme: Option<ColorScheme>) -> Self {
        scheme.map(Self::from).unwrap_or(Self::System)
    }
}

impl FromStr for ThemeSelection {
    type Err = UnknownSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" | "unset" => Ok(Self::System),
            other => other
                .parse::<ColorScheme>()
                .map(Self::from)
                .map_err(|_| UnknownSchemeError(s.to_string())),
        }
    }
}

/// Resolve the scheme to render with.
///
/// An explicit selection wins; otherwise the host preference is used, and a
/// host that reports nothing gets [`ColorScheme::Light`].
pub fn resolve_active_variant(
    selection: ThemeSelection,
    system_preference: Option<ColorScheme>,
) -> ColorScheme {
    selection
        .scheme()
        .or(system_preference)
        .unwrap_or(ColorScheme::Light)
}

/// One complete theme variant
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    name: &'static str,
    scheme: ColorScheme,
    colors: ThemeColors,
    spacing: SpacingTokens,
}

impl Theme {
    pub fn new(
        name: &'static str,
        scheme: ColorScheme,
        colors: ThemeColors,
        spacing: SpacingTokens,
    ) -> Self {
        Self {
            name,
            scheme,
            colors,
            spacing,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    /// Shorthand for `self.colors().get(role)`
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors.get(role)
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }
}

/// A light/dark pair of theme variants
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    name: &'static str,
    light: Theme,
    dark: Theme,
}

impl ThemeBundle {
    pub fn new(name: &'static str, light: Theme, dark: Theme) -> Self {
        Self { name, light, dark }
    }

    /// The built-in Retro Games registry
    pub fn retro() -> Self {
        crate::themes::RetroTheme::bundle()
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn light(&self) -> &Theme {
        &self.light
    }

    pub fn dark(&self) -> &Theme {
        &self.dark
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// [`resolve_active_variant`] followed by [`ThemeBundle::for_scheme`]
    pub fn resolve(
        &self,
        selection: ThemeSelection,
        system_preference: Option<ColorScheme>,
    ) -> &Theme {
        self.for_scheme(resolve_active_variant(selection, system_preference))
    }
}

impl Default for ThemeBundle {
    fn default() -> Self {
        Self::retro()
    }
}
