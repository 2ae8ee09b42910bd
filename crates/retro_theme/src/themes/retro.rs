//! Default Retro Games theme
//!
//! Both variants draw from one small arcade palette: a teal accent, an
//! orchid highlight, a lime/olive brand pair and a crimson tint. Dark mode
//! sits on pure black; light mode mirrors it on white.

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;

/// Retro arcade palette
pub mod palette {
    use crate::color::Color;

    // Neutrals
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const CHARCOAL: Color = Color::rgb(26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0);
    pub const ASH: Color = Color::rgb(77.0 / 255.0, 77.0 / 255.0, 77.0 / 255.0);
    pub const SILVER: Color = Color::rgb(179.0 / 255.0, 179.0 / 255.0, 179.0 / 255.0);
    pub const SMOKE: Color = Color::rgb(242.0 / 255.0, 242.0 / 255.0, 242.0 / 255.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    // Accents
    pub const TEAL: Color = Color::rgb(9.0 / 255.0, 159.0 / 255.0, 170.0 / 255.0);
    pub const ORCHID: Color = Color::rgb(248.0 / 255.0, 186.0 / 255.0, 247.0 / 255.0);
    pub const OLIVE: Color = Color::rgb(88.0 / 255.0, 102.0 / 255.0, 0.0);
    pub const LIME: Color = Color::rgb(212.0 / 255.0, 242.0 / 255.0, 13.0 / 255.0);
    pub const CRIMSON: Color = Color::rgb(230.0 / 255.0, 25.0 / 255.0, 32.0 / 255.0);
}

/// The Retro Games theme family
#[derive(Clone, Copy, Debug, Default)]
pub struct RetroTheme;

impl RetroTheme {
    pub const NAME: &'static str = "Retro";

    /// Light/dark pair for the app
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new(Self::NAME, Self::light(), Self::dark())
    }

    pub fn light() -> Theme {
        Theme::new(
            Self::NAME,
            ColorScheme::Light,
            light_colors(),
            SpacingTokens::default(),
        )
    }

    pub fn dark() -> Theme {
        Theme::new(
            Self::NAME,
            ColorScheme::Dark,
            dark_colors(),
            SpacingTokens::default(),
        )
    }
}

fn light_colors() -> ThemeColors {
    use palette::*;

    ThemeColors {
        background: BackgroundColors {
            primary: WHITE,
            secondary: SMOKE,
            accent: TEAL,
            accent_muted: ORCHID,
            brand: LIME,
            reflection: BLACK,
            transparent: WHITE,
        },
        text: TextColors {
            base: BLACK,
            accent: TEAL,
            brand: OLIVE,
            base_muted: SILVER,
            overlay: WHITE,
        },
        tint: TintColors {
            accent: CRIMSON,
            base_muted: SILVER,
            base: BLACK,
        },
        border: BorderColors {
            base: BLACK,
            accent: TEAL,
            transparent: WHITE,
        },
    }
}

fn dark_colors() -> ThemeColors {
    use palette::*;

    ThemeColors {
        background: BackgroundColors {
            primary: BLACK,
            secondary: CHARCOAL,
            accent: TEAL,
            accent_muted: ORCHID,
            brand: OLIVE,
            reflection: WHITE,
            transparent: BLACK,
        },
        text: TextColors {
            base: WHITE,
            accent: ORCHID,
            brand: LIME,
            base_muted: ASH,
            overlay: WHITE,
        },
        tint: TintColors {
            accent: CRIMSON,
            base_muted: ASH,
            base: WHITE,
        },
        border: BorderColors {
            base: WHITE,
            accent: TEAL,
            transparent: BLACK,
        },
    }
}
