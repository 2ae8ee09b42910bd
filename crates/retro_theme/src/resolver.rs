//! Active-theme resolution
//!
//! [`ThemeResolver`] is constructed once by the host and handed to whatever
//! renders. It owns the light/dark bundle, the user's [`ThemeSelection`] and
//! the last appearance the host reported, and answers "which theme is
//! active" plus "what does this descriptor look like right now".

use tracing::debug;

use crate::descriptor::{themed, StyleDescriptor};
use crate::style::StyleRecord;
use crate::theme::{resolve_active_variant, ColorScheme, Theme, ThemeBundle, ThemeSelection};

/// Theme selection state plus the registry it selects from
#[derive(Clone, Debug)]
pub struct ThemeResolver {
    bundle: ThemeBundle,
    selection: ThemeSelection,
    system_preference: Option<ColorScheme>,
}

impl ThemeResolver {
    /// Follow the host appearance until the user overrides it
    pub fn new(bundle: ThemeBundle) -> Self {
        Self {
            bundle,
            selection: ThemeSelection::System,
            system_preference: None,
        }
    }

    pub fn with_selection(mut self, selection: ThemeSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_system_preference(mut self, preference: Option<ColorScheme>) -> Self {
        self.system_preference = preference;
        self
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    pub fn selection(&self) -> ThemeSelection {
        self.selection
    }

    pub fn system_preference(&self) -> Option<ColorScheme> {
        self.system_preference
    }

    /// Set (or clear, with [`ThemeSelection::System`]) the user override
    pub fn set_selection(&mut self, selection: ThemeSelection) {
        if self.selection != selection {
            debug!(
                "ThemeResolver::set_selection - {:?} -> {:?}",
                self.selection, selection
            );
            self.selection = selection;
        }
    }

    /// Record the host appearance.
    ///
    /// Only affects the active theme while the selection is `System`; an
    /// explicit light or dark selection is left in place.
    pub fn set_system_preference(&mut self, preference: Option<ColorScheme>) {
        if self.system_preference != preference {
            debug!(
                "ThemeResolver::set_system_preference - {:?} -> {:?}",
                self.system_preference, preference
            );
            self.system_preference = preference;
        }
    }

    /// Switch to the opposite of the active scheme as an explicit override
    pub fn toggle(&mut self) -> ColorScheme {
        let next = self.active_scheme().toggle();
        self.set_selection(next.into());
        next
    }

    pub fn active_scheme(&self) -> ColorScheme {
        resolve_active_variant(self.selection, self.system_preference)
    }

    /// The active theme variant
    pub fn theme(&self) -> &Theme {
        self.bundle.for_scheme(self.active_scheme())
    }

    /// Resolve a style descriptor against the active theme
    pub fn themed<T: StyleRecord>(&self, descriptor: &StyleDescriptor<T>) -> T {
        themed(descriptor, self.theme())
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(ThemeBundle::retro())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ViewStyle;
    use crate::tokens::ColorRole;

    #[test]
    fn defaults_to_light_without_host_preference() {
        let resolver = ThemeResolver::default();
        assert_eq!(resolver.selection(), ThemeSelection::System);
        assert_eq!(resolver.active_scheme(), ColorScheme::Light);
        assert!(!resolver.theme().is_dark());
    }

    #[test]
    fn override_survives_host_changes() {
        let mut resolver = ThemeResolver::default().with_selection(ThemeSelection::Dark);
        resolver.set_system_preference(Some(ColorScheme::Light));
        assert_eq!(resolver.active_scheme(), ColorScheme::Dark);

        resolver.set_selection(ThemeSelection::System);
        assert_eq!(resolver.active_scheme(), ColorScheme::Light);
    }

    #[test]
    fn toggle_flips_active_scheme_into_override() {
        let mut resolver =
            ThemeResolver::default().with_system_preference(Some(ColorScheme::Dark));

        assert_eq!(resolver.toggle(), ColorScheme::Light);
        assert_eq!(resolver.selection(), ThemeSelection::Light);
        assert_eq!(resolver.toggle(), ColorScheme::Dark);
        assert_eq!(resolver.selection(), ThemeSelection::Dark);
    }

    #[test]
    fn themed_uses_active_variant() {
        let mut resolver = ThemeResolver::default();
        let screen = StyleDescriptor::themed(|theme: &Theme| {
            ViewStyle::new().bg(theme.color(ColorRole::BackgroundPrimary))
        });

        let light = resolver.themed(&screen);
        resolver.set_selection(ThemeSelection::Dark);
        let dark = resolver.themed(&screen);

        assert_ne!(light.background_color, dark.background_color);
        assert_eq!(
            dark.background_color,
            Some(resolver.bundle().dark().color(ColorRole::BackgroundPrimary))
        );
    }
}
