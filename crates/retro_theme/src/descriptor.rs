//! Theme-aware style descriptors and the `themed` merge
//!
//! A [`StyleDescriptor`] describes styling without knowing which theme
//! variant is active. It is either a plain record, a function from
//! [`Theme`] to a record, an arbitrarily nested list of descriptors, or
//! [`StyleDescriptor::Skip`] (the "conditional style that didn't apply").
//!
//! [`themed`] resolves a descriptor against a theme:
//!
//! 1. flatten the nesting into one left-to-right sequence,
//! 2. call every function entry with the theme,
//! 3. fold the records onto `T::default()` with [`StyleRecord::merge_from`].
//!
//! ```rust,ignore
//! use retro_theme::{styles, themed, ColorRole, StyleDescriptor, ViewStyle};
//!
//! let card = StyleDescriptor::themed(|theme| {
//!     ViewStyle::new().bg(theme.color(ColorRole::BackgroundSecondary))
//! });
//! let style = themed(&styles![card, ViewStyle::new().rounded(8.0)], theme);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::style::StyleRecord;
use crate::theme::Theme;

/// A style computed from the active theme
pub type ThemedStyle<T> = Arc<dyn Fn(&Theme) -> T + Send + Sync>;

/// A style, a style-producing function, or a nested list of either
pub enum StyleDescriptor<T> {
    Record(T),
    Themed(ThemedStyle<T>),
    List(Vec<StyleDescriptor<T>>),
    Skip,
}

/// A leaf of a flattened descriptor
pub enum StyleEntry<'a, T> {
    Record(&'a T),
    Themed(&'a ThemedStyle<T>),
}

impl<T> StyleDescriptor<T> {
    /// Wrap a theme-to-style function
    pub fn themed<F>(f: F) -> Self
    where
        F: Fn(&Theme) -> T + Send + Sync + 'static,
    {
        Self::Themed(Arc::new(f))
    }

    /// Build a list descriptor
    pub fn list<I, D>(items: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDescriptor<T>>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// `Some(record)` becomes a record entry, `None` is skipped
    pub fn optional(record: Option<T>) -> Self {
        record.map(Self::Record).unwrap_or(Self::Skip)
    }

    /// Apply `descriptor` only when `condition` holds
    pub fn when(condition: bool, descriptor: impl Into<StyleDescriptor<T>>) -> Self {
        if condition {
            descriptor.into()
        } else {
            Self::Skip
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }

    /// Flatten into leaf entries in left-to-right order.
    ///
    /// Nesting depth is unbounded; `Skip` entries and empty lists produce
    /// nothing.
    pub fn entries(&self) -> Vec<StyleEntry<'_, T>> {
        let mut out = Vec::new();
        let mut stack: Vec<&StyleDescriptor<T>> = vec![self];

        while let Some(descriptor) = stack.pop() {
            match descriptor {
                Self::Record(record) => out.push(StyleEntry::Record(record)),
                Self::Themed(f) => out.push(StyleEntry::Themed(f)),
                Self::List(items) => stack.extend(items.iter().rev()),
                Self::Skip => {}
            }
        }

        out
    }
}

impl<T> Default for StyleDescriptor<T> {
    fn default() -> Self {
        Self::Skip
    }
}

impl<T> From<T> for StyleDescriptor<T> {
    fn from(record: T) -> Self {
        Self::Record(record)
    }
}

impl<T> FromIterator<StyleDescriptor<T>> for StyleDescriptor<T> {
    fn from_iter<I: IntoIterator<Item = StyleDescriptor<T>>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl<T: Clone> Clone for StyleDescriptor<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Record(record) => Self::Record(record.clone()),
            Self::Themed(f) => Self::Themed(Arc::clone(f)),
            Self::List(items) => Self::List(items.clone()),
            Self::Skip => Self::Skip,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StyleDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(record) => f.debug_tuple("Record").field(record).finish(),
            Self::Themed(_) => f.write_str("Themed(<fn>)"),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Skip => f.write_str("Skip"),
        }
    }
}

/// Resolve `descriptor` against `theme` into one flat record.
///
/// The result holds every property any entry set, with later entries
/// overriding earlier ones. Never fails: skipped entries contribute nothing.
pub fn themed<T: StyleRecord>(descriptor: &StyleDescriptor<T>, theme: &Theme) -> T {
    descriptor
        .entries()
        .into_iter()
        .fold(T::default(), |mut acc, entry| {
            match entry {
                StyleEntry::Record(record) => acc.merge_from(record),
                StyleEntry::Themed(f) => acc.merge_from(&f(theme)),
            }
            acc
        })
}

/// Build a list descriptor from records, functions or descriptors
///
/// ```rust,ignore
/// let d = styles![$base, StyleDescriptor::when(pressed, $pressed), $themed_border];
/// ```
#[macro_export]
macro_rules! styles {
    () => {
        $crate::StyleDescriptor::List(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::StyleDescriptor::List(::std::vec![$($crate::StyleDescriptor::from($item)),+])
    };
}
