//! Flat style records
//!
//! A style record is a set of optional properties. Merging lays one record on
//! top of another: properties set in the upper record override, unset ones
//! fall through. [`ViewStyle`] and [`TextStyle`] are the typed records screens
//! use; [`StyleMap`] is an open-ended record keyed by property name.

use indexmap::IndexMap;

use crate::color::Color;

/// A flat style record that can be layered with last-writer-wins semantics
pub trait StyleRecord: Default + Clone {
    /// Lay `other` on top of `self`.
    ///
    /// Every property set in `other` replaces the one in `self`; properties
    /// `other` leaves unset are kept.
    fn merge_from(&mut self, other: &Self);

    /// Non-mutating form of [`StyleRecord::merge_from`]
    fn merged(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.merge_from(other);
        out
    }
}

macro_rules! merge_fields {
    ($target:ident, $other:ident; $($field:ident),+ $(,)?) => {
        $(
            if $other.$field.is_some() {
                $target.$field = $other.$field.clone();
            }
        )+
    };
}

/// Main-axis direction of a container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

/// Cross/main axis alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
    SpaceBetween,
    SpaceAround,
}

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Layout and surface properties of a container
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ViewStyle {
    pub flex: Option<f32>,
    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<Align>,
    pub align_items: Option<Align>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub border_radius: Option<f32>,
    pub padding_horizontal: Option<f32>,
    pub padding_vertical: Option<f32>,
    pub margin_start: Option<f32>,
    pub margin_end: Option<f32>,
    pub row_gap: Option<f32>,
    pub column_gap: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub opacity: Option<f32>,
}

impl ViewStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    pub fn justify(mut self, align: Align) -> Self {
        self.justify_content = Some(align);
        self
    }

    pub fn align_items(mut self, align: Align) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color);
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn px(mut self, padding: f32) -> Self {
        self.padding_horizontal = Some(padding);
        self
    }

    pub fn py(mut self, padding: f32) -> Self {
        self.padding_vertical = Some(padding);
        self
    }

    pub fn margin_start(mut self, margin: f32) -> Self {
        self.margin_start = Some(margin);
        self
    }

    pub fn margin_end(mut self, margin: f32) -> Self {
        self.margin_end = Some(margin);
        self
    }

    pub fn row_gap(mut self, gap: f32) -> Self {
        self.row_gap = Some(gap);
        self
    }

    pub fn column_gap(mut self, gap: f32) -> Self {
        self.column_gap = Some(gap);
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Check if any property is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl StyleRecord for ViewStyle {
    fn merge_from(&mut self, other: &Self) {
        merge_fields!(self, other;
            flex,
            flex_direction,
            justify_content,
            align_items,
            background_color,
            border_color,
            border_width,
            border_radius,
            padding_horizontal,
            padding_vertical,
            margin_start,
            margin_end,
            row_gap,
            column_gap,
            width,
            height,
            opacity,
        );
    }
}

/// Typography properties
#[derive(Clone, Default, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<u16>,
    pub line_height: Option<f32>,
    pub text_align: Option<TextAlign>,
    pub text_shadow_color: Option<Color>,
    pub opacity: Option<f32>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn shadow(mut self, color: Color) -> Self {
        self.text_shadow_color = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }
}

impl StyleRecord for TextStyle {
    fn merge_from(&mut self, other: &Self) {
        merge_fields!(self, other;
            color,
            font_family,
            font_size,
            font_weight,
            line_height,
            text_align,
            text_shadow_color,
            opacity,
        );
    }
}

/// A single property value in a [`StyleMap`]
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Number(f32),
    Text(String),
    Color(Color),
    Bool(bool),
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Color> for StyleValue {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Open-ended style record keyed by property name
///
/// Keys keep first-insertion order; a later write to an existing key
/// replaces the value in place.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct StyleMap {
    props: IndexMap<String, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleMap::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.props.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.props.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl StyleRecord for StyleMap {
    fn merge_from(&mut self, other: &Self) {
        for (key, value) in &other.props {
            self.props.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn view_merge_overrides_only_set_fields() {
        let base = ViewStyle::new().bg(Color::BLACK).rounded(8.0).px(16.0);
        let pressed = ViewStyle::new().bg(Color::WHITE).opacity(0.8);

        let merged = base.merged(&pressed);

        assert_eq!(merged.background_color, Some(Color::WHITE));
        assert_eq!(merged.border_radius, Some(8.0));
        assert_eq!(merged.padding_horizontal, Some(16.0));
        assert_eq!(merged.opacity, Some(0.8));
    }

    #[test]
    fn text_merge_keeps_family_when_unset() {
        let mut base = TextStyle::new().family("PressStart2P").size(12.0);
        base.merge_from(&TextStyle::new().size(18.0));

        assert_eq!(base.font_family.as_deref(), Some("PressStart2P"));
        assert_eq!(base.font_size, Some(18.0));
    }

    #[test]
    fn style_map_merge_is_union_with_last_writer_wins() {
        let mut a: StyleMap = [("flex", StyleValue::Number(1.0)), ("color", "red".into())]
            .into_iter()
            .collect();
        let b = StyleMap::new().with("color", "blue").with("gap", 4.0_f32);

        a.merge_from(&b);

        let keys: Vec<&str> = a.keys().collect();
        assert_eq!(keys, vec!["flex", "color", "gap"]);
        assert_eq!(a.get("color"), Some(&StyleValue::Text("blue".into())));
        assert_eq!(a.get("flex"), Some(&StyleValue::Number(1.0)));
    }

    #[test]
    fn empty_view_style() {
        assert!(ViewStyle::new().is_empty());
        assert!(!ViewStyle::new().flex(1.0).is_empty());
    }
}
