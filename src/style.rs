//! Per-feature styles.
//!
//! [`StyleResolver`] turns the value of a feature into a
//! [`StyleDescriptor`]: the base style, filled with the color of the
//! value's bucket, or with a hatch pattern when the value exceeds the
//! pattern threshold.

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Color, ColorScale, Feature, Hatch, PatternRegistry, StyleError};
use crate::pattern::DIAGONAL_HATCH;

/// The fill of a polygon: a flat color or a reference to a pattern,
/// written `url(#id)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Fill {
    Color(Color),
    Pattern(String),
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Color(c) => fmt::Display::fmt(c, f),
            Fill::Pattern(id) => write!(f, "url(#{id})"),
        }
    }
}

impl TryFrom<String> for Fill {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().strip_prefix("url(#").and_then(|r| r.strip_suffix(')')) {
            Some(id) if !id.is_empty() => Ok(Fill::Pattern(id.to_string())),
            _ => Ok(Fill::Color(s.parse()?)),
        }
    }
}

impl From<Fill> for String {
    fn from(f: Fill) -> Self { f.to_string() }
}

/// Path options of a polygon, with the names Leaflet uses once
/// serialized.  Unset options are left to the renderer's defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleDescriptor {
    /// Stroke width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Stroke opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Fill>,
}

impl StyleDescriptor {
    /// Return `self` with the options set in `other` overriding its own.
    pub fn merge(&self, other: &StyleDescriptor) -> StyleDescriptor {
        StyleDescriptor {
            weight: other.weight.or(self.weight),
            opacity: other.opacity.or(self.opacity),
            color: other.color.clone().or_else(|| self.color.clone()),
            dash_array: other.dash_array.clone()
                .or_else(|| self.dash_array.clone()),
            fill_opacity: other.fill_opacity.or(self.fill_opacity),
            fill_color: other.fill_color.clone()
                .or_else(|| self.fill_color.clone()),
        }
    }

    /// The flat fill color, if the fill is not a pattern.
    pub fn fill_rgb(&self) -> Option<&Color> {
        match &self.fill_color {
            Some(Fill::Color(c)) => Some(c),
            _ => None,
        }
    }
}

/// Background color of the override pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternColor {
    /// The color of the value's bucket.
    Bucket,
    Fixed(Color),
}

/// Replace the fill of values above `threshold` by a pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternOverride {
    pub threshold: f64,
    pub id: String,
    pub tile: (f64, f64),
    pub color: PatternColor,
    pub hatch: Hatch,
}

impl PatternOverride {
    /// Diagonal hatch on a 20×20 tile, with background `color`.
    pub fn diagonal_hatch(threshold: f64, color: PatternColor) -> Self {
        PatternOverride { threshold, id: DIAGONAL_HATCH.to_string(),
                          tile: (20., 20.), color, hatch: Hatch::default() }
    }
}

/// Computes the style of features.
///
/// # Example
///
/// ```
/// use choropleth_style::*;
/// let resolver = StyleResolver::new(ColorScale::us_density(),
///                                   StyleDescriptor::default())
///     .pattern_override(PatternOverride::diagonal_hatch(
///         100., PatternColor::Bucket));
/// let mut patterns = PatternRegistry::new();
/// let s = resolver.resolve(150., &mut patterns);
/// assert_eq!(s.fill_color, Some(Fill::Pattern("diagonalHatch".into())));
/// assert_eq!(patterns.get("diagonalHatch").unwrap().fill,
///            Color::rgb(0xFC, 0x4E, 0x2A));
/// ```
#[derive(Clone, Debug)]
pub struct StyleResolver {
    scale: ColorScale,
    base: StyleDescriptor,
    color_prop: String,
    pattern: Option<PatternOverride>,
    hover: StyleDescriptor,
}

impl StyleResolver {
    /// A resolver classifying the property `density`, without pattern
    /// and with an empty hover style.
    pub fn new(scale: ColorScale, base: StyleDescriptor) -> Self {
        StyleResolver { scale, base, color_prop: "density".to_string(),
                        pattern: None, hover: StyleDescriptor::default() }
    }

    /// Set the feature property whose value drives the fill.
    pub fn color_prop(mut self, prop: &str) -> Self {
        self.color_prop = prop.to_string();
        self
    }

    pub fn pattern_override(mut self, pattern: PatternOverride) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Options applied on top of a feature's style while it is hovered.
    pub fn hover(mut self, hover: StyleDescriptor) -> Self {
        self.hover = hover;
        self
    }

    #[inline]
    pub fn scale(&self) -> &ColorScale { &self.scale }

    /// The feature property the fill is chosen from.
    #[inline]
    pub fn property(&self) -> &str { &self.color_prop }

    /// Return the style of a feature whose value is `value`.
    ///
    /// Unclassified values keep the base fill.  When `value` exceeds the
    /// pattern threshold, the pattern is (re)colored in `patterns` and
    /// the fill refers to it.
    pub fn resolve(&self, value: f64, patterns: &mut PatternRegistry)
                   -> StyleDescriptor {
        let mut style = self.base.clone();
        match self.scale.color(value) {
            Some(c) => style.fill_color = Some(Fill::Color(c.clone())),
            None => debug!(target: "choropleth::style", value,
                           "style.unclassified"),
        }
        if let Some(p) = &self.pattern {
            if value > p.threshold {
                let color = match &p.color {
                    PatternColor::Fixed(c) => Some(c),
                    PatternColor::Bucket => style.fill_rgb(),
                };
                if let Some(color) = color {
                    patterns.ensure_pattern(&p.id, color, p.tile, &p.hatch);
                }
                // Without a color, the pattern is only used if another
                // feature already realized it.
                if patterns.get(&p.id).is_some() {
                    style.fill_color = Some(Fill::Pattern(p.id.clone()));
                }
            }
        }
        style
    }

    /// Return the style of `feature`.  A feature lacking the classified
    /// property (or with a non-numeric one) gets the base style.
    pub fn resolve_feature(&self, feature: &Feature,
                           patterns: &mut PatternRegistry) -> StyleDescriptor {
        match feature.value(&self.color_prop) {
            Some(v) => self.resolve(v, patterns),
            None => {
                debug!(target: "choropleth::style", prop = %self.color_prop,
                       name = feature.name().unwrap_or_default(),
                       "style.missing_attribute");
                self.base.clone()
            }
        }
    }

    /// The hover options on their own.
    #[inline]
    pub fn hover_style(&self) -> &StyleDescriptor { &self.hover }

    /// `style` as it is drawn while hovered.
    pub fn highlight(&self, style: &StyleDescriptor) -> StyleDescriptor {
        style.merge(&self.hover)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> StyleDescriptor {
        StyleDescriptor {
            weight: Some(2.),
            opacity: Some(1.),
            color: Some(Color::named("white")),
            dash_array: Some("3".to_string()),
            fill_opacity: Some(0.7),
            fill_color: None,
        }
    }

    fn resolver() -> StyleResolver {
        StyleResolver::new(ColorScale::us_density(), base())
    }

    fn hatched(color: PatternColor) -> StyleResolver {
        resolver().pattern_override(PatternOverride::diagonal_hatch(100., color))
    }

    #[test]
    fn bucket_color() {
        let mut reg = PatternRegistry::new();
        let s = resolver().resolve(150., &mut reg);
        assert_eq!(s.fill_color, Some(Fill::Color(Color::rgb(0xFC, 0x4E, 0x2A))));
        assert_eq!(s.weight, Some(2.));
        assert_eq!(s.dash_array.as_deref(), Some("3"));
        assert!(reg.is_empty());
    }

    #[test]
    fn unclassified_keeps_base_fill() {
        let mut reg = PatternRegistry::new();
        assert_eq!(resolver().resolve(0., &mut reg), base());
        let gray = StyleDescriptor { fill_color: Some(Fill::Color(Color::named("gray"))),
                                     ..base() };
        let r = StyleResolver::new(ColorScale::us_density(), gray.clone());
        assert_eq!(r.resolve(-3., &mut reg), gray);
    }

    #[test]
    fn fresh_descriptor_per_call() {
        // A high value must not leak its fill into a later unclassified one.
        let r = hatched(PatternColor::Bucket);
        let mut reg = PatternRegistry::new();
        r.resolve(900., &mut reg);
        assert_eq!(r.resolve(0., &mut reg).fill_color, None);
    }

    #[test]
    fn pattern_above_threshold() {
        let r = hatched(PatternColor::Fixed(Color::named("blue")));
        let mut reg = PatternRegistry::new();
        let s = r.resolve(250., &mut reg);
        assert_eq!(r.scale().classify(250.), crate::Bucket::Class(5));
        assert_eq!(s.fill_color, Some(Fill::Pattern(DIAGONAL_HATCH.into())));
        assert_eq!(reg.get(DIAGONAL_HATCH).unwrap().fill, Color::named("blue"));
        // The threshold itself is not exceeded.
        let s = r.resolve(100., &mut reg);
        assert_eq!(s.fill_color, Some(Fill::Color(Color::rgb(0xFD, 0x8D, 0x3C))));
    }

    #[test]
    fn bucket_colored_pattern_follows_last_feature() {
        let r = hatched(PatternColor::Bucket);
        let mut reg = PatternRegistry::new();
        r.resolve(150., &mut reg);
        r.resolve(2000., &mut reg);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(DIAGONAL_HATCH).unwrap().fill,
                   Color::rgb(0x80, 0x00, 0x26));
    }

    #[test]
    fn pattern_without_color() {
        let scale = ColorScale::from_parts(&[500.], &[Color::named("red")]).unwrap();
        let r = StyleResolver::new(scale, base())
            .pattern_override(PatternOverride::diagonal_hatch(100., PatternColor::Bucket));
        let mut reg = PatternRegistry::new();
        // 200 is above the pattern threshold but unclassified: no color.
        assert_eq!(r.resolve(200., &mut reg).fill_color, None);
        assert!(reg.is_empty());
        r.resolve(600., &mut reg);
        assert_eq!(r.resolve(200., &mut reg).fill_color,
                   Some(Fill::Pattern(DIAGONAL_HATCH.into())));
    }

    #[test]
    fn missing_attribute_gives_base() {
        let r = hatched(PatternColor::Bucket).color_prop("pop");
        assert_eq!(r.property(), "pop");
        let mut reg = PatternRegistry::new();
        let f = Feature::named("Ohio", "density", 500.);
        assert_eq!(r.resolve_feature(&f, &mut reg), base());
        let f = Feature::named("Ohio", "pop", 50.);
        assert_eq!(r.resolve_feature(&f, &mut reg).fill_color,
                   Some(Fill::Color(Color::rgb(0xFE, 0xB2, 0x4C))));
    }

    #[test]
    fn leaflet_json() {
        let mut reg = PatternRegistry::new();
        let s = hatched(PatternColor::Bucket).resolve(250., &mut reg);
        assert_eq!(serde_json::to_value(&s).unwrap(), json!({
            "weight": 2.0, "opacity": 1.0, "color": "white", "dashArray": "3",
            "fillOpacity": 0.7, "fillColor": "url(#diagonalHatch)"
        }));
        let back: StyleDescriptor = serde_json::from_value(json!({
            "fillColor": "url(#diagonalHatch)", "color": "#666"
        })).unwrap();
        assert_eq!(back.fill_color, Some(Fill::Pattern(DIAGONAL_HATCH.into())));
        assert_eq!(back.color, Some(Color::rgb(0x66, 0x66, 0x66)));
    }

    #[test]
    fn hover_highlight() {
        let hover = StyleDescriptor { weight: Some(5.),
                                      color: Some(Color::rgb(0x66, 0x66, 0x66)),
                                      dash_array: Some(String::new()),
                                      ..Default::default() };
        let r = resolver().hover(hover.clone());
        assert_eq!(r.hover_style(), &hover);
        let mut reg = PatternRegistry::new();
        let h = r.highlight(&r.resolve(15., &mut reg));
        assert_eq!(h.weight, Some(5.));
        assert_eq!(h.dash_array.as_deref(), Some(""));
        assert_eq!(h.fill_opacity, Some(0.7));
        assert_eq!(h.fill_color, Some(Fill::Color(Color::rgb(0xFE, 0xD9, 0x76))));
    }
}
