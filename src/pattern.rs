//! SVG fill patterns shared by all the features of a rendering surface.
//!
//! A pattern is created the first time a feature asks for it and, from
//! then on, only its background color is updated.  Creating it again
//! would duplicate the `<pattern>` element (and make the map flicker).

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Color;
use crate::markup::xml_escape;

/// Id of the diagonal hatch pattern.
pub const DIAGONAL_HATCH: &str = "diagonalHatch";

/// The lines drawn over a pattern tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hatch {
    pub stroke: Color,
    pub stroke_width: f64,
    /// SVG path data of the lines.
    pub path: String,
}

impl Default for Hatch {
    /// Gray diagonal lines on a 20×20 tile; the two corner segments
    /// make the lines continuous across tiles.
    fn default() -> Self {
        Hatch {
            stroke: Color::named("gray"),
            stroke_width: 4.,
            path: "M-5,5 l10,-10 M0,20 l20,-20 M15,25 l10,-10".to_string(),
        }
    }
}

/// A `<pattern>` element: a tile filled with `fill` and covered by
/// `hatch`.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternDefinition {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub hatch: Hatch,
}

/// Whether a pattern exists on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PatternState<'a> {
    Absent,
    Present(&'a PatternDefinition),
}

/// What [`PatternRegistry::ensure_pattern`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternChange {
    Created,
    Recolored,
    Unchanged,
}

/// The patterns of one rendering surface.
///
/// All accesses happen on the surface's event thread, hence `&mut self`
/// and no locking.  Call [`reset`](Self::reset) when the surface is torn
/// down.
#[derive(Clone, Debug, Default)]
pub struct PatternRegistry {
    patterns: Vec<PatternDefinition>, // in creation order, ids unique
}

impl PatternRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self, id: &str) -> PatternState<'_> {
        match self.get(id) {
            Some(p) => PatternState::Present(p),
            None => PatternState::Absent,
        }
    }

    pub fn get(&self, id: &str) -> Option<&PatternDefinition> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// Make sure the pattern `id` exists with background `fill`.
    ///
    /// The first call creates it with the given tile size and hatch.
    /// Later calls only update the background color; `tile` and `hatch`
    /// are then ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use choropleth_style::{Color, Hatch, PatternChange, PatternRegistry};
    /// let mut reg = PatternRegistry::new();
    /// let hatch = Hatch::default();
    /// let blue = Color::named("blue");
    /// let red = Color::named("red");
    /// assert_eq!(reg.ensure_pattern("h", &blue, (20., 20.), &hatch),
    ///            PatternChange::Created);
    /// assert_eq!(reg.ensure_pattern("h", &red, (8., 8.), &hatch),
    ///            PatternChange::Recolored);
    /// assert_eq!(reg.len(), 1);
    /// assert_eq!(reg.get("h").unwrap().width, 20.);
    /// ```
    pub fn ensure_pattern(&mut self, id: &str, fill: &Color,
                          tile: (f64, f64), hatch: &Hatch) -> PatternChange {
        if let Some(p) = self.patterns.iter_mut().find(|p| p.id == id) {
            if p.fill == *fill { return PatternChange::Unchanged }
            debug!(target: "choropleth::pattern", id, from = %p.fill,
                   to = %fill, "pattern.recolored");
            p.fill = fill.clone();
            return PatternChange::Recolored
        }
        debug!(target: "choropleth::pattern", id, fill = %fill,
               width = tile.0, height = tile.1, "pattern.created");
        self.patterns.push(PatternDefinition {
            id: id.to_string(),
            width: tile.0,
            height: tile.1,
            fill: fill.clone(),
            hatch: hatch.clone(),
        });
        PatternChange::Created
    }

    /// Forget all patterns, as when the rendering surface is torn down.
    pub fn reset(&mut self) {
        if !self.patterns.is_empty() {
            debug!(target: "choropleth::pattern", count = self.patterns.len(),
                   "pattern.reset");
        }
        self.patterns.clear();
    }

    #[inline]
    pub fn len(&self) -> usize { self.patterns.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.patterns.is_empty() }

    /// The patterns in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternDefinition> {
        self.patterns.iter()
    }

    /// Return a zero-size `<svg>` element holding the `<defs>` of all
    /// patterns, to be inserted once in the page.
    pub fn to_svg(&self) -> String { self.to_string() }
}

impl fmt::Display for PatternDefinition {
    /// The `<pattern>` element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<pattern id=\"{}\" patternUnits=\"userSpaceOnUse\" \
                   width=\"{w}\" height=\"{h}\">\
                   <rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\
                   <path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\
                   </pattern>",
               xml_escape(&self.id), xml_escape(&self.fill.to_string()),
               xml_escape(&self.hatch.path),
               xml_escape(&self.hatch.stroke.to_string()),
               self.hatch.stroke_width, w = self.width, h = self.height)
    }
}

impl fmt::Display for PatternRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<svg style=\"height: 0; width: 0; position: absolute\"><defs>")?;
        for p in &self.patterns {
            write!(f, "{p}")?;
        }
        f.write_str("</defs></svg>")
    }
}
