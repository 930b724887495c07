//! Categorical legend of a color scale.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::{Color, ColorScale, StyleError};
use crate::markup::xml_escape;

/// One legend category: the lower bound of a bucket and its color.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

fn entries(thresholds: &[f64], palette: &[Color]) -> Vec<LegendEntry> {
    // The label of the last, open-ended, bucket reads the same way.
    thresholds.iter().zip(palette)
        .map(|(t, c)| LegendEntry { label: format!("{t}+"), color: c.clone() })
        .collect()
}

/// Return the legend entries `"{t}+"` for each threshold `t`, paired
/// with the palette colors, in ascending order.
///
/// # Example
///
/// ```
/// use choropleth_style::{build_legend, Color};
/// let p = [Color::named("yellow"), Color::named("red")];
/// let legend = build_legend(&[0., 2.5], &p).unwrap();
/// assert_eq!(legend[0].label, "0+");
/// assert_eq!(legend[1].label, "2.5+");
/// ```
pub fn build_legend(thresholds: &[f64], palette: &[Color])
                    -> Result<Vec<LegendEntry>, StyleError> {
    if thresholds.len() != palette.len() {
        return Err(StyleError::ConfigurationMismatch {
            thresholds: thresholds.len(), palette: palette.len() })
    }
    Ok(entries(thresholds, palette))
}

impl ColorScale {
    /// The legend of the scale (cannot fail: the lengths were checked
    /// when the scale was built).
    pub fn legend(&self) -> Vec<LegendEntry> {
        entries(self.thresholds(), self.palette())
    }
}

/// Corner of the map where a control sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    TopLeft,
    TopRight,
    #[default]
    BottomLeft,
    BottomRight,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::TopLeft => "topleft",
            Position::TopRight => "topright",
            Position::BottomLeft => "bottomleft",
            Position::BottomRight => "bottomright",
        })
    }
}

/// Size and placement of a [`Colorbar`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorbarOptions {
    /// Total width in pixels.
    pub width: u32,
    /// Height of the color swatches in pixels.
    pub height: u32,
    pub position: Position,
}

impl Default for ColorbarOptions {
    fn default() -> Self {
        ColorbarOptions { width: 300, height: 30, position: Position::BottomLeft }
    }
}

/// A strip of color swatches with their labels below.  The swatches
/// share the width; the last one takes the pixels left over.
#[derive(Clone, Debug, PartialEq)]
pub struct Colorbar {
    pub entries: Vec<LegendEntry>,
    pub options: ColorbarOptions,
}

impl Colorbar {
    pub fn new(entries: Vec<LegendEntry>, options: ColorbarOptions) -> Self {
        Colorbar { entries, options }
    }

    /// The width in pixels of each swatch.  They add up to the width of
    /// the colorbar.
    pub fn cell_widths(&self) -> Vec<u32> {
        let n = self.entries.len() as u32;
        if n == 0 { return vec![] }
        let width = self.options.width;
        let cell = width / n;
        let mut widths = vec![cell; n as usize];
        widths[n as usize - 1] = width - cell * (n - 1);
        widths
    }

    /// Return the colorbar as an HTML `<div>` with the classes
    /// `info legend {position}`.
    pub fn to_html(&self) -> String { self.to_string() }
}

impl fmt::Display for Colorbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ColorbarOptions { width, height, position } = self.options;
        writeln!(f, "<div class=\"info legend {position}\" \
                     style=\"width: {width}px\">\n\
                     <table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
        for (e, cell) in self.entries.iter().zip(self.cell_widths()) {
            writeln!(f, "  <td style=\"width: {cell}px; height: {height}px; \
                         background-color: {}\"></td>",
                     xml_escape(&e.color.to_string()))?;
        }
        f.write_str("</tr><tr>\n")?;
        for e in &self.entries {
            writeln!(f, "  <td style=\"text-align: center\">{}</td>",
                     xml_escape(&e.label))?;
        }
        f.write_str("</tr></table>\n</div>")
    }
}
