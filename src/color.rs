//! CSS colors as they appear in Leaflet path options and SVG attributes.

use std::fmt;
use std::str::FromStr;
use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::StyleError;

/// A CSS color: either an RGB triplet (written `#RRGGBB`) or a named
/// color such as `white` or `gray`.
///
/// # Example
///
/// ```
/// use choropleth_style::Color;
/// let c: Color = "#fc4e2a".parse().unwrap();
/// assert_eq!(c, Color::rgb(0xFC, 0x4E, 0x2A));
/// assert_eq!(c.to_string(), "#FC4E2A");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Rgb(RGB8),
    Named(String),
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Color::Rgb(RGB8 { r, g, b }) }

    /// A named CSS color.  The name is lower-cased and not checked
    /// against the CSS list.
    pub fn named(name: &str) -> Self { Color::Named(name.to_ascii_lowercase()) }

    /// Return the RGB triplet, if the color is not a named one.
    pub fn as_rgb(&self) -> Option<RGB8> {
        match self {
            Color::Rgb(c) => Some(*c),
            Color::Named(_) => None,
        }
    }
}

fn hex_digit(c: u8) -> Option<u8> { (c as char).to_digit(16).map(|d| d as u8) }

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StyleError::InvalidColor(s.to_string());
        let t = s.trim();
        if let Some(hex) = t.strip_prefix('#') {
            let d: Vec<u8> = hex.bytes().map(hex_digit)
                .collect::<Option<_>>().ok_or_else(invalid)?;
            match d.len() {
                // `#RGB` is shorthand for `#RRGGBB`.
                3 => Ok(Color::rgb(d[0] * 17, d[1] * 17, d[2] * 17)),
                6 => Ok(Color::rgb(d[0] << 4 | d[1], d[2] << 4 | d[3],
                                   d[4] << 4 | d[5])),
                _ => Err(invalid()),
            }
        } else if !t.is_empty() && t.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Color::named(t))
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(c) => write!(f, "#{:02X}{:02X}{:02X}", c.r, c.g, c.b),
            Color::Named(name) => f.write_str(name),
        }
    }
}

impl From<RGB8> for Color {
    #[inline]
    fn from(c: RGB8) -> Self { Color::Rgb(c) }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_string() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_and_short_hex() {
        assert_eq!("#FFEDA0".parse::<Color>(), Ok(Color::rgb(255, 237, 160)));
        assert_eq!("#666".parse::<Color>(), Ok(Color::rgb(0x66, 0x66, 0x66)));
    }

    #[test]
    fn parse_named() {
        let c: Color = " White ".parse().unwrap();
        assert_eq!(c, Color::Named("white".into()));
        assert_eq!(c.to_string(), "white");
        assert_eq!(c.as_rgb(), None);
    }

    #[test]
    fn reject_garbage() {
        for s in ["", "#12", "#GGGGGG", "rgb(1,2,3)", "#1234567"] {
            assert_eq!(s.parse::<Color>(),
                       Err(StyleError::InvalidColor(s.to_string())), "{s:?}");
        }
    }

    #[test]
    fn serde_uses_css_strings() {
        let c: Color = serde_json::from_str("\"#bd0026\"").unwrap();
        assert_eq!(c, Color::rgb(0xBD, 0x00, 0x26));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#BD0026\"");
        assert!(serde_json::from_str::<Color>("\"#zz\"").is_err());
    }
}
