//! A threshold list paired with its palette.

use crate::{Bucket, Color, StyleError, Thresholds};

/// Colors indexed by bucket.
///
/// Built by [`ColorScale::new`], which checks that there is exactly
/// one color per threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    thresholds: Thresholds,
    palette: Vec<Color>, // Invariant: same length as `thresholds`
}

impl ColorScale {
    pub fn new(thresholds: Thresholds, palette: Vec<Color>)
               -> Result<Self, StyleError> {
        if thresholds.len() != palette.len() {
            return Err(StyleError::ConfigurationMismatch {
                thresholds: thresholds.len(),
                palette: palette.len() })
        }
        Ok(ColorScale { thresholds, palette })
    }

    /// Build a scale from raw values, validating both the ordering of
    /// the thresholds and the lengths.
    pub fn from_parts(thresholds: &[f64], palette: &[Color])
                      -> Result<Self, StyleError> {
        Self::new(Thresholds::new(thresholds.to_vec())?, palette.to_vec())
    }

    /// The scale used by the bundled US population density map.
    pub fn us_density() -> Self {
        ColorScale {
            thresholds: crate::palettes::DENSITY_CLASSES.clone(),
            palette: crate::palettes::YLORRD_8.clone(),
        }
    }

    #[inline]
    pub fn thresholds(&self) -> &Thresholds { &self.thresholds }

    #[inline]
    pub fn palette(&self) -> &[Color] { &self.palette }

    /// Number of buckets.
    #[inline]
    pub fn len(&self) -> usize { self.palette.len() }

    /// Always `false`: a scale has at least one bucket.
    #[inline]
    pub fn is_empty(&self) -> bool { false }

    pub fn classify(&self, value: f64) -> Bucket { self.thresholds.classify(value) }

    /// Color of `value`'s bucket, `None` if it is unclassified.
    pub fn color(&self, value: f64) -> Option<&Color> {
        self.classify(value).index().map(|i| &self.palette[i])
    }
}
