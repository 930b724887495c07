//! Classification of values into buckets bounded by thresholds.

use std::ops::Deref;
use serde::{Deserialize, Serialize};

use crate::StyleError;

/// The bucket a value falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    /// The value does not exceed the lowest threshold (or is NaN).
    Unclassified,
    /// Index of the highest threshold strictly exceeded by the value.
    Class(usize),
}

impl Bucket {
    pub fn index(self) -> Option<usize> {
        match self {
            Bucket::Class(i) => Some(i),
            Bucket::Unclassified => None,
        }
    }
}

/// A non-empty list of finite, strictly ascending thresholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Thresholds(Vec<f64>); // Invariant: length ≥ 1, ascending

impl Thresholds {
    pub fn new(values: Vec<f64>) -> Result<Self, StyleError> {
        if values.is_empty() { return Err(StyleError::EmptyThresholds) }
        if let Some(index) = values.iter().position(|t| !t.is_finite()) {
            return Err(StyleError::UnorderedThresholds { index })
        }
        if let Some(i) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(StyleError::UnorderedThresholds { index: i + 1 })
        }
        Ok(Thresholds(values))
    }

    /// The highest threshold; it opens the last, unbounded bucket.
    #[inline]
    pub fn last(&self) -> f64 { self.0[self.0.len() - 1] }

    /// Classify `value`.  See [`classify`].
    pub fn classify(&self, value: f64) -> Bucket { classify(value, &self.0) }
}

impl Deref for Thresholds {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] { &self.0 }
}

impl TryFrom<Vec<f64>> for Thresholds {
    type Error = StyleError;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> { Thresholds::new(v) }
}

impl From<Thresholds> for Vec<f64> {
    fn from(t: Thresholds) -> Self { t.0 }
}

/// Return the bucket of `value`: the highest index `i` such that
/// `value > thresholds[i]`, or [`Bucket::Unclassified`] if there is
/// none.  `thresholds` is assumed to be ascending.
///
/// # Example
///
/// ```
/// use choropleth_style::{classify, Bucket};
/// let t = [0., 10., 20., 50., 100., 200., 500., 1000.];
/// assert_eq!(classify(150., &t), Bucket::Class(4));
/// assert_eq!(classify(0., &t), Bucket::Unclassified);
/// ```
pub fn classify(value: f64, thresholds: &[f64]) -> Bucket {
    // Number of thresholds strictly below `value`; NaN gives 0.
    match thresholds.partition_point(|&t| t < value) {
        0 => Bucket::Unclassified,
        n => Bucket::Class(n - 1),
    }
}
