use thiserror::Error;

/// Errors raised while validating a color scale or parsing colors.
///
/// They are all configuration errors: they surface when a scale,
/// legend or resolver is built, never while styling features.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("{thresholds} thresholds but {palette} palette colors")]
    ConfigurationMismatch { thresholds: usize, palette: usize },
    #[error("the threshold list is empty")]
    EmptyThresholds,
    #[error("threshold #{index} is not finite or not strictly greater \
             than the previous one")]
    UnorderedThresholds { index: usize },
    #[error("invalid CSS color {0:?}")]
    InvalidColor(String),
}
