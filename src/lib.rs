//! Styling of choropleth maps.
//!
//! - [`classify`] puts a value in a [`Bucket`] given ascending
//!   [`Thresholds`];
//! - [`StyleResolver`] turns a [`Feature`] into a [`StyleDescriptor`]
//!   (Leaflet path options), filled with the color of its bucket or
//!   with a hatch pattern kept in a [`PatternRegistry`];
//! - [`build_legend`] and [`Colorbar`] describe the color scale;
//! - [`InfoPanel`] formats the hover panel.
//!
//! [`MapSurface`] bundles all of them for one map and
//! [`ChoroplethConfig`] builds it from JSON.  The builtin configuration
//! is the US population density map.
//!
//! # Example
//!
//! ```
//! use choropleth_style::{ChoroplethConfig, Feature};
//! let mut map = ChoroplethConfig::builtin().build().unwrap();
//! let ohio = Feature::named("Ohio", "density", 281.9);
//! let style = map.style(&ohio);
//! assert_eq!(style.fill_color.unwrap().to_string(), "url(#diagonalHatch)");
//! assert!(map.pattern_defs().contains("<pattern id=\"diagonalHatch\""));
//! ```

mod classify;
mod color;
mod config;
mod error;
mod feature;
mod info;
mod legend;
mod markup;
mod palettes;
mod pattern;
mod scale;
mod style;
mod surface;

pub use classify::{classify, Bucket, Thresholds};
pub use color::Color;
pub use config::{load_choropleth_config_from_env, ChoroplethConfig, ConfigError,
                 PatternConfig, BUILTIN_CHOROPLETH_CONFIG, CONFIG_PATH_VAR};
pub use error::StyleError;
pub use feature::{Feature, FeatureCollection, FeatureError};
pub use info::{format_info, InfoContent, InfoNode, InfoPanel};
pub use legend::{build_legend, Colorbar, ColorbarOptions, LegendEntry, Position};
pub use pattern::{Hatch, PatternChange, PatternDefinition, PatternRegistry,
                  PatternState, DIAGONAL_HATCH};
pub use scale::ColorScale;
pub use style::{Fill, PatternColor, PatternOverride, StyleDescriptor,
                StyleResolver};
pub use surface::MapSurface;
