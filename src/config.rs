//! Configuration of a choropleth map.
//!
//! Loaded from JSON (`CHOROPLETH_CONFIG_PATH` if set) with the US
//! population density map as builtin fallback.

use std::{env, fs, io, path::{Path, PathBuf}};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, ColorScale, Colorbar, ColorbarOptions, Hatch, InfoPanel,
            MapSurface, PatternColor, PatternOverride, StyleDescriptor,
            StyleError, StyleResolver, Thresholds};
use crate::pattern::DIAGONAL_HATCH;

pub const BUILTIN_CHOROPLETH_CONFIG: &str = include_str!("data/us_density.json");

/// Environment variable naming a JSON configuration file.
pub const CONFIG_PATH_VAR: &str = "CHOROPLETH_CONFIG_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse choropleth config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read choropleth config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid choropleth config: {0}")]
    Invalid(#[from] StyleError),
}

/// The pattern drawn over values above the pattern threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub color: PatternColor,
    pub hatch: Hatch,
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfig {
            id: DIAGONAL_HATCH.to_string(),
            width: 20.,
            height: 20.,
            color: PatternColor::Fixed(Color::named("blue")),
            hatch: Hatch::default(),
        }
    }
}

/// Root configuration: what the style callback of the map receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChoroplethConfig {
    /// Ascending thresholds of the buckets.
    pub classes: Vec<f64>,
    /// One color per class.
    pub colorscale: Vec<Color>,
    /// Base style of every feature.
    pub style: StyleDescriptor,
    pub hover_style: StyleDescriptor,
    /// Feature property driving the fill.
    pub color_prop: String,
    /// Values strictly above it are filled with `pattern`.
    pub pattern_threshold: Option<f64>,
    pub pattern: PatternConfig,
    pub colorbar: ColorbarOptions,
    pub info: InfoPanel,
}

impl Default for ChoroplethConfig {
    fn default() -> Self {
        let scale = ColorScale::us_density();
        Self {
            classes: scale.thresholds().to_vec(),
            colorscale: scale.palette().to_vec(),
            style: StyleDescriptor {
                weight: Some(2.),
                opacity: Some(1.),
                color: Some(Color::named("white")),
                dash_array: Some("3".to_string()),
                fill_opacity: Some(0.7),
                fill_color: None,
            },
            hover_style: StyleDescriptor {
                weight: Some(5.),
                color: Some(Color::rgb(0x66, 0x66, 0x66)),
                dash_array: Some(String::new()),
                ..StyleDescriptor::default()
            },
            color_prop: "density".to_string(),
            pattern_threshold: Some(100.),
            pattern: PatternConfig::default(),
            colorbar: ColorbarOptions::default(),
            info: InfoPanel::default(),
        }
    }
}

impl ChoroplethConfig {
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_CHOROPLETH_CONFIG)
            .expect("builtin choropleth config should parse")
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Check the classes and the color scale.
    pub fn validate(&self) -> Result<(), StyleError> {
        self.scale().map(|_| ())
    }

    pub fn scale(&self) -> Result<ColorScale, StyleError> {
        ColorScale::new(Thresholds::new(self.classes.clone())?,
                        self.colorscale.clone())
    }

    pub fn resolver(&self) -> Result<StyleResolver, StyleError> {
        let mut resolver = StyleResolver::new(self.scale()?, self.style.clone())
            .color_prop(&self.color_prop)
            .hover(self.hover_style.clone());
        if let Some(threshold) = self.pattern_threshold {
            let p = &self.pattern;
            resolver = resolver.pattern_override(PatternOverride {
                threshold,
                id: p.id.clone(),
                tile: (p.width, p.height),
                color: p.color.clone(),
                hatch: p.hatch.clone(),
            });
        }
        Ok(resolver)
    }

    /// The info panel, describing the value the map is colored by unless
    /// it names another property.
    pub fn info_panel(&self) -> InfoPanel {
        let mut panel = self.info.clone();
        panel.value_prop.get_or_insert_with(|| self.color_prop.clone());
        panel
    }

    /// Build the state of a new rendering surface.
    pub fn build(&self) -> Result<MapSurface, StyleError> {
        let resolver = self.resolver()?;
        let colorbar = Colorbar::new(resolver.scale().legend(), self.colorbar.clone());
        Ok(MapSurface::new(resolver, colorbar, self.info_panel()))
    }
}

/// Load the configuration from the file named by `CHOROPLETH_CONFIG_PATH`,
/// falling back to the builtin one.  Also returns the path the
/// configuration was read from.
pub fn load_choropleth_config_from_env() -> (ChoroplethConfig, Option<PathBuf>) {
    if let Some(path) = env::var_os(CONFIG_PATH_VAR).map(PathBuf::from) {
        match ChoroplethConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    target: "choropleth::config",
                    path = %path.display(),
                    "choropleth_config.loaded=file"
                );
                return (config, Some(path));
            }
            Err(err) => {
                tracing::warn!(
                    target: "choropleth::config",
                    path = %path.display(),
                    error = %err,
                    "choropleth_config.load_failed"
                );
            }
        }
    }
    tracing::info!(target: "choropleth::config", "choropleth_config.loaded=builtin");
    (ChoroplethConfig::builtin(), None)
}
