//! GeoJSON features.  Only their `properties` are looked at; the
//! geometry is carried along untouched for the rendering surface.

use std::{fs, io, path::{Path, PathBuf}};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("failed to parse GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read GeoJSON from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn feature_type() -> String { "Feature".to_string() }
fn collection_type() -> String { "FeatureCollection".to_string() }

/// A GeoJSON feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Value,
}

impl Feature {
    /// A feature without geometry.
    pub fn from_properties(properties: Map<String, Value>) -> Self {
        Feature { kind: feature_type(), id: None, properties,
                  geometry: Value::Null }
    }

    /// A feature with only a `name` and one numeric property.
    pub fn named(name: &str, prop: &str, value: f64) -> Self {
        let mut properties = Map::new();
        properties.insert("name".to_string(), Value::from(name));
        properties.insert(prop.to_string(), Value::from(value));
        Self::from_properties(properties)
    }

    pub fn name(&self) -> Option<&str> { self.text("name") }

    pub fn text(&self, prop: &str) -> Option<&str> {
        self.properties.get(prop).and_then(Value::as_str)
    }

    /// The numeric value of the property `prop`.  Numbers written as
    /// strings are accepted, but not `inf` or `NaN`.  Returns `None` if
    /// the property is absent or not a finite number.
    pub fn value(&self, prop: &str) -> Option<f64> {
        match self.properties.get(prop)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok().filter(|v: &f64| v.is_finite()),
            _ => None,
        }
    }
}

/// A GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn from_json_str(json: &str) -> Result<Self, FeatureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, FeatureError> {
        let contents = fs::read_to_string(path).map_err(|source| FeatureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let collection = Self::from_json_str(&contents)?;
        tracing::debug!(target: "choropleth::feature", path = %path.display(),
                        features = collection.features.len(), "geojson.loaded");
        Ok(collection)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> { self.features.iter() }
}
