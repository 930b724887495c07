//! Content of the info panel shown while hovering a feature.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::Feature;
use crate::markup::xml_escape;

/// A piece of the info panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InfoNode {
    Header(String),
    Paragraph(String),
    Bold(String),
    LineBreak,
    Text(String),
    Superscript(String),
}

/// What the info panel displays, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InfoContent(pub Vec<InfoNode>);

impl InfoContent {
    pub fn nodes(&self) -> &[InfoNode] { &self.0 }

    pub fn to_html(&self) -> String { self.to_string() }
}

impl fmt::Display for InfoContent {
    /// The content as HTML.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.0 {
            match node {
                InfoNode::Header(t) => write!(f, "<h4>{}</h4>", xml_escape(t))?,
                InfoNode::Paragraph(t) => write!(f, "<p>{}</p>", xml_escape(t))?,
                InfoNode::Bold(t) => write!(f, "<b>{}</b>", xml_escape(t))?,
                InfoNode::LineBreak => f.write_str("<br/>")?,
                InfoNode::Text(t) => f.write_str(&xml_escape(t))?,
                InfoNode::Superscript(t) => write!(f, "<sup>{}</sup>", xml_escape(t))?,
            }
        }
        Ok(())
    }
}

const DEFAULT_VALUE_PROP: &str = "density";

/// Texts and properties used to describe a feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoPanel {
    pub title: String,
    /// Shown when no feature is hovered.
    pub prompt: String,
    pub name_prop: String,
    /// Property holding the value.  When unset, the property the map is
    /// colored by (`density` outside of a map).
    pub value_prop: Option<String>,
    pub unit: String,
    /// Exponent of the unit, as a superscript.
    pub exponent: Option<String>,
    /// Number of decimals of the value.
    pub precision: usize,
}

impl Default for InfoPanel {
    fn default() -> Self {
        InfoPanel {
            title: "US Population Density".to_string(),
            prompt: "Hover over a state".to_string(),
            name_prop: "name".to_string(),
            value_prop: None,
            unit: "people / mi".to_string(),
            exponent: Some("2".to_string()),
            precision: 3,
        }
    }
}

impl InfoPanel {
    /// Describe `feature`, or prompt the user to hover one.
    ///
    /// A feature without a name is called "Unknown"; without a value,
    /// the value line is left out.
    pub fn format(&self, feature: Option<&Feature>) -> InfoContent {
        let mut nodes = vec![InfoNode::Header(self.title.clone())];
        let f = match feature {
            Some(f) => f,
            None => {
                nodes.push(InfoNode::Paragraph(self.prompt.clone()));
                return InfoContent(nodes)
            }
        };
        let name = f.text(&self.name_prop).unwrap_or("Unknown");
        nodes.push(InfoNode::Bold(name.to_string()));
        nodes.push(InfoNode::LineBreak);
        let prop = self.value_prop.as_deref().unwrap_or(DEFAULT_VALUE_PROP);
        if let Some(v) = f.value(prop) {
            nodes.push(InfoNode::Text(format!("{v:.prec$} {}", self.unit,
                                              prec = self.precision)));
            if let Some(e) = &self.exponent {
                nodes.push(InfoNode::Superscript(e.clone()));
            }
        }
        InfoContent(nodes)
    }
}

/// [`InfoPanel::format`] with the default US population density texts.
pub fn format_info(feature: Option<&Feature>) -> InfoContent {
    InfoPanel::default().format(feature)
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::InfoNode::*;

    #[test]
    fn placeholder() {
        assert_eq!(format_info(None).0,
                   [Header("US Population Density".into()),
                    Paragraph("Hover over a state".into())]);
    }

    #[test]
    fn ohio() {
        let f = Feature::named("Ohio", "density", 109.956);
        assert_eq!(format_info(Some(&f)).0,
                   [Header("US Population Density".into()),
                    Bold("Ohio".into()),
                    LineBreak,
                    Text("109.956 people / mi".into()),
                    Superscript("2".into())]);
    }

    #[test]
    fn rounds_to_three_decimals() {
        let f = Feature::named("Alaska", "density", 1.26351);
        let c = format_info(Some(&f));
        assert_eq!(c.nodes()[3], Text("1.264 people / mi".into()));
        let f = Feature::named("Texas", "density", 98.07);
        assert_eq!(format_info(Some(&f)).nodes()[3],
                   Text("98.070 people / mi".into()));
    }

    #[test]
    fn incomplete_feature() {
        let f = Feature::from_properties(serde_json::Map::new());
        assert_eq!(format_info(Some(&f)).0,
                   [Header("US Population Density".into()),
                    Bold("Unknown".into()),
                    LineBreak]);
    }

    #[test]
    fn html() {
        let f = Feature::named("A & B", "density", 2.);
        assert_eq!(format_info(Some(&f)).to_html(),
                   "<h4>US Population Density</h4><b>A &amp; B</b><br/>\
                    2.000 people / mi<sup>2</sup>");
    }

    #[test]
    fn custom_panel() {
        let panel = InfoPanel { title: "Income".into(), unit: "USD".into(),
                                value_prop: Some("income".into()),
                                exponent: None,
                                precision: 0, ..Default::default() };
        let f = Feature::named("Ohio", "income", 61938.4);
        assert_eq!(panel.format(Some(&f)).nodes()[3], Text("61938 USD".into()));
        assert_eq!(panel.format(Some(&f)).nodes().len(), 4);
    }
}
