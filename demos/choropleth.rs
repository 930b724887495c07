//! Write `choropleth.html`: the styles of a few US states (or of the
//! features of the GeoJSON file given as argument), the hatch pattern,
//! the legend and the info panel.
//!
//! Run with `RUST_LOG=choropleth=debug` to see the style decisions.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          path::Path,
          error::Error};
use choropleth_style::{load_choropleth_config_from_env, Feature,
                       FeatureCollection, MapSurface, StyleDescriptor};
use tracing_subscriber::EnvFilter;

type Err = Box<dyn Error>;

const STATES: [(&str, f64); 10] = [
    ("Alaska", 1.264), ("Wyoming", 5.851), ("Arizona", 57.05),
    ("Texas", 98.07), ("Ohio", 281.9), ("California", 241.7),
    ("Florida", 353.4), ("Massachusetts", 840.2), ("New Jersey", 1189.),
    ("Puerto Rico", 0.)];

fn swatch_style(s: &StyleDescriptor) -> String {
    let fill = s.fill_color.as_ref().map(|f| f.to_string())
        .unwrap_or_else(|| "none".to_string());
    let stroke = s.color.as_ref().map(|c| c.to_string())
        .unwrap_or_else(|| "black".to_string());
    format!("fill: {fill}; fill-opacity: {}; stroke: {stroke}; \
             stroke-width: {}",
            s.fill_opacity.unwrap_or(1.), s.weight.unwrap_or(1.))
}

fn table_of_features(fh: &mut impl Write, map: &mut MapSurface,
                     features: &[Feature]) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border-spacing: 4px\">")?;
    for f in features {
        let style = map.style(f);
        let hover = map.hover_style(f);
        writeln!(fh, "<tr><td><svg width=\"60\" height=\"30\">\
                      <rect x=\"2\" y=\"2\" width=\"56\" height=\"26\" \
                      style=\"{}\"/></svg></td>\
                      <td><svg width=\"60\" height=\"30\">\
                      <rect x=\"2\" y=\"2\" width=\"56\" height=\"26\" \
                      style=\"{}\"/></svg></td>\
                      <td>{}</td><td><code>{}</code></td></tr>",
                 swatch_style(&style), swatch_style(&hover),
                 map.hover(Some(f)).to_html(),
                 serde_json::to_string(&style)?)?;
    }
    writeln!(fh, "</table>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (config, _) = load_choropleth_config_from_env();
    let mut map = config.build()?;
    let features: Vec<Feature> = match env::args().nth(1) {
        Some(path) => FeatureCollection::from_file(Path::new(&path))?.features,
        None => STATES.iter()
            .map(|&(name, d)| Feature::named(name, map.resolver().property(), d))
            .collect(),
    };

    let mut fh = BufWriter::new(File::create("choropleth.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>{}</title>\n\
                  </head>\n\
                  <body>", config.info.title)?;
    writeln!(fh, "<h3>Features (style, hovered style, info panel)</h3>")?;
    table_of_features(&mut fh, &mut map, &features)?;
    // The pattern exists once the table has been styled.
    writeln!(fh, "{}", map.pattern_defs())?;
    writeln!(fh, "<h3>Patterns</h3>\n<ul>")?;
    for p in map.patterns().iter() {
        writeln!(fh, "<li><code>{}</code>: {}</li>", p.id, p.fill)?;
    }
    writeln!(fh, "</ul>")?;
    writeln!(fh, "<h3>Legend</h3>\n{}", map.legend().to_html())?;
    writeln!(fh, "<h3>Info panel</h3>\n<div class=\"info\">{}</div>",
             map.hover(None).to_html())?;
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
