//! State of one rendering surface (one map on one page).

use crate::{Colorbar, Feature, InfoContent, InfoPanel, PatternRegistry,
            StyleDescriptor, StyleResolver};

/// What a host map calls back into: styles of features, hover panel,
/// legend and the pattern definitions to insert in the page.
///
/// The surface owns its [`PatternRegistry`]; [`teardown`](Self::teardown)
/// resets it when the map is reloaded.
#[derive(Clone, Debug)]
pub struct MapSurface {
    resolver: StyleResolver,
    patterns: PatternRegistry,
    colorbar: Colorbar,
    panel: InfoPanel,
    info: InfoContent, // of the last hover event
}

impl MapSurface {
    pub fn new(resolver: StyleResolver, colorbar: Colorbar, panel: InfoPanel)
               -> Self {
        let info = panel.format(None);
        MapSurface { resolver, patterns: PatternRegistry::new(), colorbar,
                     panel, info }
    }

    #[inline]
    pub fn resolver(&self) -> &StyleResolver { &self.resolver }

    #[inline]
    pub fn patterns(&self) -> &PatternRegistry { &self.patterns }

    #[inline]
    pub fn legend(&self) -> &Colorbar { &self.colorbar }

    /// Style of `feature`, called each time it is drawn.
    pub fn style(&mut self, feature: &Feature) -> StyleDescriptor {
        self.resolver.resolve_feature(feature, &mut self.patterns)
    }

    /// Style of `feature` while the pointer is over it.
    pub fn hover_style(&mut self, feature: &Feature) -> StyleDescriptor {
        let style = self.style(feature);
        self.resolver.highlight(&style)
    }

    /// Handle a hover event (`None` when the pointer left all features)
    /// and return the new panel content.  The last event wins.
    pub fn hover(&mut self, feature: Option<&Feature>) -> &InfoContent {
        self.info = self.panel.format(feature);
        &self.info
    }

    /// The panel content of the last hover event.
    #[inline]
    pub fn info(&self) -> &InfoContent { &self.info }

    /// The `<svg>` element holding the pattern definitions.
    pub fn pattern_defs(&self) -> String { self.patterns.to_svg() }

    /// Forget the patterns and the hovered feature.
    pub fn teardown(&mut self) {
        tracing::debug!(target: "choropleth::surface", "surface.teardown");
        self.patterns.reset();
        self.info = self.panel.format(None);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ColorScale, ColorbarOptions, Fill, InfoNode,
                PatternColor, PatternOverride};

    fn surface() -> MapSurface {
        let scale = ColorScale::us_density();
        let colorbar = Colorbar::new(scale.legend(), ColorbarOptions::default());
        let resolver = StyleResolver::new(scale, StyleDescriptor::default())
            .pattern_override(PatternOverride::diagonal_hatch(
                100., PatternColor::Fixed(Color::named("blue"))))
            .hover(StyleDescriptor { weight: Some(5.), ..Default::default() });
        MapSurface::new(resolver, colorbar, InfoPanel::default())
    }

    #[test]
    fn many_features_one_pattern() {
        let mut s = surface();
        for (i, d) in [150., 5., 300., 1200., 101.].into_iter().enumerate() {
            s.style(&Feature::named(&format!("s{i}"), "density", d));
        }
        assert_eq!(s.patterns().len(), 1);
        assert_eq!(s.pattern_defs().matches("<pattern ").count(), 1);
    }

    #[test]
    fn hover_keeps_last() {
        let mut s = surface();
        assert_eq!(s.info().nodes().len(), 2);
        let ohio = Feature::named("Ohio", "density", 281.9);
        let utah = Feature::named("Utah", "density", 34.3);
        s.hover(Some(&ohio));
        s.hover(Some(&utah));
        assert_eq!(s.info().nodes()[1], InfoNode::Bold("Utah".into()));
        s.hover(None);
        assert_eq!(s.info().nodes().len(), 2);
    }

    #[test]
    fn hover_style_merges() {
        let mut s = surface();
        let h = s.hover_style(&Feature::named("Utah", "density", 34.3));
        assert_eq!(h.weight, Some(5.));
        assert_eq!(h.fill_color, Some(Fill::Color(Color::rgb(0xFE, 0xB2, 0x4C))));
    }

    #[test]
    fn teardown_resets() {
        let mut s = surface();
        s.style(&Feature::named("NJ", "density", 1189.));
        s.hover(Some(&Feature::named("NJ", "density", 1189.)));
        s.teardown();
        assert!(s.patterns().is_empty());
        assert_eq!(s.info(), &InfoPanel::default().format(None));
    }
}
