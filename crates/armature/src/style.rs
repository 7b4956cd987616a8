//! Style palettes for diagram nodes and edges.
//!
//! A [`Palette`] maps a node's kind tag to a [`NodeStyle`] bundle (fill,
//! stroke, text, and accent colors plus the frame treatment). Tags without a
//! palette entry resolve to the palette's fallback style; they are never an
//! error. The palette also carries the connector line color shared by all
//! edges that do not override their stroke.

use armature_core::{
    color::Color,
    draw::{StrokeDefinition, StrokeStyle},
    identifier::Id,
};
use indexmap::IndexMap;

/// How a node's body is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// A filled rounded card with centered label and subtitle.
    Plain,
    /// A card with a header bar, an accent indicator dot, and a left-aligned
    /// label inside the bar.
    Titled,
    /// A datastore look: gradient body with a solid lid bar along the top.
    Store,
}

/// A linear gradient used as a node body fill.
///
/// The gradient runs left to right in a single color, fading between the two
/// opacity stops. It is declared once in the document defs and referenced by
/// id from every node of the owning kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    color: Color,
    start_opacity: f32,
    end_opacity: f32,
}

impl GradientSpec {
    pub fn new(color: Color, start_opacity: f32, end_opacity: f32) -> Self {
        Self {
            color,
            start_opacity,
            end_opacity,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn start_opacity(&self) -> f32 {
        self.start_opacity
    }

    pub fn end_opacity(&self) -> f32 {
        self.end_opacity
    }
}

/// Visual attribute bundle for one node kind.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    fill: Color,
    stroke: Color,
    text: Color,
    accent: Color,
    header: Option<Color>,
    subtext: Option<Color>,
    frame: FrameKind,
    rounding: f32,
    glow: bool,
    border_style: StrokeStyle,
    gradient: Option<GradientSpec>,
}

impl NodeStyle {
    /// A plain card: filled rounded rectangle, centered texts.
    pub fn plain(fill: Color, stroke: Color, text: Color) -> Self {
        Self {
            fill,
            stroke,
            text,
            accent: stroke,
            header: None,
            subtext: None,
            frame: FrameKind::Plain,
            rounding: 8.0,
            glow: false,
            border_style: StrokeStyle::Solid,
            gradient: None,
        }
    }

    /// A titled card: header bar with an accent dot and a left-aligned label.
    pub fn titled(fill: Color, stroke: Color, text: Color, header: Color, accent: Color) -> Self {
        Self {
            fill,
            stroke,
            text,
            accent,
            header: Some(header),
            subtext: None,
            frame: FrameKind::Titled,
            rounding: 6.0,
            glow: false,
            border_style: StrokeStyle::Solid,
            gradient: None,
        }
    }

    /// A datastore card: gradient body and a lid bar in the accent color.
    pub fn store(fill: Color, accent: Color, text: Color, gradient: GradientSpec) -> Self {
        Self {
            fill,
            stroke: accent,
            text,
            accent,
            header: None,
            subtext: None,
            frame: FrameKind::Store,
            rounding: 6.0,
            glow: false,
            border_style: StrokeStyle::Solid,
            gradient: Some(gradient),
        }
    }

    /// Adds a blurred halo behind the node body.
    pub fn with_glow(mut self) -> Self {
        self.glow = true;
        self
    }

    /// Overrides the corner radius.
    pub fn with_rounding(mut self, rounding: f32) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets a dedicated subtitle color (otherwise the text color is used at
    /// reduced opacity).
    pub fn with_subtext(mut self, subtext: Color) -> Self {
        self.subtext = Some(subtext);
        self
    }

    /// Overrides the body border dash pattern.
    pub fn with_border_style(mut self, style: StrokeStyle) -> Self {
        self.border_style = style;
        self
    }

    /// Sets a gradient body fill.
    pub fn with_gradient(mut self, gradient: GradientSpec) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> Color {
        self.stroke
    }

    pub fn text(&self) -> Color {
        self.text
    }

    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Header bar color for titled frames; falls back to the body fill.
    pub fn header(&self) -> Color {
        self.header.unwrap_or(self.fill)
    }

    pub fn subtext(&self) -> Option<Color> {
        self.subtext
    }

    pub fn frame(&self) -> FrameKind {
        self.frame
    }

    pub fn rounding(&self) -> f32 {
        self.rounding
    }

    pub fn glow(&self) -> bool {
        self.glow
    }

    pub fn border_style(&self) -> &StrokeStyle {
        &self.border_style
    }

    pub fn gradient(&self) -> Option<&GradientSpec> {
        self.gradient.as_ref()
    }
}

/// The style palette for one diagram: kind tag to node style, plus the
/// shared connector line color.
#[derive(Debug, Clone)]
pub struct Palette {
    styles: IndexMap<Id, NodeStyle>,
    fallback: NodeStyle,
    line: Color,
}

impl Palette {
    pub fn new(line: Color, fallback: NodeStyle) -> Self {
        Self {
            styles: IndexMap::new(),
            fallback,
            line,
        }
    }

    /// Registers the style for a kind tag.
    pub fn insert(&mut self, kind: &str, style: NodeStyle) {
        self.styles.insert(Id::new(kind), style);
    }

    /// Resolves the style for a kind tag, falling back to the palette's
    /// default style for unknown tags.
    pub fn style_for(&self, kind: Id) -> &NodeStyle {
        self.styles.get(&kind).unwrap_or(&self.fallback)
    }

    /// Returns the shared connector line color.
    pub fn line(&self) -> Color {
        self.line
    }

    /// Returns the default stroke used by edges without an override: the
    /// line color at 0.8 alpha, 2px wide, solid.
    pub fn edge_stroke(&self) -> StrokeDefinition {
        StrokeDefinition::solid(self.line.with_alpha(0.8), 2.0)
    }

    /// Iterates the registered kind/style pairs in insertion order.
    pub fn styles(&self) -> impl Iterator<Item = (&Id, &NodeStyle)> {
        self.styles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> Color {
        Color::new(s).unwrap()
    }

    #[test]
    fn test_style_for_known_kind() {
        let fallback = NodeStyle::plain(color("#1e293b"), color("#334155"), color("#f1f5f9"));
        let mut palette = Palette::new(color("#64748b"), fallback);
        palette.insert(
            "input",
            NodeStyle::plain(color("#4c1d95"), color("#a78bfa"), color("#f1f5f9")),
        );

        let style = palette.style_for(Id::new("input"));
        assert_eq!(style.fill(), color("#4c1d95"));
    }

    #[test]
    fn test_style_for_unknown_kind_uses_fallback() {
        let fallback = NodeStyle::plain(color("#1e293b"), color("#334155"), color("#f1f5f9"));
        let palette = Palette::new(color("#64748b"), fallback.clone());

        let style = palette.style_for(Id::new("nonesuch"));
        assert_eq!(*style, fallback);
    }

    #[test]
    fn test_edge_stroke_defaults() {
        let fallback = NodeStyle::plain(color("#1e293b"), color("#334155"), color("#f1f5f9"));
        let palette = Palette::new(color("#64748b"), fallback);

        let stroke = palette.edge_stroke();
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.color().alpha(), 0.8);
        assert_eq!(stroke.style().to_svg_value(), None);
    }

    #[test]
    fn test_titled_header_fallback() {
        let plain = NodeStyle::plain(color("red"), color("blue"), color("white"));
        assert_eq!(plain.header(), color("red"));

        let titled = NodeStyle::titled(
            color("red"),
            color("blue"),
            color("white"),
            color("green"),
            color("yellow"),
        );
        assert_eq!(titled.header(), color("green"));
    }
}
