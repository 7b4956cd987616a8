//! Node group rendering.
//!
//! Each node becomes one `<g>` translated to the node's top-left corner, so
//! every shape and text inside uses local coordinates. The body treatment is
//! selected by the style's frame kind; label and subtitle sit at fixed
//! offsets from the local origin.

use armature_core::color::Color;
use svg::node::element::{Circle, Group, Path, Rectangle, Text};

use crate::{
    diagram::Node,
    style::{FrameKind, NodeStyle},
};

// Label/subtitle baselines for plain cards.
const PLAIN_LABEL_BASELINE: f32 = 25.0;
const PLAIN_SUBTITLE_BASELINE: f32 = 50.0;

// Header-bar metrics for titled and store cards.
const HEADER_HEIGHT: f32 = 24.0;
const DOT_CENTER: (f32, f32) = (15.0, 12.0);
const DOT_RADIUS: f32 = 4.0;
const TITLED_LABEL_X: f32 = 28.0;
const TITLED_LABEL_BASELINE: f32 = 16.0;
const TITLED_SUBTITLE_BASELINE: f32 = 48.0;
const LID_HEIGHT: f32 = 10.0;

pub(super) fn render_node(node: &Node, style: &NodeStyle) -> Group {
    let frame = node.frame();
    let group = Group::new().set(
        "transform",
        format!("translate({}, {})", frame.x(), frame.y()),
    );

    match style.frame() {
        FrameKind::Plain => render_plain(node, style, group),
        FrameKind::Titled => render_titled(node, style, group),
        FrameKind::Store => render_store(node, style, group),
    }
}

/// The body fill attribute: the gradient reference when the style carries
/// one, the flat fill color otherwise.
fn body_fill(node: &Node, style: &NodeStyle) -> String {
    if style.gradient().is_some() {
        format!("url(#fill-{})", node.kind())
    } else {
        style.fill().to_string()
    }
}

fn render_plain(node: &Node, style: &NodeStyle, group: Group) -> Group {
    let size = node.frame().size();

    let mut body = Rectangle::new()
        .set("width", size.width())
        .set("height", size.height())
        .set("rx", style.rounding())
        .set("fill", body_fill(node, style))
        .set("stroke", style.stroke().to_string())
        .set("stroke-width", 2);
    if let Some(dasharray) = style.border_style().to_svg_value() {
        body = body.set("stroke-dasharray", dasharray);
    }
    if style.glow() {
        body = body.set("filter", "url(#glow)");
    }

    let label = Text::new(node.label())
        .set("x", size.width() / 2.0)
        .set("y", PLAIN_LABEL_BASELINE)
        .set("text-anchor", "middle")
        .set("fill", style.text().to_string())
        .set("font-weight", "bold")
        .set("font-size", 14);

    let group = group.add(body).add(label);
    add_subtitle(group, node, style, size.width() / 2.0, PLAIN_SUBTITLE_BASELINE, false)
}

fn render_titled(node: &Node, style: &NodeStyle, group: Group) -> Group {
    let size = node.frame().size();
    let group = add_halo(group, style, size.width(), size.height());

    let body = Rectangle::new()
        .set("width", size.width())
        .set("height", size.height())
        .set("rx", style.rounding())
        .set("fill", body_fill(node, style))
        .set("stroke", style.stroke().to_string())
        .set("stroke-width", 1);

    let header = Path::new()
        .set("d", header_bar_data(size.width(), style.rounding()))
        .set("fill", style.header().to_string());

    let dot = Circle::new()
        .set("cx", DOT_CENTER.0)
        .set("cy", DOT_CENTER.1)
        .set("r", DOT_RADIUS)
        .set("fill", style.accent().to_string());

    let group = group
        .add(body)
        .add(header)
        .add(dot)
        .add(titled_label(node, style));
    add_subtitle(
        group,
        node,
        style,
        size.width() / 2.0,
        TITLED_SUBTITLE_BASELINE,
        true,
    )
}

fn render_store(node: &Node, style: &NodeStyle, group: Group) -> Group {
    let size = node.frame().size();
    let group = add_halo(group, style, size.width(), size.height());

    let body = Rectangle::new()
        .set("width", size.width())
        .set("height", size.height())
        .set("rx", style.rounding())
        .set("fill", body_fill(node, style))
        .set("stroke", style.accent().to_string())
        .set("stroke-width", 1);

    let lid = Rectangle::new()
        .set("width", size.width())
        .set("height", LID_HEIGHT)
        .set("rx", 2)
        .set("fill", style.accent().to_string())
        .set("opacity", 0.5);

    let group = group.add(body).add(lid).add(titled_label(node, style));
    add_subtitle(
        group,
        node,
        style,
        size.width() / 2.0,
        TITLED_SUBTITLE_BASELINE,
        true,
    )
}

/// Blurred halo rectangle drawn beneath the body when the style asks for it.
fn add_halo(group: Group, style: &NodeStyle, width: f32, height: f32) -> Group {
    if !style.glow() {
        return group;
    }

    let halo = Rectangle::new()
        .set("width", width)
        .set("height", height)
        .set("rx", style.rounding())
        .set("fill", style.fill().to_string())
        .set("stroke", style.accent().to_string())
        .set("stroke-width", 1)
        .set("filter", "url(#glow)")
        .set("opacity", 0.3);
    group.add(halo)
}

/// The rounded header bar across the top of titled cards.
fn header_bar_data(width: f32, rounding: f32) -> String {
    format!(
        "M 0 {r} Q 0 0 {r} 0 L {inner} 0 Q {w} 0 {w} {r} L {w} {h} L 0 {h} Z",
        r = rounding,
        inner = width - rounding,
        w = width,
        h = HEADER_HEIGHT,
    )
}

fn titled_label(node: &Node, style: &NodeStyle) -> Text {
    Text::new(node.label())
        .set("x", TITLED_LABEL_X)
        .set("y", TITLED_LABEL_BASELINE)
        .set("fill", style.text().to_string())
        .set("font-size", 12)
        .set("font-weight", "bold")
        .set("font-family", "monospace")
}

/// Centered subtitle text. Skipped entirely for empty subtitles. Uses the
/// dedicated subtext color when the style has one, otherwise the text color
/// at reduced opacity.
fn add_subtitle(
    group: Group,
    node: &Node,
    style: &NodeStyle,
    x: f32,
    baseline: f32,
    italic: bool,
) -> Group {
    if node.subtitle().is_empty() {
        return group;
    }

    let color: Color = style.subtext().unwrap_or(style.text());
    let mut subtitle = Text::new(node.subtitle())
        .set("x", x)
        .set("y", baseline)
        .set("text-anchor", "middle")
        .set("fill", color.to_string())
        .set("font-size", 11);
    if style.subtext().is_none() {
        subtitle = subtitle.set("opacity", 0.8);
    }
    if italic {
        subtitle = subtitle.set("font-style", "italic");
    }
    group.add(subtitle)
}
