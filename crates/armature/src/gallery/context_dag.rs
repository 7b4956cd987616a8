//! Context-state DAG topology figure.
//!
//! A left-to-right provenance chain: a genesis root fans out to two context
//! branches which converge on an extracted fact. All edges share the default
//! right-to-left eased curve; no route overrides are needed.

use armature_core::geometry::{Point, Rect};

use super::color;
use crate::{
    diagram::{Canvas, Decoration, Diagram, Node},
    route::{Anchor, EdgeRoute, PathSpec},
    style::{NodeStyle, Palette},
};

pub(super) fn diagram() -> Diagram {
    let canvas = Canvas::new(800.0, 500.0, "'Computer Modern', serif");

    let text = color("#e0e6ed");
    let border = color("#1e3a8a");
    let node_bg = color("#111827");
    let header = color("#1e293b");
    let line = color("#94a3b8");

    let titled = |accent: &str| {
        NodeStyle::titled(node_bg, border, text, header, color(accent)).with_glow()
    };

    let mut palette = Palette::new(line, NodeStyle::titled(node_bg, border, text, header, line));
    palette.insert("root", titled("#3b82f6"));
    palette.insert("idea", titled("#8b5cf6"));
    palette.insert("reason", titled("#f59e0b"));
    palette.insert("fact", titled("#10b981"));

    let mut d = Diagram::new("context-dag", canvas, palette);
    d.set_default_route(EdgeRoute::new(Anchor::Right, Anchor::Left, PathSpec::SCurve));

    d.add_node(Node::new(
        "root",
        "ROOT",
        "Genesis",
        "root",
        Rect::new(50.0, 200.0, 140.0, 70.0),
    ));
    d.add_node(Node::new(
        "idea1",
        "CTXB-01",
        "User Segment A",
        "idea",
        Rect::new(300.0, 100.0, 160.0, 70.0),
    ));
    d.add_node(Node::new(
        "idea2",
        "CTXB-02",
        "User Segment B",
        "idea",
        Rect::new(300.0, 300.0, 160.0, 70.0),
    ));
    d.add_node(Node::new(
        "reason",
        "RSN-01",
        "Analysis Node",
        "reason",
        Rect::new(550.0, 100.0, 160.0, 70.0),
    ));
    d.add_node(Node::new(
        "fact",
        "FACT-01",
        "Entity Extraction",
        "fact",
        Rect::new(600.0, 250.0, 160.0, 70.0),
    ));

    d.add_edge("root", "idea1");
    d.add_edge("root", "idea2");
    d.add_edge("idea1", "reason");
    d.add_edge("reason", "fact");
    d.add_edge("idea2", "fact");

    d.add_decoration(Decoration::Caption {
        text: "FIG 2: CONTEXT STATE DAG TOPOLOGY".to_string(),
        at: Point::new(400.0, 480.0),
        size: 14.0,
        color: line.with_alpha(0.5),
        bold: false,
    });

    d
}
