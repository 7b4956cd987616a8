//! Landing-page system overview figure.
//!
//! An input stream flows into a probabilistic kernel that sits inside a
//! dashed protocol shell, and out into a structured execution graph. The
//! shell is itself a node (drawn before the kernel so the kernel sits on
//! top); its constraint edge onto the graph uses hand-placed anchors partway
//! down both boxes.

use armature_core::{
    draw::{StrokeDefinition, StrokeStyle},
    geometry::{Point, Rect},
};

use super::color;
use crate::{
    diagram::{Canvas, Diagram, Node},
    route::{Anchor, EdgeRoute, PathSpec},
    style::{GradientSpec, NodeStyle, Palette},
};

pub(super) fn diagram() -> Diagram {
    let canvas =
        Canvas::new(900.0, 500.0, "'Inter', 'Segoe UI', sans-serif").with_glow_radius(3.0);

    let text = color("#f8fafc");
    let sub_text = color("#94a3b8");
    let line = color("#64748b");
    let proto_bg = color("#134e4a");
    let proto_stroke = color("#2dd4bf");

    let fallback = NodeStyle::plain(color("#0f172a"), color("#334155"), text);
    let mut palette = Palette::new(line, fallback);
    palette.insert(
        "input",
        NodeStyle::plain(color("#312e81"), color("#6366f1"), text)
            .with_subtext(sub_text)
            .with_rounding(12.0),
    );
    palette.insert(
        "proto",
        NodeStyle::plain(proto_bg, proto_stroke, proto_stroke)
            .with_subtext(sub_text)
            .with_rounding(20.0)
            .with_border_style(StrokeStyle::Dashed)
            .with_gradient(GradientSpec::new(proto_bg, 0.8, 0.4)),
    );
    palette.insert(
        "kernel",
        NodeStyle::plain(color("#0f172a"), color("#38bdf8"), text)
            .with_subtext(sub_text)
            .with_rounding(12.0)
            .with_glow(),
    );
    palette.insert(
        "graph",
        NodeStyle::plain(color("#3f3f46"), color("#a1a1aa"), text).with_subtext(sub_text),
    );

    let mut d = Diagram::new("home-architecture", canvas, palette);
    d.set_default_route(EdgeRoute::new(Anchor::Right, Anchor::Left, PathSpec::Line));

    d.add_node(Node::new(
        "in1",
        "Multi-Modal",
        "Input Stream",
        "input",
        Rect::new(50.0, 200.0, 140.0, 100.0),
    ));
    d.add_node(Node::new(
        "proto",
        "Deterministic Protocol",
        "Verifiable Logic Layer",
        "proto",
        Rect::new(250.0, 100.0, 400.0, 300.0),
    ));
    d.add_node(Node::new(
        "cru",
        "CRU",
        "Probabilistic Kernel (SLM)",
        "kernel",
        Rect::new(350.0, 200.0, 200.0, 100.0),
    ));
    d.add_node(Node::new(
        "graph",
        "Execution Graph",
        "Structured Memory",
        "graph",
        Rect::new(700.0, 150.0, 160.0, 200.0),
    ));

    d.add_edge("in1", "cru");
    d.add_edge("cru", "graph");
    d.add_edge("proto", "graph");

    // Constraint-enforcement edge from the shell's flank onto the graph,
    // anchored partway down both boxes rather than at midpoints.
    d.add_route(
        "proto",
        "graph",
        EdgeRoute::new(
            Anchor::At(Point::new(650.0, 160.0)),
            Anchor::At(Point::new(700.0, 190.0)),
            PathSpec::Cubic {
                c1: Point::new(700.0, 160.0),
                c2: Point::new(650.0, 190.0),
            },
        )
        .with_stroke(
            StrokeDefinition::new(proto_stroke.with_alpha(0.6), 1.0)
                .with_style(StrokeStyle::Custom("2,2".to_string())),
        ),
    );

    d
}
