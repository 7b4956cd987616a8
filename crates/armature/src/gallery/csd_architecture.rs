//! Standard-LLM versus CSD comparison figure.
//!
//! Two regions split by a dashed divider: a vertical token/context/inference
//! stack on the left, and the CSD retrieval loop on the right. The
//! new-node-to-DAG feedback edge is the one cycle, drawn dashed with a
//! vertical ease; every other edge is a straight run between boundary
//! midpoints, so the whole edge list is routed through the override table.

use armature_core::{
    draw::{StrokeDefinition, StrokeStyle},
    geometry::{Point, Rect},
};

use super::color;
use crate::{
    diagram::{Canvas, Decoration, Diagram, Node},
    route::{Anchor, EdgeRoute, PathSpec},
    style::{GradientSpec, NodeStyle, Palette},
};

pub(super) fn diagram() -> Diagram {
    let canvas = Canvas::new(900.0, 500.0, "'Computer Modern', serif");

    let text = color("#e0e6ed");
    let border = color("#1e3a8a");
    let node_bg = color("#111827");
    let header = color("#1e293b");
    let line = color("#94a3b8");
    let db_accent = color("#f472b6");

    let titled = |accent: &str| {
        NodeStyle::titled(node_bg, border, text, header, color(accent)).with_glow()
    };

    let fallback = titled("#3b82f6");
    let mut palette = Palette::new(line, fallback);
    palette.insert("std", titled("#64748b"));
    palette.insert("root", titled("#3b82f6"));
    palette.insert("slm", titled("#a78bfa"));
    palette.insert(
        "db",
        NodeStyle::store(node_bg, db_accent, text, GradientSpec::new(db_accent, 0.2, 0.1))
            .with_glow(),
    );

    let mut d = Diagram::new("csd-architecture", canvas, palette);

    // Standard LLM column.
    d.add_node(Node::new(
        "std_tok",
        "Tokens",
        "0...N",
        "std",
        Rect::new(50.0, 150.0, 120.0, 60.0),
    ));
    d.add_node(Node::new(
        "std_ctx",
        "Context",
        "Window",
        "std",
        Rect::new(50.0, 250.0, 120.0, 60.0),
    ));
    d.add_node(Node::new(
        "std_inf",
        "Inference",
        "Compute",
        "std",
        Rect::new(50.0, 350.0, 120.0, 60.0),
    ));

    // CSD loop.
    d.add_node(Node::new(
        "csd_in",
        "Input",
        "Intent",
        "root",
        Rect::new(350.0, 100.0, 120.0, 60.0),
    ));
    d.add_node(Node::new(
        "csd_retr",
        "Retriever",
        "Search",
        "root",
        Rect::new(550.0, 100.0, 120.0, 60.0),
    ));
    d.add_node(Node::new(
        "csd_dag",
        "Vector DAG",
        "Logical State",
        "db",
        Rect::new(550.0, 20.0, 120.0, 60.0),
    ));
    d.add_node(Node::new(
        "csd_local",
        "Local Cay",
        "Context",
        "root",
        Rect::new(750.0, 100.0, 120.0, 60.0),
    ));
    d.add_node(Node::new(
        "csd_slm",
        "SLM Kernel",
        "Synthesis",
        "slm",
        Rect::new(750.0, 250.0, 120.0, 60.0),
    ));
    d.add_node(Node::new(
        "csd_new",
        "New Node",
        "Update",
        "root",
        Rect::new(550.0, 250.0, 120.0, 60.0),
    ));

    d.add_edge("std_tok", "std_ctx");
    d.add_edge("std_ctx", "std_inf");
    d.add_edge("csd_in", "csd_retr");
    d.add_edge("csd_dag", "csd_retr");
    d.add_edge("csd_retr", "csd_local");
    d.add_edge("csd_local", "csd_slm");
    d.add_edge("csd_slm", "csd_new");
    d.add_edge("csd_new", "csd_dag");

    let straight = |start, end| EdgeRoute::new(start, end, PathSpec::Line);

    d.add_route("std_tok", "std_ctx", straight(Anchor::Bottom, Anchor::Top));
    d.add_route("std_ctx", "std_inf", straight(Anchor::Bottom, Anchor::Top));
    d.add_route("csd_in", "csd_retr", straight(Anchor::Right, Anchor::Left));
    d.add_route("csd_dag", "csd_retr", straight(Anchor::Bottom, Anchor::Top));
    d.add_route("csd_retr", "csd_local", straight(Anchor::Right, Anchor::Left));
    d.add_route("csd_local", "csd_slm", straight(Anchor::Bottom, Anchor::Top));
    d.add_route("csd_slm", "csd_new", straight(Anchor::Left, Anchor::Right));
    // The cycle back into the DAG: dashed, eased through the vertical midpoint.
    d.add_route(
        "csd_new",
        "csd_dag",
        EdgeRoute::new(Anchor::Top, Anchor::Bottom, PathSpec::SCurveVertical)
            .with_stroke(StrokeDefinition::dashed(line.with_alpha(0.8), 2.0)),
    );

    d.add_decoration(Decoration::Divider {
        from: Point::new(250.0, 50.0),
        to: Point::new(250.0, 450.0),
        stroke: StrokeDefinition::new(border.with_alpha(0.5), 1.0)
            .with_style(StrokeStyle::Custom("4,4".to_string())),
    });
    d.add_decoration(Decoration::Caption {
        text: "Standard LLM".to_string(),
        at: Point::new(110.0, 40.0),
        size: 14.0,
        color: text,
        bold: true,
    });
    d.add_decoration(Decoration::Caption {
        text: "CSD Architecture".to_string(),
        at: Point::new(600.0, 40.0),
        size: 14.0,
        color: text,
        bold: true,
    });

    d
}
