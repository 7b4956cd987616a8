//! Cognitive-core processing pipeline figure.
//!
//! Input stages on the left feed an orchestrator/graph pair in the middle,
//! which drives a retrieval-generation-execution loop on the right before
//! streaming a response out the bottom. Three edges carry hand-tuned bezier
//! routes so the loop's feedback arrows clear their neighbors.

use armature_core::geometry::{Point, Rect};

use super::color;
use crate::{
    diagram::{Canvas, Diagram, Node},
    route::{Anchor, EdgeRoute, PathSpec},
    style::{NodeStyle, Palette},
};

pub(super) fn diagram() -> Diagram {
    let canvas = Canvas::new(900.0, 650.0, "'Courier New', monospace")
        .with_background(color("#0f172a"));

    let text = color("#f1f5f9");
    let line = color("#64748b");

    let card = |fill: &str, stroke: &str| {
        NodeStyle::plain(color(fill), color(stroke), text).with_glow()
    };

    let fallback = card("#1e293b", "#334155");
    let mut palette = Palette::new(line, fallback);
    palette.insert("input", card("#4c1d95", "#a78bfa"));
    palette.insert("logic", card("#0f766e", "#2dd4bf"));
    palette.insert("loop", card("#b45309", "#fbbf24"));
    palette.insert("out", card("#14532d", "#4ade80"));

    let mut d = Diagram::new("ccp-architecture", canvas, palette);

    d.add_node(Node::new(
        "user",
        "User Request",
        "Raw Input",
        "input",
        Rect::new(50.0, 275.0, 140.0, 70.0),
    ));
    d.add_node(Node::new(
        "chunk",
        "Semantic Segmenter",
        "Intent Analysis",
        "input",
        Rect::new(230.0, 275.0, 180.0, 70.0),
    ));
    d.add_node(Node::new(
        "orch",
        "Orchestrator",
        "State Manager",
        "logic",
        Rect::new(480.0, 150.0, 160.0, 70.0),
    ));
    d.add_node(Node::new(
        "graph",
        "Execution Graph",
        "Dynamic DAG",
        "logic",
        Rect::new(480.0, 400.0, 160.0, 70.0),
    ));
    d.add_node(Node::new(
        "retr",
        "Hybrid Retrieval",
        "Vector + Regex",
        "loop",
        Rect::new(700.0, 100.0, 160.0, 70.0),
    ));
    d.add_node(Node::new(
        "arg",
        "Argument Gen",
        "LLM Decoding",
        "loop",
        Rect::new(700.0, 275.0, 160.0, 70.0),
    ));
    d.add_node(Node::new(
        "tool",
        "Tool Execution",
        "Sandbox",
        "loop",
        Rect::new(700.0, 450.0, 160.0, 70.0),
    ));
    d.add_node(Node::new(
        "out",
        "Response Stream",
        "Context Block",
        "out",
        Rect::new(480.0, 550.0, 160.0, 60.0),
    ));

    d.add_edge("user", "chunk");
    d.add_edge("chunk", "orch");
    d.add_edge("orch", "graph");
    d.add_edge("graph", "retr");
    d.add_edge("retr", "arg");
    d.add_edge("arg", "tool");
    d.add_edge("tool", "graph");
    d.add_edge("graph", "out");

    // Eased hand-off from the input row up into the orchestrator.
    d.add_route(
        "chunk",
        "orch",
        EdgeRoute::new(
            Anchor::Center,
            Anchor::Center,
            PathSpec::Cubic {
                c1: Point::new(370.0, 310.0),
                c2: Point::new(510.0, 185.0),
            },
        ),
    );
    // Feedback from tool execution back into the graph, swinging wide left.
    d.add_route(
        "tool",
        "graph",
        EdgeRoute::new(
            Anchor::Left,
            Anchor::Right,
            PathSpec::Cubic {
                c1: Point::new(650.0, 485.0),
                c2: Point::new(690.0, 435.0),
            },
        ),
    );
    // Query dispatch from the graph up to retrieval.
    d.add_route(
        "graph",
        "retr",
        EdgeRoute::new(
            Anchor::Right,
            Anchor::Left,
            PathSpec::Cubic {
                c1: Point::new(690.0, 435.0),
                c2: Point::new(650.0, 135.0),
            },
        ),
    );

    d
}
