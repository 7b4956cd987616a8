//! SVG document assembly.
//!
//! Rendering is a single linear pass: validate, then emit defs, decorations,
//! edge paths, and node groups in that order. Edges draw before nodes so the
//! node bodies occlude the connector endpoints.

mod defs;
mod node;

use armature_core::{apply_stroke, draw::StrokeDefinition};
use indexmap::IndexSet;
use log::debug;
use svg::{
    Document,
    node::element::{Line, Path, Text},
};

use crate::{
    diagram::{Decoration, Diagram},
    error::ArmatureError,
};

/// Renders a diagram to an SVG document tree.
///
/// The diagram is validated first; an invalid diagram produces an error and
/// no document.
pub fn render_document(diagram: &Diagram) -> Result<Document, ArmatureError> {
    diagram.validate()?;
    let index = diagram.indexed()?;

    let canvas = diagram.canvas();
    let size = canvas.size();

    let mut style = format!("font-family: {};", canvas.font_family());
    if let Some(background) = canvas.background() {
        style = format!("background-color:{background}; {style}");
    }

    let mut doc = Document::new()
        .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
        .set("width", size.width())
        .set("height", size.height())
        .set("style", style);

    // Resolve each edge's stroke up front so the defs block can declare one
    // arrowhead marker per distinct color.
    let strokes: Vec<StrokeDefinition> = diagram
        .edges()
        .iter()
        .map(|edge| {
            diagram
                .route_for(edge)
                .stroke()
                .cloned()
                .unwrap_or_else(|| diagram.palette().edge_stroke())
        })
        .collect();
    let marker_colors: IndexSet<_> = strokes.iter().map(|stroke| stroke.color()).collect();

    doc = doc.add(defs::create_definitions(
        marker_colors.iter(),
        canvas.glow_radius(),
        diagram.palette(),
    ));

    for decoration in diagram.decorations() {
        doc = match decoration {
            Decoration::Caption {
                text,
                at,
                size,
                color,
                bold,
            } => {
                let mut caption = Text::new(text.clone())
                    .set("x", at.x())
                    .set("y", at.y())
                    .set("text-anchor", "middle")
                    .set("font-family", "monospace")
                    .set("font-size", *size)
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha());
                if *bold {
                    caption = caption.set("font-weight", "bold");
                }
                doc.add(caption)
            }
            Decoration::Divider { from, to, stroke } => {
                let rule = Line::new()
                    .set("x1", from.x())
                    .set("y1", from.y())
                    .set("x2", to.x())
                    .set("y2", to.y());
                doc.add(apply_stroke!(rule, stroke))
            }
        };
    }

    for (edge, stroke) in diagram.edges().iter().zip(&strokes) {
        let route = diagram.route_for(edge);
        // Endpoints are known to resolve after validation.
        let source = index[&edge.source()];
        let target = index[&edge.target()];

        let start = route.start().resolve(source.frame());
        let end = route.end().resolve(target.frame());

        let path = Path::new()
            .set("d", route.path().path_data(start, end))
            .set("fill", "none")
            .set(
                "marker-end",
                format!("url(#arrow-{})", stroke.color().to_id_safe_string()),
            );
        doc = doc.add(apply_stroke!(path, stroke));
    }

    for diagram_node in diagram.nodes() {
        let style = diagram.palette().style_for(diagram_node.kind());
        doc = doc.add(node::render_node(diagram_node, style));
    }

    debug!(
        name = diagram.name(),
        nodes = diagram.nodes().len(),
        edges = diagram.edges().len();
        "SVG document rendered",
    );

    Ok(doc)
}

/// Renders a diagram to a serialized SVG string.
pub fn render_svg(diagram: &Diagram) -> Result<String, ArmatureError> {
    Ok(render_document(diagram)?.to_string())
}
