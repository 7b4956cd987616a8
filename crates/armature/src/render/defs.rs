//! Reusable document definitions: arrowhead markers, the glow filter, and
//! palette gradients. Each is declared once and referenced by id.

use armature_core::color::Color;
use svg::node::Node as _;
use svg::node::element::{Definitions, Element, Filter, LinearGradient, Marker, Path, Stop};

use crate::style::Palette;

/// Creates the `<defs>` block for a document.
///
/// One arrowhead marker is declared per distinct edge-stroke color
/// (`arrow-<id-safe-color>`), one blur filter (`glow`), and one linear
/// gradient per palette style that declares one (`fill-<kind>`).
pub(super) fn create_definitions<'a, I>(
    marker_colors: I,
    glow_radius: f32,
    palette: &Palette,
) -> Definitions
where
    I: Iterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    for color in marker_colors {
        let marker = Marker::new()
            .set("id", format!("arrow-{}", color.to_id_safe_string()))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );
        defs = defs.add(marker);
    }

    // The svg crate has no dedicated filter-primitive elements, so the
    // feGaussianBlur/feComposite children are built as generic elements.
    let mut blur = Element::new("feGaussianBlur");
    blur.assign("stdDeviation", glow_radius);
    blur.assign("result", "blur");

    let mut composite = Element::new("feComposite");
    composite.assign("in", "SourceGraphic");
    composite.assign("in2", "blur");
    composite.assign("operator", "over");

    let glow = Filter::new()
        .set("id", "glow")
        .set("x", "-20%")
        .set("y", "-20%")
        .set("width", "140%")
        .set("height", "140%")
        .add(blur)
        .add(composite);
    defs = defs.add(glow);

    for (kind, style) in palette.styles() {
        if let Some(gradient) = style.gradient() {
            let element = LinearGradient::new()
                .set("id", format!("fill-{kind}"))
                .set("x1", "0%")
                .set("y1", "0%")
                .set("x2", "100%")
                .set("y2", "0%")
                .add(
                    Stop::new()
                        .set("offset", "0%")
                        .set("stop-color", gradient.color().to_string())
                        .set("stop-opacity", gradient.start_opacity()),
                )
                .add(
                    Stop::new()
                        .set("offset", "100%")
                        .set("stop-color", gradient.color().to_string())
                        .set("stop-opacity", gradient.end_opacity()),
                );
            defs = defs.add(element);
        }
    }

    defs
}
