//! Edge routing: anchor points and path shapes.
//!
//! An edge's geometry is a pure function of the two node rectangles and the
//! diagram's route table. The route says where on each rectangle the
//! connector attaches ([`Anchor`]) and what shape the connector takes
//! ([`PathSpec`]). A handful of edges per diagram carry hand-tuned routes to
//! dodge their siblings; every other edge uses the diagram default.

use armature_core::{
    draw::StrokeDefinition,
    geometry::{Point, Rect},
};

/// Where on a node's rectangle an edge attaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// The geometric center of the rectangle.
    Center,
    /// The midpoint of the left edge.
    Left,
    /// The midpoint of the right edge.
    Right,
    /// The midpoint of the top edge.
    Top,
    /// The midpoint of the bottom edge.
    Bottom,
    /// A hand-placed absolute point, ignoring the rectangle.
    At(Point),
}

impl Anchor {
    /// Resolves the anchor to a concrete point on (or near) the rectangle.
    pub fn resolve(&self, frame: Rect) -> Point {
        match self {
            Self::Center => frame.center(),
            Self::Left => frame.left_mid(),
            Self::Right => frame.right_mid(),
            Self::Top => frame.top_mid(),
            Self::Bottom => frame.bottom_mid(),
            Self::At(point) => *point,
        }
    }
}

/// The shape of the connector between two resolved anchor points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSpec {
    /// A straight line segment.
    Line,
    /// A cubic bezier easing horizontally: both control points sit at the
    /// horizontal midpoint between the anchors, at their respective heights.
    SCurve,
    /// A cubic bezier easing vertically: both control points sit at the
    /// vertical midpoint between the anchors.
    SCurveVertical,
    /// A cubic bezier with hand-tuned control points, used verbatim.
    Cubic { c1: Point, c2: Point },
}

impl PathSpec {
    /// Builds the SVG path data string for this shape between two points.
    pub fn path_data(&self, start: Point, end: Point) -> String {
        match self {
            Self::Line => format!(
                "M {} {} L {} {}",
                start.x(),
                start.y(),
                end.x(),
                end.y()
            ),
            Self::SCurve => {
                let half_span = (end.x() - start.x()) / 2.0;
                let c1 = Point::new(start.x() + half_span, start.y());
                let c2 = Point::new(end.x() - half_span, end.y());
                cubic_path_data(start, c1, c2, end)
            }
            Self::SCurveVertical => {
                let mid_y = start.midpoint(end).y();
                let c1 = Point::new(start.x(), mid_y);
                let c2 = Point::new(end.x(), mid_y);
                cubic_path_data(start, c1, c2, end)
            }
            Self::Cubic { c1, c2 } => cubic_path_data(start, *c1, *c2, end),
        }
    }
}

fn cubic_path_data(start: Point, c1: Point, c2: Point, end: Point) -> String {
    format!(
        "M {} {} C {} {}, {} {}, {} {}",
        start.x(),
        start.y(),
        c1.x(),
        c1.y(),
        c2.x(),
        c2.y(),
        end.x(),
        end.y()
    )
}

/// A complete routing rule for one edge: anchors, path shape, and an
/// optional stroke override.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRoute {
    start: Anchor,
    end: Anchor,
    path: PathSpec,
    stroke: Option<StrokeDefinition>,
}

impl EdgeRoute {
    pub fn new(start: Anchor, end: Anchor, path: PathSpec) -> Self {
        Self {
            start,
            end,
            path,
            stroke: None,
        }
    }

    /// Overrides the stroke for this route (color, width, dash pattern).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn start(&self) -> Anchor {
        self.start
    }

    pub fn end(&self) -> Anchor {
        self.end
    }

    pub fn path(&self) -> PathSpec {
        self.path
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }
}
