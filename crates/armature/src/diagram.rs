//! The diagram model: canvas, nodes, edges, decorations.
//!
//! A [`Diagram`] is a fully literal description of one illustration. It is
//! built once, validated, rendered, and discarded; nothing here mutates
//! after construction. Node order is z-order (later nodes draw on top), and
//! edge order is drawing order for the connector paths.

use armature_core::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Rect, Size},
    identifier::Id,
};
use indexmap::IndexMap;

use crate::{
    error::ArmatureError,
    route::{Anchor, EdgeRoute, PathSpec},
    style::Palette,
};

/// A labeled, positioned rectangular diagram element.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    subtitle: String,
    kind: Id,
    frame: Rect,
}

impl Node {
    pub fn new(id: &str, label: &str, subtitle: &str, kind: &str, frame: Rect) -> Self {
        Self {
            id: Id::new(id),
            label: label.to_string(),
            subtitle: subtitle.to_string(),
            kind: Id::new(kind),
            frame,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn kind(&self) -> Id {
        self.kind
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }
}

/// A directed connector between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: Id,
    target: Id,
}

impl Edge {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: Id::new(source),
            target: Id::new(target),
        }
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }
}

/// Document-level properties: dimensions, background, typography, and the
/// blur radius of the glow filter declared in the defs.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Size,
    background: Option<Color>,
    font_family: String,
    glow_radius: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32, font_family: &str) -> Self {
        Self {
            size: Size::new(width, height),
            background: None,
            font_family: font_family.to_string(),
            glow_radius: 2.0,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_glow_radius(mut self, glow_radius: f32) -> Self {
        self.glow_radius = glow_radius;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn glow_radius(&self) -> f32 {
        self.glow_radius
    }
}

/// Free-floating annotation drawn beneath the edges and nodes.
#[derive(Debug, Clone)]
pub enum Decoration {
    /// A centered text label.
    Caption {
        text: String,
        at: Point,
        size: f32,
        color: Color,
        bold: bool,
    },
    /// A straight rule, typically dashed, separating diagram regions.
    Divider {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
}

/// A complete, self-contained diagram description.
#[derive(Debug, Clone)]
pub struct Diagram {
    name: String,
    canvas: Canvas,
    palette: Palette,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    routes: IndexMap<(Id, Id), EdgeRoute>,
    default_route: EdgeRoute,
    decorations: Vec<Decoration>,
}

impl Diagram {
    pub fn new(name: &str, canvas: Canvas, palette: Palette) -> Self {
        Self {
            name: name.to_string(),
            canvas,
            palette,
            nodes: Vec::new(),
            edges: Vec::new(),
            routes: IndexMap::new(),
            default_route: EdgeRoute::new(Anchor::Center, Anchor::Center, PathSpec::Line),
            decorations: Vec::new(),
        }
    }

    /// Sets the route used by every edge without an entry in the route table.
    pub fn set_default_route(&mut self, route: EdgeRoute) {
        self.default_route = route;
    }

    /// Appends a node; later nodes draw on top of earlier ones.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Appends a directed edge between two node ids.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        self.edges.push(Edge::new(source, target));
    }

    /// Registers a hand-tuned route for the given (source, target) pair.
    pub fn add_route(&mut self, source: &str, target: &str, route: EdgeRoute) {
        self.routes.insert((Id::new(source), Id::new(target)), route);
    }

    /// Appends a caption or divider decoration.
    pub fn add_decoration(&mut self, decoration: Decoration) {
        self.decorations.push(decoration);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Resolves the route for an edge: the table entry for its
    /// (source, target) pair, or the diagram default.
    pub fn route_for(&self, edge: &Edge) -> &EdgeRoute {
        self.routes
            .get(&(edge.source(), edge.target()))
            .unwrap_or(&self.default_route)
    }

    /// Builds the id-to-node index, rejecting duplicate ids.
    pub(crate) fn indexed(&self) -> Result<IndexMap<Id, &Node>, ArmatureError> {
        let mut index = IndexMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if index.insert(node.id(), node).is_some() {
                return Err(ArmatureError::DuplicateNode {
                    id: node.id().to_string(),
                });
            }
        }
        Ok(index)
    }

    /// Checks the diagram's structural invariants: unique node ids, edge
    /// endpoints that resolve, and node frames inside the canvas.
    ///
    /// Rendering runs this first, so an invalid diagram never produces any
    /// output, partial or otherwise.
    pub fn validate(&self) -> Result<(), ArmatureError> {
        let index = self.indexed()?;

        for edge in &self.edges {
            for endpoint in [edge.source(), edge.target()] {
                if !index.contains_key(&endpoint) {
                    return Err(ArmatureError::UnknownNode {
                        source: edge.source().to_string(),
                        target: edge.target().to_string(),
                        missing: endpoint.to_string(),
                    });
                }
            }
        }

        let document = self.canvas.size();
        for node in &self.nodes {
            if !node.frame().fits_within(document) {
                return Err(ArmatureError::OutOfBounds {
                    id: node.id().to_string(),
                    width: document.width(),
                    height: document.height(),
                });
            }
        }

        Ok(())
    }
}
