//! Armature regenerates a fixed set of hand-positioned architecture
//! illustrations as SVG files.
//!
//! There is deliberately no layout engine here: every diagram is a literal
//! [`Diagram`] value with author-fixed node rectangles, a style palette, and
//! a small table of hand-tuned edge routes. Rendering is one deterministic
//! pass from that data to an SVG document.
//!
//! # Example
//!
//! ```
//! use armature::gallery;
//!
//! let entry = gallery::find("context-dag").unwrap();
//! let diagram = (entry.build)();
//! let svg = armature::render_svg(&diagram).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

mod diagram;
mod error;
mod render;
mod route;
mod style;

pub mod gallery;

pub use armature_core::color::Color;
pub use armature_core::draw::{StrokeDefinition, StrokeStyle};
pub use armature_core::geometry::{Point, Rect, Size};
pub use diagram::{Canvas, Decoration, Diagram, Edge, Node};
pub use error::ArmatureError;
pub use render::{render_document, render_svg};
pub use route::{Anchor, EdgeRoute, PathSpec};
pub use style::{FrameKind, GradientSpec, NodeStyle, Palette};

use std::{fs, path::Path};

use log::info;

/// Renders a diagram and writes the SVG to the given path.
///
/// The destination is overwritten unconditionally. The containing directory
/// is not created: writing into a missing directory is an I/O error, and
/// because rendering (including validation) completes before the write
/// starts, a failed run never leaves a partial file behind.
pub fn write_svg(diagram: &Diagram, path: impl AsRef<Path>) -> Result<(), ArmatureError> {
    let path = path.as_ref();
    let rendered = render_svg(diagram)?;

    info!(
        name = diagram.name(),
        path = path.display().to_string();
        "Writing SVG file",
    );
    fs::write(path, rendered)?;

    Ok(())
}
