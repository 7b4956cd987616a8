//! Visual definitions for drawable diagram elements.

mod stroke;

pub use stroke::{StrokeDefinition, StrokeStyle};
