//! Error types for Armature operations.
//!
//! This module provides the main error type [`ArmatureError`] which wraps
//! the error conditions that can occur while validating and rendering a
//! diagram. All of them are terminal: the caller reports the error and the
//! run aborts, since the only fix is to correct the diagram data.

use std::io;

/// The main error type for Armature operations.
//
// Note: the `Display`/`Error`/`From` impls below are written by hand rather
// than derived with `thiserror`. The `UnknownNode` variant has a field named
// `source`, which `thiserror` unconditionally treats as the error source and
// requires to implement `std::error::Error`; that field is a plain node id
// (`String`), so the derive cannot be used without renaming the field. The
// hand-written impls reproduce exactly what the derive would generate.
#[derive(Debug)]
pub enum ArmatureError {
    Io(io::Error),

    DuplicateNode { id: String },

    UnknownNode {
        source: String,
        target: String,
        missing: String,
    },

    OutOfBounds { id: String, width: f32, height: f32 },

    UnknownDiagram(String),

    Color(String),

    Config(String),
}

impl std::fmt::Display for ArmatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArmatureError::Io(e) => write!(f, "I/O error: {e}"),
            ArmatureError::DuplicateNode { id } => write!(f, "duplicate node id `{id}`"),
            ArmatureError::UnknownNode {
                source,
                target,
                missing,
            } => write!(
                f,
                "edge `{source}` -> `{target}` references unknown node `{missing}`"
            ),
            ArmatureError::OutOfBounds { id, width, height } => write!(
                f,
                "node `{id}` does not fit inside the {width}x{height} canvas"
            ),
            ArmatureError::UnknownDiagram(name) => write!(f, "unknown diagram `{name}`"),
            ArmatureError::Color(msg) => write!(f, "invalid color: {msg}"),
            ArmatureError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ArmatureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArmatureError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ArmatureError {
    fn from(e: io::Error) -> Self {
        ArmatureError::Io(e)
    }
}
