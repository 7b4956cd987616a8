//! Error adapter for converting ArmatureError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. There is no
//! source text to annotate (diagram data is code, not input files), so the
//! adapter only supplies codes and help text.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use armature::ArmatureError;

/// Adapter wrapping an [`ArmatureError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a ArmatureError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArmatureError::Io(_) => "armature::io",
            ArmatureError::DuplicateNode { .. }
            | ArmatureError::UnknownNode { .. }
            | ArmatureError::OutOfBounds { .. } => "armature::diagram",
            ArmatureError::UnknownDiagram(_) => "armature::gallery",
            ArmatureError::Color(_) => "armature::color",
            ArmatureError::Config(_) => "armature::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ArmatureError::UnknownNode { .. } => {
                "every edge endpoint must name a node in the diagram's node list"
            }
            ArmatureError::OutOfBounds { .. } => {
                "move the node or grow the canvas so the node fits inside the viewbox"
            }
            ArmatureError::UnknownDiagram(_) => "run with --list to see the available diagrams",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_by_variant() {
        let err = ArmatureError::UnknownDiagram("nonesuch".to_string());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "armature::gallery");

        let err = ArmatureError::DuplicateNode {
            id: "a".to_string(),
        };
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "armature::diagram");
    }

    #[test]
    fn test_help_present_for_selection_errors() {
        let err = ArmatureError::UnknownDiagram("nonesuch".to_string());
        assert!(ErrorAdapter(&err).help().is_some());

        let err = ArmatureError::Config("broken".to_string());
        assert!(ErrorAdapter(&err).help().is_none());
    }

    #[test]
    fn test_display_passes_through() {
        let err = ArmatureError::UnknownDiagram("nonesuch".to_string());
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "unknown diagram `nonesuch`"
        );
    }
}
