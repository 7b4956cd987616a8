//! Color handling for Armature diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor`
//! type from the color crate, adding the conveniences the renderer needs:
//! CSS color-string parsing, alpha adjustment, and sanitized strings for use
//! as SVG element ids.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string.
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use armature_core::color::Color;
    ///
    /// let slate = Color::new("#64748b").unwrap();
    /// let named = Color::new("black").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a sanitized, ID-safe string representation of this color.
    ///
    /// The result contains only characters valid in an SVG id attribute and
    /// is guaranteed not to start with a digit, so it can be embedded in
    /// marker and gradient ids.
    pub fn to_id_safe_string(self) -> String {
        let color_str = self.to_string();
        // Replace invalid ID characters with underscores
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '/'], "_");

        // Ensure the ID starts with a letter (required for valid SVG IDs)
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use armature_core::color::Color;
    ///
    /// let line = Color::new("#94a3b8").unwrap().with_alpha(0.8);
    /// assert_eq!(line.alpha(), 0.8);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color, between
    /// 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_and_named() {
        assert!(Color::new("#1e293b").is_ok());
        assert!(Color::new("rebeccapurple").is_ok());
        assert!(Color::new("rgb(100, 116, 139)").is_ok());
    }

    #[test]
    fn test_parse_invalid() {
        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_id_safe_string() {
        let id = Color::new("#ff8000").unwrap().to_id_safe_string();
        assert!(!id.contains('#'));
        assert!(
            id.chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        );
        assert!(!id.starts_with(|c: char| c.is_ascii_digit()));
    }

    #[test]
    fn test_id_safe_string_is_stable() {
        let color = Color::new("rgb(255, 0, 0)").unwrap();
        assert_eq!(color.to_id_safe_string(), color.to_id_safe_string());
    }

    #[test]
    fn test_alpha_roundtrip() {
        let color = Color::new("#64748b").unwrap();
        assert_eq!(color.alpha(), 1.0);
        assert_eq!(color.with_alpha(0.6).alpha(), 0.6);
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
    }
}
