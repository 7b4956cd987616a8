//! Geometric primitives for diagram layout.
//!
//! Diagram elements are positioned with top-left-origin rectangles in
//! absolute document units, so [`Rect`] is the workhorse type here.
//! Boundary-midpoint accessors give the points where edges attach.

/// A point in document coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Returns the top-left corner.
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the rectangle's dimensions.
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns the x-coordinate of the left edge.
    pub fn x(self) -> f32 {
        self.origin.x
    }

    /// Returns the y-coordinate of the top edge.
    pub fn y(self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    pub fn width(self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    pub fn height(self) -> f32 {
        self.size.height
    }

    /// Returns the x-coordinate of the right edge.
    pub fn right(self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the y-coordinate of the bottom edge.
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the geometric center of the rectangle.
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Returns the midpoint of the left edge.
    pub fn left_mid(self) -> Point {
        Point::new(self.x(), self.center().y())
    }

    /// Returns the midpoint of the right edge.
    pub fn right_mid(self) -> Point {
        Point::new(self.right(), self.center().y())
    }

    /// Returns the midpoint of the top edge.
    pub fn top_mid(self) -> Point {
        Point::new(self.center().x(), self.y())
    }

    /// Returns the midpoint of the bottom edge.
    pub fn bottom_mid(self) -> Point {
        Point::new(self.center().x(), self.bottom())
    }

    /// Checks whether the rectangle lies fully inside a document of the
    /// given size, with the document origin at (0, 0).
    pub fn fits_within(self, document: Size) -> bool {
        self.x() >= 0.0
            && self.y() >= 0.0
            && self.right() <= document.width()
            && self.bottom() <= document.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_add() {
        let result = Point::new(1.0, 2.0).add_point(Point::new(3.0, 4.0));
        assert_eq!(result.x(), 4.0);
        assert_eq!(result.y(), 6.0);
    }

    #[test]
    fn test_point_midpoint() {
        let midpoint = Point::new(0.0, 0.0).midpoint(Point::new(4.0, 6.0));
        assert_eq!(midpoint.x(), 2.0);
        assert_eq!(midpoint.y(), 3.0);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(50.0, 200.0, 140.0, 70.0);
        assert_eq!(rect.right(), 190.0);
        assert_eq!(rect.bottom(), 270.0);

        let center = rect.center();
        assert_eq!(center.x(), 120.0);
        assert_eq!(center.y(), 235.0);
    }

    #[test]
    fn test_rect_boundary_midpoints() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rect.left_mid(), Point::new(0.0, 25.0));
        assert_eq!(rect.right_mid(), Point::new(100.0, 25.0));
        assert_eq!(rect.top_mid(), Point::new(50.0, 0.0));
        assert_eq!(rect.bottom_mid(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_rect_fits_within() {
        let document = Size::new(800.0, 500.0);

        assert!(Rect::new(0.0, 0.0, 800.0, 500.0).fits_within(document));
        assert!(Rect::new(600.0, 250.0, 160.0, 70.0).fits_within(document));

        // Escapes on the right: 700 + 160 > 800
        assert!(!Rect::new(700.0, 0.0, 160.0, 70.0).fits_within(document));
        // Escapes on the bottom: 450 + 60 > 500
        assert!(!Rect::new(0.0, 450.0, 100.0, 60.0).fits_within(document));
        // Negative origin
        assert!(!Rect::new(-1.0, 0.0, 10.0, 10.0).fits_within(document));
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            0.0f32..1000.0,
            0.0f32..1000.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    /// Every boundary midpoint must lie on the rectangle's boundary.
    fn check_midpoints_on_boundary(rect: Rect) -> Result<(), TestCaseError> {
        prop_assert!(approx_eq!(f32, rect.left_mid().x(), rect.x()));
        prop_assert!(approx_eq!(f32, rect.right_mid().x(), rect.right()));
        prop_assert!(approx_eq!(f32, rect.top_mid().y(), rect.y()));
        prop_assert!(approx_eq!(f32, rect.bottom_mid().y(), rect.bottom()));
        Ok(())
    }

    /// Opposite boundary midpoints must agree on the shared axis.
    fn check_midpoints_share_center(rect: Rect) -> Result<(), TestCaseError> {
        let center = rect.center();
        prop_assert!(approx_eq!(f32, rect.left_mid().y(), center.y(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, rect.right_mid().y(), center.y(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, rect.top_mid().x(), center.x(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, rect.bottom_mid().x(), center.x(), epsilon = 0.01));
        Ok(())
    }

    proptest! {
        #[test]
        fn midpoints_on_boundary(rect in rect_strategy()) {
            check_midpoints_on_boundary(rect)?;
        }

        #[test]
        fn midpoints_share_center(rect in rect_strategy()) {
            check_midpoints_share_center(rect)?;
        }
    }
}
