//! Geometric primitives for overlay layout.
//!
//! All values are integers expressed in the scaled coordinate space used for
//! layout, as opposed to raw device pixels.
//!
//! # Overview
//!
//! - [`Axis`] - The horizontal or vertical layout axis
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by its top-left corner and size
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the parent surface at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

use std::fmt;

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis; spans are widths.
    Horizontal,
    /// The Y axis; spans are heights.
    Vertical,
}

impl Axis {
    /// Returns a human-readable name for this axis.
    pub fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 2D point in layout space.
///
/// # Examples
///
/// ```
/// # use tether_core::geometry::{Axis, Point};
/// let p = Point::new(10, 20);
/// assert_eq!(p.coord(Axis::Horizontal), 10);
///
/// let moved = p.with_coord(Axis::Vertical, 5);
/// assert_eq!(moved, Point::new(10, 5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns the coordinate along `axis`.
    pub fn coord(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Returns a copy of this point with the coordinate along `axis` replaced.
    pub fn with_coord(mut self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
        self
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns the span along `axis`: width for horizontal, height for vertical.
    pub fn span(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Scales both dimensions by `factor`, truncating toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tether_core::geometry::Size;
    /// let size = Size::new(10, 7);
    /// assert_eq!(size.scale(1.5), Size::new(15, 10));
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: (self.width as f32 * factor) as i32,
            height: (self.height as f32 * factor) as i32,
        }
    }
}

/// An axis-aligned bounding box in layout space.
///
/// A box is stored as its top-left corner plus its size; the right and bottom
/// edges are derived (`right = left + width`, `bottom = top + height`) and
/// saturate at the `i32` range.
///
/// # Examples
///
/// ```
/// # use tether_core::geometry::{Axis, Bounds};
/// let bounds = Bounds::new(10, 20, 40, 30);
///
/// assert_eq!(bounds.right(), 50);
/// assert_eq!(bounds.bottom(), 50);
/// assert_eq!(bounds.start(Axis::Vertical), 20);
/// assert_eq!(bounds.end(Axis::Horizontal), 50);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl Bounds {
    /// Creates a bounding box from its top-left corner and dimensions.
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a bounding box from a top-left point and a size.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x(), top_left.y(), size.width(), size.height())
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Returns the top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns the dimensions of the box.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the leading edge along `axis` (left or top).
    pub fn start(&self, axis: Axis) -> i32 {
        self.top_left().coord(axis)
    }

    /// Returns the extent along `axis` (width or height).
    pub fn span(&self, axis: Axis) -> i32 {
        self.size().span(axis)
    }

    /// Returns the trailing edge along `axis` (right or bottom).
    pub fn end(&self, axis: Axis) -> i32 {
        self.start(axis).saturating_add(self.span(axis))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.left, self.top, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_coord_per_axis() {
        let point = Point::new(3, 7);
        assert_eq!(point.coord(Axis::Horizontal), 3);
        assert_eq!(point.coord(Axis::Vertical), 7);
    }

    #[test]
    fn test_point_with_coord_keeps_other_axis() {
        let point = Point::new(3, 7);
        assert_eq!(point.with_coord(Axis::Horizontal, 11), Point::new(11, 7));
        assert_eq!(point.with_coord(Axis::Vertical, -2), Point::new(3, -2));
    }

    #[test]
    fn test_size_span() {
        let size = Size::new(40, 12);
        assert_eq!(size.span(Axis::Horizontal), 40);
        assert_eq!(size.span(Axis::Vertical), 12);
    }

    #[test]
    fn test_size_scale_truncates() {
        assert_eq!(Size::new(9, 9).scale(0.5), Size::new(4, 4));
        assert_eq!(Size::new(20, 10).scale(2.0), Size::new(40, 20));
    }

    #[test]
    fn test_bounds_derived_edges() {
        let bounds = Bounds::new(10, 5, 40, 30);
        assert_eq!(bounds.right(), 50);
        assert_eq!(bounds.bottom(), 35);
        assert_eq!(bounds.end(Axis::Horizontal), bounds.right());
        assert_eq!(bounds.end(Axis::Vertical), bounds.bottom());
    }

    #[test]
    fn test_bounds_edges_saturate() {
        let bounds = Bounds::new(2_000_000_000, i32::MIN, 2_000_000_000, -1);
        assert_eq!(bounds.right(), i32::MAX);
        assert_eq!(bounds.bottom(), i32::MIN);
        assert_eq!(bounds.end(Axis::Horizontal), i32::MAX);
    }

    #[test]
    fn test_bounds_display() {
        assert_eq!(Bounds::new(1, 2, 3, 4).to_string(), "(1, 2) 3x4");
    }
}
