//! Geometry primitives shared by the layout crates.
//!
//! Sizes and positions are `glam::Vec2` values indexed by axis, so the same
//! code path serves horizontal and vertical sizers.

use glam::Vec2;

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis
    Horizontal,
    /// The y axis
    Vertical,
}

impl Axis {
    /// Component index of this axis in a `Vec2` (0 for x, 1 for y).
    pub const fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }

    /// The perpendicular axis.
    pub const fn other(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Insets on the four sides of a sizer entry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Border {
    /// A border with no inset on any side.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a border from its four sides.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create a uniform border.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create a symmetric border.
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// A border that only insets the leading side of `axis` by `size`.
    pub fn along(axis: Axis, size: f32) -> Self {
        let mut border = Self::ZERO;
        *border.leading_mut(axis) = size;
        border
    }

    /// Leading inset on `axis` (left or top).
    pub fn leading(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Mutable leading inset on `axis`.
    pub fn leading_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::Horizontal => &mut self.left,
            Axis::Vertical => &mut self.top,
        }
    }

    /// Trailing inset on `axis` (right or bottom).
    pub fn trailing(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Sum of both insets on `axis`.
    pub fn total(&self, axis: Axis) -> f32 {
        self.leading(axis) + self.trailing(axis)
    }

    /// Offset from the outer corner to the inner top-left corner.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// The four sides in left, top, right, bottom order.
    pub fn sides(&self) -> [f32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}

/// Axis-aligned rectangle stored as its two corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from its corners.
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size)
    }

    pub fn top_left(&self) -> Vec2 {
        self.min
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.max
    }

    /// Get the size (may be negative for a degenerate rectangle).
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_other() {
        assert_eq!(Axis::Horizontal.other(), Axis::Vertical);
        assert_eq!(Axis::Vertical.other(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.index(), 0);
        assert_eq!(Axis::Vertical.index(), 1);
    }

    #[test]
    fn test_border_sides_by_axis() {
        let border = Border::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(border.leading(Axis::Horizontal), 1.0);
        assert_eq!(border.trailing(Axis::Horizontal), 3.0);
        assert_eq!(border.leading(Axis::Vertical), 2.0);
        assert_eq!(border.trailing(Axis::Vertical), 4.0);
        assert_eq!(border.total(Axis::Horizontal), 4.0);
        assert_eq!(border.total(Axis::Vertical), 6.0);
    }

    #[test]
    fn test_border_along() {
        assert_eq!(Border::along(Axis::Horizontal, 5.0), Border::new(5.0, 0.0, 0.0, 0.0));
        assert_eq!(Border::along(Axis::Vertical, 5.0), Border::new(0.0, 5.0, 0.0, 0.0));
    }

    #[test]
    fn test_rect_size() {
        let rect = Rect::from_origin_size(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0));
        assert_eq!(rect.bottom_right(), Vec2::new(110.0, 70.0));
        assert!((rect.width() - 100.0).abs() < 0.001);
        assert!((rect.height() - 50.0).abs() < 0.001);
    }
}
