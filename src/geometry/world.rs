use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A position in world space.
///
/// World `y` grows upward, so rows of the board descend as `y` shrinks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, parse_display::Display)]
#[display("({x}, {y})")]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> WorldPoint {
        WorldPoint { x, y }
    }

    /// Euclidean distance between two world positions.
    pub fn distance(self, other: WorldPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f32, f32)> for WorldPoint {
    fn from((x, y): (f32, f32)) -> Self {
        WorldPoint::new(x, y)
    }
}

impl Add for WorldPoint {
    type Output = WorldPoint;

    fn add(self, rhs: WorldPoint) -> Self::Output {
        WorldPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for WorldPoint {
    type Output = WorldPoint;

    fn sub(self, rhs: WorldPoint) -> Self::Output {
        WorldPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Extent of a rectangle in world units: the bounds of a hex, or of the ground it is laid on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, parse_display::Display)]
#[display("{width}x{height}")]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Size {
        Size { width, height }
    }

    /// `true` when both extents are finite and strictly positive.
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
