use std::ops::{Add, AddAssign, Sub};

use super::hex::Direction;

/// Axial location of a hex on the board.
///
/// `x` is the column and `y` the row. Rows grow downward on screen. Columns are
/// skewed: every second row shifts the axial origin one column to the left, which
/// keeps neighbor arithmetic identical for even and odd rows.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-axial).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Re-key a staggered storage position into an axial location.
    ///
    /// Storage columns count from the left edge of each row; odd rows are drawn
    /// half a hex to the right.
    #[inline]
    pub fn from_offset(column: i32, row: i32) -> Point {
        Point::new(column - row.div_euclid(2), row)
    }

    /// The staggered storage position `(column, row)` of this location.
    #[inline]
    pub fn to_offset(self) -> (i32, i32) {
        (self.x + self.y.div_euclid(2), self.y)
    }

    /// `true` when this location sits in a staggered row.
    #[inline]
    pub fn is_odd_row(self) -> bool {
        self.y % 2 != 0
    }

    /// Iterate over the six locations adjacent to this one, clockwise from northeast.
    ///
    /// This is pure arithmetic; nothing guarantees those locations exist on any board.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Point> {
        Direction::iter().map(move |direction| self + direction)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl AddAssign<Direction> for Point {
    fn add_assign(&mut self, rhs: Direction) {
        let (dx, dy) = rhs.deltas();
        self.x += dx;
        self.y += dy;
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
