/// Direction from a hex to one of its six neighbors.
///
/// Rows are horizontal, so there is no north or south neighbor.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("ne")]
    Northeast,
    #[display("e")]
    East,
    #[display("se")]
    Southeast,
    #[display("sw")]
    Southwest,
    #[display("w")]
    West,
    #[display("nw")]
    Northwest,
}

impl Direction {
    /// Number of neighbor slots around a hex.
    pub const COUNT: usize = 6;

    /// Iterate through all `Direction`s, clockwise from `Northeast`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::Northeast), |direction| {
            use Direction::*;

            match direction {
                Northeast => Some(East),
                East => Some(Southeast),
                Southeast => Some(Southwest),
                Southwest => Some(West),
                West => Some(Northwest),
                Northwest => None,
            }
        })
    }

    /// Axial `(dx, dy)` step taken by moving one hex in this direction.
    ///
    /// `dy` is positive moving down the board.
    pub fn deltas(self) -> (i32, i32) {
        match self {
            Direction::Northeast => (1, -1),
            Direction::East => (1, 0),
            Direction::Southeast => (0, 1),
            Direction::Southwest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::Northwest => (0, -1),
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Northeast => Direction::Southwest,
            Direction::East => Direction::West,
            Direction::Southeast => Direction::Northwest,
            Direction::Southwest => Direction::Northeast,
            Direction::West => Direction::East,
            Direction::Northwest => Direction::Southeast,
        }
    }

    /// Slot of this direction in a neighbor table.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
