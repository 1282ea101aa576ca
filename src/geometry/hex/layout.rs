use crate::geometry::{Point, Size, WorldPoint};

/// Tolerance added before truncating a count of hex-steps, so that exact multiples of the
/// hex size survive accumulated floating-point error.
pub const EPSILON: f32 = 0.00005;

/// Vertical distance between row centers, as a fraction of hex height.
///
/// Adjacent rows overlap by a quarter of a hex.
pub const ROW_SPACING: f32 = 0.75;

/// How many hexes fit on the ground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    /// Number of hexes in a full (even) row.
    pub columns_in_full_row: usize,
    /// Number of rows.
    pub row_count: usize,
}

impl GridDimensions {
    /// `true` when no hex fits at all.
    pub fn is_empty(&self) -> bool {
        self.columns_in_full_row == 0 || self.row_count == 0
    }
}

/// Compute how many hexes of the given size fit on the given ground.
///
/// The row count comes from the number of whole hex heights fitting in the ground,
/// scaled by the 2/3 packing ratio. An even row count whose grid would overhang the
/// ground by half a step loses its last row.
///
/// Non-positive or non-finite hex sizes and non-finite ground sizes produce zero dimensions.
pub fn compute_grid_size(
    ground_width: f32,
    ground_height: f32,
    hex_width: f32,
    hex_height: f32,
) -> GridDimensions {
    if !Size::new(hex_width, hex_height).is_positive()
        || !ground_width.is_finite()
        || !ground_height.is_finite()
    {
        return GridDimensions::default();
    }

    let side_length = hex_height;
    let side_count = (ground_height / side_length + EPSILON) as i64;
    // `side_count * 2 / 3` without overflowing near the top of the range
    let mut row_count = side_count / 3 * 2 + side_count % 3 * 2 / 3;
    if row_count % 2 == 0 && (side_count as f32 + 0.5) * side_length > ground_height {
        row_count -= 1;
    }

    let columns = (ground_width / hex_width) as i64;

    GridDimensions {
        columns_in_full_row: clamp_count(columns),
        row_count: clamp_count(row_count),
    }
}

fn clamp_count(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}

/// Stateless mapping between world space and grid space.
///
/// The grid is anchored at the top left of the ground: the center of hex `(0, 0)` sits
/// half a hex in from the ground's left and top edges, with the ground centered on the
/// world origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridGeometry {
    hex: Size,
    ground: Size,
    init_pos: WorldPoint,
}

impl GridGeometry {
    pub fn new(hex: Size, ground: Size) -> GridGeometry {
        let init_pos = WorldPoint::new(
            hex.width / 2.0 - ground.width / 2.0,
            hex.height / 2.0 + ground.height / 2.0,
        );
        GridGeometry {
            hex,
            ground,
            init_pos,
        }
    }

    /// Bounds of a single hex.
    #[inline]
    pub fn hex(&self) -> Size {
        self.hex
    }

    /// Bounds of the ground the grid is laid on.
    #[inline]
    pub fn ground(&self) -> Size {
        self.ground
    }

    /// World position of the center of storage cell `(0, 0)`.
    #[inline]
    pub fn init_pos(&self) -> WorldPoint {
        self.init_pos
    }

    /// `true` when these sizes cannot host a single hex.
    pub fn is_degenerate(&self) -> bool {
        self.grid_size().is_empty()
    }

    /// Horizontal shift of a row: staggered rows move right by half a hex.
    fn row_offset(&self, row: i32) -> f32 {
        if row % 2 != 0 {
            self.hex.width / 2.0
        } else {
            0.0
        }
    }

    /// Staggered storage position `(column, row)` nearest to a world position.
    ///
    /// Rounds to the nearest cell rather than truncating, so positions read back from
    /// placed objects map to the cell they were placed in. Positions exactly between two
    /// cells go to the even one.
    pub fn world_to_offset(&self, position: WorldPoint) -> (i32, i32) {
        let row_step = self.hex.height * ROW_SPACING;
        let row = ((self.init_pos.y - position.y) / row_step).round_ties_even() as i32;
        let offset = self.row_offset(row);
        let column = (position.x - self.init_pos.x - offset) / self.hex.width;
        let column = column.round_ties_even() as i32;
        (column, row)
    }

    /// World position of the center of staggered storage cell `(column, row)`.
    pub fn offset_to_world(&self, column: i32, row: i32) -> WorldPoint {
        let x = column as f32 * self.hex.width + self.init_pos.x + self.row_offset(row);
        let y = self.init_pos.y - row as f32 * self.hex.height * ROW_SPACING;
        WorldPoint::new(x, y)
    }

    /// Axial location of the hex nearest to a world position.
    ///
    /// The location need not exist on any board; look it up to find out.
    pub fn world_to_grid(&self, position: WorldPoint) -> Point {
        let (column, row) = self.world_to_offset(position);
        Point::from_offset(column, row)
    }

    /// World position of the center of the hex at an axial location.
    pub fn grid_to_world(&self, point: Point) -> WorldPoint {
        let (column, row) = point.to_offset();
        self.offset_to_world(column, row)
    }

    /// How many hexes fit on the ground.
    pub fn grid_size(&self) -> GridDimensions {
        compute_grid_size(
            self.ground.width,
            self.ground.height,
            self.hex.width,
            self.hex.height,
        )
    }

    /// `true` when a full row plus the half-hex stagger still fits on the ground,
    /// so staggered rows keep every column.
    ///
    /// Evaluated in double precision: in single precision exact fits such as
    /// `3.5 * 0.1 <= 0.35` round the other way.
    pub fn equal_line_lengths(&self, dimensions: GridDimensions) -> bool {
        (dimensions.columns_in_full_row as f64 + 0.5) * f64::from(self.hex.width)
            <= f64::from(self.ground.width)
    }

    /// Number of hexes in the given row.
    ///
    /// Staggered rows that would overhang the ground lose their last column.
    pub fn row_width(&self, dimensions: GridDimensions, row: usize) -> usize {
        let width = dimensions.columns_in_full_row;
        if row % 2 != 0 && !self.equal_line_lengths(dimensions) {
            width.saturating_sub(1)
        } else {
            width
        }
    }
}
