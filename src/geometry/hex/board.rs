use super::{Direction, GridDimensions, GridGeometry, Tile};
use crate::geometry::{Point, WorldPoint};
use itertools::Itertools;
use std::{collections::HashMap, fmt};

/// A hex board: every tile that fits on the ground, keyed by axial location.
///
/// Built once by [`GridBuilder`][super::GridBuilder]. Its topology never changes
/// afterwards; only the per-tile `data` can be mutated.
///
/// Lookups outside the board return `None` rather than panicking, so callers can
/// probe for the boundary freely.
#[derive(Clone, Debug)]
pub struct Board<T = ()> {
    tiles: HashMap<Point, Tile<T>>,
    geometry: GridGeometry,
    dimensions: GridDimensions,
    equal_line_lengths: bool,
}

impl<T> Board<T> {
    pub(crate) fn new(
        tiles: HashMap<Point, Tile<T>>,
        geometry: GridGeometry,
        dimensions: GridDimensions,
        equal_line_lengths: bool,
    ) -> Board<T> {
        Board {
            tiles,
            geometry,
            dimensions,
            equal_line_lengths,
        }
    }

    /// Geometry this board was laid out with.
    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// `false` when staggered rows are one tile shorter than full rows.
    #[inline]
    pub fn equal_line_lengths(&self) -> bool {
        self.equal_line_lengths
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.tiles.contains_key(&point)
    }

    pub fn get(&self, point: Point) -> Option<&Tile<T>> {
        self.tiles.get(&point)
    }

    /// Mutable access to a tile. Only its `data` can change.
    pub fn get_mut(&mut self, point: Point) -> Option<&mut Tile<T>> {
        self.tiles.get_mut(&point)
    }

    /// Iterate over the locations and tiles of this board, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Tile<T>)> {
        self.tiles.iter().map(|(&point, tile)| (point, tile))
    }

    /// Iterate over the locations and tiles of this board, with mutable access to the tiles.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Point, &mut Tile<T>)> {
        self.tiles.iter_mut().map(|(&point, tile)| (point, tile))
    }

    /// Iterate over the locations on this board, in no particular order.
    pub fn points(&self) -> impl '_ + Iterator<Item = Point> {
        self.tiles.keys().copied()
    }

    /// The tile adjacent to `point` in the given direction.
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<&Tile<T>> {
        self.get(self.get(point)?.neighbor(direction)?)
    }

    /// Iterate over the tiles adjacent to `point`.
    ///
    /// Empty when `point` is not on the board.
    pub fn neighbors(&self, point: Point) -> impl '_ + Iterator<Item = &Tile<T>> {
        self.get(point)
            .into_iter()
            .flat_map(|tile| tile.neighbors())
            .filter_map(move |(_, neighbor)| self.get(neighbor))
    }

    /// The tile under a world position, if any.
    pub fn tile_at_world(&self, position: WorldPoint) -> Option<&Tile<T>> {
        self.get(self.geometry.world_to_grid(position))
    }

    /// Follow a route of neighbor links from `from`.
    ///
    /// Returns the final location, or `None` if the start or any step leaves the board.
    pub fn walk(
        &self,
        from: Point,
        directions: impl IntoIterator<Item = Direction>,
    ) -> Option<Point> {
        let mut current = self.get(from)?.location();
        for direction in directions {
            current = self.get(current)?.neighbor(direction)?;
        }
        Some(current)
    }
}

/// Draws the board one line per row, staggered rows indented by one column.
///
/// ```notrust
/// o o o
///  o o
/// o o o
/// ```
impl<T> fmt::Display for Board<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimensions.row_count as i32 {
            let line = (0..self.dimensions.columns_in_full_row as i32)
                .map(|column| {
                    if self.contains(Point::from_offset(column, row)) {
                        'o'
                    } else {
                        '.'
                    }
                })
                .join(" ");
            let indent = if row % 2 != 0 { " " } else { "" };
            writeln!(f, "{}{}", indent, line.trim_end_matches(['.', ' ']))?;
        }
        Ok(())
    }
}
