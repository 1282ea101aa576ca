use super::Direction;
use crate::geometry::{Point, WorldPoint};

/// Neighbor table of a single hex, indexed by [`Direction`].
///
/// Slots hold the neighbor's location, never the neighbor itself; resolve them against
/// the [`Board`][super::Board] that owns both tiles.
pub type Neighbors = [Option<Point>; Direction::COUNT];

/// A single cell of a hex [`Board`][super::Board].
///
/// Location, center and neighbor links are fixed when the board is built.
/// `data` carries whatever per-tile state the game needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile<T = ()> {
    location: Point,
    center: WorldPoint,
    neighbors: Neighbors,
    pub data: T,
}

impl<T> Tile<T> {
    pub(crate) fn new(location: Point, center: WorldPoint, data: T) -> Tile<T> {
        Tile {
            location,
            center,
            neighbors: Neighbors::default(),
            data,
        }
    }

    /// Axial location of this tile; also its key in the board.
    #[inline]
    pub fn location(&self) -> Point {
        self.location
    }

    /// World position of this tile's center.
    #[inline]
    pub fn center(&self) -> WorldPoint {
        self.center
    }

    /// Location of the neighbor in the given direction, if there is one.
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Option<Point> {
        self.neighbors[direction.index()]
    }

    /// Iterate over the neighbors this tile actually has, clockwise from northeast.
    pub fn neighbors(&self) -> impl '_ + Iterator<Item = (Direction, Point)> {
        Direction::iter()
            .filter_map(move |direction| Some((direction, self.neighbor(direction)?)))
    }

    /// Number of neighbors; six for interior tiles, fewer on the boundary.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().flatten().count()
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Neighbors) {
        self.neighbors = neighbors;
    }
}

/// Compute the neighbor table of the tile at `location`.
///
/// Axial locations make the six candidates the same for every row; staggered rows
/// and shortened rows only differ in which candidates exist. A slot is filled only when
/// `exists` confirms its location, so a board with mismatched row lengths never links
/// to a missing cell.
pub(crate) fn resolve_neighbors(location: Point, exists: impl Fn(Point) -> bool) -> Neighbors {
    let mut neighbors = Neighbors::default();
    for direction in Direction::iter() {
        let candidate = location + direction;
        if exists(candidate) {
            neighbors[direction.index()] = Some(candidate);
        }
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_interior() {
        let neighbors = resolve_neighbors(Point::new(0, 0), |_| true);
        assert_eq!(neighbors[Direction::Northeast.index()], Some(Point::new(1, -1)));
        assert_eq!(neighbors[Direction::East.index()], Some(Point::new(1, 0)));
        assert_eq!(neighbors[Direction::Southeast.index()], Some(Point::new(0, 1)));
        assert_eq!(neighbors[Direction::Southwest.index()], Some(Point::new(-1, 1)));
        assert_eq!(neighbors[Direction::West.index()], Some(Point::new(-1, 0)));
        assert_eq!(neighbors[Direction::Northwest.index()], Some(Point::new(0, -1)));
    }

    #[test]
    fn test_resolve_skips_missing_cells() {
        let present: HashSet<_> = [Point::new(1, 0), Point::new(0, 1)].into_iter().collect();
        let neighbors = resolve_neighbors(Point::new(0, 0), |point| present.contains(&point));
        let found: Vec<_> = neighbors.iter().flatten().copied().collect();
        assert_eq!(found, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn test_tile_accessors() {
        let mut tile = Tile::new(Point::new(2, 3), WorldPoint::new(1.0, -1.0), 'x');
        assert_eq!(tile.neighbor_count(), 0);
        assert_eq!(tile.neighbor(Direction::East), None);

        let present = Point::new(3, 3);
        tile.set_neighbors(resolve_neighbors(tile.location(), |point| point == present));
        assert_eq!(tile.neighbor_count(), 1);
        assert_eq!(tile.neighbor(Direction::East), Some(present));
        assert_eq!(
            tile.neighbors().collect::<Vec<_>>(),
            vec![(Direction::East, present)]
        );
        assert_eq!(tile.data, 'x');
    }
}
