use super::{tile::resolve_neighbors, Board, GridGeometry, Tile};
use crate::geometry::Point;
use std::collections::HashMap;

/// Lays out every hex that fits on the ground and links each to its neighbors.
///
/// Construction happens in two passes: first every tile is placed, then every tile
/// resolves its neighbors against the complete set.
#[derive(Clone, Copy, Debug)]
pub struct GridBuilder {
    geometry: GridGeometry,
}

impl GridBuilder {
    pub fn new(geometry: GridGeometry) -> GridBuilder {
        GridBuilder { geometry }
    }

    /// Build a board whose tiles hold default data.
    pub fn build<T: Default>(&self) -> Board<T> {
        self.build_with(|_| T::default())
    }

    /// Build a board, initializing each tile's data from its location.
    ///
    /// Degenerate geometry produces an empty board.
    pub fn build_with<T>(&self, mut procedure: impl FnMut(Point) -> T) -> Board<T> {
        let geometry = self.geometry;
        let dimensions = geometry.grid_size();
        let equal_line_lengths = geometry.equal_line_lengths(dimensions);
        log::debug!(
            "laying out {} rows of up to {} hexes (hex {}, ground {})",
            dimensions.row_count,
            dimensions.columns_in_full_row,
            geometry.hex(),
            geometry.ground(),
        );

        if dimensions.is_empty() {
            log::warn!(
                "no {} hex fits on {} ground; the board is empty",
                geometry.hex(),
                geometry.ground()
            );
        }

        let mut tiles = HashMap::with_capacity(
            dimensions
                .columns_in_full_row
                .saturating_mul(dimensions.row_count),
        );
        for row in 0..dimensions.row_count {
            for column in 0..geometry.row_width(dimensions, row) {
                let (column, row) = (column as i32, row as i32);
                let location = Point::from_offset(column, row);
                let center = geometry.offset_to_world(column, row);
                log::trace!("placing hex {} at {}", location, center);
                tiles.insert(location, Tile::new(location, center, procedure(location)));
            }
        }

        let links: Vec<_> = tiles
            .keys()
            .map(|&location| {
                (
                    location,
                    resolve_neighbors(location, |point| tiles.contains_key(&point)),
                )
            })
            .collect();
        for (location, neighbors) in links {
            if let Some(tile) = tiles.get_mut(&location) {
                tile.set_neighbors(neighbors);
            }
        }

        log::debug!(
            "built board of {} hexes (equal line lengths: {})",
            tiles.len(),
            equal_line_lengths
        );

        Board::new(tiles, geometry, dimensions, equal_line_lengths)
    }
}

impl From<GridGeometry> for GridBuilder {
    fn from(geometry: GridGeometry) -> Self {
        GridBuilder::new(geometry)
    }
}
