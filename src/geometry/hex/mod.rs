//! Hexagonal board geometry.
//!
//! Rows are horizontal and every second row is staggered half a hex to the right.
//! Tiles are keyed by axial location; see [`Point`][crate::geometry::Point].
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

mod board;
mod builder;
pub mod direction;
pub mod layout;
pub mod tile;

pub use board::Board;
pub use builder::GridBuilder;
pub use direction::Direction;
pub use layout::{compute_grid_size, GridDimensions, GridGeometry, EPSILON, ROW_SPACING};
pub use tile::Tile;
