pub mod config;
pub mod geometry;

pub use config::GridConfig;
pub use geometry::hex::{Board, GridBuilder, GridGeometry};
