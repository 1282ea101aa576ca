pub mod hex;
pub mod point;
pub mod world;

pub use hex::Direction;
pub use point::Point;
pub use world::{Size, WorldPoint};
