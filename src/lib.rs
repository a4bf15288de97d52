//! Greedy best-first search over 2D occupancy grids.
//!
//! Nodes are discovered lazily as their neighbours are expanded, and the
//! node nearest the goal in a straight line is always expanded next.

mod config;
mod error;
mod frontier;
mod grid;
mod metadata;
mod node;
mod path;
mod registry;
mod search;
pub mod world;

pub use config::*;
pub use error::*;
pub use grid::*;
pub use metadata::*;
pub use node::{euclidean_distance, Node, NodeId};
pub use path::{direction_between, Path, PathDirections, PathWalk};
pub use registry::*;
pub use search::*;

pub use direction::Direction;
pub use grid_2d::{Coord, Grid, Size};

#[cfg(test)]
mod tests;
