use crate::error::{Error, InternalError};
use crate::registry::NodeRegistry;
use direction::Direction;
use grid_2d::Coord;
use std::convert::TryFrom;
use std::fmt;
use std::slice;

/// Route from start to goal, both inclusive. Never empty, and each
/// coordinate neighbours the one before it.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(try_from = "Vec<Coord>", into = "Vec<Coord>")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }

    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    pub fn goal(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Number of moves. Zero when start and goal coincide.
    pub fn len(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn directions(&self) -> PathDirections<'_> {
        PathDirections {
            windows: self.coords.windows(2),
        }
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = Error;

    fn try_from(coords: Vec<Coord>) -> Result<Self, Self::Error> {
        if coords.is_empty() {
            return Err(Error::EmptyPath);
        }
        if let Some(index) = coords
            .windows(2)
            .position(|pair| direction_between(pair[0], pair[1]).is_none())
        {
            return Err(Error::NonAdjacentStep { index: index + 1 });
        }
        Ok(Self { coords })
    }
}

impl From<Path> for Vec<Coord> {
    fn from(path: Path) -> Self {
        path.coords
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}]", coord.x, coord.y)?;
        }
        write!(f, "]")
    }
}

/// The direction of a single move, if `to` is one of the eight cells
/// around `from`.
pub fn direction_between(from: Coord, to: Coord) -> Option<Direction> {
    let direction = match (to.x - from.x, to.y - from.y) {
        (0, -1) => Direction::North,
        (1, -1) => Direction::NorthEast,
        (1, 0) => Direction::East,
        (1, 1) => Direction::SouthEast,
        (0, 1) => Direction::South,
        (-1, 1) => Direction::SouthWest,
        (-1, 0) => Direction::West,
        (-1, -1) => Direction::NorthWest,
        _ => return None,
    };
    Some(direction)
}

pub struct PathDirections<'a> {
    windows: slice::Windows<'a, Coord>,
}

impl<'a> Iterator for PathDirections<'a> {
    type Item = Direction;
    fn next(&mut self) -> Option<Self::Item> {
        let window = self.windows.next()?;
        direction_between(window[0], window[1])
    }
}

/// Replays a list of moves from a starting coordinate, yielding each
/// coordinate reached along with the move that reached it.
pub struct PathWalk<'a> {
    current_coord: Coord,
    directions: slice::Iter<'a, Direction>,
}

impl<'a> PathWalk<'a> {
    pub fn new(start: Coord, path: &'a [Direction]) -> Self {
        Self {
            current_coord: start,
            directions: path.iter(),
        }
    }
}

impl<'a> Iterator for PathWalk<'a> {
    type Item = (Coord, Direction);
    fn next(&mut self) -> Option<Self::Item> {
        let &direction = self.directions.next()?;
        self.current_coord = self.current_coord + direction.coord();
        Some((self.current_coord, direction))
    }
}

/// Follows predecessor links back from the goal node to the start node.
pub(crate) fn reconstruct(registry: &NodeRegistry, goal: Coord) -> Result<Path, InternalError> {
    let mut node = registry.get(goal).ok_or(InternalError::MissingGoal)?;
    let mut coords = vec![node.coord()];

    // A chain longer than the registry must revisit a node.
    let max_steps = registry.len();
    let mut steps = 0;

    while let Some(predecessor) = node.predecessor() {
        if steps >= max_steps {
            return Err(InternalError::PredecessorCycle { steps });
        }
        steps += 1;
        node = registry
            .node(predecessor)
            .ok_or(InternalError::DanglingPredecessor)?;
        coords.push(node.coord());
    }

    coords.reverse();
    Ok(Path { coords })
}
