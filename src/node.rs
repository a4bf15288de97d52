use crate::config::SearchConfig;
use crate::error::InternalError;
use crate::grid::OccupancyGrid;
use crate::registry::NodeRegistry;
use direction::Direction;
use grid_2d::Coord;

/// Neighbours are discovered in this order. Discovery order decides
/// which of two equally distant nodes is selected first.
pub(crate) const CARDINAL_DISCOVERY_ORDER: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

pub(crate) const ORDINAL_DISCOVERY_ORDER: [Direction; 4] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
];

/// Index of a node in its registry. Ids are handed out in discovery order.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Straight-line distance between two cells.
pub fn euclidean_distance(a: Coord, b: Coord) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

#[derive(Debug, Clone)]
pub struct Node {
    coord: Coord,
    predecessor: Option<NodeId>,
    heuristic: f64,
    expanded: bool,
}

impl Node {
    pub(crate) fn new(coord: Coord, predecessor: Option<NodeId>, goal: Coord) -> Self {
        Self {
            coord,
            predecessor,
            heuristic: euclidean_distance(coord, goal),
            expanded: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The node this one was first discovered from. `None` for the start.
    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn mark_expanded(&mut self) {
        self.expanded = true;
    }

    #[cfg(test)]
    pub(crate) fn set_predecessor(&mut self, predecessor: Option<NodeId>) {
        self.predecessor = predecessor;
    }
}

fn corner_is_clear<G: OccupancyGrid>(grid: &G, from: Coord, offset: Coord) -> bool {
    grid.is_open(Coord::new(from.x + offset.x, from.y))
        && grid.is_open(Coord::new(from.x, from.y + offset.y))
}

/// Discovers the neighbours of selected nodes.
pub(crate) struct Expander<'a, G> {
    pub(crate) grid: &'a G,
    pub(crate) goal: Coord,
    pub(crate) config: SearchConfig,
}

impl<'a, G: OccupancyGrid> Expander<'a, G> {
    /// Registers every open neighbour of `current` that has not been seen
    /// yet, with `current` as its predecessor. Nodes already in the registry
    /// are left untouched. Newly created ids are appended to `discovered`.
    pub(crate) fn expand(
        &self,
        registry: &mut NodeRegistry,
        current: NodeId,
        discovered: &mut Vec<NodeId>,
    ) -> Result<(), InternalError> {
        let current_coord = registry
            .node(current)
            .map(Node::coord)
            .ok_or(InternalError::MissingNode)?;

        let ordinal: &[Direction] = if self.config.allow_diagonal {
            &ORDINAL_DISCOVERY_ORDER
        } else {
            &[]
        };

        for &direction in CARDINAL_DISCOVERY_ORDER.iter().chain(ordinal) {
            let offset = direction.coord();
            let neighbour_coord = current_coord + offset;

            if !self.grid.is_open(neighbour_coord) {
                continue;
            }

            if direction.is_ordinal()
                && self.config.prevent_corner_cutting
                && !corner_is_clear(self.grid, current_coord, offset)
            {
                continue;
            }

            if let Some(id) = registry.discover(neighbour_coord, current, self.goal) {
                discovered.push(id);
            }
        }

        Ok(())
    }
}
