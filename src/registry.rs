use crate::node::{Node, NodeId};
use grid_2d::Coord;
use std::collections::HashMap;

/// Every node discovered during one search, at most one per coordinate.
///
/// Nodes live in an arena and refer to their predecessor by `NodeId`.
/// Nodes are only ever appended; a node's predecessor is fixed when it is
/// inserted.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    index: HashMap<Coord, NodeId>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    fn insert(&mut self, coord: Coord, predecessor: Option<NodeId>, goal: Coord) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(coord, predecessor, goal));
        self.index.insert(coord, id);
        id
    }

    /// Registers the root of the search. Returns the existing id if the
    /// coordinate is already known.
    pub(crate) fn insert_start(&mut self, coord: Coord, goal: Coord) -> NodeId {
        match self.index.get(&coord) {
            Some(&id) => id,
            None => self.insert(coord, None, goal),
        }
    }

    /// Creates a node for `coord` unless one already exists. Returns the id
    /// of the new node, or `None` if the coordinate was already known.
    pub(crate) fn discover(
        &mut self,
        coord: Coord,
        predecessor: NodeId,
        goal: Coord,
    ) -> Option<NodeId> {
        if self.index.contains_key(&coord) {
            None
        } else {
            Some(self.insert(coord, Some(predecessor), goal))
        }
    }

    pub fn id_of(&self, coord: Coord) -> Option<NodeId> {
        self.index.get(&coord).cloned()
    }

    pub fn get(&self, coord: Coord) -> Option<&Node> {
        self.id_of(coord).and_then(|id| self.node(id))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}
