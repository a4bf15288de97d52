use crate::config::SearchConfig;
use crate::error::{Error, InternalError};
use crate::frontier::{Frontier, FrontierEntry};
use crate::grid::{Cell, OccupancyGrid};
use crate::metadata::SearchMetadata;
use crate::node::{Expander, Node, NodeId};
use crate::path::{self, Path};
use crate::registry::NodeRegistry;
use grid_2d::Coord;
use tracing::{debug, trace, warn};

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Found,
    Exhausted,
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(tag = "outcome", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found {
        path: Path,
        metadata: SearchMetadata,
    },
    /// Every node reachable from the start was expanded without selecting
    /// the goal.
    Exhausted { metadata: SearchMetadata },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        match self {
            SearchOutcome::Found { .. } => true,
            SearchOutcome::Exhausted { .. } => false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    pub fn metadata(&self) -> SearchMetadata {
        match self {
            SearchOutcome::Found { metadata, .. } | SearchOutcome::Exhausted { metadata } => {
                *metadata
            }
        }
    }
}

/// A single greedy best-first search from `start` towards `goal`.
///
/// Each step selects the unexpanded node closest to the goal in a straight
/// line and discovers its neighbours. Distance travelled so far plays no
/// part in the selection, so the resulting path is not necessarily the
/// shortest one. The registry is owned by the run and dropped with it.
pub struct SearchRun<'a, G> {
    expander: Expander<'a, G>,
    start: Coord,
    goal: Coord,
    registry: NodeRegistry,
    frontier: Frontier,
    discovered: Vec<NodeId>,
    num_nodes_expanded: usize,
    state: SearchState,
}

impl<'a, G: OccupancyGrid> SearchRun<'a, G> {
    pub fn new(grid: &'a G, start: Coord, goal: Coord, config: SearchConfig) -> Result<Self, Error> {
        match grid.cell(start) {
            None => return Err(Error::StartOutsideGrid),
            Some(Cell::Blocked) if !config.allow_blocked_start => return Err(Error::StartBlocked),
            Some(_) => (),
        }
        if !grid.contains(goal) {
            return Err(Error::GoalOutsideGrid);
        }

        let mut registry = NodeRegistry::new();
        let mut frontier = Frontier::new(config.frontier);
        let start_id = registry.insert_start(start, goal);
        if let Some(node) = registry.node(start_id) {
            frontier.push(FrontierEntry::new(start_id, node.heuristic()));
        }

        Ok(Self {
            expander: Expander { grid, goal, config },
            start,
            goal,
            registry,
            frontier,
            discovered: Vec::new(),
            num_nodes_expanded: 0,
            state: SearchState::Running,
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn metadata(&self) -> SearchMetadata {
        SearchMetadata {
            num_nodes_discovered: self.registry.len(),
            num_nodes_expanded: self.num_nodes_expanded,
        }
    }

    /// Advances the search by one selection. Does nothing once the search
    /// has finished.
    pub fn step(&mut self) -> Result<SearchState, Error> {
        if self.state != SearchState::Running {
            return Ok(self.state);
        }

        let current = match self.frontier.pop(&self.registry) {
            Some(current) => current,
            None => {
                self.state = SearchState::Exhausted;
                return Ok(self.state);
            }
        };
        let current_coord = self
            .registry
            .node(current)
            .map(Node::coord)
            .ok_or(InternalError::MissingNode)?;

        if current_coord == self.goal {
            self.state = SearchState::Found;
            return Ok(self.state);
        }

        self.discovered.clear();
        self.expander
            .expand(&mut self.registry, current, &mut self.discovered)?;
        self.registry
            .node_mut(current)
            .ok_or(InternalError::MissingNode)?
            .mark_expanded();
        self.num_nodes_expanded += 1;

        trace!(
            x = current_coord.x,
            y = current_coord.y,
            discovered = self.discovered.len(),
            "expanded node"
        );

        for &id in &self.discovered {
            let node = self.registry.node(id).ok_or(InternalError::MissingNode)?;
            self.frontier.push(FrontierEntry::new(id, node.heuristic()));
        }

        Ok(self.state)
    }

    /// Steps until the goal is selected or no candidates remain.
    pub fn run(mut self) -> Result<SearchOutcome, Error> {
        debug!(
            start_x = self.start.x,
            start_y = self.start.y,
            goal_x = self.goal.x,
            goal_y = self.goal.y,
            "starting greedy search"
        );

        loop {
            let state = self.step().map_err(|e| {
                warn!(error = %e, "search step failed");
                e
            })?;
            match state {
                SearchState::Running => continue,
                SearchState::Found => break,
                SearchState::Exhausted => {
                    let metadata = self.metadata();
                    debug!(
                        discovered = metadata.num_nodes_discovered,
                        expanded = metadata.num_nodes_expanded,
                        "search exhausted"
                    );
                    return Ok(SearchOutcome::Exhausted { metadata });
                }
            }
        }

        let metadata = self.metadata();
        let path = path::reconstruct(&self.registry, self.goal).map_err(|e| {
            warn!(error = %e, "failed to reconstruct path");
            Error::from(e)
        })?;
        debug!(
            length = path.len(),
            discovered = metadata.num_nodes_discovered,
            expanded = metadata.num_nodes_expanded,
            "path found"
        );
        Ok(SearchOutcome::Found { path, metadata })
    }
}

/// Runs a complete greedy best-first search.
pub fn greedy_best_first_search<G: OccupancyGrid>(
    grid: &G,
    start: Coord,
    goal: Coord,
    config: SearchConfig,
) -> Result<SearchOutcome, Error> {
    SearchRun::new(grid, start, goal, config)?.run()
}
