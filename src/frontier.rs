use crate::config::FrontierPolicy;
use crate::node::NodeId;
use crate::registry::NodeRegistry;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry {
    node_id: NodeId,
    heuristic: f64,
}

impl FrontierEntry {
    pub(crate) fn new(node_id: NodeId, heuristic: f64) -> Self {
        Self { node_id, heuristic }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so that `BinaryHeap` pops the smallest heuristic, and among equal
// heuristics the earliest discovered node.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .heuristic
            .partial_cmp(&self.heuristic)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

/// Unexpanded nodes waiting to be selected.
#[derive(Debug, Clone)]
pub(crate) enum Frontier {
    Heap(BinaryHeap<FrontierEntry>),
    Scan,
}

impl Frontier {
    pub(crate) fn new(policy: FrontierPolicy) -> Self {
        match policy {
            FrontierPolicy::BinaryHeap => Frontier::Heap(BinaryHeap::new()),
            FrontierPolicy::LinearScan => Frontier::Scan,
        }
    }

    /// Called once for every node inserted into the registry.
    pub(crate) fn push(&mut self, entry: FrontierEntry) {
        if let Frontier::Heap(heap) = self {
            heap.push(entry);
        }
    }

    /// Removes and returns the unexpanded node with the smallest heuristic.
    pub(crate) fn pop(&mut self, registry: &NodeRegistry) -> Option<NodeId> {
        match self {
            Frontier::Heap(heap) => {
                while let Some(entry) = heap.pop() {
                    let expanded = registry
                        .node(entry.node_id)
                        .map_or(true, |node| node.is_expanded());
                    if !expanded {
                        return Some(entry.node_id);
                    }
                }
                None
            }
            Frontier::Scan => {
                let mut best: Option<(NodeId, f64)> = None;
                for (id, node) in registry.iter() {
                    if node.is_expanded() {
                        continue;
                    }
                    match best {
                        Some((_, heuristic)) if node.heuristic() >= heuristic => (),
                        _ => best = Some((id, node.heuristic())),
                    }
                }
                best.map(|(id, _)| id)
            }
        }
    }
}
