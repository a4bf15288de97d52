#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierPolicy {
    /// Min-heap keyed by heuristic then discovery order.
    BinaryHeap,
    /// Scans every registered node on each step.
    LinearScan,
}

impl Default for FrontierPolicy {
    fn default() -> Self {
        FrontierPolicy::BinaryHeap
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub allow_diagonal: bool,
    /// Skip a diagonal move unless both orthogonal cells beside it are open.
    pub prevent_corner_cutting: bool,
    pub allow_blocked_start: bool,
    pub frontier: FrontierPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            prevent_corner_cutting: false,
            allow_blocked_start: true,
            frontier: FrontierPolicy::BinaryHeap,
        }
    }
}

impl SearchConfig {
    pub fn orthogonal() -> Self {
        Self::default().with_diagonal(false)
    }

    pub fn with_diagonal(self, allow_diagonal: bool) -> Self {
        Self {
            allow_diagonal,
            ..self
        }
    }

    pub fn with_corner_cutting_prevented(self, prevent_corner_cutting: bool) -> Self {
        Self {
            prevent_corner_cutting,
            ..self
        }
    }

    pub fn with_blocked_start(self, allow_blocked_start: bool) -> Self {
        Self {
            allow_blocked_start,
            ..self
        }
    }

    pub fn with_frontier(self, frontier: FrontierPolicy) -> Self {
        Self { frontier, ..self }
    }
}
