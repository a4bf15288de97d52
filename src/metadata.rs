#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetadata {
    /// Nodes inserted into the registry, including the start.
    pub num_nodes_discovered: usize,
    /// Nodes whose neighbours were discovered. The goal is never expanded.
    pub num_nodes_expanded: usize,
}
