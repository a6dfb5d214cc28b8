//! Suffix links between explicit internal nodes.

use crate::edge::NodeId;

/// Maps a node spelling `aX` to the node spelling `X`.
///
/// A missing entry means "not known yet". The builder always fills in a
/// node's link before it needs to follow it.
#[derive(Debug, Clone, Default)]
pub(crate) struct SuffixLinks {
    links: Vec<Option<NodeId>>,
}

impl SuffixLinks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, node: NodeId) -> Option<NodeId> {
        self.links.get(node).copied().flatten()
    }

    pub(crate) fn set(&mut self, node: NodeId, target: NodeId) {
        if node >= self.links.len() {
            self.links.resize(node + 1, None);
        }
        self.links[node] = Some(target);
    }

    /// Follows the link out of `node` when the algorithm guarantees it exists.
    ///
    /// # Panics
    ///
    /// If `node` has no link yet.
    pub(crate) fn follow(&self, node: NodeId) -> NodeId {
        match self.get(node) {
            Some(target) => target,
            None => panic!("node {} has no suffix link", node),
        }
    }

    /// Every `(node, target)` pair, ordered by node.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(node, target)| target.map(|target| (node, target)))
    }

    pub(crate) fn len(&self) -> usize {
        self.links.iter().filter(|target| target.is_some()).count()
    }
}
