//! The transition function of the tree: edges keyed by `(node, first symbol)`.
//!
//! Nodes are plain integer handles. Node `0` is the root and new nodes are
//! numbered in creation order; nothing is ever freed while the tree lives.

use std::collections::HashMap;

use crate::config::Symbol;
use crate::store::Symbols;

/// Handle of a node in the tree arena.
pub(crate) type NodeId = usize;

/// The root is always explicit and always node `0`.
pub(crate) const ROOT: NodeId = 0;

/// Where an edge's label stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    /// A leaf edge. It ends wherever the input currently ends, so every leaf
    /// grows by one symbol each phase without being touched.
    Open,
    /// Inclusive index of the last symbol on the edge.
    Closed(usize),
}

/// An edge from `start_node` to `end_node` labelled with the input symbols
/// `first..=last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) start_node: NodeId,
    pub(crate) end_node: NodeId,
    pub(crate) first: usize,
    pub(crate) last: End,
}

impl Edge {
    /// Resolves the last index of the label given the last consumed symbol.
    pub(crate) fn last_index(&self, current_end: usize) -> usize {
        match self.last {
            End::Open => current_end,
            End::Closed(last) => last,
        }
    }

    /// Number of symbols on the edge.
    pub(crate) fn span(&self, current_end: usize) -> usize {
        self.last_index(current_end) + 1 - self.first
    }
}

/// Per-node maps from first symbol to outgoing edge.
///
/// Keeping one small map per node (instead of one map keyed by the pair)
/// lets the query layer walk a node's children directly.
#[derive(Debug, Clone)]
pub(crate) struct EdgeTable<T> {
    children: Vec<HashMap<T, Edge>>,
    edge_count: usize,
}

impl<T: Symbol> EdgeTable<T> {
    /// A table holding just the root.
    pub(crate) fn new() -> Self {
        Self {
            children: vec![HashMap::new()],
            edge_count: 0,
        }
    }

    /// Allocates the next node handle.
    pub(crate) fn add_node(&mut self) -> NodeId {
        self.children.push(HashMap::new());
        self.children.len() - 1
    }

    pub(crate) fn node_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(crate) fn find(&self, node: NodeId, symbol: T) -> Option<Edge> {
        self.children[node].get(&symbol).copied()
    }

    /// Like [`find`][Self::find], for lookups the tree's structure guarantees.
    ///
    /// # Panics
    ///
    /// If there is no such edge, since the tree is corrupt at that point.
    pub(crate) fn find_expected(&self, node: NodeId, symbol: T) -> Edge {
        match self.find(node, symbol) {
            Some(edge) => edge,
            None => panic!("no edge out of node {} starting with {:?}", node, symbol),
        }
    }

    /// Adds `edge` under the symbol its label starts with.
    ///
    /// # Panics
    ///
    /// If `edge.start_node` already has an edge starting with that symbol.
    pub(crate) fn insert(&mut self, edge: Edge, symbols: &Symbols<T>) {
        let key = symbols.get(edge.first);
        let previous = self.children[edge.start_node].insert(key, edge);
        assert!(
            previous.is_none(),
            "node {} already has an edge starting with {:?}",
            edge.start_node,
            key
        );
        self.edge_count += 1;
    }

    pub(crate) fn remove(&mut self, node: NodeId, symbol: T) -> Option<Edge> {
        let removed = self.children[node].remove(&symbol);
        if removed.is_some() {
            self.edge_count -= 1;
        }
        removed
    }

    /// Splits `edge` after its first `offset` symbols, returning the new node
    /// placed between its two halves.
    ///
    /// The head keeps the original start node and first index. The tail hangs
    /// off the new node and keeps the original end node and last index, so an
    /// open edge stays open.
    pub(crate) fn split(&mut self, edge: Edge, offset: usize, symbols: &Symbols<T>) -> NodeId {
        assert!(offset > 0, "cannot split an edge before its first symbol");
        if let End::Closed(last) = edge.last {
            assert!(
                edge.first + offset <= last,
                "split offset {} is past the end of edge {:?}",
                offset,
                edge
            );
        }

        let removed = self.remove(edge.start_node, symbols.get(edge.first));
        assert_eq!(removed, Some(edge), "split an edge that isn't in the table");

        let middle = self.add_node();
        self.insert(
            Edge {
                start_node: edge.start_node,
                end_node: middle,
                first: edge.first,
                last: End::Closed(edge.first + offset - 1),
            },
            symbols,
        );
        self.insert(
            Edge {
                start_node: middle,
                end_node: edge.end_node,
                first: edge.first + offset,
                last: edge.last,
            },
            symbols,
        );

        middle
    }

    /// Outgoing edges of `node`, in no particular order.
    pub(crate) fn edges_from(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.children[node].values()
    }

    pub(crate) fn is_leaf(&self, node: NodeId) -> bool {
        self.children[node].is_empty()
    }

    /// Every edge in the table, in no particular order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.children.iter().flat_map(|edges| edges.values())
    }
}
