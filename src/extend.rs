//! The extension engine: one phase of Ukkonen's algorithm per input symbol.
//!
//! Each phase adds the next symbol to every suffix seen so far. Leaf edges are
//! open, so suffixes that already end at a leaf are extended for free (rule 1).
//! The remaining suffixes are visited from the longest down, starting at the
//! active point: each either gets a new leaf (rule 2, splitting an edge when
//! the active point is mid-edge) or is found to already contain the symbol,
//! which ends the phase (rule 3). Suffix links move the active point from one
//! suffix to the next, and canonization skips whole edges by length so the
//! total work stays linear.

use log::trace;

use crate::config::Symbol;
use crate::edge::{Edge, EdgeTable, End, NodeId, ROOT};
use crate::link::SuffixLinks;
use crate::store::Symbols;

/// Where the next extension happens.
///
/// The symbols `first..end` hang below `node`. When that range is empty the
/// point is explicit and sits on `node` itself. Otherwise it is implicit and
/// sits partway along the edge out of `node` that starts with the symbol at
/// `first`.
///
/// `first` may briefly run one past `end` after the last suffix of a phase
/// has been given a leaf at the root. The point is explicit then too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActivePoint {
    pub(crate) node: NodeId,
    pub(crate) first: usize,
    /// One past the last index of the range.
    pub(crate) end: usize,
}

impl ActivePoint {
    fn is_explicit(&self) -> bool {
        self.first >= self.end
    }

    /// Number of symbols below `node`.
    fn len(&self) -> usize {
        self.end.saturating_sub(self.first)
    }
}

/// Build state carried from one phase to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BuilderState {
    pub(crate) active: ActivePoint,
    /// Index of the last symbol consumed. Every open edge ends here.
    pub(crate) current_end: usize,
}

impl BuilderState {
    fn new() -> Self {
        Self {
            active: ActivePoint {
                node: ROOT,
                first: 0,
                end: 0,
            },
            current_end: 0,
        }
    }
}

/// Owns the tables while they are being built.
pub(crate) struct Extender<'a, T> {
    symbols: &'a Symbols<T>,
    edges: EdgeTable<T>,
    links: SuffixLinks,
    state: BuilderState,
}

impl<'a, T: Symbol> Extender<'a, T> {
    pub(crate) fn new(symbols: &'a Symbols<T>) -> Self {
        Self {
            symbols,
            edges: EdgeTable::new(),
            links: SuffixLinks::new(),
            state: BuilderState::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> BuilderState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn edges(&self) -> &EdgeTable<T> {
        &self.edges
    }

    #[cfg(test)]
    pub(crate) fn links(&self) -> &SuffixLinks {
        &self.links
    }

    /// Runs the phase for the symbol at `index`.
    ///
    /// # Panics
    ///
    /// If `index` isn't the next unconsumed symbol, or if the tables turn out
    /// to be inconsistent (an expected edge or suffix link is missing).
    pub(crate) fn extend(&mut self, index: usize) {
        assert_eq!(
            index, self.state.active.end,
            "symbols must be consumed in order"
        );
        assert!(index < self.symbols.len(), "index {} is past the input", index);

        self.state.current_end = index;
        let symbol = self.symbols.get(index);
        let mut last_created: Option<NodeId> = None;

        loop {
            let active = self.state.active;
            let branch = if active.is_explicit() {
                if self.edges.find(active.node, symbol).is_some() {
                    break;
                }
                active.node
            } else {
                let edge = self
                    .edges
                    .find_expected(active.node, self.symbols.get(active.first));
                let offset = active.len();
                if self.symbols.get(edge.first + offset) == symbol {
                    break;
                }
                self.edges.split(edge, offset, self.symbols)
            };

            let leaf = self.edges.add_node();
            self.edges.insert(
                Edge {
                    start_node: branch,
                    end_node: leaf,
                    first: index,
                    last: End::Open,
                },
                self.symbols,
            );

            if let Some(previous) = last_created {
                self.links.set(previous, branch);
            }
            last_created = if branch == ROOT { None } else { Some(branch) };

            if active.node == ROOT {
                self.state.active.first += 1;
            } else {
                self.state.active.node = self.links.follow(active.node);
            }
            self.canonize();
        }

        if let Some(previous) = last_created {
            self.links.set(previous, self.state.active.node);
        }
        self.state.active.end += 1;
        self.canonize();

        trace!("phase {}: active point {:?}", index, self.state.active);
    }

    /// Walks the active point down whole edges until what remains fits
    /// strictly inside the next edge.
    fn canonize(&mut self) {
        let current_end = self.state.current_end;
        let active = &mut self.state.active;
        while !active.is_explicit() {
            let edge = self
                .edges
                .find_expected(active.node, self.symbols.get(active.first));
            let span = edge.span(current_end);
            if span > active.len() {
                break;
            }
            active.first += span;
            active.node = edge.end_node;
        }
    }

    pub(crate) fn finish(self) -> (EdgeTable<T>, SuffixLinks) {
        (self.edges, self.links)
    }
}
