//! The suffix tree itself: construction and introspection.
//!
//! Read-only queries live in the `query` module.

use std::str::FromStr;

use log::debug;

use crate::config::{Config, Symbol};
use crate::edge::{EdgeTable, End};
use crate::error::{Error, Result};
use crate::extend::Extender;
use crate::link::SuffixLinks;
use crate::store::Symbols;

/// A suffix tree over one sequence of symbols, built with Ukkonen's algorithm.
///
/// The tree is built once and is read-only afterwards, so a `&SuffixTree` can
/// be shared freely between threads.
///
/// # Examples
///
/// ```
/// use ukkonen::SuffixTree;
///
/// let tree = SuffixTree::new(b"abcabxabcd").unwrap();
///
/// assert!(tree.contains_substring(b"abc"));
/// assert!(tree.contains_substring(b"abcabxabcd"));
/// assert!(!tree.contains_substring(b"xyz"));
/// assert_eq!(tree.occurrences(b"abc"), vec![0, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct SuffixTree<T> {
    pub(crate) symbols: Symbols<T>,
    pub(crate) edges: EdgeTable<T>,
    pub(crate) links: SuffixLinks,
}

impl<T: Symbol> SuffixTree<T> {
    /// Builds a tree over `seq` using the symbol type's default terminator.
    ///
    /// The terminator is appended unless `seq` already ends with it. Anywhere
    /// else in `seq` it is rejected, as is an empty `seq`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukkonen::{Error, InvalidInput, SuffixTree};
    ///
    /// assert!(SuffixTree::new(b"banana").is_ok());
    /// assert!(SuffixTree::new(b"banana$").is_ok());
    ///
    /// assert_eq!(
    ///     SuffixTree::<u8>::new(b"").unwrap_err(),
    ///     Error::InvalidInput(InvalidInput::Empty)
    /// );
    /// assert_eq!(
    ///     SuffixTree::new(b"ba$nana").unwrap_err(),
    ///     Error::InvalidInput(InvalidInput::TerminatorCollision { position: 2 })
    /// );
    /// ```
    pub fn new(seq: &[T]) -> Result<Self> {
        Self::with_config(seq, &Config::default())
    }

    /// Builds a tree over `seq` using the given options.
    pub fn with_config(seq: &[T], config: &Config<T>) -> Result<Self> {
        let symbols = Symbols::new(seq, config.terminator())?;
        debug!(
            "building suffix tree over {} symbols (terminator {:?}, {})",
            symbols.len(),
            symbols.terminator(),
            if symbols.terminator_is_hidden() {
                "appended"
            } else {
                "supplied"
            }
        );

        let mut extender = Extender::new(&symbols);
        for index in 0..symbols.len() {
            if config.is_cancelled() {
                debug!("suffix tree construction cancelled at symbol {}", index);
                return Err(Error::Cancelled { processed: index });
            }
            extender.extend(index);
        }
        let (edges, links) = extender.finish();

        debug!(
            "built suffix tree: {} nodes, {} edges, {} suffix links",
            edges.node_count(),
            edges.edge_count(),
            links.len()
        );

        Ok(Self {
            symbols,
            edges,
            links,
        })
    }

    /// Number of symbols the tree was built from. A terminator appended by the
    /// tree isn't counted; one supplied by the caller is.
    pub fn len(&self) -> usize {
        self.symbols.input_len()
    }

    /// Always `false`: empty inputs are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The terminator this tree was built with.
    pub fn terminator(&self) -> T {
        self.symbols.terminator()
    }

    /// Number of explicit nodes, root and leaves included.
    pub fn node_count(&self) -> usize {
        self.edges.node_count()
    }

    /// Number of edges. Always one less than [`node_count`][Self::node_count].
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Index of the last stored symbol, which is where every open edge ends.
    pub(crate) fn current_end(&self) -> usize {
        self.symbols.len() - 1
    }

    /// Dumps every edge and suffix link. The format is for humans and tests and
    /// may change.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukkonen::SuffixTree;
    ///
    /// let tree = SuffixTree::new(b"aa").unwrap();
    ///
    /// assert_eq!(
    ///     tree.to_debug_string(),
    ///     "\
    /// nodes: 5, edges: 4, suffix links: 1
    /// 0 -> 2 [0..=0] [97]
    /// 0 -> 4 [2..=2] [36] open
    /// 2 -> 1 [1..=2] [97, 36] open
    /// 2 -> 3 [2..=2] [36] open
    /// link 2 -> 0
    /// "
    /// );
    /// ```
    pub fn to_debug_string(&self) -> String {
        let current_end = self.current_end();
        let mut edges: Vec<_> = self.edges.iter().collect();
        edges.sort_by_key(|edge| (edge.start_node, edge.end_node));

        let mut out = format!(
            "nodes: {}, edges: {}, suffix links: {}\n",
            self.node_count(),
            self.edge_count(),
            self.links.len()
        );
        for edge in edges {
            let last = edge.last_index(current_end);
            out.push_str(&format!(
                "{} -> {} [{}..={}] {:?}",
                edge.start_node,
                edge.end_node,
                edge.first,
                last,
                self.symbols.label(edge.first, last)
            ));
            if edge.last == End::Open {
                out.push_str(" open");
            }
            out.push('\n');
        }
        for (node, target) in self.links.iter() {
            out.push_str(&format!("link {} -> {}\n", node, target));
        }
        out
    }
}

impl FromStr for SuffixTree<u8> {
    type Err = Error;

    /// Builds a tree over the bytes of `s`.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.as_bytes())
    }
}
