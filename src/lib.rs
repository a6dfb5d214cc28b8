//! This crate builds suffix trees online, in linear time, using Ukkonen's
//! algorithm.
//!
//! ## Suffix Tree
//!
//! A suffix tree over a sequence `S` is a compressed trie of every suffix of
//! `S`. Each edge is labelled with a run of symbols from `S` (stored as a range
//! of positions rather than a copy), every internal node has at least two
//! children, and every path from the root to a leaf spells exactly one suffix.
//! To guarantee that no suffix ends partway along an edge, a reserved
//! terminator symbol is appended to `S` before building.
//!
//! > Note that the terminator is what makes every suffix end at its own leaf.
//!
//! Once built, a suffix tree answers "does `Q` occur in `S`?" in `O(|Q|)` time,
//! independent of the length of `S`.
//!
//! ## Ukkonen's Algorithm
//!
//! The tree is grown one symbol at a time. The builder keeps an *active point*
//! (the position of the longest suffix that is already represented implicitly)
//! and a *suffix link* from every internal node to the node spelling the same
//! string minus its first symbol. Three rules drive each extension:
//!
//! 1. Leaf edges are "open" and grow with the input for free.
//! 2. When the next symbol isn't present after the active point, a new leaf is
//!    hung there, splitting an edge if the active point is mid-edge.
//! 3. When the next symbol is already present, the phase ends early.
//!
//! Suffix links and canonization (skipping whole edges by length) keep the
//! total work linear in the length of the input.
//!
//! # Examples
//!
//! ```
//! use ukkonen::SuffixTree;
//!
//! let tree: SuffixTree<u8> = "banana$".parse().unwrap();
//!
//! assert!(tree.contains_substring(b"nan"));
//! assert!(!tree.contains_substring(b"nx"));
//! assert_eq!(tree.all_suffixes().len(), 7);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod config;
mod edge;
mod error;
mod extend;
mod link;
mod query;
mod store;
mod tree;


pub use config::{Config, Symbol};
pub use error::{Error, InvalidInput, Result};
pub use query::Suffixes;
pub use tree::SuffixTree;
