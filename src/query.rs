//! Read-only queries over a finished [`SuffixTree`].
//!
//! Every query walks the structural tree (the edge table). Suffix links are
//! only used by [`SuffixTree::longest_common_substring_with`], to slide a
//! match window forward without re-walking from the root.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::config::Symbol;
use crate::edge::{Edge, NodeId, ROOT};
use crate::tree::SuffixTree;

/// Where a walk from the root ended.
struct Locus {
    /// The explicit node at the end of the match, or just below it when the
    /// match stops partway along an edge.
    node: NodeId,
    /// String depth of `node`.
    depth: usize,
    /// The edge into `node` and how many of its symbols were matched, when
    /// the match stops partway along it.
    along: Option<(Edge, usize)>,
}

impl<T: Symbol> SuffixTree<T> {
    /// Matches `query` from the root, symbol by symbol.
    fn walk(&self, query: &[T]) -> Option<Locus> {
        let current_end = self.current_end();
        let mut locus = Locus {
            node: ROOT,
            depth: 0,
            along: None,
        };
        let mut matched = 0;
        while matched < query.len() {
            let edge = self.edges.find(locus.node, query[matched])?;
            let label = self.symbols.label(edge.first, edge.last_index(current_end));
            let rest = &query[matched..];
            let common = label.len().min(rest.len());
            if label[..common] != rest[..common] {
                return None;
            }

            matched += common;
            locus.node = edge.end_node;
            locus.depth += label.len();
            if common < label.len() {
                locus.along = Some((edge, common));
            }
        }
        Some(locus)
    }

    /// Returns `true` if `query` occurs anywhere in the input. The empty query
    /// always occurs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukkonen::SuffixTree;
    ///
    /// let tree = SuffixTree::new(b"banana").unwrap();
    ///
    /// assert!(tree.contains_substring(b"nan"));
    /// assert!(tree.contains_substring(b"banana"));
    /// assert!(tree.contains_substring(b""));
    /// assert!(!tree.contains_substring(b"nx"));
    ///
    /// // The terminator was added by the tree, so it can't be matched.
    /// assert!(!tree.contains_substring(b"a$"));
    /// ```
    pub fn contains_substring(&self, query: &[T]) -> bool {
        self.is_visible(query) && self.walk(query).is_some()
    }

    /// Returns `true` if `query` is a suffix of the input, not counting the
    /// terminator. The empty query is a suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukkonen::SuffixTree;
    ///
    /// let tree = SuffixTree::new(b"banana").unwrap();
    ///
    /// assert!(tree.is_suffix(b"ana"));
    /// assert!(tree.is_suffix(b"banana"));
    /// assert!(!tree.is_suffix(b"nan"));
    /// ```
    pub fn is_suffix(&self, query: &[T]) -> bool {
        let terminator = self.symbols.terminator();
        if query.contains(&terminator) {
            return false;
        }

        match self.walk(query) {
            None => false,
            Some(Locus {
                along: Some((edge, matched)),
                ..
            }) => self.symbols.get(edge.first + matched) == terminator,
            Some(Locus { node, .. }) => self.edges.find(node, terminator).is_some(),
        }
    }

    /// Start positions of every occurrence of `query` in the input, in
    /// ascending order. The empty query occurs at every position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukkonen::SuffixTree;
    ///
    /// let tree = SuffixTree::new(b"mississippi").unwrap();
    ///
    /// assert_eq!(tree.occurrences(b"issi"), vec![1, 4]);
    /// assert_eq!(tree.occurrences(b"p"), vec![8, 9]);
    /// assert!(tree.occurrences(b"spa").is_empty());
    /// ```
    pub fn occurrences(&self, query: &[T]) -> Vec<usize> {
        let locus = match self.walk(query) {
            Some(locus) if self.is_visible(query) => locus,
            _ => return Vec::new(),
        };

        let current_end = self.current_end();
        let total = self.symbols.len();
        let mut positions = Vec::new();
        let mut stack = vec![(locus.node, locus.depth)];
        while let Some((node, depth)) = stack.pop() {
            if self.edges.is_leaf(node) {
                let start = total - depth;
                if start < self.symbols.input_len() {
                    positions.push(start);
                }
                continue;
            }
            stack.extend(
                self.edges
                    .edges_from(node)
                    .map(|edge| (edge.end_node, depth + edge.span(current_end))),
            );
        }
        positions.sort_unstable();
        positions
    }

    /// The longest run of `other` that also occurs in the input. Ties go to the
    /// run that starts first in `other`.
    ///
    /// This computes matching statistics: after each mismatch the match window
    /// loses its first symbol by following a suffix link, so the whole scan is
    /// linear in `other.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukkonen::SuffixTree;
    ///
    /// let tree = SuffixTree::new(&[1u32, 2, 3, 4, 5, 6, 7, 8, 9][..]).unwrap();
    ///
    /// assert_eq!(
    ///     tree.longest_common_substring_with(&[7, 8, 9, 10, 11, 12]),
    ///     &[7, 8, 9]
    /// );
    /// assert!(tree.longest_common_substring_with(&[42]).is_empty());
    /// ```
    pub fn longest_common_substring_with<'a>(&self, other: &'a [T]) -> &'a [T] {
        let current_end = self.current_end();
        let mut best_start = 0;
        let mut best_len = 0;

        // `other[start..start + depth]` spells the path to `node` and
        // `other[start + depth..end]` continues partway along one of its edges.
        let mut node = ROOT;
        let mut depth = 0;
        let mut end = 0;
        for start in 0..other.len() {
            loop {
                let along = end - (start + depth);
                let edge = if along > 0 {
                    let edge = self.edges.find_expected(node, other[start + depth]);
                    let span = edge.span(current_end);
                    if along >= span && !self.edges.is_leaf(edge.end_node) {
                        node = edge.end_node;
                        depth += span;
                        continue;
                    }
                    Some(edge)
                } else {
                    None
                };

                if end == other.len() || !self.symbols.is_visible(other[end]) {
                    break;
                }
                let next = other[end];
                let extends = match edge {
                    None => self.edges.find(node, next).is_some(),
                    Some(edge) => {
                        along < edge.span(current_end)
                            && self.symbols.get(edge.first + along) == next
                    }
                };
                if !extends {
                    break;
                }
                end += 1;
            }

            if end - start > best_len {
                best_start = start;
                best_len = end - start;
            }
            if end == other.len() {
                break;
            }

            if node != ROOT {
                node = self.links.follow(node);
                depth -= 1;
            } else if end == start {
                end += 1;
            }
        }

        &other[best_start..best_start + best_len]
    }

    /// The longest sequence of symbols that occurs at least twice in the input,
    /// or an empty slice when no symbol repeats. Among equally long candidates
    /// the one whose edge label sits furthest left in the input wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukkonen::SuffixTree;
    ///
    /// let tree = SuffixTree::new(b"abcabxabcd").unwrap();
    /// assert_eq!(tree.longest_repeated_substring(), b"abc");
    ///
    /// let tree = SuffixTree::new(b"abc").unwrap();
    /// assert!(tree.longest_repeated_substring().is_empty());
    /// ```
    pub fn longest_repeated_substring(&self) -> &[T] {
        let current_end = self.current_end();
        // (depth, first index) of the best internal node so far.
        let mut best = (0, 0);
        let mut stack = vec![(ROOT, 0)];
        while let Some((node, depth)) = stack.pop() {
            for edge in self.edges.edges_from(node) {
                if self.edges.is_leaf(edge.end_node) {
                    continue;
                }
                let child_depth = depth + edge.span(current_end);
                let start = edge.last_index(current_end) + 1 - child_depth;
                if child_depth > best.0 || (child_depth == best.0 && start < best.1) {
                    best = (child_depth, start);
                }
                stack.push((edge.end_node, child_depth));
            }
        }

        let (len, start) = best;
        &self.symbols.as_slice()[start..start + len]
    }

    /// Iterates over every suffix of the input, terminator removed, in no
    /// particular order.
    ///
    /// Each call starts a fresh walk over the tree. When the caller supplied the
    /// terminator, the empty suffix (the terminator alone) is included.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukkonen::SuffixTree;
    ///
    /// let tree = SuffixTree::new(b"aba").unwrap();
    /// let mut suffixes: Vec<_> = tree.suffixes().collect();
    /// suffixes.sort();
    ///
    /// assert_eq!(suffixes, vec![b"a".to_vec(), b"aba".to_vec(), b"ba".to_vec()]);
    /// ```
    pub fn suffixes(&self) -> Suffixes<'_, T> {
        Suffixes::new(self)
    }

    /// Collects [`suffixes`][Self::suffixes] into a set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukkonen::SuffixTree;
    ///
    /// let tree: SuffixTree<u8> = "banana$".parse().unwrap();
    /// let suffixes = tree.all_suffixes();
    ///
    /// assert_eq!(suffixes.len(), 7);
    /// assert!(suffixes.contains(&b"nana".to_vec()));
    /// assert!(suffixes.contains(&Vec::new()));
    /// ```
    pub fn all_suffixes(&self) -> HashSet<Vec<T>> {
        self.suffixes().collect()
    }

    /// Whether every symbol of `query` may be matched. A terminator the tree
    /// appended itself never matches.
    fn is_visible(&self, query: &[T]) -> bool {
        query.iter().all(|&symbol| self.symbols.is_visible(symbol))
    }
}

/// A walk over every root-to-leaf path of a [`SuffixTree`], yielding one
/// suffix per leaf.
///
/// Created by [`SuffixTree::suffixes`]. The walk uses an explicit stack, so
/// deep trees (such as one built over a long run of a single symbol) don't
/// exhaust the call stack.
pub struct Suffixes<'a, T> {
    tree: &'a SuffixTree<T>,
    /// Edges still to visit, with the path length at their start node.
    stack: Vec<(Edge, usize)>,
    /// Symbols along the path to the edge most recently visited.
    path: Vec<T>,
}

impl<'a, T: Symbol> Suffixes<'a, T> {
    fn new(tree: &'a SuffixTree<T>) -> Self {
        Self {
            tree,
            stack: tree.edges.edges_from(ROOT).map(|&edge| (edge, 0)).collect(),
            path: Vec::new(),
        }
    }
}

impl<'a, T: Symbol> Iterator for Suffixes<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let current_end = tree.current_end();
        while let Some((edge, depth)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path.extend_from_slice(
                tree.symbols.label(edge.first, edge.last_index(current_end)),
            );

            if tree.edges.is_leaf(edge.end_node) {
                let start = tree.symbols.len() - self.path.len();
                if start < tree.symbols.input_len() {
                    // Every leaf path ends with the terminator.
                    return Some(self.path[..self.path.len() - 1].to_vec());
                }
            } else {
                let depth = self.path.len();
                self.stack.extend(
                    tree.edges
                        .edges_from(edge.end_node)
                        .map(|&child| (child, depth)),
                );
            }
        }
        None
    }
}

impl<'a, T: Symbol> FusedIterator for Suffixes<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<T: Ord>(mut xs: Vec<T>) -> Vec<T> {
        xs.sort();
        xs
    }

    #[test]
    fn contains_every_substring() {
        let text = b"abcabxabcd";
        let tree = SuffixTree::new(text).unwrap();

        for i in 0..text.len() {
            for j in i..=text.len() {
                assert!(
                    tree.contains_substring(&text[i..j]),
                    "{:?} should be a substring",
                    &text[i..j]
                );
            }
        }
        assert!(!tree.contains_substring(b"xyz"));
        assert!(!tree.contains_substring(b"abcd!"));
        assert!(!tree.contains_substring(b"bxb"));
    }

    #[test]
    fn supplied_terminator_is_matchable() {
        let tree = SuffixTree::new(b"banana$").unwrap();

        assert!(tree.contains_substring(b"na$"));
        assert!(!tree.contains_substring(b"$a"));
        assert_eq!(tree.occurrences(b"a$"), vec![5]);
    }

    #[test]
    fn is_suffix_mid_edge_and_at_node() {
        let tree = SuffixTree::new(b"abcabxabcd").unwrap();

        // "abcd" ends partway along a leaf edge; "" ends on the root.
        assert!(tree.is_suffix(b"abcd"));
        assert!(tree.is_suffix(b"d"));
        assert!(tree.is_suffix(b""));
        // "ab" ends on an internal node with no terminator edge.
        assert!(!tree.is_suffix(b"ab"));
        assert!(!tree.is_suffix(b"abc"));
        assert!(!tree.is_suffix(b"d$"));
    }

    #[test]
    fn is_suffix_with_supplied_terminator() {
        let tree = SuffixTree::new(b"banana$").unwrap();

        assert!(tree.is_suffix(b"nana"));
        assert!(!tree.is_suffix(b"nana$"));
    }

    #[test]
    fn occurrences_of_repeats() {
        let tree = SuffixTree::new(b"aaaa").unwrap();

        assert_eq!(tree.occurrences(b"a"), vec![0, 1, 2, 3]);
        assert_eq!(tree.occurrences(b"aa"), vec![0, 1, 2]);
        assert_eq!(tree.occurrences(b"aaaa"), vec![0]);
        assert_eq!(tree.occurrences(b""), vec![0, 1, 2, 3]);
        assert!(tree.occurrences(b"aaaaa").is_empty());
        assert!(tree.occurrences(b"a$").is_empty());
    }

    #[test]
    fn longest_common_substring_follows_links() {
        let tree = SuffixTree::new(b"xabxac").unwrap();

        assert_eq!(tree.longest_common_substring_with(b"abxa"), b"abxa");
        assert_eq!(tree.longest_common_substring_with(b"qxabq"), b"xab");
        assert_eq!(tree.longest_common_substring_with(b"bxaxabxz"), b"xabx");
        assert_eq!(tree.longest_common_substring_with(b"cab"), b"ab");
        assert_eq!(tree.longest_common_substring_with(b""), b"");
        assert_eq!(tree.longest_common_substring_with(b"a$c"), b"a");
    }

    #[test]
    fn longest_repeated() {
        assert_eq!(
            SuffixTree::new(b"banana").unwrap().longest_repeated_substring(),
            b"ana"
        );
        assert_eq!(
            SuffixTree::new(b"aaaa").unwrap().longest_repeated_substring(),
            b"aaa"
        );
        assert_eq!(
            SuffixTree::new(b"abab").unwrap().longest_repeated_substring(),
            b"ab"
        );
    }

    #[test]
    fn suffixes_of_hidden_terminator_input() {
        let tree = SuffixTree::new(b"banana").unwrap();

        assert_eq!(
            sorted(tree.suffixes().collect()),
            vec![
                b"a".to_vec(),
                b"ana".to_vec(),
                b"anana".to_vec(),
                b"banana".to_vec(),
                b"na".to_vec(),
                b"nana".to_vec(),
            ]
        );
    }

    #[test]
    fn suffixes_of_supplied_terminator_input() {
        let tree = SuffixTree::new(b"aaaa$").unwrap();
        let suffixes = sorted(tree.suffixes().collect::<Vec<_>>());

        assert_eq!(
            suffixes,
            vec![
                b"".to_vec(),
                b"a".to_vec(),
                b"aa".to_vec(),
                b"aaa".to_vec(),
                b"aaaa".to_vec(),
            ]
        );
    }

    #[test]
    fn suffix_walk_is_restartable() {
        let tree = SuffixTree::new(b"mississippi").unwrap();
        let mut walk = tree.suffixes();
        let first = walk.next();
        assert!(first.is_some());
        assert_eq!(walk.count(), 10);

        assert_eq!(tree.all_suffixes(), tree.all_suffixes());
        assert_eq!(tree.suffixes().count(), 11);
    }

    #[test]
    fn exhausted_walk_stays_exhausted() {
        let tree = SuffixTree::new(b"ab").unwrap();
        let mut walk = tree.suffixes();

        assert_eq!(walk.by_ref().count(), 2);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }
}

#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Text;

    /// The naive longest common substring, for comparison.
    fn brute_force_lcs(text: &[u8], other: &[u8]) -> usize {
        let mut best = 0;
        for i in 0..other.len() {
            for j in i + 1..=other.len() {
                if j - i > best && text.windows(j - i).any(|w| w == &other[i..j]) {
                    best = j - i;
                }
            }
        }
        best
    }

    quickcheck::quickcheck! {
        fn occurrences_match_windows(text: Text, query: Text) -> bool {
            let tree = SuffixTree::new(&text.0).unwrap();
            let query = &query.0[..query.0.len().min(3)];
            let expected: Vec<usize> = (0..text.0.len())
                .filter(|&i| text.0[i..].starts_with(query))
                .collect();

            tree.occurrences(query) == expected
        }
    }

    quickcheck::quickcheck! {
        fn longest_common_substring_matches_brute_force(text: Text, other: Text) -> bool {
            let tree = SuffixTree::new(&text.0).unwrap();
            let found = tree.longest_common_substring_with(&other.0);

            tree.contains_substring(found) && found.len() == brute_force_lcs(&text.0, &other.0)
        }
    }

    quickcheck::quickcheck! {
        fn suffix_queries_agree(text: Text) -> bool {
            let tree = SuffixTree::new(&text.0).unwrap();
            let t = &text.0;

            (0..=t.len()).all(|i| tree.is_suffix(&t[i..]))
                && (1..t.len()).all(|i| tree.is_suffix(&t[..i]) == t.ends_with(&t[..i]))
        }
    }
}
