use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use ukkonen::SuffixTree;

use crate::{naive_contains, Mutation, Text};

#[quickcheck]
fn contains_every_substring(text: Text) -> bool {
    let text = text.0;
    let tree = SuffixTree::new(&text).unwrap();

    (0..=text.len()).all(|i| (i..=text.len()).all(|j| tree.contains_substring(&text[i..j])))
}

#[quickcheck]
fn mutated_substrings_agree_with_naive(
    text: Text,
    start: usize,
    len: usize,
    mutation: Mutation,
) -> bool {
    let text = text.0;
    let tree = SuffixTree::new(&text).unwrap();

    let start = start % text.len();
    let end = start + len % (text.len() - start + 1);
    let mut query = text[start..end].to_vec();
    mutation.apply(&mut query);

    tree.contains_substring(&query) == naive_contains(&text, &query)
}

#[quickcheck]
fn random_queries_agree_with_naive(text: Text, query: Text) -> bool {
    let tree = SuffixTree::new(&text.0).unwrap();

    tree.contains_substring(&query.0) == naive_contains(&text.0, &query.0)
}

#[quickcheck]
fn suffixes_match_naive(text: Text) -> bool {
    let text = text.0;
    let tree = SuffixTree::new(&text).unwrap();

    let mut suffixes: Vec<_> = tree.suffixes().collect();
    suffixes.sort();
    let mut expected: Vec<_> = (0..text.len()).map(|i| text[i..].to_vec()).collect();
    expected.sort();

    suffixes == expected && tree.all_suffixes().len() == text.len()
}

#[quickcheck]
fn supplied_terminator_adds_empty_suffix(text: Text) -> bool {
    let mut text = text.0;
    text.push(b'$');
    let tree = SuffixTree::new(&text).unwrap();

    let suffixes = tree.all_suffixes();
    let expected: HashSet<_> = (0..text.len())
        .map(|i| text[i..text.len() - 1].to_vec())
        .collect();

    suffixes.len() == text.len() && suffixes == expected
}

#[quickcheck]
fn queries_are_idempotent(text: Text, query: Text) -> bool {
    let tree = SuffixTree::new(&text.0).unwrap();
    let before = tree.to_debug_string();

    let first = (tree.contains_substring(&query.0), tree.all_suffixes());
    let second = (tree.contains_substring(&query.0), tree.all_suffixes());

    first == second && tree.to_debug_string() == before
}

#[quickcheck]
fn char_trees_match_byte_trees(text: Text) -> bool {
    let chars: Vec<char> = text.0.iter().map(|&b| b as char).collect();
    let bytes = SuffixTree::new(&text.0).unwrap();
    let chars = SuffixTree::new(&chars).unwrap();

    bytes.node_count() == chars.node_count()
        && bytes.all_suffixes().len() == chars.all_suffixes().len()
}
