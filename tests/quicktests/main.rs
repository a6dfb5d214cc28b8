use quickcheck::{Arbitrary, Gen};

mod suffix_tree;

/// Symbols inputs are drawn from. Queries may also use `d`, which never
/// occurs in an input, to produce misses.
const ALPHABET: &[u8] = b"abc";
const QUERY_ALPHABET: &[u8] = b"abcd";

/// A non-empty input over a tiny alphabet, so repeats are common.
#[derive(Clone, Debug)]
pub struct Text(pub Vec<u8>);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % g.size().max(1);
        Text((0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|text| !text.is_empty() && text.iter().all(|b| ALPHABET.contains(b)))
                .map(Text),
        )
    }
}

/// An edit applied to a true substring to get a (probably) false one.
#[derive(Clone, Copy, Debug)]
pub enum Mutation {
    /// Replace the symbol at this (wrapped) offset.
    Replace(usize, u8),
    /// Insert a symbol at this (wrapped) offset.
    Insert(usize, u8),
    /// Append a symbol.
    Push(u8),
}

impl Arbitrary for Mutation {
    /// Tells quickcheck how to randomly choose a mutation
    fn arbitrary(g: &mut Gen) -> Self {
        let symbol = *g.choose(QUERY_ALPHABET).unwrap();
        match *g.choose(&[0, 1, 2]).unwrap() {
            0 => Mutation::Replace(usize::arbitrary(g), symbol),
            1 => Mutation::Insert(usize::arbitrary(g), symbol),
            2 => Mutation::Push(symbol),
            _ => unreachable!(),
        }
    }
}

impl Mutation {
    pub fn apply(self, query: &mut Vec<u8>) {
        match self {
            Mutation::Replace(at, symbol) if !query.is_empty() => {
                let at = at % query.len();
                query[at] = symbol;
            }
            Mutation::Insert(at, symbol) => {
                let at = at % (query.len() + 1);
                query.insert(at, symbol);
            }
            Mutation::Replace(_, symbol) | Mutation::Push(symbol) => query.push(symbol),
        }
    }
}

/// Whether `query` occurs in `text`, the slow way.
pub fn naive_contains(text: &[u8], query: &[u8]) -> bool {
    query.is_empty() || text.windows(query.len()).any(|window| window == query)
}
