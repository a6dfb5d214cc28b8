//! The immutable input sequence the tree is built over.

use crate::config::Symbol;
use crate::error::InvalidInput;

/// The input symbols plus exactly one terminator at the end.
///
/// Edges never copy symbols; they refer to ranges of positions in here.
#[derive(Debug, Clone)]
pub(crate) struct Symbols<T> {
    text: Vec<T>,
    terminator: T,
    /// Number of symbols the caller handed in. This equals `text.len()` when the
    /// caller supplied the terminator and `text.len() - 1` when it was appended.
    input_len: usize,
}

impl<T: Symbol> Symbols<T> {
    /// Validates `seq` and appends `terminator` unless `seq` already ends with it.
    pub(crate) fn new(seq: &[T], terminator: T) -> Result<Self, InvalidInput> {
        let (last, body) = seq.split_last().ok_or(InvalidInput::Empty)?;
        if let Some(position) = body.iter().position(|&s| s == terminator) {
            return Err(InvalidInput::TerminatorCollision { position });
        }

        let mut text = Vec::with_capacity(seq.len() + 1);
        text.extend_from_slice(seq);
        if *last != terminator {
            text.push(terminator);
        }

        Ok(Self {
            text,
            terminator,
            input_len: seq.len(),
        })
    }

    pub(crate) fn get(&self, index: usize) -> T {
        self.text[index]
    }

    /// Total symbols stored, terminator included.
    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    pub(crate) fn input_len(&self) -> usize {
        self.input_len
    }

    pub(crate) fn terminator(&self) -> T {
        self.terminator
    }

    /// Whether the terminator was appended by us rather than supplied by the caller.
    pub(crate) fn terminator_is_hidden(&self) -> bool {
        self.input_len < self.text.len()
    }

    /// Whether `symbol` may appear in a query. A hidden terminator never matches.
    pub(crate) fn is_visible(&self, symbol: T) -> bool {
        !(self.terminator_is_hidden() && symbol == self.terminator)
    }

    /// The symbols at positions `first..=last`.
    pub(crate) fn label(&self, first: usize, last: usize) -> &[T] {
        &self.text[first..=last]
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.text
    }
}
