//! Construction options and the [`Symbol`] trait.

use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A symbol that can be stored in a [`SuffixTree`][crate::SuffixTree].
///
/// Symbols are compared for equality and hashed to index edges, so any small
/// `Copy` type works. Each implementation names a default terminator: a value
/// the caller promises never to use inside an input sequence.
pub trait Symbol: Copy + Eq + Hash + fmt::Debug {
    /// The terminator used by [`Config::default`].
    const TERMINATOR: Self;
}

impl Symbol for u8 {
    const TERMINATOR: Self = b'$';
}

impl Symbol for char {
    const TERMINATOR: Self = '$';
}

impl Symbol for u16 {
    const TERMINATOR: Self = u16::MAX;
}

impl Symbol for u32 {
    const TERMINATOR: Self = u32::MAX;
}

impl Symbol for u64 {
    const TERMINATOR: Self = u64::MAX;
}

/// Options used while building a [`SuffixTree`][crate::SuffixTree].
///
/// # Examples
///
/// ```
/// use ukkonen::{Config, SuffixTree};
///
/// let config = Config::<u8>::default().with_terminator(b'#');
/// let tree = SuffixTree::with_config(b"a$b", &config).unwrap();
///
/// assert!(tree.contains_substring(b"$b"));
/// ```
#[derive(Clone)]
pub struct Config<T> {
    terminator: T,
    cancel: Option<Arc<AtomicBool>>,
}

impl<T: Symbol> Default for Config<T> {
    fn default() -> Self {
        Self {
            terminator: T::TERMINATOR,
            cancel: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Config<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("terminator", &self.terminator)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

impl<T: Copy> Config<T> {
    /// Uses `terminator` instead of the symbol type's default.
    pub fn with_terminator(mut self, terminator: T) -> Self {
        self.terminator = terminator;
        self
    }

    /// Installs a flag that is polled between extension phases. Raising it
    /// makes the build stop with [`Error::Cancelled`][crate::Error::Cancelled].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::atomic::AtomicBool;
    /// use std::sync::Arc;
    ///
    /// use ukkonen::{Config, Error, SuffixTree};
    ///
    /// let flag = Arc::new(AtomicBool::new(true));
    /// let config = Config::<u8>::default().with_cancel_flag(Arc::clone(&flag));
    ///
    /// assert_eq!(
    ///     SuffixTree::with_config(b"abc", &config).unwrap_err(),
    ///     Error::Cancelled { processed: 0 }
    /// );
    /// ```
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The terminator symbol appended to (or expected at the end of) inputs.
    pub fn terminator(&self) -> T {
        self.terminator
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}
