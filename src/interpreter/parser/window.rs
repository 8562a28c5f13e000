use crate::interpreter::lexer::Token;

/// A read-only view over a sub-range of a shared token sequence.
///
/// The window never owns or mutates its tokens; any number of windows may
/// alias the same backing slice. All indices are *absolute* positions in the
/// backing sequence, so spans computed inside a narrowed window remain valid
/// for the whole parse.
#[derive(Debug, Clone, Copy)]
pub struct TokenWindow<'a> {
    tokens: &'a [Token],
    start:  usize,
    end:    usize,
}

impl<'a> TokenWindow<'a> {
    /// Creates a window covering the entire token sequence.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               start: 0,
               end: tokens.len() }
    }

    /// Returns a window over the same backing sequence covering
    /// `start..end`.
    #[must_use]
    pub const fn narrowed(self, start: usize, end: usize) -> Self {
        Self { tokens: self.tokens, start, end }
    }

    /// Returns a window with a new start and an unchanged end.
    #[must_use]
    pub const fn with_start(self, start: usize) -> Self {
        Self { tokens: self.tokens,
               start,
               end: self.end }
    }

    /// The first covered token index.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last covered token index.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The number of tokens covered by this window.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the window covers no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The token at the window's start, if the window is non-empty.
    #[must_use]
    pub fn first(&self) -> Option<&'a Token> {
        if self.is_empty() {
            None
        } else {
            self.tokens.get(self.start)
        }
    }

    /// The token at an absolute index, bounded by the window's end.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<&'a Token> {
        if index < self.end {
            self.tokens.get(index)
        } else {
            None
        }
    }

    /// The length of the backing sequence, used to size the fold's arena.
    #[must_use]
    pub const fn backing_len(&self) -> usize {
        self.tokens.len()
    }
}
