//! Bounded lexeme accumulator.
//!
//! While recognizing one token the scanner collects its characters in a
//! [`Lexeme`]. The buffer is bounded: appends past the configured limit are
//! rejected (not silently truncated) and the already-accumulated prefix is
//! retained, so a pathological input degrades to a shorter-but-valid
//! lexeme plus a diagnostic instead of unbounded growth.

use thiserror::Error;

/// Default maximum lexeme length in characters.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 98;

/// Error returned by [`Lexeme::push`] when the buffer is full.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexemeError {
    /// The lexeme already holds the maximum number of characters.
    #[error("lexeme is too long (limit is {limit} characters)")]
    LengthExceeded {
        /// The configured length limit.
        limit: usize,
    },
}

/// A growable character buffer with a fixed upper bound.
///
/// # Examples
///
/// ```
/// use arex_lex::Lexeme;
///
/// let mut lexeme = Lexeme::new(4);
/// lexeme.push('s').unwrap();
/// lexeme.push('u').unwrap();
/// lexeme.push('m').unwrap();
/// assert_eq!(lexeme.as_str(), "sum");
///
/// lexeme.reset();
/// assert!(lexeme.is_empty());
/// ```
#[derive(Debug)]
pub struct Lexeme {
    buf: String,
    len: usize,
    limit: usize,
}

impl Lexeme {
    /// Creates an empty lexeme bounded at `limit` characters.
    pub fn new(limit: usize) -> Self {
        Self {
            buf: String::new(),
            len: 0,
            limit,
        }
    }

    /// Clears the buffer. Idempotent.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.len = 0;
    }

    /// Appends one character.
    ///
    /// Fails with [`LexemeError::LengthExceeded`] if the buffer already
    /// holds `limit` characters; the buffer is left unchanged in that case.
    pub fn push(&mut self, c: char) -> Result<(), LexemeError> {
        if self.len >= self.limit {
            return Err(LexemeError::LengthExceeded { limit: self.limit });
        }
        self.buf.push(c);
        self.len += 1;
        Ok(())
    }

    /// The accumulated text.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Number of characters accumulated so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The configured length limit.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for Lexeme {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEXEME_LEN)
    }
}
