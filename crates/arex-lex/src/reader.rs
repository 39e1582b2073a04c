//! Character source for the scanner.
//!
//! This module provides the [`Reader`] struct which pulls one character at
//! a time from the input line and classifies it eagerly on every read. The
//! scanner inspects the class of the current character before deciding
//! whether to consume it, so the reader always holds exactly one character
//! of lookahead.

use crate::class::CharClass;

/// Sentinel character reported once the stream is exhausted.
pub const EOF_CHAR: char = '\0';

/// A one-character-lookahead reader over a line of input.
///
/// The reader maintains the current character together with its
/// [`CharClass`], recomputed on every advance. At end of stream the
/// current character is the [`EOF_CHAR`] sentinel and the class is
/// [`CharClass::EndOfInput`].
///
/// # Example
///
/// ```
/// use arex_lex::{CharClass, Reader};
///
/// let mut reader = Reader::new("a1");
/// assert_eq!(reader.current_char(), 'a');
/// assert_eq!(reader.current_class(), CharClass::Letter);
/// reader.advance();
/// assert_eq!(reader.current_class(), CharClass::Digit);
/// reader.advance();
/// assert_eq!(reader.current_class(), CharClass::EndOfInput);
/// ```
pub struct Reader<'a> {
    /// The line being scanned.
    source: &'a str,

    /// Byte offset of the current character.
    position: usize,

    /// Column of the current character (1-based, in characters).
    column: u32,

    /// The current (not yet consumed) character.
    current: char,

    /// Class of the current character.
    class: CharClass,
}

impl<'a> Reader<'a> {
    /// Creates a reader primed with the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut reader = Self {
            source,
            position: 0,
            column: 1,
            current: EOF_CHAR,
            class: CharClass::EndOfInput,
        };
        reader.refresh();
        reader
    }

    /// Re-reads and re-classifies the character at the current position.
    fn refresh(&mut self) {
        if self.position >= self.source.len() {
            self.current = EOF_CHAR;
            self.class = CharClass::EndOfInput;
            return;
        }

        // Fast path for ASCII (the expected case)
        let b = self.source.as_bytes()[self.position];
        self.current = if b < 128 {
            b as char
        } else {
            self.source[self.position..].chars().next().unwrap_or(EOF_CHAR)
        };
        self.class = CharClass::of(self.current);
    }

    /// The current character, or [`EOF_CHAR`] at end of stream.
    #[inline]
    pub fn current_char(&self) -> char {
        self.current
    }

    /// The class of the current character.
    #[inline]
    pub fn current_class(&self) -> CharClass {
        self.class
    }

    /// Consumes the current character and classifies the next one.
    ///
    /// Does nothing once the stream is exhausted.
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }
        self.position += self.current.len_utf8();
        self.column += 1;
        self.refresh();
    }

    /// Returns true if the stream is exhausted.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Column of the current character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}
