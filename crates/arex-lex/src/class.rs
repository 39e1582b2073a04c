//! Character classification.
//!
//! The scanner drives its state machine off a coarse character class, not
//! the character itself. Classification is a pure total function: every
//! character maps to exactly one of Letter, Digit, or Other; the
//! [`EndOfInput`](CharClass::EndOfInput) class is produced only by the
//! [`Reader`](crate::reader::Reader) when the stream is exhausted.

/// Coarse category of an input character.
///
/// # Examples
///
/// ```
/// use arex_lex::CharClass;
///
/// assert_eq!(CharClass::of('s'), CharClass::Letter);
/// assert_eq!(CharClass::of('4'), CharClass::Digit);
/// assert_eq!(CharClass::of('+'), CharClass::Other);
/// assert_eq!(CharClass::of(' '), CharClass::Other);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// An ASCII alphabetic character (a-z, A-Z)
    Letter,
    /// An ASCII decimal digit (0-9)
    Digit,
    /// Any other character, including whitespace and punctuation
    Other,
    /// The stream is exhausted; never produced for an actual character
    EndOfInput,
}

impl CharClass {
    /// Classify a single character.
    ///
    /// Whitespace and punctuation are deliberately `Other`; the scanner
    /// decides what to do with them, the classifier does not.
    #[inline]
    pub fn of(c: char) -> CharClass {
        if c.is_ascii_alphabetic() {
            CharClass::Letter
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }

    /// Returns true for classes that may extend an identifier.
    #[inline]
    pub fn continues_identifier(&self) -> bool {
        matches!(self, CharClass::Letter | CharClass::Digit)
    }
}
