//! Token type definitions.

use arex_util::Span;
use std::fmt;

/// The kind of a recognized token.
///
/// The set is closed: the grammar of the scanned expressions is fixed.
/// The reference scanner collapsed "newline seen", "stream exhausted", and
/// "unrecognized character" into a single end-of-input code; here they are
/// three distinct kinds ([`LineEnd`](TokenKind::LineEnd),
/// [`Eof`](TokenKind::Eof), [`Unknown`](TokenKind::Unknown)) so the driver
/// can decide equivalence itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal, e.g. `47`
    IntLit,
    /// Identifier, e.g. `sum`
    Ident,
    /// Addition operator `+`
    AddOp,
    /// Subtraction operator `-`
    SubOp,
    /// Multiplication operator `*`
    MultOp,
    /// Division operator `/`
    DivOp,
    /// Left parenthesis `(`
    LeftParen,
    /// Right parenthesis `)`
    RightParen,
    /// A character with no place in the grammar, e.g. `=` or `;`
    Unknown,
    /// The line terminator `\n` was reached; ends the scan session
    LineEnd,
    /// The stream was exhausted without a newline; ends the scan session
    Eof,
}

impl TokenKind {
    /// Returns true for the two session-terminating kinds.
    ///
    /// `LineEnd` and `Eof` are externally identical; callers that care
    /// which terminator occurred can still match on the kind.
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, TokenKind::LineEnd | TokenKind::Eof)
    }

    /// The display name, in the reference scanner's constant naming.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::IntLit => "INT_LIT",
            TokenKind::Ident => "IDENT",
            TokenKind::AddOp => "ADD_OP",
            TokenKind::SubOp => "SUB_OP",
            TokenKind::MultOp => "MULT_OP",
            TokenKind::DivOp => "DIV_OP",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Unknown => "UNKNOWN",
            // Both terminators present as EOF to the outside.
            TokenKind::LineEnd | TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recognized token: a kind paired with the lexeme that produced it.
///
/// Tokens are immutable once emitted; the scanner keeps no token history.
///
/// # Examples
///
/// ```
/// use arex_lex::{Token, TokenKind};
/// use arex_util::Span;
///
/// let token = Token::new(TokenKind::Ident, "sum", Span::new(1, 4, 1, 2));
/// assert_eq!(format!("{}", token), "Next token is: IDENT, Next lexeme is sum");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The lexeme text that produced this token.
    pub text: String,
    /// Location of the lexeme in the scanned line.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Formats the token in the reference scanner's report line format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Next token is: {}, Next lexeme is {}",
            self.kind, self.text
        )
    }
}
