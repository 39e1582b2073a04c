//! Single-character token table.

use crate::token::{Token, TokenKind};
use crate::Scanner;

/// Maps a single character to its token kind, if it has one.
///
/// Pure lookup: `=`, `;`, `.` and everything else outside the fixed
/// operator/parenthesis set return `None`.
pub(crate) fn lookup(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '+' => Some(TokenKind::AddOp),
        '-' => Some(TokenKind::SubOp),
        '*' => Some(TokenKind::MultOp),
        '/' => Some(TokenKind::DivOp),
        _ => None,
    }
}

impl<'a> Scanner<'a> {
    /// Scans a single Other-class character.
    ///
    /// The character is always appended to the lexeme, match or no match,
    /// and exactly one character of lookahead is consumed. A character
    /// outside the lookup table becomes an `Unknown` token plus a
    /// diagnostic; the scan continues on the next call.
    pub(crate) fn scan_single(&mut self) -> Token {
        let c = self.reader.current_char();
        self.push_current();
        let kind = match lookup(c) {
            Some(kind) => kind,
            None => {
                self.report_unexpected(c);
                TokenKind::Unknown
            }
        };
        self.reader.advance();
        self.token(kind)
    }
}
