//! Integer literal accumulation.

use crate::class::CharClass;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an integer literal (maximal munch).
    ///
    /// Entered with the current character classified as Digit. The loop is
    /// restricted to the Digit class: no decimal points, no signs, no
    /// exponents. The terminating character stays as lookahead.
    pub(crate) fn scan_integer(&mut self) -> Token {
        self.push_current();
        self.reader.advance();
        while self.reader.current_class() == CharClass::Digit {
            self.push_current();
            self.reader.advance();
        }
        self.token(TokenKind::IntLit)
    }
}
