//! Identifier accumulation.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier (maximal munch).
    ///
    /// Entered with the current character classified as Letter. Appends it,
    /// then keeps appending while the next character is a letter or digit;
    /// identifiers may contain digits after the first letter. The first
    /// character of neither class has already been read and classified but
    /// is not appended: it stays as the lookahead for the next cycle.
    pub(crate) fn scan_identifier(&mut self) -> Token {
        self.push_current();
        self.reader.advance();
        while self.reader.current_class().continues_identifier() {
            self.push_current();
            self.reader.advance();
        }
        self.token(TokenKind::Ident)
    }
}
