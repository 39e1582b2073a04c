//! Core scanner implementation.
//!
//! This module contains the main Scanner struct and the per-token dispatch
//! loop.

use arex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::class::CharClass;
use crate::lexeme::{Lexeme, DEFAULT_MAX_LEXEME_LEN};
use crate::reader::Reader;
use crate::token::{Token, TokenKind};

/// The arithmetic-expression scanner.
///
/// One `Scanner` owns one scan session over one line of input: the reader
/// (current character and its class), the lexeme buffer, and the
/// token-start bookkeeping. Each call to [`next_token`](Scanner::next_token)
/// recognizes exactly one token; the caller loops until it sees an
/// end-of-input kind.
pub struct Scanner<'a> {
    /// Character source with one character of lookahead.
    pub(crate) reader: Reader<'a>,

    /// Diagnostic handler for recoverable lexical errors.
    pub(crate) handler: &'a Handler,

    /// Buffer for the token currently being recognized.
    pub(crate) lexeme: Lexeme,

    /// Starting byte offset of the current token.
    token_start: usize,

    /// Starting column of the current token (1-based).
    token_start_column: u32,

    /// Line number reported in spans (1-based); the session scans one
    /// line, so this is fixed for the scanner's lifetime.
    line: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default lexeme limit (98 characters).
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_lexeme_limit(source, handler, DEFAULT_MAX_LEXEME_LEN)
    }

    /// Creates a scanner with an explicit lexeme length limit.
    pub fn with_lexeme_limit(source: &'a str, handler: &'a Handler, limit: usize) -> Self {
        Self {
            reader: Reader::new(source),
            handler,
            lexeme: Lexeme::new(limit),
            token_start: 0,
            token_start_column: 1,
            line: 1,
        }
    }

    /// Sets the 1-based line number reported in token and diagnostic
    /// spans. Used by callers that scan one session per line of a larger
    /// input.
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Recognizes and returns the next token.
    ///
    /// Skips insignificant whitespace, then dispatches on the class of the
    /// current character. The newline check precedes class dispatch because
    /// `\n` classifies as Other but terminates the session instead of going
    /// through the single-character lookup.
    pub fn next_token(&mut self) -> Token {
        self.lexeme.reset();
        self.skip_blanks();

        self.token_start = self.reader.position();
        self.token_start_column = self.reader.column();

        if self.reader.current_char() == '\n' {
            // Not consumed: repeated calls keep reporting the terminator.
            return self.terminal(TokenKind::LineEnd);
        }

        match self.reader.current_class() {
            CharClass::Letter => self.scan_identifier(),
            CharClass::Digit => self.scan_integer(),
            CharClass::Other => self.scan_single(),
            CharClass::EndOfInput => self.terminal(TokenKind::Eof),
        }
    }

    /// Skips whitespace characters except the newline terminator.
    fn skip_blanks(&mut self) {
        while !self.reader.is_at_end()
            && self.reader.current_char().is_whitespace()
            && self.reader.current_char() != '\n'
        {
            self.reader.advance();
        }
    }

    /// Appends the current character to the lexeme.
    ///
    /// A full buffer is a recoverable condition: the append is dropped, a
    /// diagnostic is recorded, and scanning continues with the prefix.
    pub(crate) fn push_current(&mut self) {
        let c = self.reader.current_char();
        if let Err(err) = self.lexeme.push(c) {
            DiagnosticBuilder::error(err.to_string())
                .code(DiagnosticCode::E_LEX_LEXEME_OVERFLOW)
                .span(self.current_span())
                .emit(self.handler);
        }
    }

    /// Reports an unexpected character at the current token position.
    pub(crate) fn report_unexpected(&mut self, c: char) {
        DiagnosticBuilder::error(format!("unexpected character '{}'", c))
            .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
            .span(self.current_span())
            .emit(self.handler);
    }

    /// Finishes the current recognition cycle with the given kind.
    pub(crate) fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme.as_str(), self.current_span())
    }

    /// An end-of-input token; the lexeme text is always "EOF".
    fn terminal(&self, kind: TokenKind) -> Token {
        Token::new(kind, "EOF", self.current_span())
    }

    fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.reader.position(),
            self.line,
            self.token_start_column,
        )
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind.is_end_of_input() {
            None
        } else {
            Some(token)
        }
    }
}
