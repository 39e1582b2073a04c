//! arex-lex - Lexical Analyzer for Arithmetic Expressions
//!
//! This crate provides a single-pass scanner that converts one line of
//! arithmetic-expression text into a stream of classified tokens:
//! identifiers, integer literals, the operators `+ - * /`, and parentheses.
//!
//! # Overview
//!
//! The scanner is decomposed into four cooperating pieces:
//!
//! - [`class`] - classifies a single character (letter, digit, other)
//! - [`reader`] - pulls one character at a time, classifying eagerly,
//!   with a distinguished end-of-stream signal
//! - [`lexeme`] - a bounded buffer collecting the characters of the token
//!   currently being recognized
//! - [`scanner`] - the control loop: skips blanks, dispatches on the
//!   character class, and emits one token per call
//!
//! # Example
//!
//! ```
//! use arex_util::Handler;
//! use arex_lex::{Scanner, TokenKind};
//!
//! let handler = Handler::new();
//! let mut scanner = Scanner::new("(sum + 47) / total", &handler);
//!
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::LeftParen);
//! assert_eq!(token.text, "(");
//!
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::Ident);
//! assert_eq!(token.text, "sum");
//! ```
//!
//! # Error recovery
//!
//! The scanner never aborts. An unrecognized character becomes a
//! [`TokenKind::Unknown`] token plus a diagnostic, and an over-long lexeme
//! drops the excess characters while keeping the accumulated prefix, again
//! with a diagnostic. Both are collected by the caller-supplied
//! [`Handler`](arex_util::Handler).

#![warn(missing_docs)]

pub mod class;
pub mod lexeme;
pub mod reader;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use class::CharClass;
pub use lexeme::{Lexeme, LexemeError, DEFAULT_MAX_LEXEME_LEN};
pub use reader::Reader;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use arex_util::Handler;

    /// Helper to collect all tokens from one line, terminal token included.
    fn scan_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut scanner = Scanner::new(source, &handler);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            let done = token.kind.is_end_of_input();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_reference_expression() {
        let tokens = scan_all("(sum + 47) / total\n");
        let expected = [
            (TokenKind::LeftParen, "("),
            (TokenKind::Ident, "sum"),
            (TokenKind::AddOp, "+"),
            (TokenKind::IntLit, "47"),
            (TokenKind::RightParen, ")"),
            (TokenKind::DivOp, "/"),
            (TokenKind::Ident, "total"),
            (TokenKind::LineEnd, "EOF"),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, text)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(token.text, text);
        }
    }

    #[test]
    fn test_identifier_maximal_munch() {
        let tokens = scan_all("sum47+1");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Ident,
                TokenKind::AddOp,
                TokenKind::IntLit,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[0].text, "sum47");
        assert_eq!(tokens[2].text, "1");
    }

    #[test]
    fn test_integer_stops_at_letter() {
        let tokens = scan_all("123abc");
        assert_eq!(tokens[0].kind, TokenKind::IntLit);
        assert_eq!(tokens[0].text, "123");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].text, "abc");
    }

    #[test]
    fn test_whitespace_is_transparent() {
        let tokens = scan_all("  total ");
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "total");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_blank_line_yields_single_terminator() {
        let tokens = scan_all("    \n");
        assert_eq!(kinds(&tokens), vec![TokenKind::LineEnd]);
        assert_eq!(tokens[0].text, "EOF");
    }

    #[test]
    fn test_all_operators() {
        let tokens = scan_all("+ - * / ( )");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::AddOp,
                TokenKind::SubOp,
                TokenKind::MultOp,
                TokenKind::DivOp,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unknown_character_does_not_stop_the_scan() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("a=b\n", &handler);

        assert_eq!(scanner.next_token().kind, TokenKind::Ident);

        let eq = scanner.next_token();
        assert_eq!(eq.kind, TokenKind::Unknown);
        assert_eq!(eq.text, "=");

        let b = scanner.next_token();
        assert_eq!(b.kind, TokenKind::Ident);
        assert_eq!(b.text, "b");

        assert_eq!(scanner.next_token().kind, TokenKind::LineEnd);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_newline_and_exhaustion_are_distinct_kinds() {
        assert_eq!(scan_all("x").last().unwrap().kind, TokenKind::Eof);
        assert_eq!(scan_all("x\n").last().unwrap().kind, TokenKind::LineEnd);
    }

    #[test]
    fn test_terminal_token_is_stable_across_calls() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("x\n", &handler);
        scanner.next_token();
        assert_eq!(scanner.next_token().kind, TokenKind::LineEnd);
        assert_eq!(scanner.next_token().kind, TokenKind::LineEnd);

        let handler = Handler::new();
        let mut scanner = Scanner::new("x", &handler);
        scanner.next_token();
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_iterator_stops_before_terminal() {
        let handler = Handler::new();
        let scanner = Scanner::new("a + 1\n", &handler);
        let tokens: Vec<Token> = scanner.collect();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Ident, TokenKind::AddOp, TokenKind::IntLit]
        );
    }

    #[test]
    fn test_spans_carry_the_session_line_number() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("b * 2", &handler).at_line(3);
        let token = scanner.next_token();
        assert_eq!(token.span.line, 3);
        assert_eq!(token.span.column, 1);

        // Default is line 1.
        let mut scanner = Scanner::new("b * 2", &handler);
        assert_eq!(scanner.next_token().span.line, 1);
    }

    #[test]
    fn test_token_spans_cover_the_lexemes() {
        let tokens = scan_all("(sum + 47)");
        let source = "(sum + 47)";
        for token in &tokens {
            if token.kind.is_end_of_input() {
                continue;
            }
            assert_eq!(&source[token.span.start..token.span.end], token.text);
        }
    }

    #[test]
    fn test_overlong_lexeme_keeps_prefix() {
        let handler = Handler::new();
        let source: String = "a".repeat(120);
        let mut scanner = Scanner::new(&source, &handler);

        let token = scanner.next_token();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.text.len(), DEFAULT_MAX_LEXEME_LEN);
        // One diagnostic per rejected append.
        assert_eq!(handler.error_count(), 120 - DEFAULT_MAX_LEXEME_LEN);

        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_custom_lexeme_limit() {
        let handler = Handler::new();
        let mut scanner = Scanner::with_lexeme_limit("abcdef", &handler, 4);
        let token = scanner.next_token();
        assert_eq!(token.text, "abcd");
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn test_empty_source() {
        let tokens = scan_all("");
        assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
        assert_eq!(tokens[0].text, "EOF");
    }
}
