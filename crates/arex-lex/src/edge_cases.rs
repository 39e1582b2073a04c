//! Edge case tests for arex-lex
