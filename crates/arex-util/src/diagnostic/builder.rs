//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use arex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use arex_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character '='")
///     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
///     .span(Span::DUMMY)
///     .note("only + - * / ( ) are recognized")
///     .build();
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error builder
    ///
    /// # Examples
    ///
    /// ```
    /// use arex_util::diagnostic::DiagnosticBuilder;
    ///
    /// let builder = DiagnosticBuilder::error("lexeme is too long");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// # Examples
    ///
    /// ```
    /// use arex_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("lexeme is too long").emit(&handler);
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
