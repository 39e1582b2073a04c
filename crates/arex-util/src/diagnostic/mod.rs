//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and reporting
//! scanner diagnostics. The scanner treats every lexical problem as
//! recoverable: it records a diagnostic and keeps going, so the [`Handler`]
//! accumulates everything seen during a scan session.
//!
//! # Examples
//!
//! ```
//! use arex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use arex_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("lexeme is too long")
//!     .code(DiagnosticCode::E_LEX_LEXEME_OVERFLOW)
//!     .span(Span::DUMMY)
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{}: {}", diag.level, diag.message);
//!     }
//! }
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use arex_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A lexical error (recoverable; scanning continues)
    Error,
    /// A warning that does not affect the token stream
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use arex_util::diagnostic::{Diagnostic, Level};
/// use arex_util::span::Span;
///
/// let diag = Diagnostic::error("unexpected character ';'", Span::DUMMY);
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use arex_util::diagnostic::Diagnostic;
    /// use arex_util::span::Span;
    ///
    /// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
    /// ```
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use arex_util::diagnostic::Diagnostic;
    /// use arex_util::span::Span;
    ///
    /// let diag = Diagnostic::error("lexeme is too long", Span::DUMMY)
    ///     .with_note("the limit is 98 characters");
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. It can be configured to panic on errors for testing.
///
/// # Examples
///
/// ```
/// use arex_util::diagnostic::{Diagnostic, Handler};
/// use arex_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character", Span::DUMMY));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get a copy of all collected diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all collected diagnostics
    ///
    /// Used by the driver to drain the handler between scan sessions.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
