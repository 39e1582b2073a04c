//! arex-util - Foundation Types for the Arex Scanner
//!
//! This crate provides the infrastructure shared by the scanner and its
//! driver: source location spans and the diagnostic reporting machinery.
//!
//! # Overview
//!
//! The scanner never aborts on a bad input; every recoverable condition is
//! recorded as a [`Diagnostic`] in a [`Handler`] and scanning continues.
//! The driver drains the handler and decides how to present the collected
//! diagnostics to the user.
//!
//! # Example
//!
//! ```
//! use arex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '='")
//!     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
//!     .span(Span::new(3, 4, 1, 4))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
