//! Diagnostic codes for categorizing scanner errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages.
//!
//! # Examples
//!
//! ```
//! use arex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors or "W" for warnings and `number` is a 4-digit number
/// (padded with zeros).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Scanner - Unexpected character
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Scanner - Lexeme exceeds the configured length limit
    pub const E_LEX_LEXEME_OVERFLOW: Self = Self::new("E", 1002);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
