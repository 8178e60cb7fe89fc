//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation for a
//! specific failure.
//!
//! # Examples
//!
//! ```
//! use covc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_EOF;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is typically "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use covc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 7);
    /// assert_eq!(code.as_str(), "E0007");
    /// ```
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

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Input ended inside a string or char literal
    pub const E_LEXER_UNEXPECTED_EOF: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unsupported escape character
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1002);
    /// E1003: Lexer - Nothing between the quotes of a char literal
    pub const E_LEXER_EMPTY_CHAR: Self = Self::new("E", 1003);
    /// E1004: Lexer - Char literal without closing quote
    pub const E_LEXER_UNCLOSED_CHAR: Self = Self::new("E", 1004);
    /// E1005: Lexer - Symbol run matching no operator
    pub const E_LEXER_UNKNOWN_OPERATOR: Self = Self::new("E", 1005);
    /// E1006: Lexer - Suffix applied to a non-literal token
    pub const E_LEXER_UNSUPPORTED_SUFFIX: Self = Self::new("E", 1006);
    /// E1007: Lexer - Scanner returned a state the engine cannot handle
    pub const E_LEXER_INTERNAL_STATE: Self = Self::new("E", 1007);
    /// E1008: Lexer - Integer literal does not fit in 64 bits
    pub const E_LEXER_NUMERIC_OVERFLOW: Self = Self::new("E", 1008);
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
