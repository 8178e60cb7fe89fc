//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating and formatting compiler
//! diagnostics (errors, warnings, notes, and help messages). Phases build
//! a [`Diagnostic`] from their own error values; printing is left to the
//! caller through the `Display` implementation.
//!
//! # Examples
//!
//! ```
//! use covc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//! use covc_util::Span;
//!
//! let diag = DiagnosticBuilder::error("unexpected end of input")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_EOF)
//!     .span(Span::new(0, 4, 1, 0))
//!     .build();
//! assert_eq!(
//!     diag.to_string(),
//!     "error[E1001]: unexpected end of input\n --> line 1, column 0"
//! );
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use covc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents compilation
    Error,
    /// A warning that doesn't prevent compilation
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
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
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        write!(
            f,
            "\n --> line {}, column {}",
            self.span.line, self.span.column
        )?;
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_code() {
        let diag = DiagnosticBuilder::error("boom").span(Span::new(3, 4, 2, 1)).build();
        assert_eq!(diag.to_string(), "error: boom\n --> line 2, column 1");
        assert_eq!(diag.level, Level::Error);
    }

    #[test]
    fn test_display_with_snippet_and_help() {
        let diag = DiagnosticBuilder::error("bad")
            .code(DiagnosticCode::E_LEXER_UNCLOSED_CHAR)
            .span(Span::new(0, 2, 1, 0))
            .snippet(SourceSnippet::new("'ab'", 1, 0, 2, None::<String>))
            .help("char literals hold exactly one character")
            .build();
        let text = diag.to_string();
        assert!(text.starts_with("error[E1004]: bad\n"));
        assert!(text.contains("  1 | 'ab'"));
        assert!(text.ends_with("  = help: char literals hold exactly one character"));
    }
}
