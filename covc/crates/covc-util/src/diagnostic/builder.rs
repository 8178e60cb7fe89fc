//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Level, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with highlighting
/// of the specific column range.
///
/// # Examples
///
/// ```
/// use covc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x = \"a\\zb\"", 1, 4, 8, Some("invalid escape"));
/// assert_eq!(
///     snippet.format(),
///     "  1 | x = \"a\\zb\"\n    |     ^^^^ invalid escape"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (0-based)
    pub start_column: usize,
    /// Column where the issue ends (0-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    ///
    /// # Arguments
    ///
    /// * `line` - The source line content
    /// * `line_number` - Line number (1-based)
    /// * `start_column` - Column where the issue starts (0-based)
    /// * `end_column` - Column where the issue ends (0-based, exclusive)
    /// * `label` - Optional label to display under the highlighted range
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret (^) line underlining the
    /// highlighted range. An empty range still gets one caret.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(self.start_column));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use covc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use covc_util::Span;
///
/// let diag = DiagnosticBuilder::error("unknown operator `#`")
///     .code(DiagnosticCode::E_LEXER_UNKNOWN_OPERATOR)
///     .span(Span::new(4, 5, 1, 4))
///     .help("check the operator table")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
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
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
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

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Finish building the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_underlines_range() {
        let snippet = SourceSnippet::new("a -> b", 12, 2, 4, None::<String>);
        let formatted = snippet.format();
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines[0], " 12 | a -> b");
        assert_eq!(lines[1], "    |   ^^");
    }

    #[test]
    fn test_snippet_empty_range_gets_one_caret() {
        let snippet = SourceSnippet::new("''", 1, 0, 0, None::<String>).with_label("here");
        assert!(snippet.format().ends_with("| ^ here"));
    }

    #[test]
    fn test_builder_collects_everything() {
        let diag = DiagnosticBuilder::warning("odd")
            .note("first")
            .note("second")
            .snippet(SourceSnippet::new("x", 1, 0, 1, None::<String>))
            .build();
        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.notes, vec!["first".to_string(), "second".to_string()]);
        assert_eq!(diag.snippets.len(), 1);
        assert!(diag.code.is_none());
    }
}
