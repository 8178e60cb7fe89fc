//! Error types for covc-lex.
//!
//! Lexing is fail-fast: the first failure ends the session and is returned
//! as a single [`LexError`] carrying the offending span. Decoding, operator
//! table and configuration failures have their own enums, and [`Error`]
//! wraps all of them for callers that only want one type.

use std::path::PathBuf;

use covc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet, Span};
use thiserror::Error;

/// What went wrong while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// Input ended inside a string or char literal.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Escape character outside the supported set.
    #[error("unsupported escape character '{0}'")]
    InvalidEscape(char),

    /// `''`, or a lone `'` at the end of input.
    #[error("empty char literal")]
    EmptyCharLiteral,

    /// A char literal whose character is not followed by `'`.
    #[error("char literal must be closed after one character")]
    UnclosedCharLiteral,

    /// Symbol run matching no entry of the operator table.
    #[error("unexpected token `{0}`")]
    UnknownOperator(String),

    /// Suffix attached to something other than a literal.
    #[error("literal suffix applied to a non-literal token")]
    UnsupportedLiteralSuffix,

    /// A scanner returned a state the engine does not expect there.
    #[error("internal lexer state error: {0}")]
    InternalStateError(String),

    /// Integer literal outside the `i64` range.
    #[error("integer literal does not fit in 64 bits")]
    NumericOverflow,
}

/// A fatal lexing error with the span that triggered it.
///
/// The span starts at the first code point of the token being scanned and
/// ends just past the failure point.
///
/// # Example
///
/// ```
/// use covc_lex::{tokenize, Error, LexErrorKind};
///
/// let Err(Error::Lex(err)) = tokenize("s = \"a\\zb\"") else { panic!() };
/// assert_eq!(err.kind, LexErrorKind::InvalidEscape('z'));
/// assert_eq!(err.offending_text(), "\"a\\z");
/// assert_eq!(err.to_string(), "Lexer error at line 1 column 4-8: unsupported escape character 'z'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Lexer error at line {line} column {start}-{end}: {kind}",
    line = .span.line,
    start = .span.column,
    end = .span.end_column()
)]
pub struct LexError {
    /// Failure category.
    pub kind: LexErrorKind,
    /// Token start to failure point.
    pub span: Span,
    /// Source text covered by `span`.
    pub text: String,
}

impl LexError {
    /// Creates an error.
    pub fn new(kind: LexErrorKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// Line of the token start (1-based).
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the token start (0-based).
    pub fn start_column(&self) -> u32 {
        self.span.column
    }

    /// Column just past the failure point.
    pub fn end_column(&self) -> u32 {
        self.span.end_column()
    }

    /// The source slice that triggered the error.
    pub fn offending_text(&self) -> &str {
        &self.text
    }

    /// Human-readable message without position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Diagnostic code for this error category.
    pub fn code(&self) -> DiagnosticCode {
        match self.kind {
            LexErrorKind::UnexpectedEof => DiagnosticCode::E_LEXER_UNEXPECTED_EOF,
            LexErrorKind::InvalidEscape(_) => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexErrorKind::EmptyCharLiteral => DiagnosticCode::E_LEXER_EMPTY_CHAR,
            LexErrorKind::UnclosedCharLiteral => DiagnosticCode::E_LEXER_UNCLOSED_CHAR,
            LexErrorKind::UnknownOperator(_) => DiagnosticCode::E_LEXER_UNKNOWN_OPERATOR,
            LexErrorKind::UnsupportedLiteralSuffix => DiagnosticCode::E_LEXER_UNSUPPORTED_SUFFIX,
            LexErrorKind::InternalStateError(_) => DiagnosticCode::E_LEXER_INTERNAL_STATE,
            LexErrorKind::NumericOverflow => DiagnosticCode::E_LEXER_NUMERIC_OVERFLOW,
        }
    }

    /// Builds a diagnostic that underlines the offending span in `source`.
    ///
    /// Spans crossing a line break are underlined up to the end of their
    /// first line.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        // Columns never count the byte order mark.
        let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
        let mut builder = DiagnosticBuilder::error(self.message())
            .code(self.code())
            .span(self.span);

        let line_index = (self.span.line as usize).saturating_sub(1);
        if let Some(line) = source.lines().nth(line_index) {
            let line_len = line.chars().count();
            let start = (self.span.column as usize).min(line_len);
            let end = (self.end_column() as usize).clamp(start, line_len);
            builder = builder.snippet(SourceSnippet::new(
                line,
                self.span.line as usize,
                start,
                end,
                None::<String>,
            ));
        }

        let builder = match &self.kind {
            LexErrorKind::InvalidEscape(_) => {
                builder.help("supported escapes are \\r \\n \\t \\b \\f \\v \\\\ \\\" \\'")
            },
            LexErrorKind::UnknownOperator(_) => {
                builder.help("no prefix of this symbol run is in the operator table")
            },
            LexErrorKind::InternalStateError(_) | LexErrorKind::UnsupportedLiteralSuffix => {
                builder.note("this is a bug in the lexer")
            },
            _ => builder,
        };
        builder.build()
    }
}

/// Failure while converting input bytes into code points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A byte the charset cannot represent.
    #[error("byte 0x{byte:02X} at offset {offset} is not valid {charset}")]
    InvalidByte {
        /// Byte offset in the input.
        offset: usize,
        /// The offending byte.
        byte: u8,
        /// Name of the charset.
        charset: &'static str,
    },

    /// Malformed multi-byte sequence.
    #[error("invalid UTF-8 sequence at offset {offset}")]
    InvalidSequence {
        /// Byte offset of the first invalid byte.
        offset: usize,
    },
}

/// Rejected operator table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Operator spellings must not be empty.
    #[error("operator spelling is empty")]
    EmptySpelling,

    /// Spelling containing a code point the operator scanner never includes.
    #[error("operator spelling `{spelling}` contains {found:?}, which cannot appear in an operator")]
    Unmatchable {
        /// The rejected spelling.
        spelling: String,
        /// The code point that makes it unmatchable.
        found: char,
    },
}

/// Failure while loading lexer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be written.
    #[error("failed to write config {}: {source}", .path.display())]
    Write {
        /// Path that was written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`crate::LexerConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Preprocessor markers must be visible, non-separator code points.
    #[error("invalid preprocessor marker {0:?}")]
    InvalidMarker(char),
}

/// Any failure of the lexer crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Scanning failed.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Operator table rejected an entry.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
