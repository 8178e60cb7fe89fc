//! Lexer engine.
//!
//! [`Lexer`] holds what is fixed across sessions (operator table, charset,
//! preprocessor markers). Each call to [`Lexer::lex`] decodes the input and
//! runs a fresh [`Session`], which owns the cursor, the state manager and
//! the growing token list. The main loop inspects the current code point,
//! dispatches to a sub-scanner, reads the state the scanner left behind and
//! either emits a token or stops with an error.

use std::fmt;

use covc_util::Span;
use log::{debug, trace, warn};

use super::identifier::is_identifier_start;
use super::number::Number;
use crate::charset::{Charset, Utf8};
use crate::config::{LexerConfig, DEFAULT_PREPROCESSOR_MARKERS};
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, Result};
use crate::state::{LexState, StateManager};
use crate::table::OperatorTable;
use crate::token::{Token, TokenKind};

/// Lexer for covc source text.
///
/// A `Lexer` can be reused: every [`lex`](Lexer::lex) call is an
/// independent session, and the same input always yields the same tokens.
///
/// # Example
///
/// ```
/// use covc_lex::{Lexer, OperatorKind, OperatorTable, TokenKind};
///
/// let mut table = OperatorTable::new();
/// table.insert("-", OperatorKind(1)).unwrap();
/// table.insert("->", OperatorKind(2)).unwrap();
/// table.insert("--", OperatorKind(3)).unwrap();
///
/// let lexer = Lexer::new(table);
/// let tokens = lexer.lex("a->b").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(
///     tokens[1].kind,
///     TokenKind::Operator { spelling: "->".into(), kind: OperatorKind(2) }
/// );
/// ```
pub struct Lexer {
    table: OperatorTable,
    charset: Box<dyn Charset>,
    markers: Vec<char>,
}

impl Lexer {
    /// Creates a UTF-8 lexer with the default preprocessor markers.
    pub fn new(table: OperatorTable) -> Self {
        Self {
            table,
            charset: Box::new(Utf8),
            markers: DEFAULT_PREPROCESSOR_MARKERS.to_vec(),
        }
    }

    /// Replaces the charset codec.
    pub fn with_charset(mut self, charset: impl Charset + 'static) -> Self {
        self.charset = Box::new(charset);
        self
    }

    /// Replaces the code points that open a preprocessor line.
    pub fn with_preprocessor_markers(mut self, markers: impl IntoIterator<Item = char>) -> Self {
        self.markers = markers.into_iter().collect();
        self
    }

    /// Builds a lexer from configuration.
    ///
    /// Invalid markers surface as [`Error::Config`](crate::Error::Config) and
    /// rejected operator entries as [`Error::Table`](crate::Error::Table).
    pub fn from_config(config: &LexerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            table: config.operator_table()?,
            charset: config.charset.codec(),
            markers: config.preprocessor_markers.clone(),
        })
    }

    /// The operator table consulted by every session.
    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    /// The charset codec.
    pub fn charset(&self) -> &dyn Charset {
        self.charset.as_ref()
    }

    /// Decodes and tokenizes `source`.
    ///
    /// Fails on the first decode or lexing error; no partial token list is
    /// returned.
    pub fn lex(&self, source: impl AsRef<[u8]>) -> Result<Vec<Token>> {
        let chars = self.charset.decode(source.as_ref())?;
        Ok(self.lex_code_points(&chars)?)
    }

    /// Tokenizes an already decoded code-point buffer.
    pub fn lex_code_points(&self, chars: &[char]) -> std::result::Result<Vec<Token>, LexError> {
        debug!(
            "lexing {} code points ({}, {} operators)",
            chars.len(),
            self.charset.name(),
            self.table.len()
        );
        let tokens = Session::new(chars, &self.table, self.charset.as_ref(), &self.markers).run()?;
        debug!("lexed {} tokens", tokens.len());
        Ok(tokens)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new(OperatorTable::standard())
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("charset", &self.charset.name())
            .field("operators", &self.table.len())
            .field("markers", &self.markers)
            .finish()
    }
}

/// One lexing run over a decoded buffer.
pub(crate) struct Session<'a> {
    /// Position in the code-point buffer.
    pub(super) cursor: Cursor<'a>,

    /// Shared result channel of the sub-scanners.
    pub(super) state: StateManager,

    pub(super) table: &'a OperatorTable,

    pub(super) charset: &'a dyn Charset,

    markers: &'a [char],

    tokens: Vec<Token>,

    /// Buffer index where the current token starts.
    token_start: usize,

    /// Line where the current token starts (1-based).
    token_line: u32,

    /// Column where the current token starts (0-based).
    token_column: u32,
}

impl<'a> Session<'a> {
    pub(crate) fn new(
        chars: &'a [char],
        table: &'a OperatorTable,
        charset: &'a dyn Charset,
        markers: &'a [char],
    ) -> Self {
        Self {
            cursor: Cursor::new(chars),
            state: StateManager::new(),
            table,
            charset,
            markers,
            tokens: Vec::new(),
            token_start: 0,
            token_line: 1,
            token_column: 0,
        }
    }

    /// Runs the main loop to the end of input or the first error.
    pub(crate) fn run(mut self) -> std::result::Result<Vec<Token>, LexError> {
        while let Some(c) = self.cursor.current() {
            self.mark_token_start();

            if self.cursor.is_at_line_start() && self.markers.contains(&c) {
                let body = self.scan_preprocessor();
                match self.state.take() {
                    LexState::ParsingPreprocessor => self.emit(TokenKind::Preprocessor { body }),
                    other => return Err(self.internal_error(other, "preprocessor")),
                }
                continue;
            }

            if self.state.current() == LexState::TryingLiteralSuffix {
                if let Some(suffix) = self.scan_literal_suffix() {
                    match self.state.take() {
                        LexState::ParsingLiteralSuffix => self.attach_suffix(suffix)?,
                        other => return Err(self.internal_error(other, "literal suffix")),
                    }
                }
                self.state.end_if(LexState::TryingLiteralSuffix);
                continue;
            }

            if c == '\n' || is_separator(c) {
                self.cursor.advance();
                continue;
            }

            if c.is_ascii_digit() {
                let number = self.scan_number();
                let kind = match (self.state.take(), number) {
                    (LexState::ParsingInt, Number::Int(value)) => TokenKind::IntLiteral { value },
                    (LexState::ParsingFloat, Number::Float(value)) => {
                        TokenKind::FloatLiteral { value }
                    },
                    (LexState::ErrorOverflow, _) => {
                        return Err(self.error(LexErrorKind::NumericOverflow))
                    },
                    (other, _) => return Err(self.internal_error(other, "number")),
                };
                self.emit_literal(kind);
                continue;
            }

            if c == '"' {
                let value = self.scan_string();
                match self.state.take() {
                    LexState::ParsingString => {
                        self.emit_literal(TokenKind::StringLiteral { value })
                    },
                    LexState::ErrorEof => return Err(self.error(LexErrorKind::UnexpectedEof)),
                    LexState::ErrorEscape => return Err(self.escape_error()),
                    other => return Err(self.internal_error(other, "string")),
                }
                continue;
            }

            if c == '\'' {
                let value = self.scan_char();
                match (self.state.take(), value) {
                    (LexState::ParsingChar, Some(value)) => {
                        self.emit_literal(TokenKind::CharLiteral { value })
                    },
                    (LexState::ErrorEmpty, _) => {
                        return Err(self.error(LexErrorKind::EmptyCharLiteral))
                    },
                    (LexState::ErrorEof, _) => return Err(self.error(LexErrorKind::UnexpectedEof)),
                    (LexState::ErrorEscape, _) => return Err(self.escape_error()),
                    (LexState::ErrorEnclosing, _) => {
                        return Err(self.error(LexErrorKind::UnclosedCharLiteral))
                    },
                    (other, _) => return Err(self.internal_error(other, "char")),
                }
                continue;
            }

            if is_identifier_start(self.charset, c) {
                let name = self.scan_identifier();
                self.emit(TokenKind::IdentifierOrKeyword { name });
                continue;
            }

            let operator = self.scan_operator();
            match (self.state.take(), operator) {
                (LexState::ParsingOperator, Some((spelling, kind))) => {
                    self.emit(TokenKind::Operator { spelling, kind })
                },
                (LexState::ErrorOperator, _) => {
                    let window = self.charset.encode(self.cursor.slice_from(self.token_start));
                    return Err(self.error(LexErrorKind::UnknownOperator(window)));
                },
                (other, _) => return Err(self.internal_error(other, "operator")),
            }
        }

        self.state.end_if(LexState::TryingLiteralSuffix);
        debug_assert_eq!(self.state.current(), LexState::Global);
        debug_assert_eq!(self.state.depth(), 0);
        Ok(self.tokens)
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_line = self.cursor.line();
        self.token_column = self.cursor.column();
    }

    /// Pushes a token covering the current token start up to the cursor.
    fn emit(&mut self, kind: TokenKind) {
        let text = self.charset.encode(self.cursor.slice_from(self.token_start));
        let token = Token {
            line: self.token_line,
            column: self.token_column,
            text,
            kind,
        };
        trace!("{}", token);
        self.tokens.push(token);
    }

    /// Emits a literal and arms the suffix lookahead for the next iteration.
    fn emit_literal(&mut self, kind: TokenKind) {
        self.emit(kind);
        self.state.enter(LexState::TryingLiteralSuffix);
    }

    /// Rewraps the last token as a custom literal.
    fn attach_suffix(&mut self, suffix: String) -> std::result::Result<(), LexError> {
        let Some(inner) = self.tokens.pop().filter(Token::is_literal) else {
            warn!("literal suffix `{}` found after a non-literal token", suffix);
            return Err(self.error(LexErrorKind::UnsupportedLiteralSuffix));
        };
        let text = format!(
            "{}{}",
            inner.text,
            self.charset.encode(self.cursor.slice_from(self.token_start))
        );
        trace!("suffix `{}` attached to {}", suffix, inner.kind);
        self.tokens.push(Token {
            line: inner.line,
            column: inner.column,
            text,
            kind: TokenKind::CustomLiteral {
                inner: Box::new(inner),
                suffix,
            },
        });
        Ok(())
    }

    /// Error spanning the current token start up to the cursor.
    fn error(&self, kind: LexErrorKind) -> LexError {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_line,
            self.token_column,
        );
        LexError::new(kind, span, self.charset.encode(self.cursor.slice_from(self.token_start)))
    }

    /// Escape scanners stop right after the rejected character.
    fn escape_error(&self) -> LexError {
        match self.cursor.slice_from(self.token_start).last() {
            Some(&escaped) => self.error(LexErrorKind::InvalidEscape(escaped)),
            None => self.internal_error(LexState::ErrorEscape, "escape"),
        }
    }

    fn internal_error(&self, state: LexState, scanner: &str) -> LexError {
        warn!("{} scanner finished in unexpected state {:?}", scanner, state);
        self.error(LexErrorKind::InternalStateError(format!(
            "{} scanner finished in state {:?}",
            scanner, state
        )))
    }
}

/// Whitespace and `;` only separate tokens.
pub(super) fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ';'
}
