//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] payload with the exact lexeme and the
//! position of its first code point. Tokens are immutable once the engine
//! has emitted them.

use std::fmt;

use crate::table::OperatorKind;

/// A single lexical token.
///
/// # Example
///
/// ```
/// use covc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x\n  42").unwrap();
/// assert_eq!(tokens[1].line, 2);
/// assert_eq!(tokens[1].column, 2);
/// assert_eq!(tokens[1].text, "42");
/// assert_eq!(tokens[1].kind, TokenKind::IntLiteral { value: 42 });
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Line of the first code point (1-based).
    pub line: u32,
    /// Column of the first code point (0-based, in code points).
    pub column: u32,
    /// The exact source slice that produced this token.
    pub text: String,
    /// Decoded payload.
    pub kind: TokenKind,
}

/// The closed set of token variants.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Identifier or keyword; keywords are told apart by the parser.
    IdentifierOrKeyword {
        /// The identifier text.
        name: String,
    },
    /// Integer literal in any base.
    IntLiteral {
        /// Decoded value.
        value: i64,
    },
    /// Decimal literal with a fractional part.
    FloatLiteral {
        /// Decoded value.
        value: f64,
    },
    /// String literal, quotes removed and escapes decoded.
    StringLiteral {
        /// Decoded content.
        value: String,
    },
    /// Char literal holding exactly one code point.
    CharLiteral {
        /// Decoded code point.
        value: char,
    },
    /// Preprocessor line starting with a tag marker.
    Preprocessor {
        /// Raw text after the marker, up to the line break.
        body: String,
    },
    /// Operator found in the operator table.
    Operator {
        /// The matched spelling.
        spelling: String,
        /// Kind registered for the spelling.
        kind: OperatorKind,
    },
    /// Literal followed by an `_suffix` annotation.
    CustomLiteral {
        /// The wrapped int, float, string or char literal.
        inner: Box<Token>,
        /// Suffix text without the leading underscore.
        suffix: String,
    },
}

impl Token {
    /// Returns true if this token can carry a literal suffix.
    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }
}

impl TokenKind {
    /// Returns true for int, float, string and char literals.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral { .. }
                | TokenKind::FloatLiteral { .. }
                | TokenKind::StringLiteral { .. }
                | TokenKind::CharLiteral { .. }
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::IdentifierOrKeyword { name } => write!(f, "identifier `{}`", name),
            TokenKind::IntLiteral { value } => write!(f, "int literal {}", value),
            TokenKind::FloatLiteral { value } => write!(f, "float literal {}", value),
            TokenKind::StringLiteral { value } => write!(f, "string literal {:?}", value),
            TokenKind::CharLiteral { value } => write!(f, "char literal {:?}", value),
            TokenKind::Preprocessor { body } => write!(f, "preprocessor line {:?}", body),
            TokenKind::Operator { spelling, .. } => write!(f, "operator `{}`", spelling),
            TokenKind::CustomLiteral { inner, suffix } => {
                write!(f, "{} with suffix `{}`", inner.kind, suffix)
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, text: &str) -> Token {
        Token {
            line: 1,
            column: 0,
            text: text.to_string(),
            kind,
        }
    }

    #[test]
    fn test_literal_classification() {
        assert!(TokenKind::IntLiteral { value: 1 }.is_literal());
        assert!(TokenKind::FloatLiteral { value: 1.5 }.is_literal());
        assert!(TokenKind::StringLiteral { value: String::new() }.is_literal());
        assert!(TokenKind::CharLiteral { value: 'a' }.is_literal());
        assert!(!TokenKind::IdentifierOrKeyword { name: "a".into() }.is_literal());
        assert!(!TokenKind::Preprocessor { body: String::new() }.is_literal());
    }

    #[test]
    fn test_custom_literal_is_not_a_literal() {
        let inner = token(TokenKind::IntLiteral { value: 3 }, "3");
        let custom = TokenKind::CustomLiteral {
            inner: Box::new(inner),
            suffix: "px".into(),
        };
        assert!(!custom.is_literal());
        assert_eq!(custom.to_string(), "int literal 3 with suffix `px`");
    }

    #[test]
    fn test_display() {
        let tok = token(
            TokenKind::Operator {
                spelling: "->".into(),
                kind: OperatorKind(7),
            },
            "->",
        );
        assert_eq!(tok.to_string(), "1:0 operator `->`");
    }
}
