//! covc-lex - Lexical Analyzer for the Covc Scripting Language
//!
//! This crate turns encoded source text into a flat list of tokens for the
//! parser. Scanning is fail-fast: the first malformed construct ends the
//! session with a [`LexError`] that records where it happened.
//!
//! # Example Usage
//!
//! ```
//! use covc_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("#import math\nvar r = 2.5_cm").unwrap();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].kind, TokenKind::Preprocessor { body: "import math".into() });
//! assert_eq!(tokens[4].text, "2.5_cm");
//! assert!(matches!(tokens[4].kind, TokenKind::CustomLiteral { .. }));
//! ```
//!
//! # Module Structure
//!
//! - [`charset`] - Decoding input bytes into code points
//! - `cursor` - Code-point cursor with line/column tracking
//! - `state` - Lexer states and the state stack
//! - [`table`] - Operator table
//! - [`token`] - Token type definitions
//! - [`lexer`] - Engine and sub-scanners
//! - [`config`] - TOML configuration
//! - [`error`] - Error types
//!
//! The cursor and the state stack are internal to a lexing session:
//!
//! ```compile_fail
//! use covc_lex::cursor::Cursor;
//! ```
//!
//! # Token Categories
//!
//! - **Identifiers and keywords**: `[A-Za-z$_][A-Za-z0-9$_]*`, plus letters
//!   allowed by the charset. Keywords are not distinguished here.
//! - **Integers**: `42`, `0xFF`, `0b1010`, `017` (octal)
//! - **Floats**: `3.14`
//! - **Strings and chars**: `"text\n"`, `'c'`, escapes `\r \n \t \b \f \v \\ \" \'`
//! - **Custom literals**: any literal directly followed by `_name`
//! - **Operators**: longest match against the [`OperatorTable`]
//! - **Preprocessor lines**: `#` or `@` at the start of a line, to the line end
//!
//! Whitespace, line breaks and `;` only separate tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charset;
pub mod config;
pub(crate) mod cursor;
pub mod error;
pub mod lexer;
pub(crate) mod state;
pub mod table;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use charset::{Ascii, Charset, CharsetKind, Utf8};
pub use config::LexerConfig;
pub use error::{ConfigError, DecodeError, Error, LexError, LexErrorKind, Result, TableError};
pub use lexer::Lexer;
pub use table::{OperatorKind, OperatorTable};
pub use token::{Token, TokenKind};

/// Tokenizes UTF-8 source with the standard operator table.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::default().lex(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::kinds;

    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::IdentifierOrKeyword { name: name.into() }
    }

    fn op(spelling: &str, kind: OperatorKind) -> TokenKind {
        TokenKind::Operator {
            spelling: spelling.into(),
            kind,
        }
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\n;;\n").unwrap().is_empty());
    }

    #[test]
    fn test_statement() {
        assert_eq!(
            lex_kinds("var x = 0x1F + 3.5;"),
            vec![
                ident("var"),
                ident("x"),
                op("=", kinds::ASSIGN),
                TokenKind::IntLiteral { value: 31 },
                op("+", kinds::ADD),
                TokenKind::FloatLiteral { value: 3.5 },
            ]
        );
    }

    #[test]
    fn test_function_header() {
        assert_eq!(
            lex_kinds("function f(a, b...)"),
            vec![
                ident("function"),
                ident("f"),
                op("(", kinds::LPAREN),
                ident("a"),
                op(",", kinds::COMMA),
                ident("b"),
                op("...", kinds::ELLIPSIS),
                op(")", kinds::RPAREN),
            ]
        );
    }

    #[test]
    fn test_bom_is_skipped() {
        let tokens = tokenize("\u{FEFF}x").unwrap();
        assert_eq!(tokens[0].column, 0);
        assert_eq!(tokens[0].kind, ident("x"));
    }

    #[test]
    fn test_lex_accepts_bytes() {
        let tokens = Lexer::default().lex(b"a+b".as_slice()).unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_error_display_includes_position() {
        let err = tokenize("a\n  'xy'").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Lexer error at line 2 column 2-5: char literal must be closed after one character"
        );
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_decimal_round_trip() {
        use proptest::prelude::*;

        proptest!(|(value in 1_i64..=i64::MAX)| {
            let tokens = tokenize(&value.to_string()).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].kind, &TokenKind::IntLiteral { value });
        });
    }

    #[test]
    fn test_property_radix_conversion() {
        use proptest::prelude::*;

        proptest!(|(value in 0_i64..=i64::MAX)| {
            for (source, expected) in [
                (format!("0x{:x}", value), value),
                (format!("0X{:X}", value), value),
                (format!("0b{:b}", value), value),
                (format!("0{:o}", value), value),
            ] {
                let tokens = tokenize(&source).unwrap();
                prop_assert_eq!(tokens.len(), 1);
                prop_assert_eq!(&tokens[0].kind, &TokenKind::IntLiteral { value: expected });
            }
        });
    }

    #[test]
    fn test_property_string_content_preserved() {
        use proptest::prelude::*;

        proptest!(|(content in "[^\"\\\\]{0,100}")| {
            let source = format!("\"{}\"", content);
            let tokens = tokenize(&source).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].kind, &TokenKind::StringLiteral { value: content.clone() });
            prop_assert_eq!(&tokens[0].text, &source);
        });
    }

    #[test]
    fn test_property_identifiers() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_$][a-zA-Z0-9_$]{0,100}")| {
            let tokens = tokenize(&input).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].kind, &TokenKind::IdentifierOrKeyword { name: input.clone() });
        });
    }

    #[test]
    fn test_property_idempotent() {
        use proptest::prelude::*;

        proptest!(|(input in "[ -~\n]{0,200}")| {
            let lexer = Lexer::default();
            let first = lexer.lex(&input);
            let second = lexer.lex(&input);
            match (first, second) {
                (Ok(a), Ok(b)) => {
                    prop_assert_eq!(a, b);
                },
                (Err(a), Err(b)) => {
                    prop_assert_eq!(a.to_string(), b.to_string());
                },
                _ => {
                    prop_assert!(false, "lexing the same input twice disagreed");
                },
            }
        });
    }

    #[test]
    fn test_property_token_text_matches_source() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9+*/<>=(), \n]{0,200}")| {
            if let Ok(tokens) = tokenize(&input) {
                let lines: Vec<Vec<char>> = input.split('\n').map(|l| l.chars().collect()).collect();
                for token in tokens {
                    let line = &lines[token.line as usize - 1];
                    let start = token.column as usize;
                    let text: String = line[start..start + token.text.chars().count()].iter().collect();
                    prop_assert_eq!(text, token.text);
                }
            }
        });
    }
}
