//! Identifier and literal suffix lexing.

use super::engine::Session;
use crate::charset::Charset;
use crate::state::LexState;

/// ASCII letters, `$`, `_` and charset-specific letters.
pub(super) fn is_identifier_start(charset: &dyn Charset, c: char) -> bool {
    c.is_ascii_alphabetic() || c == '$' || c == '_' || charset.is_identifier_extra(c)
}

/// Identifier start characters plus ASCII digits.
pub(super) fn is_identifier_continue(charset: &dyn Charset, c: char) -> bool {
    c.is_ascii_digit() || is_identifier_start(charset, c)
}

impl Session<'_> {
    /// Scans an identifier or keyword. The cursor sits on a start character.
    pub(super) fn scan_identifier(&mut self) -> String {
        let charset = self.charset;
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.eat_while(|c| is_identifier_continue(charset, c));
        charset.encode(self.cursor.slice_from(start))
    }

    /// Scans `_name` right after a literal.
    ///
    /// Returns `None`, consuming nothing, unless the cursor sits on `_`
    /// followed by an identifier start. On success the suffix name (without
    /// the underscore) is returned and [`LexState::ParsingLiteralSuffix`] is
    /// left as the current state.
    pub(super) fn scan_literal_suffix(&mut self) -> Option<String> {
        let charset = self.charset;
        if self.cursor.current() != Some('_') {
            return None;
        }
        let next = self.cursor.peek_char(1)?;
        if !is_identifier_start(charset, next) {
            return None;
        }

        self.state.enter(LexState::ParsingLiteralSuffix);
        self.cursor.advance();
        let start = self.cursor.position();
        self.cursor.eat_while(|c| is_identifier_continue(charset, c));
        Some(charset.encode(self.cursor.slice_from(start)))
    }
}

#[cfg(test)]
mod tests {
    use crate::charset::Ascii;
    use crate::{tokenize, Lexer, TokenKind};

    fn names(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| match t.kind {
                TokenKind::IdentifierOrKeyword { name } => name,
                other => panic!("expected identifier, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(names("foo _bar $baz a1b2"), vec!["foo", "_bar", "$baz", "a1b2"]);
    }

    #[test]
    fn test_keywords_are_identifiers() {
        assert_eq!(names("if else while"), vec!["if", "else", "while"]);
    }

    #[test]
    fn test_unicode_identifiers() {
        assert_eq!(names("变量 naïve"), vec!["变量", "naïve"]);
    }

    #[test]
    fn test_ascii_charset_rejects_unicode_letters() {
        let lexer = Lexer::default().with_charset(Ascii);
        assert!(lexer.lex_code_points(&['a', 'é']).is_err());
    }

    #[test]
    fn test_suffix_on_each_literal_kind() {
        let tokens = tokenize("1_a 2.5_b \"s\"_c 'x'_d").unwrap();
        let suffixes: Vec<&str> = tokens
            .iter()
            .map(|t| match &t.kind {
                TokenKind::CustomLiteral { suffix, .. } => suffix.as_str(),
                other => panic!("expected custom literal, got {:?}", other),
            })
            .collect();
        assert_eq!(suffixes, vec!["a", "b", "c", "d"]);
        assert_eq!(tokens[2].text, "\"s\"_c");
        assert_eq!(tokens[3].column, 16);
    }

    #[test]
    fn test_suffix_may_contain_digits_and_underscores() {
        let tokens = tokenize("10_km2_x").unwrap();
        assert_eq!(tokens.len(), 1);
        match &tokens[0].kind {
            TokenKind::CustomLiteral { suffix, .. } => assert_eq!(suffix, "km2_x"),
            other => panic!("expected custom literal, got {:?}", other),
        }
    }

    #[test]
    fn test_suffix_not_applied_after_whitespace() {
        let tokens = tokenize("1 _a").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].is_literal());
        assert!(!tokens[1].is_literal());
    }
}
