//! Preprocessor line lexing.

use super::engine::Session;
use crate::state::LexState;

impl Session<'_> {
    /// Scans a preprocessor line. The cursor sits on a marker at the start
    /// of a line.
    ///
    /// The token text runs from the marker to the end of the line. The line
    /// break itself is left for the main loop. Returns the body, which
    /// excludes the marker.
    pub(super) fn scan_preprocessor(&mut self) -> String {
        self.state.enter(LexState::ParsingPreprocessor);
        self.cursor.advance();
        let start = self.cursor.position();
        self.cursor.eat_while(|c| c != '\n');
        self.charset.encode(self.cursor.slice_from(start))
    }
}

#[cfg(test)]
mod tests {
    use crate::{tokenize, TokenKind};

    #[test]
    fn test_preprocessor_line() {
        let tokens = tokenize("#import math\nx").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Preprocessor { body: "import math".into() });
        assert_eq!(tokens[0].text, "#import math");
        assert_eq!((tokens[1].line, tokens[1].column), (2, 0));
    }

    #[test]
    fn test_at_marker_and_symbols_in_body() {
        let tokens = tokenize("@charset: \"utf8\" ~~ 'x").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].kind,
            TokenKind::Preprocessor { body: "charset: \"utf8\" ~~ 'x".into() }
        );
    }

    #[test]
    fn test_marker_only_at_line_start() {
        let tokens = tokenize("a\n#b\n  #c");
        assert!(tokens.is_err());
        let tokens = tokenize("a\n#b").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Preprocessor { body: "b".into() });
    }

    #[test]
    fn test_empty_body() {
        let tokens = tokenize("#\n").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Preprocessor { body: String::new() });
    }
}
