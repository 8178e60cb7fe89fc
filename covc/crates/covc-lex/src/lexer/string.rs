//! String and char literal lexing.

use super::engine::Session;
use crate::state::LexState;

impl Session<'_> {
    /// Scans a string literal starting at `"`.
    ///
    /// Leaves [`LexState::ParsingString`] on success, [`LexState::ErrorEof`]
    /// if input ends before the closing quote and [`LexState::ErrorEscape`]
    /// with the cursor just past an unsupported escape character. Raw line
    /// breaks are part of the value.
    pub(super) fn scan_string(&mut self) -> String {
        self.cursor.advance();
        self.state.enter(LexState::ParsingString);

        let mut value = String::new();
        loop {
            match self.cursor.advance() {
                None => {
                    self.state.replace(LexState::ErrorEof);
                    break;
                },
                Some('"') => break,
                Some('\\') => match self.cursor.advance() {
                    None => {
                        self.state.replace(LexState::ErrorEof);
                        break;
                    },
                    Some(c) => match unescape(c) {
                        Some(escaped) => value.push(escaped),
                        None => {
                            self.state.replace(LexState::ErrorEscape);
                            break;
                        },
                    },
                },
                Some(c) => value.push(c),
            }
        }
        value
    }

    /// Scans a char literal starting at `'`.
    ///
    /// Exactly one code point (or one escape) must sit between the quotes.
    /// Failure states: [`LexState::ErrorEmpty`] for `''` or a lone quote at
    /// the end of input, [`LexState::ErrorEof`] when input ends after the
    /// character, [`LexState::ErrorEscape`] and [`LexState::ErrorEnclosing`]
    /// when the code point after the character is not `'`.
    pub(super) fn scan_char(&mut self) -> Option<char> {
        self.cursor.advance();
        self.state.enter(LexState::ParsingChar);

        let value = match self.cursor.advance() {
            None | Some('\'') => {
                self.state.replace(LexState::ErrorEmpty);
                return None;
            },
            Some('\\') => match self.cursor.advance() {
                None => {
                    self.state.replace(LexState::ErrorEof);
                    return None;
                },
                Some(c) => match unescape(c) {
                    Some(escaped) => escaped,
                    None => {
                        self.state.replace(LexState::ErrorEscape);
                        return None;
                    },
                },
            },
            Some(c) => c,
        };

        match self.cursor.advance() {
            Some('\'') => Some(value),
            None => {
                self.state.replace(LexState::ErrorEof);
                None
            },
            Some(_) => {
                self.state.replace(LexState::ErrorEnclosing);
                None
            },
        }
    }
}

/// Maps the character after a backslash to the code point it denotes.
pub(super) fn unescape(c: char) -> Option<char> {
    Some(match c {
        'r' => '\r',
        'n' => '\n',
        't' => '\t',
        'b' => '\u{8}',
        'f' => '\u{C}',
        'v' => '\u{B}',
        '\\' => '\\',
        '"' => '"',
        '\'' => '\'',
        _ => return None,
    })
}
