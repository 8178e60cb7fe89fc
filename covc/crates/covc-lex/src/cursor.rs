//! Code-point cursor for traversing the decoded source buffer.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a session's code-point buffer. It tracks line numbers and
//! the start of the current line, so columns are always code-point offsets
//! from the most recent line break.

/// A cursor over a borrowed code-point buffer.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The decoded source.
    chars: &'a [char],

    /// Index of the current code point.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Index of the first code point of the current line.
    line_start: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of the buffer.
    pub fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            position: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Returns the code point under the cursor, or `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.peek_char(0)
    }

    /// Returns the code point `offset` positions ahead without consuming.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// Consumes the current code point.
    ///
    /// Consuming a `\n` moves to the next line.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.line_start = self.position;
        }
        Some(c)
    }

    /// Consumes `count` code points, stopping early at the end.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes code points while `predicate` holds.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Consumes the expected code point if present.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor sits on the first code point of a line.
    #[inline]
    pub fn is_at_line_start(&self) -> bool {
        self.position == self.line_start
    }

    /// Current index into the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column (0-based, in code points).
    #[inline]
    pub fn column(&self) -> u32 {
        (self.position - self.line_start) as u32
    }

    /// Code points from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a [char] {
        &self.chars[start..self.position]
    }

    /// Code points from the cursor to the end of the buffer.
    pub fn remaining(&self) -> &'a [char] {
        &self.chars[self.position..]
    }
}
