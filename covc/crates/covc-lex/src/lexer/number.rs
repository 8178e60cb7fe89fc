//! Number literal lexing.
//!
//! Decimal integers and floats, plus `0x` hex, `0b` binary and leading-zero
//! octal integers. A `.` belongs to the literal only when a digit follows
//! it, so `1.foo` and `1..2` leave the dots to the operator scanner.

use super::engine::Session;
use crate::state::LexState;

/// Value of a scanned number literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Number {
    Int(i64),
    Float(f64),
}

impl Session<'_> {
    /// Scans a number literal starting at an ASCII digit.
    ///
    /// Leaves [`LexState::ParsingInt`], [`LexState::ParsingFloat`] or
    /// [`LexState::ErrorOverflow`] as the current state.
    pub(super) fn scan_number(&mut self) -> Number {
        let start = self.cursor.position();
        let first = match self.cursor.advance() {
            Some(c) => c,
            None => {
                self.state.enter(LexState::ParsingInt);
                return Number::Int(0);
            },
        };
        let lead = digit_value(first);

        if lead != 0 || self.has_fraction_ahead() {
            return self.scan_decimal(start, lead);
        }

        if self.cursor.match_char('x') || self.cursor.match_char('X') {
            self.scan_radix(16)
        } else if self.cursor.match_char('b') || self.cursor.match_char('B') {
            self.scan_radix(2)
        } else {
            self.scan_radix(8)
        }
    }

    /// Returns true if the digit run under the cursor is followed by `.`
    /// and another digit.
    fn has_fraction_ahead(&self) -> bool {
        let mut offset = 0;
        while self.cursor.peek_char(offset).is_some_and(|c| c.is_ascii_digit()) {
            offset += 1;
        }
        self.cursor.peek_char(offset) == Some('.')
            && self.cursor.peek_char(offset + 1).is_some_and(|c| c.is_ascii_digit())
    }

    fn scan_decimal(&mut self, start: usize, lead: u32) -> Number {
        let mut int = Some(i64::from(lead));
        while let Some(d) = self.cursor.current().and_then(|c| c.to_digit(10)) {
            self.cursor.advance();
            int = int
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(i64::from(d)));
        }

        let has_fraction = self.cursor.current() == Some('.')
            && self.cursor.peek_char(1).is_some_and(|c| c.is_ascii_digit());
        if !has_fraction {
            return self.finish_int(int);
        }

        self.cursor.advance();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let lexeme: String = self.cursor.slice_from(start).iter().collect();
        match lexeme.parse::<f64>() {
            Ok(value) => {
                self.state.enter(LexState::ParsingFloat);
                Number::Float(value)
            },
            // Left in the enclosing state; the engine reports it as internal.
            Err(_) => Number::Float(f64::NAN),
        }
    }

    /// Integer digits in `radix` after the prefix (or the leading `0`).
    fn scan_radix(&mut self, radix: u32) -> Number {
        let mut value = Some(0_i64);
        while let Some(c) = self.cursor.current() {
            let digit = match radix {
                16 if c.is_ascii_hexdigit() => hex_digit_value(c),
                2 if c == '0' || c == '1' => digit_value(c),
                8 if ('0'..='7').contains(&c) => digit_value(c),
                _ => break,
            };
            self.cursor.advance();
            value = value
                .and_then(|v| v.checked_mul(i64::from(radix)))
                .and_then(|v| v.checked_add(i64::from(digit)));
        }
        self.finish_int(value)
    }

    fn finish_int(&mut self, value: Option<i64>) -> Number {
        self.state.enter(LexState::ParsingInt);
        match value {
            Some(value) => Number::Int(value),
            None => {
                self.state.replace(LexState::ErrorOverflow);
                Number::Int(0)
            },
        }
    }
}

fn digit_value(c: char) -> u32 {
    c as u32 & 0xF
}

/// Low nibble of the code point, plus 9 for `A-F` and `a-f`.
fn hex_digit_value(c: char) -> u32 {
    (c as u32 & 0xF) + if c >= 'A' { 9 } else { 0 }
}
