//! Charset codecs.
//!
//! The engine never looks at raw bytes. A [`Charset`] decodes the caller's
//! encoded source into a code-point buffer, encodes buffer ranges back into
//! text for token lexemes, and says which non-ASCII code points may appear
//! in identifiers. Swapping the codec changes what counts as a letter
//! without touching the scanners.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// A source encoding strategy.
pub trait Charset: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Decodes the whole input, or fails without partial output.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<char>, DecodeError>;

    /// Encodes a range of code points back into text.
    fn encode(&self, code_points: &[char]) -> String {
        code_points.iter().collect()
    }

    /// Returns true for encoding-specific letters beyond ASCII that may
    /// start or continue an identifier.
    fn is_identifier_extra(&self, c: char) -> bool;
}

/// 7-bit ASCII. Any byte with the high bit set is a decode error.
///
/// # Example
///
/// ```
/// use covc_lex::charset::{Ascii, Charset};
///
/// assert_eq!(Ascii.decode(b"a+b").unwrap(), vec!['a', '+', 'b']);
/// assert!(Ascii.decode("é".as_bytes()).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascii;

impl Charset for Ascii {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<char>, DecodeError> {
        bytes
            .iter()
            .enumerate()
            .map(|(offset, &byte)| {
                if byte.is_ascii() {
                    Ok(byte as char)
                } else {
                    Err(DecodeError::InvalidByte {
                        offset,
                        byte,
                        charset: self.name(),
                    })
                }
            })
            .collect()
    }

    fn is_identifier_extra(&self, _c: char) -> bool {
        false
    }
}

/// UTF-8 with Unicode letters allowed in identifiers.
///
/// A leading byte order mark is dropped during decoding.
///
/// # Example
///
/// ```
/// use covc_lex::charset::{Charset, Utf8};
///
/// assert_eq!(Utf8.decode("\u{FEFF}π".as_bytes()).unwrap(), vec!['π']);
/// assert!(Utf8.is_identifier_extra('π'));
/// assert!(!Utf8.is_identifier_extra('+'));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Utf8;

impl Charset for Utf8 {
    fn name(&self) -> &'static str {
        "utf-8"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<char>, DecodeError> {
        let text = std::str::from_utf8(bytes).map_err(|e| DecodeError::InvalidSequence {
            offset: e.valid_up_to(),
        })?;
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        Ok(text.chars().collect())
    }

    fn is_identifier_extra(&self, c: char) -> bool {
        !c.is_ascii() && c.is_alphabetic()
    }
}

/// Codec selector used by configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharsetKind {
    /// [`Ascii`]
    Ascii,
    /// [`Utf8`]
    #[default]
    Utf8,
}

impl CharsetKind {
    /// Instantiates the selected codec.
    pub fn codec(self) -> Box<dyn Charset> {
        match self {
            CharsetKind::Ascii => Box::new(Ascii),
            CharsetKind::Utf8 => Box::new(Utf8),
        }
    }
}
