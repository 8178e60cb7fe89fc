//! Operator table.
//!
//! Maps operator spellings to caller-defined [`OperatorKind`] constants. The
//! table is built before lexing and only read while scanning, so one table
//! can serve any number of sessions.

use covc_util::FxBuildHasher;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Caller-defined operator kind constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatorKind(pub u16);

/// Kinds used by [`OperatorTable::standard`].
pub mod kinds {
    use super::OperatorKind;

    /// `+`
    pub const ADD: OperatorKind = OperatorKind(1);
    /// `-`
    pub const SUB: OperatorKind = OperatorKind(2);
    /// `*`
    pub const MUL: OperatorKind = OperatorKind(3);
    /// `/`
    pub const DIV: OperatorKind = OperatorKind(4);
    /// `%`
    pub const MOD: OperatorKind = OperatorKind(5);
    /// `^`
    pub const POW: OperatorKind = OperatorKind(6);
    /// `=`
    pub const ASSIGN: OperatorKind = OperatorKind(7);
    /// `+=`
    pub const ADD_ASSIGN: OperatorKind = OperatorKind(8);
    /// `-=`
    pub const SUB_ASSIGN: OperatorKind = OperatorKind(9);
    /// `*=`
    pub const MUL_ASSIGN: OperatorKind = OperatorKind(10);
    /// `/=`
    pub const DIV_ASSIGN: OperatorKind = OperatorKind(11);
    /// `%=`
    pub const MOD_ASSIGN: OperatorKind = OperatorKind(12);
    /// `^=`
    pub const POW_ASSIGN: OperatorKind = OperatorKind(13);
    /// `==`
    pub const EQ: OperatorKind = OperatorKind(14);
    /// `!=`
    pub const NE: OperatorKind = OperatorKind(15);
    /// `<`
    pub const LT: OperatorKind = OperatorKind(16);
    /// `>`
    pub const GT: OperatorKind = OperatorKind(17);
    /// `<=`
    pub const LE: OperatorKind = OperatorKind(18);
    /// `>=`
    pub const GE: OperatorKind = OperatorKind(19);
    /// `&&`
    pub const AND: OperatorKind = OperatorKind(20);
    /// `||`
    pub const OR: OperatorKind = OperatorKind(21);
    /// `!`
    pub const NOT: OperatorKind = OperatorKind(22);
    /// `&`
    pub const BIT_AND: OperatorKind = OperatorKind(23);
    /// `|`
    pub const BIT_OR: OperatorKind = OperatorKind(24);
    /// `++`
    pub const INC: OperatorKind = OperatorKind(25);
    /// `--`
    pub const DEC: OperatorKind = OperatorKind(26);
    /// `->`
    pub const ARROW: OperatorKind = OperatorKind(27);
    /// `...`
    pub const ELLIPSIS: OperatorKind = OperatorKind(28);
    /// `.`
    pub const DOT: OperatorKind = OperatorKind(29);
    /// `,`
    pub const COMMA: OperatorKind = OperatorKind(30);
    /// `:`
    pub const COLON: OperatorKind = OperatorKind(31);
    /// `::`
    pub const PATH: OperatorKind = OperatorKind(32);
    /// `?`
    pub const QUESTION: OperatorKind = OperatorKind(33);
    /// `(`
    pub const LPAREN: OperatorKind = OperatorKind(34);
    /// `)`
    pub const RPAREN: OperatorKind = OperatorKind(35);
    /// `[`
    pub const LBRACKET: OperatorKind = OperatorKind(36);
    /// `]`
    pub const RBRACKET: OperatorKind = OperatorKind(37);
    /// `{`
    pub const LBRACE: OperatorKind = OperatorKind(38);
    /// `}`
    pub const RBRACE: OperatorKind = OperatorKind(39);
    /// `=>`
    pub const FAT_ARROW: OperatorKind = OperatorKind(40);
}

const STANDARD_OPERATORS: &[(&str, OperatorKind)] = &[
    ("+", kinds::ADD),
    ("-", kinds::SUB),
    ("*", kinds::MUL),
    ("/", kinds::DIV),
    ("%", kinds::MOD),
    ("^", kinds::POW),
    ("=", kinds::ASSIGN),
    ("+=", kinds::ADD_ASSIGN),
    ("-=", kinds::SUB_ASSIGN),
    ("*=", kinds::MUL_ASSIGN),
    ("/=", kinds::DIV_ASSIGN),
    ("%=", kinds::MOD_ASSIGN),
    ("^=", kinds::POW_ASSIGN),
    ("==", kinds::EQ),
    ("!=", kinds::NE),
    ("<", kinds::LT),
    (">", kinds::GT),
    ("<=", kinds::LE),
    (">=", kinds::GE),
    ("&&", kinds::AND),
    ("||", kinds::OR),
    ("!", kinds::NOT),
    ("&", kinds::BIT_AND),
    ("|", kinds::BIT_OR),
    ("++", kinds::INC),
    ("--", kinds::DEC),
    ("->", kinds::ARROW),
    ("...", kinds::ELLIPSIS),
    (".", kinds::DOT),
    (",", kinds::COMMA),
    (":", kinds::COLON),
    ("::", kinds::PATH),
    ("?", kinds::QUESTION),
    ("(", kinds::LPAREN),
    (")", kinds::RPAREN),
    ("[", kinds::LBRACKET),
    ("]", kinds::RBRACKET),
    ("{", kinds::LBRACE),
    ("}", kinds::RBRACE),
    ("=>", kinds::FAT_ARROW),
];

/// Mapping from operator spelling to [`OperatorKind`].
///
/// Entries keep their insertion order.
///
/// # Example
///
/// ```
/// use covc_lex::{OperatorKind, OperatorTable};
///
/// let mut table = OperatorTable::new();
/// table.insert("-", OperatorKind(1)).unwrap();
/// table.insert("->", OperatorKind(2)).unwrap();
/// assert_eq!(table.get("->"), Some(OperatorKind(2)));
/// assert_eq!(table.longest_spelling(), 2);
/// assert!(table.insert("a+", OperatorKind(3)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    entries: IndexMap<String, OperatorKind, FxBuildHasher>,
    /// Longest spelling, in code points.
    longest: usize,
}

impl OperatorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default operator set of the scripting language.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for &(spelling, kind) in STANDARD_OPERATORS {
            table.insert_unchecked(spelling, kind);
        }
        table
    }

    /// Adds or replaces an entry, returning the previous kind.
    ///
    /// Spellings the operator scanner could never produce are rejected:
    /// empty strings and anything containing whitespace, `;`, ASCII letters
    /// or digits, `$` or `_`.
    pub fn insert(
        &mut self,
        spelling: impl Into<String>,
        kind: OperatorKind,
    ) -> Result<Option<OperatorKind>, TableError> {
        let spelling = spelling.into();
        if spelling.is_empty() {
            return Err(TableError::EmptySpelling);
        }
        if let Some(found) = spelling.chars().find(|&c| !can_appear_in_operator(c)) {
            return Err(TableError::Unmatchable { spelling, found });
        }
        Ok(self.insert_unchecked(spelling, kind))
    }

    fn insert_unchecked(&mut self, spelling: impl Into<String>, kind: OperatorKind) -> Option<OperatorKind> {
        let spelling = spelling.into();
        self.longest = self.longest.max(spelling.chars().count());
        self.entries.insert(spelling, kind)
    }

    /// Looks up a spelling.
    pub fn get(&self, spelling: &str) -> Option<OperatorKind> {
        self.entries.get(spelling).copied()
    }

    /// Returns true if the spelling is registered.
    pub fn contains(&self, spelling: &str) -> bool {
        self.entries.contains_key(spelling)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest spelling, in code points.
    pub fn longest_spelling(&self) -> usize {
        self.longest
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, OperatorKind)> {
        self.entries.iter().map(|(spelling, &kind)| (spelling.as_str(), kind))
    }
}

/// Code points the operator scanner may include in a window.
fn can_appear_in_operator(c: char) -> bool {
    !(c.is_whitespace() || c == ';' || c.is_ascii_alphanumeric() || c == '$' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = OperatorTable::standard();
        assert_eq!(table.len(), STANDARD_OPERATORS.len());
        assert_eq!(table.get("..."), Some(kinds::ELLIPSIS));
        assert_eq!(table.get("->"), Some(kinds::ARROW));
        assert_eq!(table.longest_spelling(), 3);
        assert!(!table.contains("<<"));
    }

    #[test]
    fn test_insert_replaces_kind() {
        let mut table = OperatorTable::new();
        assert_eq!(table.insert("+", OperatorKind(1)), Ok(None));
        assert_eq!(table.insert("+", OperatorKind(9)), Ok(Some(OperatorKind(1))));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("+"), Some(OperatorKind(9)));
    }

    #[test]
    fn test_insert_rejects_unmatchable() {
        let mut table = OperatorTable::new();
        assert_eq!(table.insert("", OperatorKind(1)), Err(TableError::EmptySpelling));
        assert_eq!(
            table.insert("+ +", OperatorKind(1)),
            Err(TableError::Unmatchable {
                spelling: "+ +".into(),
                found: ' ',
            })
        );
        assert!(table.insert(";", OperatorKind(1)).is_err());
        assert!(table.insert("_", OperatorKind(1)).is_err());
        assert!(table.insert("-1", OperatorKind(1)).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn test_iter_keeps_insertion_order() {
        let mut table = OperatorTable::new();
        table.insert("->", OperatorKind(2)).unwrap();
        table.insert("-", OperatorKind(1)).unwrap();
        let spellings: Vec<&str> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(spellings, vec!["->", "-"]);
    }

    #[test]
    fn test_longest_counts_code_points() {
        let mut table = OperatorTable::new();
        table.insert("→", OperatorKind(1)).unwrap();
        assert_eq!(table.longest_spelling(), 1);
    }
}
