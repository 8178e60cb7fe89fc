//! Operator lexing.
//!
//! The scanner collects the run of symbol code points under the cursor (the
//! window) and looks for the longest prefix of it present in the operator
//! table. The lookup window never exceeds the table's longest spelling.
//! Only the matched prefix is consumed; the rest of the run is scanned again
//! on the next iteration.

use super::engine::{is_separator, Session};
use super::identifier::is_identifier_continue;
use crate::state::LexState;
use crate::table::OperatorKind;

impl<'a> Session<'a> {
    /// Scans the longest operator at the cursor.
    ///
    /// Leaves [`LexState::ParsingOperator`] and returns the match, or leaves
    /// [`LexState::ErrorOperator`] with the cursor past the whole symbol run.
    pub(super) fn scan_operator(&mut self) -> Option<(String, OperatorKind)> {
        let window = self.operator_window(self.table.longest_spelling());
        self.state.enter(LexState::ParsingOperator);

        let mut len = window.len();
        while len > 0 {
            let spelling: String = window[..len].iter().collect();
            if let Some(kind) = self.table.get(&spelling) {
                self.cursor.advance_n(len);
                return Some((spelling, kind));
            }
            len -= 1;
        }

        // The error covers the whole run, not just the capped window.
        let run = self.operator_window(usize::MAX);
        self.cursor.advance_n(run.len().max(1));
        self.state.replace(LexState::ErrorOperator);
        None
    }

    /// Code points from the cursor up to the next separator, identifier
    /// character or end of input, capped at `limit`.
    fn operator_window(&self, limit: usize) -> &'a [char] {
        let rest = self.cursor.remaining();
        let rest = &rest[..rest.len().min(limit)];
        let len = rest
            .iter()
            .position(|&c| is_separator(c) || is_identifier_continue(self.charset, c))
            .unwrap_or(rest.len());
        &rest[..len]
    }
}
