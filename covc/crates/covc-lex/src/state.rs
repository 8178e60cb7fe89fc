//! Lexer state machine.
//!
//! Every sub-scanner reports what it produced, or how it failed, by leaving a
//! [`LexState`] in the shared [`StateManager`]. The engine reads that state
//! right after the scan with [`StateManager::take`], which also restores the
//! enclosing state. Nesting is explicit: entering a state suspends the current
//! one on a stack, so a literal scan followed by a suffix lookahead composes
//! without the scanners calling each other.

/// States of the lexer engine.
///
/// The `Parsing*` states double as success results: a scanner enters one
/// when it starts and leaves it in place when it finishes cleanly. The
/// `Error*` states are written over the current state with
/// [`StateManager::replace`] when a scan fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexState {
    /// Between tokens.
    Global,
    /// Scanned an integer literal.
    ParsingInt,
    /// Scanned a floating-point literal.
    ParsingFloat,
    /// Inside (or just finished) a string literal.
    ParsingString,
    /// Inside (or just finished) a char literal.
    ParsingChar,
    /// Scanned a preprocessor line.
    ParsingPreprocessor,
    /// Scanned an operator.
    ParsingOperator,
    /// Scanned a literal suffix.
    ParsingLiteralSuffix,
    /// A literal was just emitted; the next code point may start a suffix.
    TryingLiteralSuffix,
    /// Input ended inside a string or char literal.
    ErrorEof,
    /// A char literal holds more than one code point.
    ErrorEnclosing,
    /// Unsupported escape character.
    ErrorEscape,
    /// Symbol run matching no operator.
    ErrorOperator,
    /// Nothing between the quotes of a char literal.
    ErrorEmpty,
    /// Integer literal out of range.
    ErrorOverflow,
}

/// Current lexer state plus the stack of suspended enclosing states.
#[derive(Debug, Clone)]
pub struct StateManager {
    current: LexState,
    previous: Vec<LexState>,
}

impl StateManager {
    /// Creates a manager in [`LexState::Global`] with an empty stack.
    pub fn new() -> Self {
        Self {
            current: LexState::Global,
            previous: Vec::new(),
        }
    }

    /// Suspends the current state and makes `state` current.
    pub fn enter(&mut self, state: LexState) {
        self.previous.push(self.current);
        self.current = state;
    }

    /// Restores the enclosing state, but only if `expected` is current.
    ///
    /// A scanner that escalated into an error state keeps it: ending the
    /// state it originally entered is then a no-op.
    pub fn end_if(&mut self, expected: LexState) {
        if self.current == expected {
            self.current = self.previous.pop().unwrap_or(LexState::Global);
        }
    }

    /// Overwrites the current state without touching the stack.
    pub fn replace(&mut self, state: LexState) {
        self.current = state;
    }

    /// Reads the current state and restores the enclosing one.
    pub fn take(&mut self) -> LexState {
        let state = self.current;
        self.end_if(state);
        state
    }

    /// Returns the current state.
    pub fn current(&self) -> LexState {
        self.current
    }

    /// Number of suspended states.
    pub fn depth(&self) -> usize {
        self.previous.len()
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_global_and_empty() {
        let state = StateManager::new();
        assert_eq!(state.current(), LexState::Global);
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_enter_then_take_restores() {
        let mut state = StateManager::new();
        state.enter(LexState::ParsingString);
        assert_eq!(state.depth(), 1);
        assert_eq!(state.take(), LexState::ParsingString);
        assert_eq!(state.current(), LexState::Global);
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_end_if_ignores_other_states() {
        let mut state = StateManager::new();
        state.enter(LexState::ParsingChar);
        state.replace(LexState::ErrorEscape);
        state.end_if(LexState::ParsingChar);
        assert_eq!(state.current(), LexState::ErrorEscape);
        assert_eq!(state.take(), LexState::ErrorEscape);
        assert_eq!(state.current(), LexState::Global);
    }

    #[test]
    fn test_nested_suffix_lookahead() {
        let mut state = StateManager::new();
        state.enter(LexState::TryingLiteralSuffix);
        state.enter(LexState::ParsingLiteralSuffix);
        assert_eq!(state.take(), LexState::ParsingLiteralSuffix);
        assert_eq!(state.current(), LexState::TryingLiteralSuffix);
        state.end_if(LexState::TryingLiteralSuffix);
        assert_eq!(state.current(), LexState::Global);
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_pop_past_empty_stack_yields_global() {
        let mut state = StateManager::new();
        state.replace(LexState::ParsingOperator);
        assert_eq!(state.take(), LexState::ParsingOperator);
        assert_eq!(state.current(), LexState::Global);
        assert_eq!(state.take(), LexState::Global);
    }
}
