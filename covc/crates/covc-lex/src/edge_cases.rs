//! Edge case tests for covc-lex
