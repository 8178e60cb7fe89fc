//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `engine` - Public `Lexer`, the per-source session and the main loop
//! - `identifier` - Identifiers and literal suffixes
//! - `number` - Number literals
//! - `string` - String and char literals
//! - `operator` - Longest-match operator lookup
//! - `preprocessor` - Preprocessor lines

mod engine;
mod identifier;
mod number;
mod operator;
mod preprocessor;
mod string;

pub use engine::Lexer;
