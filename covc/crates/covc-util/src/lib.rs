//! covc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Types shared by every phase of the covc toolchain:
//!
//! - [`span`] - code-point based source locations ([`Span`])
//! - [`diagnostic`] - structured error reporting ([`Diagnostic`],
//!   [`DiagnosticBuilder`], [`DiagnosticCode`], [`SourceSnippet`])
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. PLAIN DATA
//!    Spans and diagnostics are small values with public fields; phases
//!    construct them directly and hand them to the caller.
//!
//! 2. NO OUTPUT
//!    Nothing here prints. Rendering goes through `Display`, and the caller
//!    decides where the text ends up.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Level, SourceSnippet};
pub use span::Span;

// Re-export commonly used types
pub use rustc_hash::FxBuildHasher;
