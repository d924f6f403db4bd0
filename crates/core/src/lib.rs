//! argot core library.
//!
//! A small command-line argument parsing engine: register flags, named
//! arguments, and git-style commands, then run a single-pass parse over the
//! raw token list. The main entry points are [`Parser`] for the engine,
//! [`Arg`] and [`Command`] for the concrete argument kinds, and
//! [`ParseError`] for the (always fatal) failure taxonomy.
//!
//! Parsing is synchronous and bounded: one blocking [`Parser::parse`] call
//! classifies each token (long form, short-flag combo, bare word), routes it
//! to the matching argument, and brackets the pass with structural
//! validation before and completeness validation after. Unknown tokens
//! produce "did you mean" suggestions via the
//! [`argot_diagnostics`](argot_diagnostics) crate.

#![warn(missing_docs)]

/// Argument kinds and the capability contract they satisfy.
pub mod arg;
/// The token stream consumed during parsing.
pub mod cursor;
/// The parse failure taxonomy.
pub mod error;
/// The dispatch loop and two-phase validation engine.
pub mod parser;

// ── Convenience re-exports ──────────────────────────────────────────────

// Engine
pub use parser::Parser;

// Argument kinds
pub use arg::{Arg, ArgKind, ArgNode, ArgRef, ArgSummary, Command};

// Cursor
pub use cursor::Cursor;

// Errors
pub use error::ParseError;

// Diagnostics (re-exported from the diagnostics crate)
pub use argot_diagnostics::{Diagnostic, Suggestions, codes};
