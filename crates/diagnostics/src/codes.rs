//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Registration-time codes are `ARG00xx`, dispatch-time
//! codes `ARG01xx`, post-parse codes `ARG02xx`.

/// A name was registered twice (or collides across a command boundary).
pub const REDEFINITION: &str = "ARG0001";
/// An argument was registered without any identifying name.
pub const EMPTY_NAME: &str = "ARG0002";
/// An identifying name has the wrong shape (whitespace, bad dash prefix).
pub const INVALID_NAME: &str = "ARG0003";

/// A token resolved to no registered argument.
pub const UNKNOWN_ARGUMENT: &str = "ARG0101";
/// A value-bearing flag appeared before the end of a flag combo.
pub const FLAG_COMBO_VALUE: &str = "ARG0102";
/// A second command token was encountered while one was already active.
pub const MULTIPLE_COMMANDS: &str = "ARG0103";
/// A value-bearing argument was invoked without a following value token.
pub const MISSING_VALUE: &str = "ARG0104";

/// A required argument was never invoked.
pub const REQUIRED_MISSING: &str = "ARG0201";
/// A command was mandated but none was given.
pub const MISSING_COMMAND: &str = "ARG0202";
