//! The parse failure taxonomy.
//!
//! Every failure aborts the parse immediately and propagates to the caller;
//! nothing here is designed to be caught and retried. The expected caller
//! behavior is to display the message and exit non-zero.

use argot_diagnostics::{Diagnostic, Suggestions, codes};

fn unknown_message(word: &str, suggestions: &Suggestions) -> String {
    if suggestions.is_empty() {
        format!("unknown argument \"{word}\"")
    } else {
        format!("unknown argument \"{word}\", did you mean {suggestions}?")
    }
}

/// A fatal parse or registration failure.
///
/// One variant per condition; [`ParseError::code`] maps each to its stable
/// diagnostic ID and [`ParseError::to_diagnostic`] to a serializable report.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Two registered arguments share an identifying name.
    #[error("argument \"{name}\" is already registered")]
    Redefinition {
        /// The colliding name.
        name: String,
    },

    /// An argument was registered without any identifying name.
    #[error("attempt to register an argument without a name")]
    EmptyName,

    /// An identifying name has the wrong shape.
    #[error("invalid argument name \"{name}\"")]
    InvalidName {
        /// The malformed name.
        name: String,
    },

    /// A token resolved to no registered argument.
    #[error("{}", unknown_message(.word, .suggestions))]
    UnknownArgument {
        /// The unresolved token (name half, for `name=value` tokens).
        word: String,
        /// Close matches across the whole registry, in registration order.
        suggestions: Suggestions,
    },

    /// A value-bearing flag appeared in a non-final combo position.
    #[error("only the last flag in combo \"{combo}\" may take a value")]
    FlagComboValue {
        /// The offending combo token as written.
        combo: String,
    },

    /// A second command token was encountered.
    #[error("only one command can be invoked, but got \"{first}\" and \"{second}\"")]
    MultipleCommands {
        /// The command already active.
        first: String,
        /// The command that was invoked on top of it.
        second: String,
    },

    /// A value-bearing argument was invoked with no value token following.
    #[error("argument \"{name}\" requires a value")]
    MissingValue {
        /// The argument that went unvalued.
        name: String,
    },

    /// A required argument was never invoked.
    #[error("required argument \"{name}\" was not specified")]
    RequiredMissing {
        /// The unsatisfied argument.
        name: String,
    },

    /// A command was mandated but the token list contained none.
    #[error("no command specified")]
    MissingCommand,
}

impl ParseError {
    /// Shorthand for an unknown-argument error with no suggestions.
    pub(crate) fn unknown(word: impl Into<String>) -> Self {
        Self::UnknownArgument {
            word: word.into(),
            suggestions: Suggestions::new(),
        }
    }

    /// The stable diagnostic code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Redefinition { .. } => codes::REDEFINITION,
            Self::EmptyName => codes::EMPTY_NAME,
            Self::InvalidName { .. } => codes::INVALID_NAME,
            Self::UnknownArgument { .. } => codes::UNKNOWN_ARGUMENT,
            Self::FlagComboValue { .. } => codes::FLAG_COMBO_VALUE,
            Self::MultipleCommands { .. } => codes::MULTIPLE_COMMANDS,
            Self::MissingValue { .. } => codes::MISSING_VALUE,
            Self::RequiredMissing { .. } => codes::REQUIRED_MISSING,
            Self::MissingCommand => codes::MISSING_COMMAND,
        }
    }

    /// Convert into a serializable [`Diagnostic`] report.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::new(self.code(), self.to_string());
        match self {
            Self::UnknownArgument { suggestions, .. } if !suggestions.is_empty() => {
                diag.with_suggestions(suggestions.clone())
            }
            _ => diag,
        }
    }
}
