//! Diagnostics for the argot argument parser.
//!
//! Provides the [`Diagnostic`] report type, the [`Suggestions`] list used for
//! "did you mean" hints, and the edit-distance machinery behind them.
//! Diagnostic codes are defined in the [`codes`] module.

#![warn(missing_docs)]

pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

// ── Edit distance ───────────────────────────────────────────────────────

/// Damerau-Levenshtein distance between two strings (optimal string
/// alignment variant: adjacent transpositions count as one edit, but a
/// transposed pair is never edited again).
///
/// Runs in O(|a| × |b|) time with three rolling rows, so it stays cheap for
/// the short names it is fed.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let cols = b.len() + 1;
    let mut prev2 = vec![0usize; cols];
    let mut prev: Vec<usize> = (0..cols).collect();
    let mut cur = vec![0usize; cols];

    for i in 1..=a.len() {
        cur[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            cur[j] = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                cur[j] = cur[j].min(prev2[j - 2] + 1);
            }
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}

/// Decide whether `candidate` looks like a misspelling of the registered
/// `name`.
///
/// Both sides are compared with their leading dashes stripped, so `--outptu`
/// is judged against `output`, not against the dashes. Names whose stripped
/// form is a single character are never suggested — every short flag is
/// within one edit of every other, and suggesting `-x` for `-v` helps
/// nobody. The threshold is 1 edit for names up to four characters and 2
/// edits beyond that.
pub fn is_close_match(candidate: &str, name: &str) -> bool {
    let c = candidate.trim_start_matches('-');
    let n = name.trim_start_matches('-');
    let n_len = n.chars().count();
    if n_len <= 1 || c.is_empty() {
        return false;
    }
    let threshold = if n_len <= 4 { 1 } else { 2 };
    damerau_levenshtein(c, n) <= threshold
}

// ── Suggestions ─────────────────────────────────────────────────────────

/// An ordered, deduplicated list of candidate names for a misspelled token.
///
/// Order is insertion order, which the parser keeps equal to registration
/// order. `Display` renders the list quoted and joined with ` or `, ready to
/// embed in an error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestions(Vec<String>);

impl Suggestions {
    /// Create an empty suggestion list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name, ignoring exact duplicates.
    pub fn push(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.0.contains(&name) {
            self.0.push(name);
        }
    }

    /// `true` if no suggestion was collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of collected suggestions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the suggested names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "\"{name}\"")?;
        }
        Ok(())
    }
}

// ── Diagnostic ──────────────────────────────────────────────────────────

/// A machine-readable report of a single parse failure.
///
/// Every failure in the parser is fatal, so unlike most diagnostic systems
/// there is no severity field. Suggestions are serialized only when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable diagnostic code (e.g., `"ARG0101"`).
    pub id: Cow<'static, str>,
    /// Human-readable message.
    pub message: String,
    /// "Did you mean" candidates, in registration order.
    #[serde(skip_serializing_if = "Suggestions::is_empty", default)]
    pub suggestions: Suggestions,
}

impl Diagnostic {
    /// Create a diagnostic with no suggestions.
    pub fn new(id: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            suggestions: Suggestions::new(),
        }
    }

    /// Attach a suggestion list (builder pattern).
    pub fn with_suggestions(mut self, suggestions: Suggestions) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Returns the human-readable explanation for this diagnostic's code,
    /// if the code is known.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.id, self.message)
    }
}

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    Some(match id {
        codes::REDEFINITION => {
            "Two registered arguments share an identifying name. Names must be \
             unique across the top level and all command subtrees."
        }
        codes::EMPTY_NAME => {
            "An argument was registered without any identifying name. Give it a \
             long name, a short flag, or both."
        }
        codes::INVALID_NAME => {
            "An identifying name has the wrong shape. Long names are `--name` \
             without whitespace, flags are a single `-c` character, command \
             names are bare words."
        }
        codes::UNKNOWN_ARGUMENT => {
            "A token did not resolve to any registered argument, flag, or \
             command. When close matches exist they are listed in the message."
        }
        codes::FLAG_COMBO_VALUE => {
            "Inside a combo like `-abc` only the final flag may consume a \
             following value token; a value-bearing flag earlier in the combo \
             would leave its value ambiguous."
        }
        codes::MULTIPLE_COMMANDS => {
            "Only one command can be invoked per parse. A second command token \
             was found after one was already active."
        }
        codes::MISSING_VALUE => {
            "A value-bearing argument was invoked, but the token list ended or \
             the next token was another argument name."
        }
        codes::REQUIRED_MISSING => {
            "An argument marked required was never seen on the command line."
        }
        codes::MISSING_COMMAND => {
            "The parser was configured to require a command, but the token \
             list contained none."
        }
        _ => return None,
    })
}
