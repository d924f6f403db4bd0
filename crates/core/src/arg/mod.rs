//! The argument-node capability contract and registry building blocks.
//!
//! Every concrete argument kind — [`Arg`] for flags and value-bearing named
//! arguments, [`Command`] for git-style subcommand namespaces — implements
//! the [`ArgNode`] trait. The parser engine only ever speaks this contract;
//! the one place that must special-case commands does so through the
//! [`ArgKind`] tag rather than downcasting.

mod command;
mod named;

pub use command::Command;
pub use named::Arg;

use std::collections::HashSet;

use serde::Serialize;

use crate::cursor::Cursor;
use crate::error::ParseError;
use argot_diagnostics::Suggestions;

/// Type tag for the registered argument kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    /// A switch with no value.
    Flag,
    /// A named argument that consumes one following value token.
    Named,
    /// A command owning its own child namespace.
    Command,
}

/// The polymorphic contract every registered argument satisfies.
///
/// Structural state (names, requiredness, children) is fixed after
/// registration; the only mutation during parsing is occurrence and value
/// bookkeeping inside [`ArgNode::process`].
pub trait ArgNode {
    /// Primary display name (long form when present, otherwise the flag).
    fn name(&self) -> &str;

    /// The node's type tag.
    fn kind(&self) -> ArgKind;

    /// `true` if invoking this node consumes a following value token.
    fn is_with_value(&self) -> bool;

    /// `true` if post-parse validation requires this node to have been seen.
    fn is_required(&self) -> bool;

    /// `true` once the node has been invoked during parsing.
    fn is_defined(&self) -> bool;

    /// The value consumed during parsing, if any.
    fn value(&self) -> Option<&str> {
        None
    }

    /// Exact test of `name` against this node's identifying strings.
    fn matches(&self, name: &str) -> bool;

    /// Consume this node (and, if value-bearing, one value token) from the
    /// cursor, recording the invocation.
    fn process(&mut self, cursor: &mut Cursor) -> Result<(), ParseError>;

    /// Resolve `name` within this node's own scope.
    ///
    /// Plain arguments answer for their own names only. Commands answer for
    /// their command name; their children are reached through
    /// [`ArgNode::find_child`] once the command is active.
    fn find_argument(&self, name: &str) -> Option<&dyn ArgNode>;

    /// Mutable twin of [`ArgNode::find_argument`].
    fn find_argument_mut(&mut self, name: &str) -> Option<&mut dyn ArgNode>;

    /// Search this node's private child namespace. Only commands have one.
    fn find_child(&self, _name: &str) -> Option<&dyn ArgNode> {
        None
    }

    /// Mutable twin of [`ArgNode::find_child`].
    fn find_child_mut(&mut self, _name: &str) -> Option<&mut dyn ArgNode> {
        None
    }

    /// Register this node's identifying strings into the shared accumulator
    /// sets, failing on collision or malformed names.
    fn check_before_parsing(
        &self,
        flags: &mut HashSet<String>,
        names: &mut HashSet<String>,
    ) -> Result<(), ParseError>;

    /// Post-parse completeness check: required but never invoked is fatal.
    fn check_after_parsing(&self) -> Result<(), ParseError>;

    /// Append this node's names (and, for commands, the subtree's names)
    /// that `candidate` plausibly misspells. Returns `true` if any matched.
    fn suggest(&self, candidate: &str, out: &mut Suggestions) -> bool;

    /// Serializable record of this node's post-parse state.
    fn summarize(&self) -> ArgSummary {
        ArgSummary {
            name: self.name().to_string(),
            kind: self.kind(),
            required: self.is_required(),
            defined: self.is_defined(),
            value: self.value().map(str::to_string),
            children: Vec::new(),
        }
    }
}

// ── Ownership wrapper ───────────────────────────────────────────────────

/// A registry slot: the node together with its ownership tag.
///
/// The registry supports both "library manages everything" (owned boxes)
/// and "caller holds argument objects on the stack" (exclusive borrows)
/// usage; the engine treats the two identically and never assumes it may
/// drop a borrowed node.
pub enum ArgRef<'a> {
    /// The registry owns the node outright.
    Owned(Box<dyn ArgNode + 'a>),
    /// The caller retains ownership; the registry holds it for the parse.
    Borrowed(&'a mut (dyn ArgNode + 'a)),
}

impl<'a> ArgRef<'a> {
    /// Shared access to the node behind the tag.
    pub fn node(&self) -> &(dyn ArgNode + 'a) {
        match self {
            ArgRef::Owned(node) => node.as_ref(),
            ArgRef::Borrowed(node) => &**node,
        }
    }

    /// Exclusive access to the node behind the tag.
    pub fn node_mut(&mut self) -> &mut (dyn ArgNode + 'a) {
        match self {
            ArgRef::Owned(node) => node.as_mut(),
            ArgRef::Borrowed(node) => &mut **node,
        }
    }
}

// ── Post-parse summary ──────────────────────────────────────────────────

/// Serializable snapshot of one argument after parsing.
#[derive(Debug, Clone, Serialize)]
pub struct ArgSummary {
    /// Primary display name.
    pub name: String,
    /// The node's type tag.
    pub kind: ArgKind,
    /// Whether the argument was marked required.
    pub required: bool,
    /// Whether the argument was seen on the command line.
    pub defined: bool,
    /// The consumed value, when one was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Child summaries (commands only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ArgSummary>,
}

// ── Shared name helpers ─────────────────────────────────────────────────

/// Normalize a long name to its `--name` form.
pub(crate) fn long_form(name: &str) -> String {
    format!("--{}", name.trim_start_matches('-'))
}

/// Normalize a flag character to its `-c` form.
pub(crate) fn short_form(flag: char) -> String {
    format!("-{flag}")
}

/// Validate a long name: `--name`, at least one character, no whitespace.
pub(crate) fn check_long_form(name: &str) -> Result<(), ParseError> {
    let body = name.strip_prefix("--").unwrap_or("");
    if body.is_empty() || body.starts_with('-') || body.contains(char::is_whitespace) {
        return Err(ParseError::InvalidName { name: name.into() });
    }
    Ok(())
}

/// Validate a flag: `-c` with a single alphanumeric character.
pub(crate) fn check_short_form(flag: &str) -> Result<(), ParseError> {
    let mut body = flag.strip_prefix('-').unwrap_or("").chars();
    match (body.next(), body.next()) {
        (Some(c), None) if c.is_alphanumeric() => Ok(()),
        _ => Err(ParseError::InvalidName { name: flag.into() }),
    }
}

/// Consume one value token for the argument named `name`.
///
/// A following token that is itself argument-shaped is pushed back untouched
/// and reported as a missing value, as is an exhausted cursor.
pub(crate) fn take_value(cursor: &mut Cursor, name: &str) -> Result<String, ParseError> {
    match cursor.next() {
        Some(tok) if crate::cursor::is_long_name(&tok) || crate::cursor::is_flag_token(&tok) => {
            cursor.prepend(tok);
            Err(ParseError::MissingValue { name: name.into() })
        }
        Some(tok) => Ok(tok),
        None => Err(ParseError::MissingValue { name: name.into() }),
    }
}

/// Claim `name` in the accumulator set, failing on collision.
pub(crate) fn claim(set: &mut HashSet<String>, name: &str) -> Result<(), ParseError> {
    if !set.insert(name.to_string()) {
        return Err(ParseError::Redefinition { name: name.into() });
    }
    Ok(())
}
