//! The parse engine: registry, dispatch loop, and two-phase validation.

use std::collections::HashSet;

use crate::arg::{ArgKind, ArgNode, ArgRef, ArgSummary};
use crate::cursor::{Cursor, is_flag_token, is_long_name};
use crate::error::ParseError;
use argot_diagnostics::Suggestions;

/// The top-level argument parser.
///
/// Owns the token [`Cursor`] for the duration of the parse and the registry
/// of top-level arguments in registration order. Arguments are registered
/// either owned ([`Parser::add_arg`]) or borrowed ([`Parser::add_arg_ref`]);
/// the engine treats both identically and a borrowed node can be read back
/// by the caller once the parser is dropped.
///
/// [`Parser::parse`] is one blocking, single-pass call: pre-parse structural
/// validation, then token dispatch until the cursor is exhausted, then
/// post-parse completeness validation. Any failure aborts immediately.
///
/// ```
/// use argot_core::{Arg, Command, Parser};
///
/// let mut parser = Parser::new(["push", "--force"]);
/// parser.add_arg(Arg::new("verbose").with_flag('v'));
/// parser.add_arg(Command::new("push").arg(Arg::new("force").with_flag('f')));
/// parser.parse()?;
///
/// assert_eq!(parser.active_command().map(|c| c.name()), Some("push"));
/// assert!(parser.find_argument("--force").is_some_and(|a| a.is_defined()));
/// # Ok::<(), argot_core::ParseError>(())
/// ```
pub struct Parser<'a> {
    cursor: Cursor,
    args: Vec<ArgRef<'a>>,
    /// Index of the invoked top-level command, once one is.
    active: Option<usize>,
    command_required: bool,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens` (program name already excluded).
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cursor: Cursor::new(tokens),
            args: Vec::new(),
            active: None,
            command_required: false,
        }
    }

    /// Require that some command is invoked; parsing without one fails with
    /// [`ParseError::MissingCommand`].
    pub fn command_required(mut self) -> Self {
        self.command_required = true;
        self
    }

    /// Register an owned argument. Order of registration fixes validation
    /// and suggestion order.
    pub fn add_arg(&mut self, arg: impl ArgNode + 'a) {
        self.args.push(ArgRef::Owned(Box::new(arg)));
    }

    /// Register a caller-owned argument; the caller keeps ownership and the
    /// node's lifetime must cover the parser's.
    pub fn add_arg_ref(&mut self, arg: &'a mut (dyn ArgNode + 'a)) {
        self.args.push(ArgRef::Borrowed(arg));
    }

    // ── Parse loop ──────────────────────────────────────────────────────

    /// Run the full parse: pre-parse validation, dispatch, post-parse
    /// validation. Success is `Ok(())`; every diagnostic aborts the pass.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.check_before_parsing()?;

        while !self.cursor.at_end() {
            let Some(mut word) = self.cursor.next() else {
                break;
            };

            // `name=value` splits in two; an `=` with nothing after it is
            // treated as if absent.
            if let Some(eq) = word.find('=') {
                let value = word[eq + 1..].to_string();
                if !value.is_empty() {
                    self.cursor.prepend(value);
                }
                word.truncate(eq);
            }

            if is_long_name(&word) {
                self.dispatch_named(&word)?;
            } else if is_flag_token(&word) {
                self.dispatch_combo(&word)?;
            } else {
                self.dispatch_bare(&word)?;
            }
        }

        self.check_after_parsing()
    }

    // ── Dispatch ────────────────────────────────────────────────────────

    /// Resolve a name against the currently resolvable scope: the top-level
    /// registry first, then the active command's private children.
    fn resolve_mut<'r>(
        args: &'r mut [ArgRef<'a>],
        active: Option<usize>,
        name: &str,
    ) -> Option<&'r mut (dyn ArgNode + 'r)> {
        if let Some(idx) = args
            .iter()
            .position(|a| a.node().find_argument(name).is_some())
        {
            return args[idx].node_mut().find_argument_mut(name);
        }
        if let Some(cmd) = active {
            return args[cmd].node_mut().find_child_mut(name);
        }
        None
    }

    /// Long-form token: resolve and let the argument consume the cursor.
    fn dispatch_named(&mut self, word: &str) -> Result<(), ParseError> {
        if let Some(arg) = Self::resolve_mut(&mut self.args, self.active, word) {
            return arg.process(&mut self.cursor);
        }
        Err(self.unknown_argument(word))
    }

    /// Short-form token: expand `-abc` into `-a -b -c`, left to right.
    ///
    /// No partial application: an unresolved character fails before any
    /// remaining flag is processed, and a value-bearing flag anywhere but
    /// the final position is fatal.
    fn dispatch_combo(&mut self, word: &str) -> Result<(), ParseError> {
        let flags: Vec<String> = word.chars().skip(1).map(|c| format!("-{c}")).collect();
        for (idx, flag) in flags.iter().enumerate() {
            let Some(arg) = Self::resolve_mut(&mut self.args, self.active, flag) else {
                return Err(ParseError::unknown(flag.clone()));
            };
            if idx + 1 < flags.len() && arg.is_with_value() {
                return Err(ParseError::FlagComboValue {
                    combo: word.to_string(),
                });
            }
            arg.process(&mut self.cursor)?;
        }
        Ok(())
    }

    /// Bare token: a command invocation or a bare reference to an argument.
    fn dispatch_bare(&mut self, word: &str) -> Result<(), ParseError> {
        if let Some(idx) = self
            .args
            .iter()
            .position(|a| a.node().find_argument(word).is_some())
        {
            if self.args[idx].node().kind() == ArgKind::Command {
                if let Some(active) = self.active {
                    return Err(ParseError::MultipleCommands {
                        first: self.args[active].node().name().to_string(),
                        second: self.args[idx].node().name().to_string(),
                    });
                }
                self.active = Some(idx);
            }
            if let Some(arg) = self.args[idx].node_mut().find_argument_mut(word) {
                return arg.process(&mut self.cursor);
            }
        } else if let Some(cmd) = self.active {
            // Children of the active command may also be referenced bare;
            // a child command, however, would be a second command.
            let mut nested_command = None;
            if let Some(arg) = self.args[cmd].node_mut().find_child_mut(word) {
                if arg.kind() == ArgKind::Command {
                    nested_command = Some(arg.name().to_string());
                } else {
                    return arg.process(&mut self.cursor);
                }
            }
            if let Some(second) = nested_command {
                return Err(ParseError::MultipleCommands {
                    first: self.args[cmd].node().name().to_string(),
                    second,
                });
            }
        }
        Err(self.unknown_argument(word))
    }

    // ── Diagnostics ─────────────────────────────────────────────────────

    /// Build the unknown-argument error, sweeping every registered node for
    /// misspelling candidates in registration order. Best effort only: the
    /// sweep never changes the parse outcome, just the error text.
    fn unknown_argument(&self, word: &str) -> ParseError {
        let mut suggestions = Suggestions::new();
        for arg in &self.args {
            arg.node().suggest(word, &mut suggestions);
        }
        ParseError::UnknownArgument {
            word: word.to_string(),
            suggestions,
        }
    }

    // ── Two-phase validation ────────────────────────────────────────────

    /// Structural pass, before any dispatch: every node claims its names in
    /// the shared accumulator sets. Non-command arguments are checked first,
    /// then commands, so a command's children are always validated against
    /// the fully established top-level namespace regardless of registration
    /// order.
    fn check_before_parsing(&self) -> Result<(), ParseError> {
        let mut flags = HashSet::new();
        let mut names = HashSet::new();
        for arg in self
            .args
            .iter()
            .filter(|a| a.node().kind() != ArgKind::Command)
        {
            arg.node().check_before_parsing(&mut flags, &mut names)?;
        }
        for arg in self
            .args
            .iter()
            .filter(|a| a.node().kind() == ArgKind::Command)
        {
            arg.node().check_before_parsing(&mut flags, &mut names)?;
        }
        Ok(())
    }

    /// Completeness pass, after dispatch: required nodes must have been
    /// seen (inactive commands exempt their subtrees themselves), and a
    /// mandated command must have been invoked.
    fn check_after_parsing(&self) -> Result<(), ParseError> {
        for arg in &self.args {
            arg.node().check_after_parsing()?;
        }
        if self.command_required && self.active.is_none() {
            return Err(ParseError::MissingCommand);
        }
        Ok(())
    }

    // ── Post-parse query surface ────────────────────────────────────────

    /// Resolve `name` against the top-level registry and, if a command was
    /// invoked, its children.
    pub fn find_argument(&self, name: &str) -> Option<&dyn ArgNode> {
        for arg in &self.args {
            if let Some(hit) = arg.node().find_argument(name) {
                return Some(hit);
            }
        }
        if let Some(cmd) = self.active {
            return self.args[cmd].node().find_child(name);
        }
        None
    }

    /// Read-only view of the top-level registry, in registration order.
    pub fn arguments(&self) -> impl Iterator<Item = &dyn ArgNode> {
        self.args.iter().map(|a| a.node() as &dyn ArgNode)
    }

    /// The invoked command, if any.
    pub fn active_command(&self) -> Option<&dyn ArgNode> {
        self.active.map(|idx| self.args[idx].node() as &dyn ArgNode)
    }

    /// Serializable snapshot of every registered argument.
    pub fn summary(&self) -> Vec<ArgSummary> {
        self.args.iter().map(|a| a.node().summarize()).collect()
    }
}
