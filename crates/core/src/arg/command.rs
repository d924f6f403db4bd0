//! Commands: bare-named arguments owning a private child namespace.

use std::collections::HashSet;

use super::{ArgKind, ArgNode, ArgRef, ArgSummary, claim, take_value};
use crate::cursor::Cursor;
use crate::error::ParseError;
use argot_diagnostics::{Suggestions, is_close_match};

/// A command: once invoked, its children resolve for the rest of the parse.
///
/// Commands nest — a child may itself be a `Command` — but at most one
/// command can be invoked per parse; a second command token is fatal.
///
/// ```
/// use argot_core::{Arg, Command};
///
/// let push = Command::new("push")
///     .arg(Arg::new("force").with_flag('f'))
///     .arg(Arg::new("remote").with_value());
/// ```
#[derive(Default)]
pub struct Command<'a> {
    name: String,
    with_value: bool,
    defined: bool,
    value: Option<String>,
    children: Vec<ArgRef<'a>>,
}

impl<'a> Command<'a> {
    /// Create a command with the given bare name (no dashes).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Make the command itself consume one following value token.
    pub fn with_value(mut self) -> Self {
        self.with_value = true;
        self
    }

    /// Register an owned child argument (builder form).
    pub fn arg(mut self, arg: impl ArgNode + 'a) -> Self {
        self.add_arg(arg);
        self
    }

    /// Register an owned child argument.
    pub fn add_arg(&mut self, arg: impl ArgNode + 'a) {
        self.children.push(ArgRef::Owned(Box::new(arg)));
    }

    /// Register a caller-owned child argument; the caller keeps ownership
    /// and reads the node back after parsing.
    pub fn add_arg_ref(&mut self, arg: &'a mut (dyn ArgNode + 'a)) {
        self.children.push(ArgRef::Borrowed(arg));
    }

    /// The value consumed by the command itself, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Read-only view of the child registry, in registration order.
    pub fn children(&self) -> impl Iterator<Item = &dyn ArgNode> {
        self.children.iter().map(|c| c.node() as &dyn ArgNode)
    }
}

impl<'a> ArgNode for Command<'a> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ArgKind {
        ArgKind::Command
    }

    fn is_with_value(&self) -> bool {
        self.with_value
    }

    fn is_required(&self) -> bool {
        false
    }

    fn is_defined(&self) -> bool {
        self.defined
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn matches(&self, name: &str) -> bool {
        self.name == name
    }

    fn process(&mut self, cursor: &mut Cursor) -> Result<(), ParseError> {
        self.defined = true;
        if self.with_value {
            self.value = Some(take_value(cursor, &self.name)?);
        }
        Ok(())
    }

    fn find_argument(&self, name: &str) -> Option<&dyn ArgNode> {
        if self.matches(name) { Some(self) } else { None }
    }

    fn find_argument_mut(&mut self, name: &str) -> Option<&mut dyn ArgNode> {
        if self.matches(name) { Some(self) } else { None }
    }

    fn find_child(&self, name: &str) -> Option<&dyn ArgNode> {
        self.children.iter().find_map(|c| c.node().find_argument(name))
    }

    fn find_child_mut(&mut self, name: &str) -> Option<&mut dyn ArgNode> {
        let idx = self
            .children
            .iter()
            .position(|c| c.node().find_argument(name).is_some())?;
        self.children[idx].node_mut().find_argument_mut(name)
    }

    fn check_before_parsing(
        &self,
        flags: &mut HashSet<String>,
        names: &mut HashSet<String>,
    ) -> Result<(), ParseError> {
        if self.name.is_empty() {
            return Err(ParseError::EmptyName);
        }
        if self.name.starts_with('-') || self.name.contains(char::is_whitespace) {
            return Err(ParseError::InvalidName {
                name: self.name.clone(),
            });
        }
        claim(names, &self.name)?;
        // Same deterministic order as the engine: plain children claim
        // their names first, child commands afterwards.
        for child in self.children.iter().filter(|c| c.node().kind() != ArgKind::Command) {
            child.node().check_before_parsing(flags, names)?;
        }
        for child in self.children.iter().filter(|c| c.node().kind() == ArgKind::Command) {
            child.node().check_before_parsing(flags, names)?;
        }
        Ok(())
    }

    fn check_after_parsing(&self) -> Result<(), ParseError> {
        // Children of a command that was never invoked owe nothing.
        if !self.defined {
            return Ok(());
        }
        for child in &self.children {
            child.node().check_after_parsing()?;
        }
        Ok(())
    }

    fn suggest(&self, candidate: &str, out: &mut Suggestions) -> bool {
        let mut hit = false;
        if is_close_match(candidate, &self.name) {
            out.push(self.name.as_str());
            hit = true;
        }
        // Scoped to this command's own subtree; linear in registered nodes.
        for child in &self.children {
            if child.node().suggest(candidate, out) {
                hit = true;
            }
        }
        hit
    }

    fn summarize(&self) -> ArgSummary {
        ArgSummary {
            name: self.name.clone(),
            kind: ArgKind::Command,
            required: false,
            defined: self.defined,
            value: self.value.clone(),
            children: self.children.iter().map(|c| c.node().summarize()).collect(),
        }
    }
}
