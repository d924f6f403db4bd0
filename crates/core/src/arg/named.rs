//! Flags and value-bearing named arguments.

use std::collections::HashSet;

use super::{ArgKind, ArgNode, check_long_form, check_short_form, claim, long_form, short_form};
use crate::cursor::Cursor;
use crate::error::ParseError;
use argot_diagnostics::{Suggestions, is_close_match};

/// A flag or value-bearing named argument with an optional short form.
///
/// ```
/// use argot_core::Arg;
///
/// let force = Arg::new("force").with_flag('f').required();
/// let output = Arg::new("output").with_flag('o').with_value();
/// ```
#[derive(Debug, Default)]
pub struct Arg {
    long: Option<String>,
    flag: Option<String>,
    with_value: bool,
    required: bool,
    seen: u32,
    value: Option<String>,
}

impl Arg {
    /// Create an argument with the given long name (`--` prefix optional).
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            long: Some(long_form(name.as_ref())),
            ..Self::default()
        }
    }

    /// Create an argument identified by a short flag only.
    pub fn flag(flag: char) -> Self {
        Self {
            flag: Some(short_form(flag)),
            ..Self::default()
        }
    }

    /// Add a short flag form.
    pub fn with_flag(mut self, flag: char) -> Self {
        self.flag = Some(short_form(flag));
        self
    }

    /// Mark the argument as consuming one following value token.
    pub fn with_value(mut self) -> Self {
        self.with_value = true;
        self
    }

    /// Mark the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The consumed value, if the argument was invoked with one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// How many times the argument was seen on the command line.
    pub fn count(&self) -> u32 {
        self.seen
    }
}

impl ArgNode for Arg {
    fn name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.flag.as_deref())
            .unwrap_or_default()
    }

    fn kind(&self) -> ArgKind {
        if self.with_value {
            ArgKind::Named
        } else {
            ArgKind::Flag
        }
    }

    fn is_with_value(&self) -> bool {
        self.with_value
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn is_defined(&self) -> bool {
        self.seen > 0
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn matches(&self, name: &str) -> bool {
        self.long.as_deref() == Some(name) || self.flag.as_deref() == Some(name)
    }

    fn process(&mut self, cursor: &mut Cursor) -> Result<(), ParseError> {
        self.seen += 1;
        if self.with_value {
            self.value = Some(super::take_value(cursor, self.name())?);
        }
        Ok(())
    }

    fn find_argument(&self, name: &str) -> Option<&dyn ArgNode> {
        if self.matches(name) { Some(self) } else { None }
    }

    fn find_argument_mut(&mut self, name: &str) -> Option<&mut dyn ArgNode> {
        if self.matches(name) { Some(self) } else { None }
    }

    fn check_before_parsing(
        &self,
        flags: &mut HashSet<String>,
        names: &mut HashSet<String>,
    ) -> Result<(), ParseError> {
        if self.long.is_none() && self.flag.is_none() {
            return Err(ParseError::EmptyName);
        }
        if let Some(long) = self.long.as_deref() {
            check_long_form(long)?;
            claim(names, long)?;
        }
        if let Some(flag) = self.flag.as_deref() {
            check_short_form(flag)?;
            claim(flags, flag)?;
        }
        Ok(())
    }

    fn check_after_parsing(&self) -> Result<(), ParseError> {
        if self.required && !self.is_defined() {
            return Err(ParseError::RequiredMissing {
                name: self.name().into(),
            });
        }
        Ok(())
    }

    fn suggest(&self, candidate: &str, out: &mut Suggestions) -> bool {
        let mut hit = false;
        for name in [self.long.as_deref(), self.flag.as_deref()]
            .into_iter()
            .flatten()
        {
            if is_close_match(candidate, name) {
                out.push(name);
                hit = true;
            }
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_long_form() {
        assert_eq!(Arg::new("force").with_flag('f').name(), "--force");
        assert_eq!(Arg::flag('f').name(), "-f");
    }

    #[test]
    fn matches_both_forms() {
        let arg = Arg::new("force").with_flag('f');
        assert!(arg.matches("--force"));
        assert!(arg.matches("-f"));
        assert!(!arg.matches("force"));
    }

    #[test]
    fn process_flag_counts_occurrences() {
        let mut arg = Arg::new("verbose").with_flag('v');
        let mut cursor = Cursor::new(Vec::<String>::new());
        arg.process(&mut cursor).unwrap();
        arg.process(&mut cursor).unwrap();
        assert!(arg.is_defined());
        assert_eq!(arg.count(), 2);
    }

    #[test]
    fn process_consumes_one_value() {
        let mut arg = Arg::new("output").with_value();
        let mut cursor = Cursor::new(["out.txt", "rest"]);
        arg.process(&mut cursor).unwrap();
        assert_eq!(arg.value(), Some("out.txt"));
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn process_rejects_exhausted_cursor() {
        let mut arg = Arg::new("output").with_value();
        let mut cursor = Cursor::new(Vec::<String>::new());
        let err = arg.process(&mut cursor).unwrap_err();
        assert!(matches!(err, ParseError::MissingValue { name } if name == "--output"));
    }

    #[test]
    fn process_rejects_argument_shaped_value() {
        let mut arg = Arg::new("output").with_value();
        let mut cursor = Cursor::new(["--verbose"]);
        let err = arg.process(&mut cursor).unwrap_err();
        assert!(matches!(err, ParseError::MissingValue { .. }));
        // the lookahead is pushed back untouched
        assert_eq!(cursor.next().as_deref(), Some("--verbose"));
    }

    #[test]
    fn check_before_rejects_nameless() {
        let arg = Arg::default();
        let mut flags = HashSet::new();
        let mut names = HashSet::new();
        assert!(matches!(
            arg.check_before_parsing(&mut flags, &mut names),
            Err(ParseError::EmptyName)
        ));
    }

    #[test]
    fn check_after_flags_missing_required() {
        let arg = Arg::new("force").required();
        let err = arg.check_after_parsing().unwrap_err();
        assert!(matches!(err, ParseError::RequiredMissing { name } if name == "--force"));
    }

    #[test]
    fn suggest_matches_close_long_name() {
        let arg = Arg::new("output").with_flag('o');
        let mut out = Suggestions::new();
        assert!(arg.suggest("--outptu", &mut out));
        assert_eq!(out.iter().collect::<Vec<_>>(), ["--output"]);
    }
}
