//! Shared test helpers for `argot_core` integration tests.

#![allow(unreachable_pub)]

use argot_core::{Arg, ArgNode, Command, Parser};

/// Registry used across suites: two top-level arguments plus `add` and
/// `push` commands with private children.
pub fn git_parser(tokens: &[&str]) -> Parser<'static> {
    let mut parser = Parser::new(tokens.iter().copied());
    parser.add_arg(Arg::new("verbose").with_flag('v'));
    parser.add_arg(Arg::new("output").with_flag('o').with_value());
    parser.add_arg(Command::new("add").arg(Arg::new("all").with_flag('A')));
    parser.add_arg(
        Command::new("push")
            .arg(Arg::new("force").with_flag('f'))
            .arg(Arg::new("remote").with_value()),
    );
    parser
}

/// `true` if `name` resolves post-parse and was seen on the command line.
#[allow(dead_code)]
pub fn defined(parser: &Parser<'_>, name: &str) -> bool {
    parser.find_argument(name).is_some_and(ArgNode::is_defined)
}

/// The value `name` consumed during the parse, if any.
#[allow(dead_code)]
pub fn value_of<'p>(parser: &'p Parser<'_>, name: &str) -> Option<&'p str> {
    parser.find_argument(name).and_then(ArgNode::value)
}
