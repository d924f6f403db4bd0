//! Two-phase validation tests: structural checks before any token is
//! consumed, completeness checks after the token list is exhausted.

mod common;

use common::git_parser;

use argot_core::{Arg, ArgNode, Command, ParseError, Parser};

// ─── Pre-parse: name collisions ──────────────────────────────────────────────

#[test]
fn duplicate_long_name_is_a_redefinition() {
    let mut parser = Parser::new(["--verbose"]);
    parser.add_arg(Arg::new("verbose"));
    parser.add_arg(Arg::new("verbose").with_flag('V'));
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::Redefinition { name } if name == "--verbose"));
}

#[test]
fn duplicate_flag_is_a_redefinition() {
    let mut parser = Parser::new(Vec::<&str>::new());
    parser.add_arg(Arg::new("verbose").with_flag('v'));
    parser.add_arg(Arg::new("version").with_flag('v'));
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::Redefinition { name } if name == "-v"));
}

#[test]
fn duplicate_command_name_is_a_redefinition() {
    let mut parser = Parser::new(["push"]);
    parser.add_arg(Command::new("push"));
    parser.add_arg(Command::new("push"));
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::Redefinition { name } if name == "push"));
}

#[test]
fn command_child_collides_with_top_level_name() {
    // Uniqueness is global across subtrees, and non-command nodes claim
    // their names first regardless of registration order.
    let mut parser = Parser::new(Vec::<&str>::new());
    parser.add_arg(Command::new("push").arg(Arg::new("force")));
    parser.add_arg(Arg::new("force"));
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::Redefinition { name } if name == "--force"));
}

#[test]
fn collision_fails_before_any_token_is_consumed() {
    let mut verbose = Arg::new("verbose");
    {
        let mut parser = Parser::new(["--verbose"]);
        parser.add_arg_ref(&mut verbose);
        parser.add_arg(Arg::new("verbose"));
        assert!(parser.parse().is_err());
    }
    assert!(!verbose.is_defined());
}

// ─── Pre-parse: malformed names ──────────────────────────────────────────────

#[test]
fn argument_without_any_name_is_rejected() {
    let mut parser = Parser::new(Vec::<&str>::new());
    parser.add_arg(Arg::default());
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::EmptyName));
}

#[test]
fn command_with_empty_name_is_rejected() {
    let mut parser = Parser::new(Vec::<&str>::new());
    parser.add_arg(Command::new(""));
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::EmptyName));
}

#[test]
fn long_name_with_whitespace_is_rejected() {
    let mut parser = Parser::new(Vec::<&str>::new());
    parser.add_arg(Arg::new("two words"));
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::InvalidName { name } if name == "--two words"));
}

#[test]
fn command_name_with_leading_dash_is_rejected() {
    let mut parser = Parser::new(Vec::<&str>::new());
    parser.add_arg(Command::new("-push"));
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::InvalidName { name } if name == "-push"));
}

// ─── Post-parse: required arguments ──────────────────────────────────────────

#[test]
fn required_top_level_argument_must_appear() {
    let mut parser = Parser::new(Vec::<&str>::new());
    parser.add_arg(Arg::new("input").with_value().required());
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::RequiredMissing { name } if name == "--input"));
}

#[test]
fn required_argument_present_passes() {
    let mut parser = Parser::new(["--input", "a.txt"]);
    parser.add_arg(Arg::new("input").with_value().required());
    parser.parse().unwrap();
}

#[test]
fn invoked_command_enforces_its_required_children() {
    let mut parser = Parser::new(["push"]);
    parser.add_arg(Command::new("push").arg(Arg::new("force").required()));
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::RequiredMissing { name } if name == "--force"));
}

#[test]
fn uninvoked_command_exempts_its_required_children() {
    let mut parser = Parser::new(["add"]);
    parser.add_arg(Command::new("add"));
    parser.add_arg(Command::new("push").arg(Arg::new("force").required()));
    parser.parse().unwrap();
}

// ─── Post-parse: mandatory command ───────────────────────────────────────────

#[test]
fn command_required_without_a_command_is_fatal() {
    let mut parser = Parser::new(["--verbose"]).command_required();
    parser.add_arg(Arg::new("verbose").with_flag('v'));
    parser.add_arg(Command::new("push"));
    let err = parser.parse().unwrap_err();
    assert!(matches!(err, ParseError::MissingCommand));
}

#[test]
fn command_required_is_satisfied_by_any_command() {
    let mut parser = Parser::new(["push"]).command_required();
    parser.add_arg(Command::new("push"));
    parser.parse().unwrap();
}

// ─── Error codes surface through the shared registry ─────────────────────────

#[test]
fn validation_errors_carry_stable_codes() {
    let mut parser = git_parser(&["--frobnicate"]);
    let err = parser.parse().unwrap_err();
    assert_eq!(err.code(), argot_core::codes::UNKNOWN_ARGUMENT);
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.id, argot_core::codes::UNKNOWN_ARGUMENT);
}
