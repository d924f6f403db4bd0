//! `argot` — command-line inspector for the argot parsing engine.
//!
//! Two subcommands: `explain` looks up a diagnostic code, `demo` runs a
//! token line through a bundled git-style registry and shows the outcome.
//! The binary's own argv is parsed with `argot_core` itself.

use std::env;
use std::process::ExitCode;

use anyhow::Result;
use argot_core::{Arg, ArgKind, ArgNode, ArgSummary, Command, Parser};

const USAGE: &str = "usage: argot [--json|-j] <explain CODE | demo TOKENS>";

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let mut parser = Parser::new(env::args().skip(1)).command_required();
    parser.add_arg(Arg::new("json").with_flag('j'));
    parser.add_arg(Command::new("explain").with_value());
    parser.add_arg(Command::new("demo").with_value());

    if let Err(err) = parser.parse() {
        eprintln!("{}", err.to_diagnostic());
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    let json = parser
        .find_argument("--json")
        .is_some_and(ArgNode::is_defined);

    // command_required() guarantees an active command on success, and both
    // registered commands consume a value.
    let outcome = match parser.active_command().map(|c| (c.name(), c.value())) {
        Some(("explain", Some(code))) => cmd_explain(code, json),
        Some(("demo", Some(line))) => cmd_demo(line, json),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("argot: {err:#}");
            ExitCode::from(2)
        }
    }
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_explain(code: &str, json: bool) -> Result<ExitCode> {
    let explanation = argot_diagnostics::explain(code);

    if json {
        let out = serde_json::json!({
            "id": code,
            "explanation": explanation,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match explanation {
            Some(text) => println!("{code}: {text}"),
            None => println!("{code}: no such diagnostic code"),
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_demo(line: &str, json: bool) -> Result<ExitCode> {
    let mut parser = demo_registry(line.split_whitespace());

    match parser.parse() {
        Ok(()) => {
            if json {
                let out = serde_json::json!({
                    "ok": true,
                    "arguments": parser.summary(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for summary in parser.summary() {
                    print_summary(&summary, 0);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let diagnostic = err.to_diagnostic();
            if json {
                let out = serde_json::json!({
                    "ok": false,
                    "diagnostic": diagnostic,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                eprintln!("{diagnostic}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

// ── Demo registry ───────────────────────────────────────────────────────

/// The fixed git-flavored registry the `demo` subcommand parses against.
fn demo_registry<I, S>(tokens: I) -> Parser<'static>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parser = Parser::new(tokens);
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

fn print_summary(summary: &ArgSummary, depth: usize) {
    let indent = "  ".repeat(depth);
    let kind = match summary.kind {
        ArgKind::Flag => "flag",
        ArgKind::Named => "named",
        ArgKind::Command => "command",
    };
    let state = match (&summary.value, summary.defined) {
        (Some(value), _) => format!("= {value}"),
        (None, true) => "set".to_owned(),
        (None, false) => "unset".to_owned(),
    };
    println!("{indent}{} [{kind}] {state}", summary.name);
    for child in &summary.children {
        print_summary(child, depth + 1);
    }
}
