//! A git-flavored command line, showing both ownership styles: arguments the
//! parser owns outright and arguments borrowed from the caller's stack so
//! their state survives the parse.
//!
//! Try:
//!
//! ```text
//! cargo run --example git -- push --force --remote origin
//! cargo run --example git -- -vv add -A
//! cargo run --example git -- puhs
//! ```

use std::process::ExitCode;

use argot_core::{Arg, ArgNode, Command, Parser};

fn main() -> ExitCode {
    // Borrowed: inspected after the parser is gone.
    let mut verbose = Arg::new("verbose").with_flag('v');

    let outcome = {
        let mut parser = Parser::new(std::env::args().skip(1)).command_required();
        parser.add_arg_ref(&mut verbose);
        parser.add_arg(Command::new("add").arg(Arg::new("all").with_flag('A')));
        parser.add_arg(
            Command::new("push")
                .arg(Arg::new("force").with_flag('f'))
                .arg(Arg::new("remote").with_value()),
        );

        match parser.parse() {
            Ok(()) => {
                // command_required() guarantees an active command on success
                let command = parser.active_command().map(ArgNode::name).unwrap_or("-");
                let force = parser.find_argument("--force").is_some_and(ArgNode::is_defined);
                let remote = parser
                    .find_argument("--remote")
                    .and_then(ArgNode::value)
                    .unwrap_or("origin")
                    .to_owned();
                Ok((command.to_owned(), force, remote))
            }
            Err(err) => Err(err.to_diagnostic()),
        }
    };

    println!("verbosity: {}", verbose.count());
    match outcome {
        Ok((command, force, remote)) => {
            println!("command: {command} (force: {force}, remote: {remote})");
            ExitCode::SUCCESS
        }
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            ExitCode::FAILURE
        }
    }
}
