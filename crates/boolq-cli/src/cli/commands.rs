//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! `check` and `dump` take the same inputs and differ only in output.

use clap::Command;

use super::args::*;

/// Add the query input and compiler args shared by all commands.
fn with_query_args(cmd: Command) -> Command {
    cmd.arg(query_path_arg())
        .arg(query_text_arg())
        .arg(pointer_arg())
        .arg(fuel_arg())
        .arg(no_fuel_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("boolq")
        .about("Validate and inspect boolean query trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
}

/// Validate a query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  boolq check <QUERY>
  boolq check -q <JSON>
  boolq check <REQUEST> -p /query",
        )
        .after_help(
            r#"EXAMPLES:
  boolq check query.json                          # validate a query file
  boolq check request.json -p /query              # query nested in a request
  boolq check -q '{"field": "name", "value": "x"}'
  cat query.json | boolq check -                  # read stdin"#,
        );

    with_query_args(cmd)
}

/// Show the compiled plan of a query.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled plan of a query")
        .override_usage(
            "\
  boolq dump <QUERY>
  boolq dump -q <JSON>
  boolq dump <REQUEST> -p /query",
        )
        .after_help(
            r#"EXAMPLES:
  boolq dump query.json                           # print compiled plan
  boolq dump query.json --no-fuel                 # no nesting limit
  boolq dump -q '{"type": "OR", "queries": [...]}'"#,
        );

    with_query_args(cmd)
}
