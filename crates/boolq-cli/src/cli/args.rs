//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Query JSON file, or `-` for stdin (positional).
pub fn query_path_arg() -> Arg {
    Arg::new("query_path")
        .value_name("QUERY")
        .value_parser(value_parser!(PathBuf))
        .help("Query JSON file ('-' reads stdin)")
}

/// Inline query JSON (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("JSON")
        .conflicts_with("query_path")
        .help("Inline query JSON")
}

/// JSON pointer to the query inside a larger document (-p/--pointer).
pub fn pointer_arg() -> Arg {
    Arg::new("pointer")
        .short('p')
        .long("pointer")
        .value_name("POINTER")
        .help("JSON pointer to the query inside the document (e.g. /query)")
}

/// Recursion fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("512")
        .value_parser(value_parser!(u32))
        .help("Maximum query nesting depth")
}

/// Disable the recursion limit (--no-fuel).
pub fn no_fuel_arg() -> Arg {
    Arg::new("no_fuel")
        .long("no-fuel")
        .action(ArgAction::SetTrue)
        .help("Do not limit query nesting depth")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
