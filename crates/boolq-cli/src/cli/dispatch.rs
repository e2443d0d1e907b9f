//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `QueryParams` mirrors the command-side `QueryArgs` but is populated from
//! clap; the `Into<QueryArgs>` impl resolves `--fuel` / `--no-fuel` into a
//! single optional limit.

use std::path::PathBuf;

use boolq_compiler::DEFAULT_RECURSION_FUEL;
use clap::ArgMatches;

use crate::commands::run_common::QueryArgs;

pub struct QueryParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub pointer: Option<String>,
    pub fuel: u32,
    pub no_fuel: bool,
    pub verbose: u8,
}

impl QueryParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            pointer: m.get_one::<String>("pointer").cloned(),
            fuel: m
                .get_one::<u32>("fuel")
                .copied()
                .unwrap_or(DEFAULT_RECURSION_FUEL),
            no_fuel: m.get_flag("no_fuel"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<QueryParams> for QueryArgs {
    fn from(p: QueryParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            pointer: p.pointer,
            recursion_fuel: (!p.no_fuel).then_some(p.fuel),
        }
    }
}

/// Default log filter for a `-v` count; `RUST_LOG` still wins.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
