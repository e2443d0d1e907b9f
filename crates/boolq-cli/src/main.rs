mod cli;
mod commands;

use cli::{QueryParams, build_cli, log_filter};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = QueryParams::from_matches(m);
            init_logger(params.verbose);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = QueryParams::from_matches(m);
            init_logger(params.verbose);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_logger(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(log_filter(verbose));
    env_logger::Builder::from_env(env).init();
}
