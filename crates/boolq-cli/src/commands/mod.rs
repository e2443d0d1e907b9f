pub mod check;
pub mod dump;
pub mod query_loader;
pub mod run_common;
