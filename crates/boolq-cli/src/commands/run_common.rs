//! Shared logic for check and dump commands.

use std::path::PathBuf;

use boolq_compiler::Compiler;
use boolq_compiler::plan::{self, Plan, PlanAlgebra};

use super::query_loader::{load_query_text, select_query};

pub struct QueryArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub pointer: Option<String>,
    pub recursion_fuel: Option<u32>,
}

/// Load, decode and compile the query; any failure is rendered as a message.
pub fn compile_plan(args: &QueryArgs) -> Result<Plan, String> {
    let document = load_query_text(args.query_path.as_deref(), args.query_text.as_deref())
        .map_err(|e| e.to_string())?;
    let query = select_query(&document, args.pointer.as_deref()).map_err(|e| e.to_string())?;

    log::debug!(
        "compiling query with recursion fuel {:?}",
        args.recursion_fuel
    );

    Compiler::new(&PlanAlgebra, plan::term)
        .with_recursion_fuel(args.recursion_fuel)
        .compile_value(&query)
        .map_err(|e| e.to_string())
}

/// Like [`compile_plan`], but reports the error and exits with status 1.
pub fn compile_plan_or_exit(args: &QueryArgs) -> Plan {
    compile_plan(args).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    })
}
