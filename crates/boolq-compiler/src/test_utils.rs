//! Test utilities for compiling JSON fixtures.

use crate::plan::{self, Plan, PlanAlgebra};
use crate::{CompileError, Compiler, Error};

/// Compile a JSON fixture into a [`Plan`] with default settings.
pub fn compile_json(json: &str) -> crate::Result<Plan> {
    Compiler::new(&PlanAlgebra, plan::term).compile_slice(json.as_bytes())
}

/// Compile a fixture that must be valid and dump the resulting plan.
pub fn dump(json: &str) -> String {
    match compile_json(json) {
        Ok(plan) => plan.to_string(),
        Err(err) => panic!("expected valid query, got: {err}"),
    }
}

/// Compile a fixture that must decode but fail compilation.
pub fn compile_error(json: &str) -> CompileError {
    match compile_json(json) {
        Err(Error::Compile(err)) => err,
        Err(Error::Decode(err)) => panic!("fixture is not a valid query: {err}"),
        Ok(plan) => panic!("expected compile error, got plan:\n{plan}"),
    }
}

/// `depth` levels of single-child `AND` nodes around one term.
pub fn nested_and(depth: u32) -> boolq_core::Query {
    let mut query = boolq_core::Query::term("leaf", "x");
    for _ in 1..depth {
        query = boolq_core::Query::and([query]);
    }
    query
}
