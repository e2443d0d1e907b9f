//! boolq compiler: turns boolean query trees into retrieval engine queries.
//!
//! This crate provides:
//! - `algebra` - traits an engine implements to receive compiled queries
//! - `compile` - the validating tree compiler
//! - `plan` - an engine-independent algebra for inspecting compiled queries
//!
//! # Example
//!
//! ```
//! use boolq_compiler::plan::{self, PlanAlgebra};
//!
//! let json = br#"{"type": "OR", "queries": [
//!     {"field": "name", "value": "sofia"},
//!     {"field": "name", "value": "amsterdam"}
//! ]}"#;
//!
//! let compiled = boolq_compiler::compile_slice(json, &PlanAlgebra, plan::term).unwrap();
//! assert_eq!(compiled.to_string(), "or\n  term name:sofia\n  term name:amsterdam");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod algebra;
pub mod compile;
pub mod plan;

#[cfg(test)]
pub mod test_utils;

pub use algebra::{Boost, Exclude, QueryAlgebra};
pub use boolq_core::{Query, QueryKind};
pub use compile::{CompileError, CompileResult, Compiler, DEFAULT_RECURSION_FUEL};

/// Errors from decoding and compiling a query in one step.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid query json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Result type for decode-and-compile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile `query` with the default recursion fuel.
pub fn compile<A, F>(algebra: &A, terms: F, query: &Query) -> CompileResult<A::Query>
where
    A: QueryAlgebra,
    F: Fn(&str, &str) -> A::Query,
{
    Compiler::new(algebra, terms).compile(Some(query))
}

/// Decode a JSON payload and compile it with the default recursion fuel.
pub fn compile_slice<A, F>(bytes: &[u8], algebra: &A, terms: F) -> Result<A::Query>
where
    A: QueryAlgebra,
    F: Fn(&str, &str) -> A::Query,
{
    Compiler::new(algebra, terms).compile_slice(bytes)
}

/// Compile a query held in a generic JSON value, e.g. `request["query"]`.
pub fn compile_value<A, F>(value: &serde_json::Value, algebra: &A, terms: F) -> Result<A::Query>
where
    A: QueryAlgebra,
    F: Fn(&str, &str) -> A::Query,
{
    Compiler::new(algebra, terms).compile_value(value)
}
