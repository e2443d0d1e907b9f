//! Validate-and-build pass from [`Query`](boolq_core::Query) trees to engine
//! queries.
//!
//! The pass is a single bottom-up recursion:
//! - `TERM` nodes become leaves via the term factory
//! - `AND`, `OR` and `DISMAX` compile their children in order, then combine
//!   them with the matching [`QueryAlgebra`](crate::QueryAlgebra) constructor
//! - a composite with exactly one child (and, for `AND`, no exclusion) is
//!   replaced by that child, dropping the composite's boost
//!
//! The first invalid node aborts the whole pass.

mod compiler;
mod error;


pub use compiler::{Compiler, DEFAULT_RECURSION_FUEL};
pub use error::{CompileError, CompileResult};
