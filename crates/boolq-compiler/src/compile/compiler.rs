//! Compiler state and entry points.

use boolq_core::{Query, QueryKind};

use crate::algebra::{Boost, Exclude, QueryAlgebra};

use super::error::{CompileError, CompileResult};

/// Nesting depth accepted by a freshly built [`Compiler`].
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Turns [`Query`] trees into engine queries.
///
/// Leaves come from the term factory `terms`; composite nodes are built with
/// `algebra`. The compiler keeps no state between calls, so one instance can
/// compile any number of trees.
pub struct Compiler<'a, A, F> {
    algebra: &'a A,
    terms: F,
    recursion_fuel: Option<u32>,
}

impl<'a, A, F> Compiler<'a, A, F>
where
    A: QueryAlgebra,
    F: Fn(&str, &str) -> A::Query,
{
    pub fn new(algebra: &'a A, terms: F) -> Self {
        Self {
            algebra,
            terms,
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// Set recursion depth limit. None = infinite.
    ///
    /// The root node is at depth 1; children and exclusion clauses are one
    /// level deeper than their parent.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Compile a whole tree. `None` stands for a missing query.
    ///
    /// Fails on the first invalid node; nothing is returned for the rest of
    /// the tree.
    pub fn compile(&self, input: Option<&Query>) -> CompileResult<A::Query> {
        let Some(query) = input else {
            return Err(CompileError::NilInput);
        };
        self.compile_node(query, 1).inspect_err(|err| {
            log::debug!("query compilation failed: {err}");
        })
    }

    /// Decode a JSON payload and compile it.
    pub fn compile_slice(&self, bytes: &[u8]) -> crate::Result<A::Query> {
        let query = Query::from_slice(bytes)?;
        Ok(self.compile(query.as_ref())?)
    }

    /// Compile a query held in a generic JSON value, such as one member of a
    /// larger request document.
    pub fn compile_value(&self, value: &serde_json::Value) -> crate::Result<A::Query> {
        let query = Query::from_value(value)?;
        Ok(self.compile(query.as_ref())?)
    }

    fn compile_node(&self, query: &Query, depth: u32) -> CompileResult<A::Query> {
        if let Some(limit) = self.recursion_fuel
            && depth > limit
        {
            return Err(CompileError::RecursionLimitExceeded);
        }
        log::trace!("compiling {} node at depth {depth}", query.kind);

        match query.kind {
            QueryKind::Term => self.compile_term(query),
            QueryKind::And => self.compile_and(query, depth),
            QueryKind::Or => self.compile_or(query, depth),
            QueryKind::DisMax => self.compile_dis_max(query, depth),
            QueryKind::Unknown(_) => {
                // Children are still validated first, so their errors win.
                self.compile_children(query, depth)?;
                Err(CompileError::unknown_type(query))
            }
        }
    }

    fn compile_term(&self, query: &Query) -> CompileResult<A::Query> {
        // Shape before field: a malformed term reports the shape problem.
        if query.not.is_some() || !query.queries.is_empty() {
            return Err(CompileError::invalid_term_shape(query));
        }
        if query.field.is_empty() {
            return Err(CompileError::missing_field(query));
        }

        let mut term = (self.terms)(query.field.as_str(), query.value.as_str());
        apply_boost(&mut term, query);
        Ok(term)
    }

    fn compile_and(&self, query: &Query, depth: u32) -> CompileResult<A::Query> {
        let children = self.compile_children(query, depth)?;

        let mut and = match query.not.as_deref() {
            Some(not) => {
                let mut and = self.algebra.conjunction(children);
                and.set_exclusion(self.compile_node(not, depth + 1)?);
                and
            }
            None => match single(children) {
                // Boost on the collapsed node is dropped.
                Ok(only) => return Ok(only),
                Err(children) => self.algebra.conjunction(children),
            },
        };

        apply_boost(&mut and, query);
        Ok(and.into())
    }

    fn compile_or(&self, query: &Query, depth: u32) -> CompileResult<A::Query> {
        let children = self.compile_children(query, depth)?;
        if query.not.is_some() {
            return Err(CompileError::not_allowed_here(query));
        }

        let children = match single(children) {
            Ok(only) => return Ok(only),
            Err(children) => children,
        };

        let mut or = self.algebra.disjunction(children);
        apply_boost(&mut or, query);
        Ok(or.into())
    }

    fn compile_dis_max(&self, query: &Query, depth: u32) -> CompileResult<A::Query> {
        let children = self.compile_children(query, depth)?;
        if query.not.is_some() {
            return Err(CompileError::not_allowed_here(query));
        }

        let children = match single(children) {
            Ok(only) => return Ok(only),
            Err(children) => children,
        };

        let mut dis_max = self.algebra.dis_max(query.tiebreaker, children);
        apply_boost(&mut dis_max, query);
        Ok(dis_max.into())
    }

    /// Compile `queries` in order, stopping at the first error.
    fn compile_children(&self, query: &Query, depth: u32) -> CompileResult<Vec<A::Query>> {
        query
            .queries
            .iter()
            .map(|child| self.compile_node(child, depth + 1))
            .collect()
    }
}

fn apply_boost(target: &mut impl Boost, query: &Query) {
    if let Some(boost) = query.effective_boost() {
        target.set_boost(boost);
    }
}

/// `Ok` with the element if there is exactly one, otherwise the input back.
fn single<T>(items: Vec<T>) -> Result<T, Vec<T>> {
    <[T; 1]>::try_from(items).map(|[only]| only)
}
