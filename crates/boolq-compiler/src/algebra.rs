//! Capabilities the compiler needs from a retrieval engine.
//!
//! The compiler never names concrete query types. An engine plugs in by
//! implementing [`QueryAlgebra`] for its combinators and passing a term
//! factory closure `Fn(&str, &str) -> Query` for leaves.

/// Query objects whose score contribution can be weighted.
pub trait Boost {
    fn set_boost(&mut self, boost: f32);
}

/// Conjunctions that can drop documents matched by another query.
pub trait Exclude<Q> {
    fn set_exclusion(&mut self, query: Q);
}

/// Combinator constructors of a retrieval engine.
///
/// Each constructor receives already compiled children, in the order the
/// input tree lists them. The returned combinator is boosted (and, for
/// conjunctions, given an exclusion) before being converted into the
/// engine's general [`Query`](Self::Query) type.
pub trait QueryAlgebra {
    type Query: Boost;
    type Conjunction: Boost + Exclude<Self::Query> + Into<Self::Query>;
    type Disjunction: Boost + Into<Self::Query>;
    type DisMax: Boost + Into<Self::Query>;

    /// Documents matching every child. Called with zero children for an
    /// empty `AND`; what that matches is up to the engine.
    fn conjunction(&self, queries: Vec<Self::Query>) -> Self::Conjunction;

    /// Documents matching any child.
    fn disjunction(&self, queries: Vec<Self::Query>) -> Self::Disjunction;

    /// Best child score plus `tiebreaker` times the other matching children.
    fn dis_max(&self, tiebreaker: f32, queries: Vec<Self::Query>) -> Self::DisMax;
}

impl<T: QueryAlgebra + ?Sized> QueryAlgebra for &T {
    type Query = T::Query;
    type Conjunction = T::Conjunction;
    type Disjunction = T::Disjunction;
    type DisMax = T::DisMax;

    fn conjunction(&self, queries: Vec<Self::Query>) -> Self::Conjunction {
        (*self).conjunction(queries)
    }
    fn disjunction(&self, queries: Vec<Self::Query>) -> Self::Disjunction {
        (*self).disjunction(queries)
    }
    fn dis_max(&self, tiebreaker: f32, queries: Vec<Self::Query>) -> Self::DisMax {
        (*self).dis_max(tiebreaker, queries)
    }
}
