//! Engine-independent compiled query tree.
//!
//! [`PlanAlgebra`] builds [`Plan`] values, which record exactly what the
//! compiler asked for: which combinator, which children in which order, the
//! boost, the exclusion, the tiebreaker. Nothing here matches or scores
//! documents. Use it to inspect compiled queries, or as a target to translate
//! into a real engine later.

mod dump;

#[cfg(test)]
mod plan_tests;

use crate::algebra::{Boost, Exclude, QueryAlgebra};

/// A compiled query.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    Term(TermPlan),
    And(AndPlan),
    Or(OrPlan),
    DisMax(DisMaxPlan),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TermPlan {
    pub field: String,
    pub value: String,
    pub boost: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AndPlan {
    pub queries: Vec<Plan>,
    pub not: Option<Box<Plan>>,
    pub boost: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrPlan {
    pub queries: Vec<Plan>,
    pub boost: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisMaxPlan {
    pub tiebreaker: f32,
    pub queries: Vec<Plan>,
    pub boost: Option<f32>,
}

/// Term factory for [`PlanAlgebra`].
pub fn term(field: &str, value: &str) -> Plan {
    Plan::term(field, value)
}

impl Plan {
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        Plan::Term(TermPlan {
            field: field.into(),
            value: value.into(),
            boost: None,
        })
    }

    pub fn boost(&self) -> Option<f32> {
        match self {
            Plan::Term(t) => t.boost,
            Plan::And(a) => a.boost,
            Plan::Or(o) => o.boost,
            Plan::DisMax(d) => d.boost,
        }
    }

    /// Children in input order; empty for terms. Excludes the `not` clause.
    pub fn queries(&self) -> &[Plan] {
        match self {
            Plan::Term(_) => &[],
            Plan::And(a) => &a.queries,
            Plan::Or(o) => &o.queries,
            Plan::DisMax(d) => &d.queries,
        }
    }
}

impl Boost for Plan {
    fn set_boost(&mut self, boost: f32) {
        match self {
            Plan::Term(t) => t.set_boost(boost),
            Plan::And(a) => a.set_boost(boost),
            Plan::Or(o) => o.set_boost(boost),
            Plan::DisMax(d) => d.set_boost(boost),
        }
    }
}

macro_rules! impl_plan_node {
    ($($node:ident => $variant:ident),* $(,)?) => {$(
        impl Boost for $node {
            fn set_boost(&mut self, boost: f32) {
                self.boost = Some(boost);
            }
        }

        impl From<$node> for Plan {
            fn from(node: $node) -> Self {
                Plan::$variant(node)
            }
        }
    )*};
}

impl_plan_node! {
    TermPlan => Term,
    AndPlan => And,
    OrPlan => Or,
    DisMaxPlan => DisMax,
}

impl Exclude<Plan> for AndPlan {
    fn set_exclusion(&mut self, query: Plan) {
        self.not = Some(Box::new(query));
    }
}

/// Builds [`Plan`] trees. Pair with [`term`] as the term factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanAlgebra;

impl QueryAlgebra for PlanAlgebra {
    type Query = Plan;
    type Conjunction = AndPlan;
    type Disjunction = OrPlan;
    type DisMax = DisMaxPlan;

    fn conjunction(&self, queries: Vec<Plan>) -> AndPlan {
        AndPlan {
            queries,
            not: None,
            boost: None,
        }
    }

    fn disjunction(&self, queries: Vec<Plan>) -> OrPlan {
        OrPlan {
            queries,
            boost: None,
        }
    }

    fn dis_max(&self, tiebreaker: f32, queries: Vec<Plan>) -> DisMaxPlan {
        DisMaxPlan {
            tiebreaker,
            queries,
            boost: None,
        }
    }
}
