#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for boolq query trees.
//!
//! Two layers:
//! - **Data model**: [`Query`], one node of a boolean query tree
//! - **Decoding**: protobuf-JSON style shims from bytes or generic JSON values

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

mod kind;


pub use kind::QueryKind;

// ============================================================================
// Data Model
// ============================================================================

/// One node of a boolean query tree.
///
/// Which members are meaningful depends on [`kind`](Self::kind):
/// - `Term`: `field` and `value`
/// - `And`: `queries` and optionally `not`
/// - `Or`: `queries`
/// - `DisMax`: `queries` and `tiebreaker`
///
/// `boost` applies to every kind; `0` means unset. Shape rules are enforced
/// by the compiler, not here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Query {
    #[serde(
        rename = "type",
        skip_serializing_if = "QueryKind::is_term",
        deserialize_with = "nullable"
    )]
    pub kind: QueryKind,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub field: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub value: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub boost: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Query>>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub queries: Vec<Query>,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "nullable")]
    pub tiebreaker: f32,
}

impl Query {
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn and(queries: impl IntoIterator<Item = Query>) -> Self {
        Self::composite(QueryKind::And, queries)
    }

    pub fn or(queries: impl IntoIterator<Item = Query>) -> Self {
        Self::composite(QueryKind::Or, queries)
    }

    pub fn dis_max(tiebreaker: f32, queries: impl IntoIterator<Item = Query>) -> Self {
        Self {
            tiebreaker,
            ..Self::composite(QueryKind::DisMax, queries)
        }
    }

    fn composite(kind: QueryKind, queries: impl IntoIterator<Item = Query>) -> Self {
        Self {
            kind,
            queries: queries.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: QueryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    /// Attach an exclusion clause. Only legal on `And` nodes.
    pub fn with_not(mut self, not: Query) -> Self {
        self.not = Some(Box::new(not));
        self
    }

    pub fn with_queries(mut self, queries: impl IntoIterator<Item = Query>) -> Self {
        self.queries = queries.into_iter().collect();
        self
    }

    /// Boost to apply, if any. Non-positive values count as unset.
    pub fn effective_boost(&self) -> Option<f32> {
        (self.boost > 0.0).then_some(self.boost)
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    /// Decode a query from a JSON payload.
    ///
    /// A literal `null` payload yields `Ok(None)`.
    pub fn from_slice(bytes: &[u8]) -> Result<Option<Query>, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Decode a query from an already parsed JSON value.
    ///
    /// Useful when the query arrives embedded in a larger request, e.g.
    /// `{"limit": 10, "query": {...}}`: pass the `query` member.
    pub fn from_value(value: &serde_json::Value) -> Result<Option<Query>, serde_json::Error> {
        Option::<Query>::deserialize(value)
    }
}

/// Renders the compact JSON form, with default members omitted.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

fn is_zero(v: &f32) -> bool {
    *v == 0.0
}

/// Treat an explicit `null` member the same as an absent one.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
