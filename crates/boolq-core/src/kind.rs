//! Query node discriminant and its wire encoding.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which variant a [`Query`](crate::Query) node is.
///
/// On the wire the type is either its name (`"TERM"`, `"AND"`, `"OR"`,
/// `"DISMAX"`) or its enum number. Numbers outside the known range decode
/// to [`QueryKind::Unknown`] so the compiler can reject them with context;
/// unknown names are a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryKind {
    #[default]
    Term,
    And,
    Or,
    DisMax,
    Unknown(i32),
}

impl QueryKind {
    pub fn from_number(n: i32) -> Self {
        match n {
            0 => QueryKind::Term,
            1 => QueryKind::And,
            2 => QueryKind::Or,
            3 => QueryKind::DisMax,
            n => QueryKind::Unknown(n),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TERM" => Some(QueryKind::Term),
            "AND" => Some(QueryKind::And),
            "OR" => Some(QueryKind::Or),
            "DISMAX" => Some(QueryKind::DisMax),
            _ => None,
        }
    }

    pub fn number(self) -> i32 {
        match self {
            QueryKind::Term => 0,
            QueryKind::And => 1,
            QueryKind::Or => 2,
            QueryKind::DisMax => 3,
            QueryKind::Unknown(n) => n,
        }
    }

    pub fn is_term(&self) -> bool {
        matches!(self, QueryKind::Term)
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Term => f.write_str("TERM"),
            QueryKind::And => f.write_str("AND"),
            QueryKind::Or => f.write_str("OR"),
            QueryKind::DisMax => f.write_str("DISMAX"),
            QueryKind::Unknown(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for QueryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QueryKind::Unknown(n) => serializer.serialize_i32(*n),
            known => serializer.collect_str(known),
        }
    }
}

struct QueryKindVisitor;

impl Visitor<'_> for QueryKindVisitor {
    type Value = QueryKind;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("one of \"TERM\", \"AND\", \"OR\", \"DISMAX\" or an enum number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<QueryKind, E> {
        QueryKind::from_name(v).ok_or_else(|| {
            de::Error::unknown_variant(v, &["TERM", "AND", "OR", "DISMAX"])
        })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<QueryKind, E> {
        i32::try_from(v)
            .map(QueryKind::from_number)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<QueryKind, E> {
        i32::try_from(v)
            .map(QueryKind::from_number)
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Unsigned(v), &self))
    }
}

impl<'de> Deserialize<'de> for QueryKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QueryKindVisitor)
    }
}
