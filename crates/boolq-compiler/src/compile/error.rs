use boolq_core::{Query, QueryKind};

/// Reasons a query tree cannot be compiled.
///
/// Variants that point at a node carry its compact JSON rendering, enough to
/// build a user-facing "bad request" message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("nil input")]
    NilInput,

    /// A term node with children or an exclusion clause.
    #[error("term queries can have only field and value, {node}")]
    InvalidTermShape { node: String },

    #[error("missing field, {node}")]
    MissingField { node: String },

    /// An exclusion clause outside of an `AND` node.
    #[error("{kind} queries can't have 'not' value, {node}")]
    NotAllowedHere { kind: QueryKind, node: String },

    #[error("unknown type {node}")]
    UnknownType { node: String },

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl CompileError {
    pub(super) fn invalid_term_shape(query: &Query) -> Self {
        Self::InvalidTermShape {
            node: query.to_string(),
        }
    }

    pub(super) fn missing_field(query: &Query) -> Self {
        Self::MissingField {
            node: query.to_string(),
        }
    }

    pub(super) fn not_allowed_here(query: &Query) -> Self {
        Self::NotAllowedHere {
            kind: query.kind,
            node: query.to_string(),
        }
    }

    pub(super) fn unknown_type(query: &Query) -> Self {
        Self::UnknownType {
            node: query.to_string(),
        }
    }
}

pub type CompileResult<T> = std::result::Result<T, CompileError>;
