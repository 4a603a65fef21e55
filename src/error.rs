//! Construction errors for predicate trees.

use thiserror::Error;

use crate::ast::{Arity, BranchOp, PredicateOp};

/// Errors raised while constructing a predicate.
///
/// All of these are structural: they fire at construction time, never during
/// translation. Semantic checks (field existence, value typing) are the
/// responsibility of the layer consuming the generated spec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredicateError {
    /// A leaf predicate was given an empty field name.
    #[error("leaf predicate requires a non-empty field name")]
    EmptyField,

    /// The operand payload does not match the operator's arity.
    #[error("operand arity mismatch for operator `{op}`: expected {expected}, got {found}")]
    OperandMismatch {
        op: PredicateOp,
        expected: Arity,
        found: Arity,
    },

    /// A branch combinator was given the wrong number of children.
    #[error("operator `{op}` takes exactly {expected} child predicate(s), got {found}")]
    ChildMismatch {
        op: BranchOp,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LeafOp;

    #[test]
    fn test_error_display() {
        assert!(PredicateError::EmptyField.to_string().contains("non-empty field"));

        let err = PredicateError::OperandMismatch {
            op: LeafOp::In.into(),
            expected: Arity::Multi,
            found: Arity::None,
        };
        assert_eq!(
            err.to_string(),
            "operand arity mismatch for operator `in`: expected multi, got none"
        );

        let err = PredicateError::ChildMismatch {
            op: BranchOp::Not,
            expected: 1,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "operator `not` takes exactly 1 child predicate(s), got 3"
        );
    }
}
