use serde::{Deserialize, Serialize};

use crate::ast::{Arity, BranchOp, LeafOp, Operands, PredicateKind, PredicateOp, Value};
use crate::error::PredicateError;

/// A filter condition: an atomic field test or a boolean combinator.
///
/// Predicates form an immutable tree. Branch variants own their children
/// exclusively, so the structure is always a finite tree and translation
/// always terminates. The checked constructors (`equal`, `leaf`, `branch`,
/// ...) are the validating entry point; trees assembled from the variants
/// directly can be re-checked with [`Predicate::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// field = value
    Equal { field: String, value: Value },
    /// field > value
    Greater { field: String, value: Value },
    /// field >= value
    GreaterOrEqual { field: String, value: Value },
    /// field < value
    Lesser { field: String, value: Value },
    /// field <= value
    LesserOrEqual { field: String, value: Value },
    /// field is null/empty
    Empty { field: String },
    /// field is one of the listed values
    In { field: String, values: Vec<Value> },
    /// Negation of exactly one child
    Not(Box<Predicate>),
    /// Conjunction over zero or more children
    And(Vec<Predicate>),
    /// Disjunction over zero or more children
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Equality test: `field = value`.
    pub fn equal(
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, PredicateError> {
        let field = non_empty(field.into())?;
        Ok(Predicate::Equal { field, value: value.into() })
    }

    /// Strict greater-than test: `field > value`.
    pub fn greater(
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, PredicateError> {
        let field = non_empty(field.into())?;
        Ok(Predicate::Greater { field, value: value.into() })
    }

    /// Greater-or-equal test: `field >= value`.
    pub fn greater_or_equal(
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, PredicateError> {
        let field = non_empty(field.into())?;
        Ok(Predicate::GreaterOrEqual { field, value: value.into() })
    }

    /// Strict less-than test: `field < value`.
    pub fn lesser(
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, PredicateError> {
        let field = non_empty(field.into())?;
        Ok(Predicate::Lesser { field, value: value.into() })
    }

    /// Less-or-equal test: `field <= value`.
    pub fn lesser_or_equal(
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, PredicateError> {
        let field = non_empty(field.into())?;
        Ok(Predicate::LesserOrEqual { field, value: value.into() })
    }

    /// Null/empty test on a field.
    pub fn empty(field: impl Into<String>) -> Result<Self, PredicateError> {
        let field = non_empty(field.into())?;
        Ok(Predicate::Empty { field })
    }

    /// Membership test: `field` is one of `values`. Order is preserved.
    pub fn is_in<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self, PredicateError> {
        let field = non_empty(field.into())?;
        Ok(Predicate::In {
            field,
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    /// Negate a predicate.
    pub fn not(child: Predicate) -> Self {
        Predicate::Not(Box::new(child))
    }

    /// Conjunction over `children`.
    ///
    /// Zero children is accepted; whether an empty conjunction is vacuously
    /// true is left to the consumer of the generated spec.
    pub fn and(children: Vec<Predicate>) -> Self {
        Predicate::And(children)
    }

    /// Disjunction over `children`.
    ///
    /// Zero children is accepted; whether an empty disjunction is vacuously
    /// false is left to the consumer of the generated spec.
    pub fn or(children: Vec<Predicate>) -> Self {
        Predicate::Or(children)
    }

    /// Build a leaf from an operator tag and a loose operand payload.
    ///
    /// Fails with [`PredicateError::OperandMismatch`] when the payload shape
    /// does not match the operator's arity.
    pub fn leaf(
        op: LeafOp,
        field: impl Into<String>,
        operands: Operands,
    ) -> Result<Self, PredicateError> {
        let field = non_empty(field.into())?;
        let found = operands.arity();
        match (op, operands) {
            (LeafOp::Equal, Operands::Single(value)) => Ok(Predicate::Equal { field, value }),
            (LeafOp::Greater, Operands::Single(value)) => Ok(Predicate::Greater { field, value }),
            (LeafOp::GreaterOrEqual, Operands::Single(value)) => {
                Ok(Predicate::GreaterOrEqual { field, value })
            }
            (LeafOp::Lesser, Operands::Single(value)) => Ok(Predicate::Lesser { field, value }),
            (LeafOp::LesserOrEqual, Operands::Single(value)) => {
                Ok(Predicate::LesserOrEqual { field, value })
            }
            (LeafOp::Empty, Operands::None) => Ok(Predicate::Empty { field }),
            (LeafOp::In, Operands::Multi(values)) => Ok(Predicate::In { field, values }),
            (op, _) => Err(PredicateError::OperandMismatch {
                op: op.into(),
                expected: op.arity(),
                found,
            }),
        }
    }

    /// Build a branch from an operator tag and a list of children.
    ///
    /// `Not` requires exactly one child and fails with
    /// [`PredicateError::ChildMismatch`] otherwise. `And`/`Or` accept any
    /// number of children, including zero.
    pub fn branch(op: BranchOp, children: Vec<Predicate>) -> Result<Self, PredicateError> {
        match op {
            BranchOp::Not => match <[Predicate; 1]>::try_from(children) {
                Ok([child]) => Ok(Predicate::Not(Box::new(child))),
                Err(children) => Err(PredicateError::ChildMismatch {
                    op,
                    expected: 1,
                    found: children.len(),
                }),
            },
            BranchOp::And => Ok(Predicate::And(children)),
            BranchOp::Or => Ok(Predicate::Or(children)),
        }
    }

    /// Structural class: leaf or branch.
    pub fn kind(&self) -> PredicateKind {
        self.op().kind()
    }

    /// The concrete operator tag.
    pub fn op(&self) -> PredicateOp {
        match self {
            Predicate::Equal { .. } => LeafOp::Equal.into(),
            Predicate::Greater { .. } => LeafOp::Greater.into(),
            Predicate::GreaterOrEqual { .. } => LeafOp::GreaterOrEqual.into(),
            Predicate::Lesser { .. } => LeafOp::Lesser.into(),
            Predicate::LesserOrEqual { .. } => LeafOp::LesserOrEqual.into(),
            Predicate::Empty { .. } => LeafOp::Empty.into(),
            Predicate::In { .. } => LeafOp::In.into(),
            Predicate::Not(_) => BranchOp::Not.into(),
            Predicate::And(_) => BranchOp::And.into(),
            Predicate::Or(_) => BranchOp::Or.into(),
        }
    }

    /// Operand count of this predicate's operator.
    pub fn arity(&self) -> Arity {
        self.op().arity()
    }

    /// Stable wire token for this predicate's operator.
    pub fn token(&self) -> &'static str {
        self.op().token()
    }

    /// The target field, for leaves.
    pub fn field(&self) -> Option<&str> {
        match self {
            Predicate::Equal { field, .. }
            | Predicate::Greater { field, .. }
            | Predicate::GreaterOrEqual { field, .. }
            | Predicate::Lesser { field, .. }
            | Predicate::LesserOrEqual { field, .. }
            | Predicate::Empty { field }
            | Predicate::In { field, .. } => Some(field),
            Predicate::Not(_) | Predicate::And(_) | Predicate::Or(_) => None,
        }
    }

    /// Re-check structural invariants over the whole tree.
    ///
    /// Useful for trees assembled from the variants directly or freshly
    /// deserialized. Checks that every leaf names a non-empty field.
    pub fn validate(&self) -> Result<(), PredicateError> {
        match self {
            Predicate::Not(child) => child.validate(),
            Predicate::And(children) | Predicate::Or(children) => {
                for child in children {
                    child.validate()?;
                }
                Ok(())
            }
            leaf => match leaf.field() {
                Some(f) if !f.is_empty() => Ok(()),
                _ => Err(PredicateError::EmptyField),
            },
        }
    }
}

fn non_empty(field: String) -> Result<String, PredicateError> {
    if field.is_empty() {
        Err(PredicateError::EmptyField)
    } else {
        Ok(field)
    }
}
