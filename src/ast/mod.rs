pub mod operators;
pub mod values;
pub mod predicate;
pub mod builders;

pub use self::operators::{Arity, BranchOp, LeafOp, PredicateKind, PredicateOp};
pub use self::predicate::Predicate;
pub use self::values::{Operands, Value};
