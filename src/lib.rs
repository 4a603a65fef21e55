//! Filter predicate AST with a generic spec transpiler.
//!
//! `sift-core` models query filter conditions as an immutable tree of leaf
//! comparisons (`eq`, `gt`, `ge`, `lt`, `le`, `is_null`, `in`) and boolean
//! combinators (`not`, `and`, `or`), and transpiles any tree into the nested
//! mapping shape expected by a downstream query-building layer. It performs
//! no query execution and no schema validation; it is the structured,
//! serializable representation in between.

pub mod ast;
pub mod error;
pub mod transpiler;

pub use ast::{Arity, BranchOp, LeafOp, Operands, Predicate, PredicateKind, PredicateOp, Value};
pub use error::PredicateError;
pub use transpiler::{FilterSpec, ToSpec};

/// Everything needed to build and transpile filter trees.
pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::{
        Arity, BranchOp, LeafOp, Operands, Predicate, PredicateKind, PredicateOp, Value,
    };
    pub use crate::error::PredicateError;
    pub use crate::transpiler::{FilterSpec, ToSpec};
}
