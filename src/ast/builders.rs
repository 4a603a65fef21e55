//! Ergonomic builder functions for predicate trees.
//!
//! Short free functions named after the wire tokens, so filter trees read
//! close to the spec they produce.
//!
//! # Example
//! ```
//! use sift_core::ast::builders::*;
//!
//! let filter = and(vec![
//!     gt("age", 18)?,
//!     or(vec![eq("role", "admin")?, is_null("deleted_at")?]),
//! ]);
//! assert_eq!(filter.token(), "and");
//! # Ok::<(), sift_core::PredicateError>(())
//! ```

use crate::ast::{Predicate, Value};
use crate::error::PredicateError;

/// Equality test: `field = value`.
pub fn eq(field: &str, value: impl Into<Value>) -> Result<Predicate, PredicateError> {
    Predicate::equal(field, value)
}

/// Strict greater-than test: `field > value`.
pub fn gt(field: &str, value: impl Into<Value>) -> Result<Predicate, PredicateError> {
    Predicate::greater(field, value)
}

/// Greater-or-equal test: `field >= value`.
pub fn ge(field: &str, value: impl Into<Value>) -> Result<Predicate, PredicateError> {
    Predicate::greater_or_equal(field, value)
}

/// Strict less-than test: `field < value`.
pub fn lt(field: &str, value: impl Into<Value>) -> Result<Predicate, PredicateError> {
    Predicate::lesser(field, value)
}

/// Less-or-equal test: `field <= value`.
pub fn le(field: &str, value: impl Into<Value>) -> Result<Predicate, PredicateError> {
    Predicate::lesser_or_equal(field, value)
}

/// Null/empty test on a field.
pub fn is_null(field: &str) -> Result<Predicate, PredicateError> {
    Predicate::empty(field)
}

/// Membership test: `field` is one of `values`.
pub fn is_in<V: Into<Value>>(
    field: &str,
    values: impl IntoIterator<Item = V>,
) -> Result<Predicate, PredicateError> {
    Predicate::is_in(field, values)
}

/// Negate a predicate.
pub fn not(child: Predicate) -> Predicate {
    Predicate::not(child)
}

/// Conjunction over `children`.
pub fn and(children: Vec<Predicate>) -> Predicate {
    Predicate::and(children)
}

/// Disjunction over `children`.
pub fn or(children: Vec<Predicate>) -> Predicate {
    Predicate::or(children)
}
