//! Spec transpiler for predicate trees.
//!
//! Converts a predicate tree into the generic nested-mapping filter spec
//! consumed by the downstream query-building layer.


use serde_json::Map;

use crate::ast::Predicate;

/// The generic nested-mapping form of a filter.
///
/// Leaves translate to `{"field": ..., "op": ..., "value": ...}` (the `value`
/// key is absent for operand-less operators); branches translate to a
/// single-key mapping from the operator token to the sequence of translated
/// children. Key names and operator tokens are a wire contract with the
/// query-building layer.
pub type FilterSpec = Map<String, serde_json::Value>;

/// Trait for converting a predicate tree to its filter spec.
pub trait ToSpec {
    /// Translate this node (and everything under it) to a [`FilterSpec`].
    fn to_spec(&self) -> FilterSpec;
}

impl ToSpec for Predicate {
    fn to_spec(&self) -> FilterSpec {
        let token = self.token();
        let mut spec = FilterSpec::new();
        match self {
            // Leaves with one comparison value
            Predicate::Equal { field, value }
            | Predicate::Greater { field, value }
            | Predicate::GreaterOrEqual { field, value }
            | Predicate::Lesser { field, value }
            | Predicate::LesserOrEqual { field, value } => {
                spec.insert("field".to_string(), field.clone().into());
                spec.insert("op".to_string(), token.into());
                spec.insert("value".to_string(), value.into());
            }
            // Leaf with an ordered value list
            Predicate::In { field, values } => {
                spec.insert("field".to_string(), field.clone().into());
                spec.insert("op".to_string(), token.into());
                spec.insert(
                    "value".to_string(),
                    serde_json::Value::Array(values.iter().map(Into::into).collect()),
                );
            }
            // Leaf with no comparison value: no "value" key at all
            Predicate::Empty { field } => {
                spec.insert("field".to_string(), field.clone().into());
                spec.insert("op".to_string(), token.into());
            }
            // Single-child branch: the child still lands in a one-element list
            Predicate::Not(child) => {
                spec.insert(
                    token.to_string(),
                    serde_json::Value::Array(vec![child.to_spec().into()]),
                );
            }
            // Multi-child branches, child order preserved
            Predicate::And(children) | Predicate::Or(children) => {
                spec.insert(
                    token.to_string(),
                    serde_json::Value::Array(
                        children.iter().map(|c| c.to_spec().into()).collect(),
                    ),
                );
            }
        }
        spec
    }
}
