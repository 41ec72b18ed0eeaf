//! # Type Induction
//!
//! Derives a minimal structural type model from a single example document.
//!
//! Each value is classified by its JSON kind. Objects recurse into every
//! property. Arrays are typed by their first element only (homogeneous-array
//! assumption); an empty example array leaves its item type unconstrained.
//! That degradation is logged, never raised.

use std::collections::BTreeMap;

use respcheck_core::{DocumentRole, JsonKind, JsonPointer, RespCheckError};
use serde_json::Value;

/// Structural type of one node of an example document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    /// Object with its properties, keyed by name.
    Object(BTreeMap<String, TypeNode>),
    /// Array whose every element is expected to have the item type.
    Array(Box<TypeNode>),
    /// A string.
    String,
    /// A number.
    Number,
    /// A boolean.
    Boolean,
    /// `null`.
    Null,
    /// Anything. Produced for the items of an empty example array.
    Unconstrained,
}

impl TypeNode {
    /// The JSON kind this node requires, or `None` when unconstrained.
    pub fn kind(&self) -> Option<JsonKind> {
        match self {
            Self::Object(_) => Some(JsonKind::Object),
            Self::Array(_) => Some(JsonKind::Array),
            Self::String => Some(JsonKind::String),
            Self::Number => Some(JsonKind::Number),
            Self::Boolean => Some(JsonKind::Boolean),
            Self::Null => Some(JsonKind::Null),
            Self::Unconstrained => None,
        }
    }
}

/// Parse example JSON text and induce its type.
///
/// # Errors
///
/// Returns [`RespCheckError::Parse`] with [`DocumentRole::Example`] if the
/// text is not well-formed JSON.
pub fn induce(example: &str) -> Result<TypeNode, RespCheckError> {
    let value: Value = serde_json::from_str(example)
        .map_err(|e| RespCheckError::parse(DocumentRole::Example, e))?;
    Ok(induce_value(&value))
}

/// Induce the type of an already parsed example value.
pub fn induce_value(value: &Value) -> TypeNode {
    induce_at(value, &JsonPointer::root())
}

fn induce_at(value: &Value, pointer: &JsonPointer) -> TypeNode {
    match value {
        Value::Null => TypeNode::Null,
        Value::Bool(_) => TypeNode::Boolean,
        Value::Number(_) => TypeNode::Number,
        Value::String(_) => TypeNode::String,
        Value::Array(elements) => {
            let item = match elements.first() {
                Some(first) => induce_at(first, &pointer.index(0)),
                None => {
                    tracing::debug!(
                        pointer = %pointer,
                        "empty example array; item type left unconstrained"
                    );
                    TypeNode::Unconstrained
                }
            };
            TypeNode::Array(Box::new(item))
        }
        Value::Object(fields) => TypeNode::Object(
            fields
                .iter()
                .map(|(name, child)| (name.clone(), induce_at(child, &pointer.key(name))))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_map_to_their_kind() {
        assert_eq!(induce_value(&json!("a")), TypeNode::String);
        assert_eq!(induce_value(&json!(3)), TypeNode::Number);
        assert_eq!(induce_value(&json!(-0.25)), TypeNode::Number);
        assert_eq!(induce_value(&json!(true)), TypeNode::Boolean);
        assert_eq!(induce_value(&Value::Null), TypeNode::Null);
    }

    #[test]
    fn object_properties_are_induced_recursively() {
        let node = induce(r#"{"id": 1, "owner": {"name": "a", "tags": ["x"]}}"#).unwrap();
        let TypeNode::Object(props) = node else {
            panic!("expected object");
        };
        assert_eq!(props["id"], TypeNode::Number);
        let TypeNode::Object(owner) = &props["owner"] else {
            panic!("expected nested object");
        };
        assert_eq!(owner["name"], TypeNode::String);
        assert_eq!(owner["tags"], TypeNode::Array(Box::new(TypeNode::String)));
    }

    #[test]
    fn array_item_type_comes_from_first_element() {
        let node = induce_value(&json!([1, "two", null]));
        assert_eq!(node, TypeNode::Array(Box::new(TypeNode::Number)));
    }

    #[test]
    fn empty_array_is_unconstrained() {
        let node = induce_value(&json!({"list": []}));
        let TypeNode::Object(props) = node else {
            panic!("expected object");
        };
        let TypeNode::Array(item) = &props["list"] else {
            panic!("expected array");
        };
        assert_eq!(**item, TypeNode::Unconstrained);
        assert_eq!(item.kind(), None);
    }

    #[test]
    fn empty_object_has_no_properties() {
        assert_eq!(induce("{}").unwrap(), TypeNode::Object(BTreeMap::new()));
    }

    #[test]
    fn malformed_example_is_a_parse_error() {
        let err = induce(r#"{"id": }"#).unwrap_err();
        assert!(matches!(
            err,
            RespCheckError::Parse {
                role: DocumentRole::Example,
                ..
            }
        ));
    }
}
