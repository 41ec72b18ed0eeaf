//! # Schema Materialization
//!
//! Renders a [`TypeNode`] tree into a [`SchemaNode`] tree with identical
//! nesting. Object nodes carry `properties`, array nodes carry `items`, and
//! scalar kinds map one-to-one onto the JSON Schema `type` keyword. No
//! `required` lists are produced here; see [`crate::augment`].
//!
//! A `SchemaNode` serializes to a draft-04 style JSON Schema document, so the
//! derived schema can be logged or printed as ordinary JSON.

use std::collections::BTreeMap;

use respcheck_core::{JsonKind, RespCheckError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::induce::TypeNode;

/// One node of a derived schema.
///
/// A node with every field `None` is unconstrained and serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Schema-version marker. Only ever set on the root.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,

    /// Required JSON kind of the instance.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<JsonKind>,

    /// Declared properties of an object node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaNode>>,

    /// Schema every element of an array node must satisfy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    /// Property names that must be present on an object node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl SchemaNode {
    /// Render as a JSON value.
    pub fn to_json(&self) -> Result<Value, RespCheckError> {
        serde_json::to_value(self).map_err(|e| RespCheckError::Serialization(e.to_string()))
    }

    /// Render as compact JSON text.
    pub fn to_json_string(&self) -> Result<String, RespCheckError> {
        serde_json::to_string(self).map_err(|e| RespCheckError::Serialization(e.to_string()))
    }

    /// Render as indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String, RespCheckError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RespCheckError::Serialization(e.to_string()))
    }
}

/// Materialize a type tree into a schema tree.
pub fn materialize(node: &TypeNode) -> SchemaNode {
    let mut schema = SchemaNode {
        kind: node.kind(),
        ..SchemaNode::default()
    };
    match node {
        TypeNode::Object(props) => {
            schema.properties = Some(
                props
                    .iter()
                    .map(|(name, child)| (name.clone(), materialize(child)))
                    .collect(),
            );
        }
        TypeNode::Array(item) => schema.items = Some(Box::new(materialize(item))),
        _ => {}
    }
    schema
}
