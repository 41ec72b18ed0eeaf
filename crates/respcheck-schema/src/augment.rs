//! # Required-Field Augmentation
//!
//! Marks every discovered object property as mandatory, at every depth,
//! including objects nested under array items. An object with no properties
//! gets an empty `required` list. Nodes without `properties` are left as
//! they are.
//!
//! There is no way to mark a field optional: induction sees one example
//! instance, so every field it saw is required of the actual document.

use crate::materialize::SchemaNode;

/// Schema-version marker placed on the root of every augmented schema.
pub const SCHEMA_VERSION: &str = "http://json-schema.org/draft-04/schema#";

/// Augment a materialized schema: require every property and stamp the
/// root with [`SCHEMA_VERSION`].
pub fn augment(mut root: SchemaNode) -> SchemaNode {
    require_all_properties(&mut root);
    root.schema_version = Some(SCHEMA_VERSION.to_string());
    root
}

/// Set `required` on every object node below and including `node` to
/// exactly its declared property names.
pub fn require_all_properties(node: &mut SchemaNode) {
    if let Some(items) = node.items.as_deref_mut() {
        require_all_properties(items);
    }

    let Some(properties) = node.properties.as_mut() else {
        return;
    };

    for child in properties.values_mut() {
        require_all_properties(child);
    }
    node.required = Some(properties.keys().cloned().collect());
}
