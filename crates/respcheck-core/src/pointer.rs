//! # Document Pointers
//!
//! `JsonPointer` is a slash-delimited path into a JSON document: `""` at the
//! root, `parent + "/" + key` below an object, `parent + "/" + index` below
//! an array. Keys are escaped per RFC 6901 (`~` as `~0`, `/` as `~1`) so a
//! pointer always resolves with [`serde_json::Value::pointer`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// A path to a location within a JSON document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPointer(String);

impl JsonPointer {
    /// The pointer to the whole document.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Pointer to the property `key` of the object at `self`.
    pub fn key(&self, key: &str) -> Self {
        let mut path = String::with_capacity(self.0.len() + key.len() + 1);
        path.push_str(&self.0);
        path.push('/');
        for ch in key.chars() {
            match ch {
                '~' => path.push_str("~0"),
                '/' => path.push_str("~1"),
                other => path.push(other),
            }
        }
        Self(path)
    }

    /// Pointer to element `index` of the array at `self`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}/{index}", self.0))
    }

    /// Whether this pointer addresses the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The pointer as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
