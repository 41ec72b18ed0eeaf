//! # respcheck-schema: Example-Driven Response Validation
//!
//! Checks an HTTP response body against an expectation given only as a
//! representative example payload. No hand-authored schema is involved: the
//! schema is induced from the example, in memory, on every call.
//!
//! ## Pipeline
//!
//! ```text
//! example text ─► induce ─► materialize ─► augment ─┐
//!                                                    ├─► validate ─► report ─► diagnostics
//! actual text ───────────────────────────────────────┘
//! ```
//!
//! - [`induce`](mod@induce): derive a [`TypeNode`] tree from one example document.
//! - [`materialize`](mod@materialize): render the type tree as a [`SchemaNode`] tree.
//! - [`augment`](mod@augment): require every property at every depth.
//! - [`validate`](mod@validate): walk the actual document against the schema,
//!   collecting every mismatch.
//! - [`diagnostics`]: render a failing report as one message.
//!
//! [`literal`] holds the lenient literal-equality comparator, and
//! [`strategy`] selects between the two per test case.
//!
//! ## Known Limitations
//!
//! - Arrays are typed by their first element only. A heterogeneous example
//!   array is not union-typed.
//! - Every field seen in the example is required. A field that is
//!   legitimately optional in the API must be left out of the example.
//!
//! ## Crate Policy
//!
//! - Depends only on `respcheck-core` internally.
//! - Every call is self-contained and reentrant: no caches, no global
//!   state, no filesystem access.

pub mod augment;
pub mod diagnostics;
pub mod induce;
pub mod literal;
pub mod materialize;
pub mod strategy;
pub mod validate;

pub use augment::{augment, SCHEMA_VERSION};
pub use induce::{induce, induce_value, TypeNode};
pub use materialize::{materialize, SchemaNode};
pub use strategy::{derive_schema, ResponseValidation, SCHEMA_CASE_MARKER};
pub use validate::{validate, validate_value};
