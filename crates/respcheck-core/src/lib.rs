//! # respcheck-core: Shared Types for Response Validation
//!
//! This crate is the leaf of the `respcheck` workspace. It defines the data
//! model shared by the schema-derived and literal-equality validators and by
//! the command-line front-end.
//!
//! ## Key Design Principles
//!
//! 1. **One kind taxonomy.** [`JsonKind`] is the single definition of the six
//!    JSON value kinds. Every `match` on it is exhaustive.
//!
//! 2. **Pointers are a newtype.** [`JsonPointer`] owns the slash-delimited
//!    path and its escaping rules; no component builds pointer strings by hand.
//!
//! 3. **Reports aggregate, errors terminate.** A [`ValidationReport`] collects
//!    every mismatch found in one call. Only the caller-facing boundary turns a
//!    non-empty report into a [`RespCheckError::ValidationFailed`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `respcheck-*` crates.
//! - No global or shared mutable state. Every value is built per call.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod exchange;
pub mod kind;
pub mod pointer;
pub mod report;

// Re-export primary types for ergonomic imports.
pub use error::{DocumentRole, RespCheckError};
pub use exchange::ResponseExchange;
pub use kind::JsonKind;
pub use pointer::JsonPointer;
pub use report::{Failure, FailureKind, ValidationReport};
