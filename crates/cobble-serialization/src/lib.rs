//! Cobble Structured Document Tree
//!
//! This crate provides the in-memory attribute/child tree that Cobble
//! metadata and project data serialize into, together with its JSON
//! persistence boundary.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod element;

pub use element::{AttributeValue, Element, SerializationError};
