//! Attribute/child tree for structured serialization
//!
//! An [`Element`] is a named bag of typed attributes plus an ordered list
//! of child elements. Writers set every attribute they own, readers get
//! a per-type default for anything absent or mistyped, so trees written
//! by older or newer versions of the tooling stay readable.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON persistence errors
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The JSON text could not be parsed or did not match the tree shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single typed attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean attribute
    Bool(bool),
    /// Integer attribute
    Int(i64),
    /// String attribute
    String(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Int(value as i64)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

/// A node in the structured document tree.
///
/// Children are kept in insertion order; positional data (e.g. parameter
/// lists) relies on it. Attribute lookup order is not significant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Named attributes on this node
    #[serde(default)]
    attributes: FxHashMap<String, AttributeValue>,
    /// Named children, in insertion order
    #[serde(default)]
    children: Vec<(String, Element)>,
}

impl Element {
    /// Create an empty element
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value under the same name
    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    /// Check whether an attribute is present
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Get a string attribute, or `""` when absent or not a string
    pub fn get_string_attribute(&self, name: &str) -> String {
        match self.attributes.get(name) {
            Some(AttributeValue::String(s)) => s.clone(),
            _ => String::new(),
        }
    }

    /// Get a boolean attribute, or `false` when absent or not a boolean
    pub fn get_bool_attribute(&self, name: &str) -> bool {
        match self.attributes.get(name) {
            Some(AttributeValue::Bool(b)) => *b,
            _ => false,
        }
    }

    /// Get an integer attribute, or `0` when absent or not an integer
    pub fn get_int_attribute(&self, name: &str) -> i64 {
        match self.attributes.get(name) {
            Some(AttributeValue::Int(i)) => *i,
            _ => 0,
        }
    }

    /// Append a new child with the given name and return it for filling in
    pub fn add_child(&mut self, name: &str) -> &mut Element {
        self.children.push((name.to_string(), Element::new()));
        let last = self.children.len() - 1;
        &mut self.children[last].1
    }

    /// Iterate over children carrying the given name, in insertion order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, e)| e)
    }

    /// Get the first child carrying the given name
    pub fn child<'a>(&'a self, name: &'a str) -> Option<&'a Element> {
        self.children_named(name).next()
    }

    /// Number of children, regardless of name
    pub fn children_count(&self) -> usize {
        self.children.len()
    }

    /// Encode the tree as a JSON string
    pub fn to_json_string(&self) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a tree from a JSON string
    pub fn from_json_string(json: &str) -> Result<Self, SerializationError> {
        Ok(serde_json::from_str(json)?)
    }
}
