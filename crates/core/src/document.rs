//! Typed access to the parsed export document
//!
//! The export is loaded into a loosely-typed YAML tree. Every lookup in this
//! module goes through an accessor that returns a [`DocumentError`] naming the
//! offending location instead of panicking on a shape mismatch.

use serde_yaml::{Mapping, Value};

/// A node of the parsed export document.
pub type Node = Value;

/// Error type for document access
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("Missing field: {path}")]
    MissingField { path: String },

    #[error("Unexpected type at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Parse the raw export text into a document tree
pub fn parse_document(text: &str) -> Result<Node, serde_yaml::Error> {
    serde_yaml::from_str(text)
}

/// Human readable name of a node variant, used in error messages
pub fn kind_of(node: &Node) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Location of `key` below the node at `path`
///
/// The document root is the empty path, so `child_path("", "collection")` is
/// `collection` and `child_path("collection[0]", "meta")` is `collection[0].meta`.
pub fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Location of the `index`-th element of the sequence at `path`
pub fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "document root".to_string()
    } else {
        path.to_string()
    }
}

fn mismatch(path: &str, expected: &'static str, found: &Node) -> DocumentError {
    DocumentError::TypeMismatch {
        path: display_path(path),
        expected,
        found: kind_of(found),
    }
}

/// Require the node at `path` to be a mapping
pub fn expect_mapping<'a>(node: &'a Node, path: &str) -> Result<&'a Mapping, DocumentError> {
    node.as_mapping().ok_or_else(|| mismatch(path, "mapping", node))
}

/// Look up `key`, treating an explicit `null` the same as an absent key
pub fn opt_field<'a>(
    node: &'a Node,
    key: &str,
    path: &str,
) -> Result<Option<&'a Node>, DocumentError> {
    let mapping = expect_mapping(node, path)?;
    Ok(mapping.get(key).filter(|value| !value.is_null()))
}

pub fn field<'a>(node: &'a Node, key: &str, path: &str) -> Result<&'a Node, DocumentError> {
    opt_field(node, key, path)?.ok_or_else(|| DocumentError::MissingField {
        path: child_path(path, key),
    })
}

pub fn opt_str_field<'a>(
    node: &'a Node,
    key: &str,
    path: &str,
) -> Result<Option<&'a str>, DocumentError> {
    match opt_field(node, key, path)? {
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| mismatch(&child_path(path, key), "string", value)),
        None => Ok(None),
    }
}

pub fn str_field<'a>(node: &'a Node, key: &str, path: &str) -> Result<&'a str, DocumentError> {
    opt_str_field(node, key, path)?.ok_or_else(|| DocumentError::MissingField {
        path: child_path(path, key),
    })
}

pub fn opt_seq_field<'a>(
    node: &'a Node,
    key: &str,
    path: &str,
) -> Result<Option<&'a [Node]>, DocumentError> {
    match opt_field(node, key, path)? {
        Some(value) => value
            .as_sequence()
            .map(|seq| Some(seq.as_slice()))
            .ok_or_else(|| mismatch(&child_path(path, key), "sequence", value)),
        None => Ok(None),
    }
}

pub fn seq_field<'a>(node: &'a Node, key: &str, path: &str) -> Result<&'a [Node], DocumentError> {
    opt_seq_field(node, key, path)?.ok_or_else(|| DocumentError::MissingField {
        path: child_path(path, key),
    })
}

pub fn opt_map_field<'a>(
    node: &'a Node,
    key: &str,
    path: &str,
) -> Result<Option<&'a Mapping>, DocumentError> {
    match opt_field(node, key, path)? {
        Some(value) => expect_mapping(value, &child_path(path, key)).map(Some),
        None => Ok(None),
    }
}

pub fn map_field<'a>(node: &'a Node, key: &str, path: &str) -> Result<&'a Mapping, DocumentError> {
    opt_map_field(node, key, path)?.ok_or_else(|| DocumentError::MissingField {
        path: child_path(path, key),
    })
}

/// Render a scalar node as text
///
/// Strings are returned as-is, numbers and booleans use their YAML spelling and
/// `null` becomes an empty string. Sequences and mappings are rejected.
pub fn scalar_to_string(node: &Node, path: &str) -> Result<String, DocumentError> {
    match node {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(path, "scalar", other)),
    }
}
