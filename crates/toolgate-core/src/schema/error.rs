//! Schema translation and validation errors

use super::node::SchemaKind;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// One step into a schema or candidate value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named object field
    Property(String),
    /// Array element position
    Index(usize),
    /// Array element schema (translation only, no position yet)
    Items,
}

/// Location of a field inside a schema description or candidate value.
///
/// Renders as `properties.numDice`, `properties.rolls.items[1]`, or
/// `<root>` when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The root path
    pub fn root() -> Self {
        Self::default()
    }

    /// Path extended with a property name
    pub fn property(&self, name: &str) -> Self {
        self.with(PathSegment::Property(name.to_string()))
    }

    /// Path extended with an array index
    pub fn index(&self, index: usize) -> Self {
        self.with(PathSegment::Index(index))
    }

    /// Path extended with the array item schema
    pub fn items(&self) -> Self {
        self.with(PathSegment::Items)
    }

    /// Segments from the root
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Whether this is the root path
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Last property name on the path, if the path ends in one
    pub fn field_name(&self) -> Option<&str> {
        match self.0.last() {
            Some(PathSegment::Property(name)) => Some(name),
            _ => None,
        }
    }

    fn with(&self, segment: PathSegment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                PathSegment::Property(name) => write!(f, "properties.{}", name)?,
                PathSegment::Index(index) => write!(f, "items[{}]", index)?,
                PathSegment::Items => f.write_str("items")?,
            }
        }
        Ok(())
    }
}

/// Kind of a candidate value, as observed during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// JSON `null`
    Null,
    /// JSON boolean
    Boolean,
    /// JSON number
    Number,
    /// JSON string
    String,
    /// JSON array
    Array,
    /// JSON object
    Object,
    /// Required field not present
    Missing,
}

impl ValueKind {
    /// Kind of a JSON value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema description that cannot be translated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed schema at {path}: {reason}")]
pub struct MalformedSchema {
    /// Where in the description the problem was found
    pub path: FieldPath,
    /// What is wrong
    pub reason: String,
}

impl MalformedSchema {
    pub(crate) fn new(path: FieldPath, reason: impl Into<String>) -> Self {
        Self {
            path,
            reason: reason.into(),
        }
    }
}

/// First violation found while checking a candidate value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value at {path}: expected {expected}, got {actual}")]
pub struct ValidationFailure {
    /// Offending field or element
    pub path: FieldPath,
    /// Kind the schema declares
    pub expected: SchemaKind,
    /// Kind the candidate carried
    pub actual: ValueKind,
}

impl ValidationFailure {
    /// Message to hand back to whoever produced the arguments
    pub fn feedback(&self) -> String {
        match (self.actual, self.path.field_name()) {
            (ValueKind::Missing, Some(field)) if self.expected == SchemaKind::Unknown => format!(
                "Missing required argument '{}'. Call the tool again with it set.",
                field
            ),
            (ValueKind::Missing, Some(field)) => format!(
                "Missing required argument '{}' (expected {}). Call the tool again with it set.",
                field, self.expected
            ),
            (_, Some(field)) => format!(
                "Argument '{}' must be {} but was {}. Call the tool again with a corrected value.",
                field,
                article(self.expected),
                self.actual
            ),
            _ => format!(
                "Value at {} must be {} but was {}. Call the tool again with corrected arguments.",
                self.path,
                article(self.expected),
                self.actual
            ),
        }
    }
}

fn article(kind: SchemaKind) -> String {
    match kind {
        SchemaKind::Integer | SchemaKind::Array | SchemaKind::Object | SchemaKind::Unknown => {
            format!("an {}", kind)
        }
        _ => format!("a {}", kind),
    }
}
