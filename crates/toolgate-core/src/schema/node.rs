//! Strongly-kinded schema tree

use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Kind discriminator of a [`SchemaNode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// Textual value
    String,
    /// Any numeric value
    Number,
    /// Numeric value with zero fractional part
    Integer,
    /// `true` or `false`
    Boolean,
    /// Ordered sequence
    Array,
    /// Field/value mapping
    Object,
    /// Accepts any value
    Unknown,
}

impl SchemaKind {
    /// Name used in JSON Schema `type` fields and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translated description of an accepted argument shape.
///
/// Children live inside the variants that may carry them, so an array
/// always has an item schema and only objects have properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// Textual value
    String,
    /// Any numeric value
    Number,
    /// Whole number
    Integer,
    /// Boolean value
    Boolean,
    /// Sequence whose elements all satisfy `items`
    Array {
        /// Element schema
        items: Box<SchemaNode>,
    },
    /// Open object
    Object(ObjectSchema),
    /// Anything goes
    Unknown,
}

impl SchemaNode {
    /// Object schema with no declared fields
    pub fn empty_object() -> Self {
        Self::Object(ObjectSchema::default())
    }

    /// Array schema with the given element schema
    pub fn array(items: SchemaNode) -> Self {
        Self::Array {
            items: Box::new(items),
        }
    }

    /// Kind discriminator
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::String => SchemaKind::String,
            Self::Number => SchemaKind::Number,
            Self::Integer => SchemaKind::Integer,
            Self::Boolean => SchemaKind::Boolean,
            Self::Array { .. } => SchemaKind::Array,
            Self::Object(_) => SchemaKind::Object,
            Self::Unknown => SchemaKind::Unknown,
        }
    }

    /// Object payload, if this is an object node
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Render back to a JSON Schema value for advertisement to a model
    pub fn to_json_schema(&self) -> Value {
        match self {
            Self::String | Self::Number | Self::Integer | Self::Boolean => {
                json!({ "type": self.kind().as_str() })
            }
            Self::Array { items } => json!({
                "type": "array",
                "items": items.to_json_schema(),
            }),
            Self::Object(object) => object.to_json_schema(),
            Self::Unknown => Value::Object(Map::new()),
        }
    }
}

/// Declared fields of an object node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    properties: BTreeMap<String, SchemaNode>,
    required: BTreeSet<String>,
}

impl ObjectSchema {
    /// Build from declared properties and required names.
    ///
    /// A required name need not be declared; it must still be present.
    pub fn new(properties: BTreeMap<String, SchemaNode>, required: BTreeSet<String>) -> Self {
        Self {
            properties,
            required,
        }
    }

    /// Declared properties, ordered by name
    pub fn properties(&self) -> &BTreeMap<String, SchemaNode> {
        &self.properties
    }

    /// Names that must be present
    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    /// Whether `name` must be present
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// Schema of a declared property
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.get(name)
    }

    /// Required names with no declared property
    pub fn undeclared_required(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .filter(|name| !self.properties.contains_key(*name))
            .map(String::as_str)
    }

    /// True when no fields are declared or required
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.required.is_empty()
    }

    fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, node)| (name.clone(), node.to_json_schema()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !self.required.is_empty() {
            schema.insert("required".to_string(), json!(self.required));
        }
        Value::Object(schema)
    }
}
