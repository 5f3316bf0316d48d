//! JSON Schema description -> SchemaNode translation

use super::error::{FieldPath, MalformedSchema, ValueKind};
use super::node::{ObjectSchema, SchemaNode};
use crate::config::DEFAULT_MAX_DEPTH;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Translator from remote schema descriptions to [`SchemaNode`] trees.
///
/// Holds only the recursion bound; every call works on its input alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaTranslator {
    max_depth: usize,
}

impl SchemaTranslator {
    /// Translator with the default depth bound
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Translator with a custom depth bound
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Configured depth bound
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Translate a tool argument schema.
    ///
    /// Anything that is not an object schema with `properties` becomes an
    /// object with no declared fields.
    pub fn translate(&self, description: &Value) -> Result<SchemaNode, MalformedSchema> {
        self.translate_object(description, &FieldPath::root(), 0)
    }

    /// Translate a standalone schema description of any kind.
    ///
    /// Used for array items; object descriptions follow [`Self::translate`].
    pub fn translate_node(&self, description: &Value) -> Result<SchemaNode, MalformedSchema> {
        match description {
            Value::Object(schema) => self.translate_entry(schema, &FieldPath::root(), 0),
            Value::Null => Ok(SchemaNode::empty_object()),
            other => Err(MalformedSchema::new(
                FieldPath::root(),
                format!("schema must be an object, found {}", json_type(other)),
            )),
        }
    }

    fn translate_object(
        &self,
        description: &Value,
        path: &FieldPath,
        depth: usize,
    ) -> Result<SchemaNode, MalformedSchema> {
        self.check_depth(path, depth)?;

        match description.as_object() {
            Some(schema) => self.translate_object_map(schema, path, depth),
            None => Ok(SchemaNode::empty_object()),
        }
    }

    fn translate_object_map(
        &self,
        schema: &Map<String, Value>,
        path: &FieldPath,
        depth: usize,
    ) -> Result<SchemaNode, MalformedSchema> {
        if schema.get("type").and_then(Value::as_str) != Some("object") {
            return Ok(SchemaNode::empty_object());
        }
        let properties = match schema.get("properties") {
            None | Some(Value::Null) => return Ok(SchemaNode::empty_object()),
            Some(Value::Object(properties)) => properties,
            Some(other) => {
                return Err(MalformedSchema::new(
                    path.clone(),
                    format!("`properties` must be an object, found {}", json_type(other)),
                ));
            }
        };

        let mut translated = BTreeMap::new();
        for (name, entry) in properties {
            let entry_path = path.property(name);
            let Some(entry) = entry.as_object() else {
                return Err(MalformedSchema::new(
                    entry_path,
                    format!("property schema must be an object, found {}", json_type(entry)),
                ));
            };
            let node = self.translate_entry(entry, &entry_path, depth + 1)?;
            translated.insert(name.clone(), node);
        }

        Ok(SchemaNode::Object(ObjectSchema::new(
            translated,
            required_names(schema, path),
        )))
    }

    fn translate_entry(
        &self,
        entry: &Map<String, Value>,
        path: &FieldPath,
        depth: usize,
    ) -> Result<SchemaNode, MalformedSchema> {
        self.check_depth(path, depth)?;

        let node = match entry.get("type").and_then(Value::as_str) {
            Some("string") => SchemaNode::String,
            Some("number") => SchemaNode::Number,
            Some("integer") => SchemaNode::Integer,
            Some("boolean") => SchemaNode::Boolean,
            Some("array") => {
                let items_path = path.items();
                let items = match entry.get("items") {
                    None | Some(Value::Null) => {
                        self.check_depth(&items_path, depth + 1)?;
                        SchemaNode::empty_object()
                    }
                    Some(Value::Object(items)) => {
                        self.translate_entry(items, &items_path, depth + 1)?
                    }
                    Some(other) => {
                        return Err(MalformedSchema::new(
                            items_path,
                            format!("`items` must be an object, found {}", json_type(other)),
                        ));
                    }
                };
                SchemaNode::array(items)
            }
            Some("object") => {
                // Nested objects get the same permissive contract as the root.
                return self.translate_object_map(entry, path, depth);
            }
            _ => SchemaNode::Unknown,
        };
        Ok(node)
    }

    fn check_depth(&self, path: &FieldPath, depth: usize) -> Result<(), MalformedSchema> {
        if depth > self.max_depth {
            return Err(MalformedSchema::new(
                path.clone(),
                format!("nesting exceeds maximum depth of {}", self.max_depth),
            ));
        }
        Ok(())
    }
}

impl Default for SchemaTranslator {
    fn default() -> Self {
        Self::new()
    }
}

fn required_names(schema: &Map<String, Value>, path: &FieldPath) -> BTreeSet<String> {
    match schema.get("required") {
        None | Some(Value::Null) => BTreeSet::new(),
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(|name| name.as_str().map(str::to_string))
            .collect(),
        Some(other) => {
            warn!(
                "Ignoring non-array `required` ({}) at {}",
                json_type(other),
                path
            );
            BTreeSet::new()
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    ValueKind::of(value).as_str()
}

/// Translate a tool argument schema with the default depth bound
pub fn translate(description: &Value) -> Result<SchemaNode, MalformedSchema> {
    SchemaTranslator::new().translate(description)
}

/// Translate a tool argument schema with a custom depth bound
pub fn translate_with_depth(
    description: &Value,
    max_depth: usize,
) -> Result<SchemaNode, MalformedSchema> {
    SchemaTranslator::with_max_depth(max_depth).translate(description)
}

/// Translate a standalone schema description of any kind
pub fn translate_node(description: &Value) -> Result<SchemaNode, MalformedSchema> {
    SchemaTranslator::new().translate_node(description)
}
