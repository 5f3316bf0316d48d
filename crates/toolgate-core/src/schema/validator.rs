//! Candidate value validation against a SchemaNode

use super::error::{FieldPath, ValidationFailure, ValueKind};
use super::node::{ObjectSchema, SchemaKind, SchemaNode};
use serde_json::{Map, Number, Value};

/// A value that passed [`validate`].
///
/// For object schemas this is the whole candidate mapping, undeclared
/// fields included.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedArguments(Value);

impl ValidatedArguments {
    /// Borrow the accepted value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Accepted mapping, when the schema was an object
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// Look up a top-level field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Unwrap into the accepted value
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<ValidatedArguments> for Value {
    fn from(arguments: ValidatedArguments) -> Self {
        arguments.0
    }
}

/// Check `candidate` against `schema`, stopping at the first violation
pub fn validate(
    schema: &SchemaNode,
    candidate: Value,
) -> Result<ValidatedArguments, ValidationFailure> {
    check(schema, &candidate, &FieldPath::root())?;
    Ok(ValidatedArguments(candidate))
}

fn check(schema: &SchemaNode, value: &Value, path: &FieldPath) -> Result<(), ValidationFailure> {
    let accepted = match (schema, value) {
        (SchemaNode::Unknown, _) => true,
        (SchemaNode::String, Value::String(_)) => true,
        (SchemaNode::Number, Value::Number(_)) => true,
        (SchemaNode::Integer, Value::Number(n)) => is_whole(n),
        (SchemaNode::Boolean, Value::Bool(_)) => true,
        (SchemaNode::Array { items }, Value::Array(elements)) => {
            for (index, element) in elements.iter().enumerate() {
                check(items, element, &path.index(index))?;
            }
            true
        }
        (SchemaNode::Object(object), Value::Object(fields)) => {
            check_object(object, fields, path)?;
            true
        }
        _ => false,
    };

    if accepted {
        Ok(())
    } else {
        Err(ValidationFailure {
            path: path.clone(),
            expected: schema.kind(),
            actual: ValueKind::of(value),
        })
    }
}

fn check_object(
    object: &ObjectSchema,
    fields: &Map<String, Value>,
    path: &FieldPath,
) -> Result<(), ValidationFailure> {
    // Undeclared fields are left alone.
    for (name, property) in object.properties() {
        let field_path = path.property(name);
        match fields.get(name) {
            Some(value) => check(property, value, &field_path)?,
            None if object.is_required(name) => {
                return Err(ValidationFailure {
                    path: field_path,
                    expected: property.kind(),
                    actual: ValueKind::Missing,
                });
            }
            None => {}
        }
    }

    // Required but undeclared: presence is all that can be checked.
    if let Some(name) = object
        .undeclared_required()
        .find(|name| !fields.contains_key(*name))
    {
        return Err(ValidationFailure {
            path: path.property(name),
            expected: SchemaKind::Unknown,
            actual: ValueKind::Missing,
        });
    }
    Ok(())
}

fn is_whole(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}
