//! Schema bridge
//!
//! Converts the JSON-Schema-like `inputSchema` a tool server advertises into
//! a [`SchemaNode`] tree, and checks model-produced arguments against it.
//!
//! Both halves are pure: no I/O, no shared state, safe to call from any
//! number of threads.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use toolgate_core::schema::{translate, validate};
//!
//! let schema = translate(&json!({
//!     "type": "object",
//!     "properties": { "numDice": { "type": "integer" } },
//!     "required": ["numDice"]
//! }))?;
//!
//! assert!(validate(&schema, json!({ "numDice": 3 })).is_ok());
//! assert!(validate(&schema, json!({})).is_err());
//! # Ok::<(), toolgate_core::schema::MalformedSchema>(())
//! ```

mod error;
mod node;
mod translator;
mod validator;

pub use error::{FieldPath, MalformedSchema, PathSegment, ValidationFailure, ValueKind};
pub use node::{ObjectSchema, SchemaKind, SchemaNode};
pub use translator::{SchemaTranslator, translate, translate_node, translate_with_depth};
pub use validator::{ValidatedArguments, validate};
