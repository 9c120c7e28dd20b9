//! The Quill Delta JSON wire form.
//!
//! An operation is `{"insert": <string | integer | object>}`,
//! `{"retain": n}` or `{"delete": n}`, each with an optional
//! `"attributes"` object. A delta is either a bare array of such objects
//! or an object `{"ops": [...]}`; both are accepted on input and the bare
//! array is emitted. Absent attributes are never encoded as `{}`; null
//! attribute values survive on retains (format removal) and are stripped
//! from inserts at construction.

use serde_json::{json, Map, Value};

use crate::delta::Delta;
use crate::error::DeltaError;
use crate::op::{InsertValue, Op};

/// Serialize an operation to its wire object.
pub fn op_to_json(op: &Op) -> Value {
    let mut object = Map::new();
    match op {
        Op::Insert { value, attributes } => {
            let value = match value {
                InsertValue::Text(text) => Value::String(text.clone()),
                InsertValue::Embed(embed) => json!(embed),
                InsertValue::EmbedMap(embed) => Value::Object(embed.clone()),
            };
            object.insert("insert".into(), value);
            if let Some(attrs) = attributes {
                object.insert("attributes".into(), Value::Object(attrs.clone()));
            }
        }
        Op::Retain { count, attributes } => {
            object.insert("retain".into(), json!(count));
            if let Some(attrs) = attributes {
                object.insert("attributes".into(), Value::Object(attrs.clone()));
            }
        }
        Op::Delete { count } => {
            object.insert("delete".into(), json!(count));
        }
    }
    Value::Object(object)
}

/// Decode a wire object into an operation.
pub fn op_from_json(value: &Value) -> Result<Op, DeltaError> {
    let object = value
        .as_object()
        .ok_or_else(|| DeltaError::InvalidOp("operation must be an object".into()))?;

    let attributes = match object.get("attributes") {
        None | Some(Value::Null) => None,
        Some(Value::Object(attrs)) => Some(attrs.clone()),
        Some(_) => {
            return Err(DeltaError::InvalidOp("attributes must be an object".into()));
        }
    };

    if let Some(value) = object.get("insert") {
        let value = match value {
            Value::String(text) => InsertValue::Text(text.clone()),
            Value::Number(embed) => InsertValue::Embed(embed.as_u64().ok_or_else(|| {
                DeltaError::InvalidOp("insert embed must be a non-negative integer".into())
            })?),
            Value::Object(embed) => InsertValue::EmbedMap(embed.clone()),
            _ => {
                return Err(DeltaError::InvalidOp(
                    "insert must be a string, an integer or an object".into(),
                ));
            }
        };
        return Ok(Op::insert(value, attributes));
    }
    if let Some(count) = object.get("retain") {
        let count = count
            .as_u64()
            .ok_or_else(|| DeltaError::InvalidOp("retain must be a positive integer".into()))?;
        return Ok(Op::retain(count as usize, attributes));
    }
    if let Some(count) = object.get("delete") {
        let count = count
            .as_u64()
            .ok_or_else(|| DeltaError::InvalidOp("delete must be a positive integer".into()))?;
        return Ok(Op::delete(count as usize));
    }
    Err(DeltaError::InvalidOp(
        "expected 'insert', 'retain' or 'delete'".into(),
    ))
}

/// Serialize a delta as the bare array wire form.
pub fn delta_to_json(delta: &Delta) -> Value {
    Value::Array(delta.ops().iter().map(op_to_json).collect())
}

/// Decode a delta from either wire form: a bare op array or an object
/// carrying an `"ops"` array. The ops are re-normalized on the way in.
pub fn delta_from_json(value: &Value) -> Result<Delta, DeltaError> {
    let ops = match value {
        Value::Array(ops) => ops,
        Value::Object(object) => object
            .get("ops")
            .and_then(Value::as_array)
            .ok_or_else(|| DeltaError::InvalidOp("expected an 'ops' array".into()))?,
        _ => {
            return Err(DeltaError::InvalidOp(
                "delta must be an array or an object with 'ops'".into(),
            ));
        }
    };
    let mut delta = Delta::new();
    for op in ops {
        delta.push(op_from_json(op)?);
    }
    Ok(delta)
}

impl Delta {
    /// Serialize to the bare array wire form.
    pub fn to_json(&self) -> Value {
        delta_to_json(self)
    }

    /// Decode from either wire form.
    pub fn from_json(value: &Value) -> Result<Delta, DeltaError> {
        delta_from_json(value)
    }
}
