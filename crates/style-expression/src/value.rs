//! The runtime value model: the closed set of data values the
//! language can produce or consume, plus classification and
//! conversion from the external (JSON) feature-value model.

use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::color::Color;
use crate::error::EvaluationError;
use crate::types::Type;

/// A runtime datum. A `Value` is a strict tree: arrays and objects
/// own their elements and are never cyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Color(Color),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Total, side-effect-free conversion from the external JSON
    /// value model. Numbers convert through `f64`.
    pub fn from_json(json: &Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
            Json::String(s) => Value::String(s.clone()),
            Json::Array(items) => Value::Array(items.iter().map(Value::from_json).collect()),
            Json::Object(members) => Value::Object(
                members
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    pub fn as_number(&self) -> Result<f64, EvaluationError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(expected(&Type::Number, other)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, EvaluationError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(expected(&Type::Boolean, other)),
        }
    }

    pub fn as_str(&self) -> Result<&str, EvaluationError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(expected(&Type::String, other)),
        }
    }

    pub fn as_color(&self) -> Result<Color, EvaluationError> {
        match self {
            Value::Color(c) => Ok(*c),
            other => Err(expected(&Type::Color, other)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], EvaluationError> {
        match self {
            Value::Array(items) => Ok(items.as_slice()),
            other => Err(expected(&Type::array(Type::Value), other)),
        }
    }

    pub fn as_object(&self) -> Result<&BTreeMap<String, Value>, EvaluationError> {
        match self {
            Value::Object(members) => Ok(members),
            other => Err(expected(&Type::Object, other)),
        }
    }
}

fn expected(want: &Type, found: &Value) -> EvaluationError {
    EvaluationError::new(format!(
        "Expected {} but found {} instead.",
        want,
        type_of(found)
    ))
}

/// Returns the static type of a runtime value. Array values inspect
/// every element: a shared item type is kept, otherwise (and for the
/// empty array) the item type degrades to the top type.
pub fn type_of(value: &Value) -> Type {
    match value {
        Value::Null => Type::Null,
        Value::Bool(_) => Type::Boolean,
        Value::Number(_) => Type::Number,
        Value::String(_) => Type::String,
        Value::Color(_) => Type::Color,
        Value::Object(_) => Type::Object,
        Value::Array(items) => {
            let mut item_type: Option<Type> = None;
            for item in items {
                let t = type_of(item);
                match &item_type {
                    None => item_type = Some(t),
                    Some(seen) if *seen == t => {}
                    Some(_) => {
                        item_type = Some(Type::Value);
                        break;
                    }
                }
            }
            Type::Array(
                Box::new(item_type.unwrap_or(Type::Value)),
                Some(items.len()),
            )
        }
    }
}

/// Renders a value for error messages and `to_string` coercion.
/// Strings are quoted; scalars render like JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Color(c) => format!(
            "rgba({}, {}, {}, {})",
            (c.r * 255.0).round(),
            (c.g * 255.0).round(),
            (c.b * 255.0).round(),
            c.a
        ),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(stringify).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Object(members) => {
            let rendered: Vec<String> = members
                .iter()
                .map(|(k, v)| format!("\"{}\": {}", k, stringify(v)))
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
    }
}
