//! Operators that read the evaluation context: feature accessors and
//! the zoom level.

use serde_json::Value as Json;

use crate::error::EvaluationError;
use crate::expression::{EvaluationContext, Lambda};
use crate::feature::FeatureId;
use crate::types::{Op, OperatorDefinition, Param, Signature, Type};
use crate::value::Value;

fn get_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let key_value = lambda.args[0].evaluate(ctx)?;
    let key = key_value.as_str()?;
    if lambda.args.len() == 1 {
        // A property missing from the feature reads as Null; the
        // layer's default value applies downstream.
        return Ok(match ctx.feature.get_value(key) {
            Some(value) => Value::from_json(&value),
            None => Value::Null,
        });
    }
    let object_value = lambda.args[1].evaluate(ctx)?;
    let object = object_value.as_object()?;
    object.get(key).cloned().ok_or_else(|| {
        EvaluationError::new(format!("Property '{}' not found in object", key))
    })
}

fn has_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let key_value = lambda.args[0].evaluate(ctx)?;
    let key = key_value.as_str()?;
    if lambda.args.len() == 1 {
        return Ok(Value::Bool(ctx.feature.get_value(key).is_some()));
    }
    let object_value = lambda.args[1].evaluate(ctx)?;
    let object = object_value.as_object()?;
    Ok(Value::Bool(object.contains_key(key)))
}

fn id_eval(_: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    match ctx.feature.id() {
        Some(FeatureId::String(s)) => Ok(Value::String(s)),
        Some(FeatureId::Number(n)) => Ok(Value::Number(n)),
        None => Err(EvaluationError::new("Property 'id' not found in feature")),
    }
}

fn properties_eval(_: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::from_json(&Json::Object(ctx.feature.properties())))
}

fn geometry_type_eval(_: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::String(ctx.feature.geometry_type().name().to_string()))
}

fn zoom_eval(_: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::Number(ctx.zoom))
}

/// `[String]` plus an optional explicit object operand.
fn key_and_optional_object() -> Vec<Signature> {
    vec![vec![
        Param::Single(Type::String),
        Param::NArgs {
            ty: Type::Object,
            max: Some(1),
        },
    ]]
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            op: Op::Get,
            name: "get",
            result: Type::Value,
            signatures: key_and_optional_object(),
            eval_fn: get_eval,
        },
        OperatorDefinition {
            op: Op::Has,
            name: "has",
            result: Type::Boolean,
            signatures: key_and_optional_object(),
            eval_fn: has_eval,
        },
        OperatorDefinition {
            op: Op::Id,
            name: "id",
            result: Type::Value,
            signatures: vec![vec![]],
            eval_fn: id_eval,
        },
        OperatorDefinition {
            op: Op::Properties,
            name: "properties",
            result: Type::Object,
            signatures: vec![vec![]],
            eval_fn: properties_eval,
        },
        OperatorDefinition {
            op: Op::GeometryType,
            name: "geometry_type",
            result: Type::String,
            signatures: vec![vec![]],
            eval_fn: geometry_type_eval,
        },
        OperatorDefinition {
            op: Op::Zoom,
            name: "zoom",
            result: Type::Number,
            signatures: vec![vec![]],
            eval_fn: zoom_eval,
        },
    ]
}
