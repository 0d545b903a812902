//! Conversion operators. String-to-number and string-to-color parses
//! are best-effort and fail with an evaluation error, never a panic.

use crate::color::Color;
use crate::error::EvaluationError;
use crate::expression::{EvaluationContext, Lambda};
use crate::types::{Op, OperatorDefinition, Param, Signature, Type};
use crate::value::{stringify, type_of, Value};

fn to_string_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    match value {
        Value::String(s) => Ok(Value::String(s)),
        Value::Number(_) | Value::Bool(_) | Value::Null => Ok(Value::String(stringify(&value))),
        other => Err(EvaluationError::new(format!(
            "Expected a primitive value in [\"to_string\", ...], but found {} instead.",
            type_of(&other)
        ))),
    }
}

fn to_number_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    match &value {
        Value::Number(n) => Ok(Value::Number(*n)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| conversion_error(&value)),
        _ => Err(conversion_error(&value)),
    }
}

fn conversion_error(value: &Value) -> EvaluationError {
    EvaluationError::new(format!("Could not convert {} to number.", stringify(value)))
}

fn to_boolean_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    Ok(Value::Bool(match value {
        Value::Number(n) => n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Bool(b) => b,
        Value::Null => false,
        Value::Color(_) | Value::Array(_) | Value::Object(_) => true,
    }))
}

fn to_rgba_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let color = lambda.args[0].evaluate(ctx)?.as_color()?;
    Ok(Value::Array(vec![
        Value::Number(color.r),
        Value::Number(color.g),
        Value::Number(color.b),
        Value::Number(color.a),
    ]))
}

fn parse_color_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    let input = value.as_str()?;
    Color::parse(input).map(Value::Color).ok_or_else(|| {
        EvaluationError::new(format!("Could not parse color from value '{}'", input))
    })
}

fn single_value() -> Vec<Signature> {
    vec![vec![Param::Single(Type::Value)]]
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            op: Op::ToString,
            name: "to_string",
            result: Type::String,
            signatures: single_value(),
            eval_fn: to_string_eval,
        },
        OperatorDefinition {
            op: Op::ToNumber,
            name: "to_number",
            result: Type::Number,
            signatures: single_value(),
            eval_fn: to_number_eval,
        },
        OperatorDefinition {
            op: Op::ToBoolean,
            name: "to_boolean",
            result: Type::Boolean,
            signatures: single_value(),
            eval_fn: to_boolean_eval,
        },
        OperatorDefinition {
            op: Op::ToRgba,
            name: "to_rgba",
            result: Type::fixed_array(Type::Number, 4),
            signatures: vec![vec![Param::Single(Type::Color)]],
            eval_fn: to_rgba_eval,
        },
        OperatorDefinition {
            op: Op::ParseColor,
            name: "parse_color",
            result: Type::Color,
            signatures: vec![vec![Param::Single(Type::String)]],
            eval_fn: parse_color_eval,
        },
    ]
}
