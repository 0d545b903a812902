//! Container operators: array indexing, length, and coalescing.

use crate::error::EvaluationError;
use crate::expression::{EvaluationContext, Lambda};
use crate::types::{Op, OperatorDefinition, Param, Signature, Type};
use crate::value::{type_of, Value};

fn at_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let index = lambda.args[0].evaluate(ctx)?.as_number()?;
    let array_value = lambda.args[1].evaluate(ctx)?;
    let items = array_value.as_array()?;
    if index < 0.0 || index.fract() != 0.0 {
        return Err(EvaluationError::new(format!(
            "Array index must be a non-negative integer, but found {} instead.",
            index
        )));
    }
    let i = index as usize;
    if i >= items.len() {
        return Err(EvaluationError::new(format!(
            "Array index out of bounds: {} >= {}",
            i,
            items.len()
        )));
    }
    Ok(items[i].clone())
}

fn length_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    match &value {
        Value::String(s) => Ok(Value::Number(s.chars().count() as f64)),
        Value::Array(items) => Ok(Value::Number(items.len() as f64)),
        other => Err(EvaluationError::new(format!(
            "Expected String or Array but found {} instead.",
            type_of(other)
        ))),
    }
}

fn coalesce_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    // Null results are skipped; errors propagate rather than being
    // silently swallowed.
    for arg in &lambda.args {
        match arg.evaluate(ctx)? {
            Value::Null => continue,
            value => return Ok(value),
        }
    }
    Ok(Value::Null)
}

fn length_signatures() -> Vec<Signature> {
    vec![
        vec![Param::Single(Type::String)],
        vec![Param::Single(Type::array(Type::Value))],
    ]
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            op: Op::At,
            name: "at",
            result: Type::Value,
            signatures: vec![vec![
                Param::Single(Type::Number),
                Param::Single(Type::array(Type::Value)),
            ]],
            eval_fn: at_eval,
        },
        OperatorDefinition {
            op: Op::Length,
            name: "length",
            result: Type::Number,
            signatures: length_signatures(),
            eval_fn: length_eval,
        },
        OperatorDefinition {
            op: Op::Coalesce,
            name: "coalesce",
            result: Type::Value,
            signatures: vec![vec![Param::NArgs {
                ty: Type::Value,
                max: None,
            }]],
            eval_fn: coalesce_eval,
        },
    ]
}
