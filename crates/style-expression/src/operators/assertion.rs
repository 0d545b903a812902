//! `typeof` and runtime type assertions. An assertion narrows a
//! top-typed subexpression to a concrete type, failing at evaluation
//! time when the runtime tag disagrees.

use crate::error::EvaluationError;
use crate::expression::{EvaluationContext, Lambda};
use crate::types::{Op, OperatorDefinition, Param, Signature, Type};
use crate::value::{type_of, Value};

fn typeof_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    Ok(Value::String(type_of(&value).to_string()))
}

fn assertion_error(want: &Type, found: &Value) -> EvaluationError {
    EvaluationError::new(format!(
        "Expected {} but found {} instead.",
        want,
        type_of(found)
    ))
}

fn string_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    match value {
        Value::String(_) => Ok(value),
        other => Err(assertion_error(&Type::String, &other)),
    }
}

fn number_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    match value {
        Value::Number(_) => Ok(value),
        other => Err(assertion_error(&Type::Number, &other)),
    }
}

fn boolean_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    match value {
        Value::Bool(_) => Ok(value),
        other => Err(assertion_error(&Type::Boolean, &other)),
    }
}

fn object_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    match value {
        Value::Object(_) => Ok(value),
        other => Err(assertion_error(&Type::Object, &other)),
    }
}

fn array_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let value = lambda.args[0].evaluate(ctx)?;
    let (want_item, want_len) = match lambda.result_type() {
        Type::Array(item, len) => (item.as_ref(), *len),
        _ => unreachable!("array assertion registered with a non-array result type"),
    };
    let found = type_of(&value);
    if let Type::Array(found_item, found_len) = &found {
        let len_ok = want_len.is_none() || want_len == *found_len;
        let item_ok = match want_item {
            // The top item type admits only scalar style values.
            Type::Value => matches!(
                found_item.as_ref(),
                Type::String | Type::Number | Type::Boolean
            ),
            other => other.to_string() == found_item.to_string(),
        };
        if len_ok && item_ok {
            return Ok(value);
        }
    }
    Err(EvaluationError::new(format!(
        "Expected value to be of type {}, but found {} instead.",
        lambda.result_type(),
        found
    )))
}

fn single_value() -> Vec<Signature> {
    vec![vec![Param::Single(Type::Value)]]
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            op: Op::TypeOf,
            name: "typeof",
            result: Type::String,
            signatures: single_value(),
            eval_fn: typeof_eval,
        },
        OperatorDefinition {
            op: Op::AssertString,
            name: "string",
            result: Type::String,
            signatures: single_value(),
            eval_fn: string_eval,
        },
        OperatorDefinition {
            op: Op::AssertNumber,
            name: "number",
            result: Type::Number,
            signatures: single_value(),
            eval_fn: number_eval,
        },
        OperatorDefinition {
            op: Op::AssertBoolean,
            name: "boolean",
            result: Type::Boolean,
            signatures: single_value(),
            eval_fn: boolean_eval,
        },
        OperatorDefinition {
            op: Op::AssertObject,
            name: "object",
            result: Type::Object,
            signatures: single_value(),
            eval_fn: object_eval,
        },
        OperatorDefinition {
            op: Op::AssertArray,
            name: "array",
            result: Type::array(Type::Value),
            signatures: single_value(),
            eval_fn: array_eval,
        },
    ]
}
