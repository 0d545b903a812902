//! Comparison operators. Equality is structural over the matched
//! operand types; ordering is defined for numbers and strings.

use std::cmp::Ordering;

use crate::error::EvaluationError;
use crate::expression::{EvaluationContext, Lambda};
use crate::types::{Op, OperatorDefinition, Param, Signature, Type};
use crate::value::{type_of, Value};

fn eq_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let a = lambda.args[0].evaluate(ctx)?;
    let b = lambda.args[1].evaluate(ctx)?;
    Ok(Value::Bool(a == b))
}

fn ne_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let a = lambda.args[0].evaluate(ctx)?;
    let b = lambda.args[1].evaluate(ctx)?;
    Ok(Value::Bool(a != b))
}

fn order(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Ordering, EvaluationError> {
    let a = lambda.args[0].evaluate(ctx)?;
    let b = lambda.args[1].evaluate(ctx)?;
    match (&a, &b) {
        (Value::Number(x), Value::Number(y)) => Ok(x.partial_cmp(y).unwrap_or(Ordering::Equal)),
        (Value::String(x), Value::String(y)) => Ok(x.cmp(y)),
        _ => Err(EvaluationError::new(format!(
            "Expected two Number or two String operands, but found {} and {} instead.",
            type_of(&a),
            type_of(&b)
        ))),
    }
}

fn gt_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::Bool(order(lambda, ctx)? == Ordering::Greater))
}

fn ge_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::Bool(order(lambda, ctx)? != Ordering::Less))
}

fn lt_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::Bool(order(lambda, ctx)? == Ordering::Less))
}

fn le_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::Bool(order(lambda, ctx)? != Ordering::Greater))
}

fn pair(ty: Type) -> Signature {
    vec![Param::Single(ty.clone()), Param::Single(ty)]
}

fn equality_signatures() -> Vec<Signature> {
    vec![
        pair(Type::Number),
        pair(Type::String),
        pair(Type::Boolean),
    ]
}

fn ordering_signatures() -> Vec<Signature> {
    vec![pair(Type::Number), pair(Type::String)]
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            op: Op::Eq,
            name: "==",
            result: Type::Boolean,
            signatures: equality_signatures(),
            eval_fn: eq_eval,
        },
        OperatorDefinition {
            op: Op::Ne,
            name: "!=",
            result: Type::Boolean,
            signatures: equality_signatures(),
            eval_fn: ne_eval,
        },
        OperatorDefinition {
            op: Op::Gt,
            name: ">",
            result: Type::Boolean,
            signatures: ordering_signatures(),
            eval_fn: gt_eval,
        },
        OperatorDefinition {
            op: Op::Ge,
            name: ">=",
            result: Type::Boolean,
            signatures: ordering_signatures(),
            eval_fn: ge_eval,
        },
        OperatorDefinition {
            op: Op::Lt,
            name: "<",
            result: Type::Boolean,
            signatures: ordering_signatures(),
            eval_fn: lt_eval,
        },
        OperatorDefinition {
            op: Op::Le,
            name: "<=",
            result: Type::Boolean,
            signatures: ordering_signatures(),
            eval_fn: le_eval,
        },
    ]
}
