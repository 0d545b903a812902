//! Math constants and arithmetic operators.

use crate::error::EvaluationError;
use crate::expression::{EvaluationContext, Lambda};
use crate::operators::fold_numbers;
use crate::types::{Op, OperatorDefinition, Param, Type};
use crate::value::Value;

fn e_eval(_: &Lambda, _: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::Number(std::f64::consts::E))
}

fn pi_eval(_: &Lambda, _: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::Number(std::f64::consts::PI))
}

fn ln2_eval(_: &Lambda, _: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    Ok(Value::Number(std::f64::consts::LN_2))
}

fn plus_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    fold_numbers(&lambda.args, ctx, 0.0, |memo, next| memo + next)
}

fn times_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    fold_numbers(&lambda.args, ctx, 1.0, |memo, next| memo * next)
}

fn minus_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let a = lambda.args[0].evaluate(ctx)?.as_number()?;
    let b = lambda.args[1].evaluate(ctx)?.as_number()?;
    Ok(Value::Number(a - b))
}

fn divide_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let a = lambda.args[0].evaluate(ctx)?.as_number()?;
    let b = lambda.args[1].evaluate(ctx)?.as_number()?;
    Ok(Value::Number(a / b))
}

fn mod_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let a = lambda.args[0].evaluate(ctx)?.as_number()?;
    let b = lambda.args[1].evaluate(ctx)?.as_number()?;
    Ok(Value::Number(a % b))
}

fn pow_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let a = lambda.args[0].evaluate(ctx)?.as_number()?;
    let b = lambda.args[1].evaluate(ctx)?.as_number()?;
    Ok(Value::Number(a.powf(b)))
}

fn two_numbers() -> Vec<Param> {
    vec![Param::Single(Type::Number), Param::Single(Type::Number)]
}

fn numbers_varargs() -> Vec<Param> {
    vec![Param::NArgs {
        ty: Type::Number,
        max: None,
    }]
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            op: Op::E,
            name: "e",
            result: Type::Number,
            signatures: vec![vec![]],
            eval_fn: e_eval,
        },
        OperatorDefinition {
            op: Op::Pi,
            name: "pi",
            result: Type::Number,
            signatures: vec![vec![]],
            eval_fn: pi_eval,
        },
        OperatorDefinition {
            op: Op::Ln2,
            name: "ln2",
            result: Type::Number,
            signatures: vec![vec![]],
            eval_fn: ln2_eval,
        },
        OperatorDefinition {
            op: Op::Plus,
            name: "+",
            result: Type::Number,
            signatures: vec![numbers_varargs()],
            eval_fn: plus_eval,
        },
        OperatorDefinition {
            op: Op::Times,
            name: "*",
            result: Type::Number,
            signatures: vec![numbers_varargs()],
            eval_fn: times_eval,
        },
        OperatorDefinition {
            op: Op::Minus,
            name: "-",
            result: Type::Number,
            signatures: vec![two_numbers()],
            eval_fn: minus_eval,
        },
        OperatorDefinition {
            op: Op::Divide,
            name: "/",
            result: Type::Number,
            signatures: vec![two_numbers()],
            eval_fn: divide_eval,
        },
        OperatorDefinition {
            op: Op::Mod,
            name: "%",
            result: Type::Number,
            signatures: vec![two_numbers()],
            eval_fn: mod_eval,
        },
        OperatorDefinition {
            op: Op::Pow,
            name: "^",
            result: Type::Number,
            signatures: vec![two_numbers()],
            eval_fn: pow_eval,
        },
    ]
}
