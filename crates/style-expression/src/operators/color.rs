//! Color constructors. Components are given in 0-255; alpha in 0-1.

use crate::color::Color;
use crate::error::EvaluationError;
use crate::expression::{EvaluationContext, Lambda};
use crate::types::{Op, OperatorDefinition, Param, Type};
use crate::value::Value;

fn rgb_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let r = lambda.args[0].evaluate(ctx)?.as_number()?;
    let g = lambda.args[1].evaluate(ctx)?.as_number()?;
    let b = lambda.args[2].evaluate(ctx)?.as_number()?;
    Ok(Value::Color(Color::new(
        r / 255.0,
        g / 255.0,
        b / 255.0,
        1.0,
    )))
}

fn rgba_eval(lambda: &Lambda, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
    let r = lambda.args[0].evaluate(ctx)?.as_number()?;
    let g = lambda.args[1].evaluate(ctx)?.as_number()?;
    let b = lambda.args[2].evaluate(ctx)?.as_number()?;
    let a = lambda.args[3].evaluate(ctx)?.as_number()?;
    Ok(Value::Color(Color::new(r / 255.0, g / 255.0, b / 255.0, a)))
}

fn numbers(n: usize) -> Vec<Param> {
    std::iter::repeat_with(|| Param::Single(Type::Number))
        .take(n)
        .collect()
}

pub fn operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition {
            op: Op::Rgb,
            name: "rgb",
            result: Type::Color,
            signatures: vec![numbers(3)],
            eval_fn: rgb_eval,
        },
        OperatorDefinition {
            op: Op::Rgba,
            name: "rgba",
            result: Type::Color,
            signatures: vec![numbers(4)],
            eval_fn: rgba_eval,
        },
    ]
}
