//! Operator definitions, grouped by family. New operators are added
//! by registering an entry here; parser and evaluator dispatch never
//! change.

pub mod assertion;
pub mod coercion;
pub mod color;
pub mod comparison;
pub mod container;
pub mod feature;
pub mod math;

use crate::error::EvaluationError;
use crate::expression::{EvaluationContext, Expression};
use crate::types::OperatorDefinition;
use crate::value::Value;

/// All built-in operator definitions combined.
pub fn all_operators() -> Vec<OperatorDefinition> {
    let mut ops = Vec::new();
    ops.extend(math::operators());
    ops.extend(comparison::operators());
    ops.extend(assertion::operators());
    ops.extend(coercion::operators());
    ops.extend(color::operators());
    ops.extend(feature::operators());
    ops.extend(container::operators());
    ops
}

/// Left-to-right numeric fold over all arguments, starting from the
/// operator's identity. The first failing operand aborts.
pub(crate) fn fold_numbers(
    args: &[Expression],
    ctx: &EvaluationContext<'_>,
    identity: f64,
    reduce: fn(f64, f64) -> f64,
) -> Result<Value, EvaluationError> {
    let mut memo = identity;
    for arg in args {
        memo = reduce(memo, arg.evaluate(ctx)?.as_number()?);
    }
    Ok(Value::Number(memo))
}
