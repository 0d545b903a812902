//! Parses a JSON-like input tree into a resolved expression tree.

use std::sync::Arc;

use serde_json::Value as Json;

use crate::error::CompileError;
use crate::expression::{Expression, Lambda, Literal};
use crate::typecheck;
use crate::types::Registry;

/// Tracks the JSON path of the node being parsed, for error
/// attribution. Operand indices are 1-based, after the operator name.
#[derive(Debug, Clone)]
pub struct ParsingContext {
    key: String,
}

impl ParsingContext {
    pub fn root() -> Self {
        ParsingContext { key: String::new() }
    }

    pub fn child(&self, index: usize) -> Self {
        ParsingContext {
            key: format!("{}[{}]", self.key, index),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Parses one JSON-like tree into a resolved [`Expression`] against
/// the given operator registry.
///
/// Non-array input, and arrays whose first element is not a string,
/// parse as literals. An array starting with a string must name a
/// registered operator; its remaining elements are operand
/// expressions, parsed recursively. Parsing is atomic: the result is
/// either a fully resolved tree or a non-empty error list, never a
/// partially constructed tree.
pub fn parse(json: &Json, registry: &Registry) -> Result<Expression, Vec<CompileError>> {
    parse_node(json, registry, &ParsingContext::root())
}

fn parse_node(
    json: &Json,
    registry: &Registry,
    ctx: &ParsingContext,
) -> Result<Expression, Vec<CompileError>> {
    let elements = match json {
        Json::Array(elements) => elements,
        _ => return Ok(Expression::Literal(Literal::parse(json))),
    };
    let name = match elements.first() {
        Some(Json::String(name)) => name,
        _ => return Ok(Expression::Literal(Literal::parse(json))),
    };
    let def = registry.get(name).ok_or_else(|| {
        vec![CompileError::new(
            format!("Unknown operator \"{}\".", name),
            ctx.key(),
        )]
    })?;

    // Fail fast: the first failing operand aborts the parse.
    let mut args = Vec::with_capacity(elements.len() - 1);
    for (index, operand) in elements.iter().enumerate().skip(1) {
        args.push(parse_node(operand, registry, &ctx.child(index))?);
    }

    let ty = typecheck::resolve_overload(def, &args, ctx)?;
    Ok(Expression::Lambda(Lambda::new(Arc::clone(def), ty, args)))
}
