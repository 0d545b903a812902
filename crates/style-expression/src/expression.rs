//! The immutable expression tree: literal nodes and operator
//! ("lambda") nodes, plus the per-call evaluation context.

use std::sync::Arc;

use serde_json::Value as Json;

use crate::error::EvaluationError;
use crate::feature::Feature;
use crate::types::{Op, OperatorDefinition, Type};
use crate::value::{type_of, Value};

/// Per-call evaluation inputs: the zoom level and a read-only view of
/// the feature under evaluation.
pub struct EvaluationContext<'a> {
    pub zoom: f64,
    pub feature: &'a dyn Feature,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(zoom: f64, feature: &'a dyn Feature) -> Self {
        EvaluationContext { zoom, feature }
    }
}

/// A constant expression: an already-typed value.
#[derive(Debug, Clone)]
pub struct Literal {
    value: Value,
    ty: Type,
}

impl Literal {
    pub fn new(value: Value) -> Literal {
        let ty = type_of(&value);
        Literal { value, ty }
    }

    /// Parses an arbitrary JSON value into a literal by recursive
    /// structural copy.
    pub fn parse(json: &Json) -> Literal {
        Literal::new(Value::from_json(json))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An operator invocation: the registered operator, the resolved
/// result type, and the ordered, owned children. Immutable once
/// constructed.
#[derive(Debug, Clone)]
pub struct Lambda {
    pub(crate) def: Arc<OperatorDefinition>,
    pub(crate) ty: Type,
    pub(crate) args: Vec<Expression>,
    feature_constant: bool,
    zoom_constant: bool,
}

impl Lambda {
    pub(crate) fn new(def: Arc<OperatorDefinition>, ty: Type, args: Vec<Expression>) -> Lambda {
        let children_feature_constant = args.iter().all(Expression::is_feature_constant);
        let children_zoom_constant = args.iter().all(Expression::is_zoom_constant);
        let feature_constant = match def.op {
            // The one-argument forms read the feature; the two-argument
            // forms operate on an explicit object operand.
            Op::Get | Op::Has => args.len() > 1 && children_feature_constant,
            Op::Id | Op::Properties | Op::GeometryType => false,
            _ => children_feature_constant,
        };
        let zoom_constant = match def.op {
            Op::Zoom => false,
            _ => children_zoom_constant,
        };
        Lambda {
            def,
            ty,
            args,
            feature_constant,
            zoom_constant,
        }
    }

    pub fn operator(&self) -> &'static str {
        self.def.name
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    pub fn result_type(&self) -> &Type {
        &self.ty
    }
}

/// A node in the parsed computation tree.
#[derive(Debug, Clone)]
pub enum Expression {
    Literal(Literal),
    Lambda(Lambda),
}

impl Expression {
    /// Interprets the tree for one feature/zoom pair. Pure recursive
    /// walk; the first failing subexpression aborts the call.
    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Result<Value, EvaluationError> {
        match self {
            Expression::Literal(literal) => Ok(literal.value.clone()),
            Expression::Lambda(lambda) => (lambda.def.eval_fn)(lambda, ctx),
        }
    }

    pub fn result_type(&self) -> &Type {
        match self {
            Expression::Literal(literal) => &literal.ty,
            Expression::Lambda(lambda) => &lambda.ty,
        }
    }

    /// True if the value never depends on the per-feature accessor.
    /// Callers may hoist feature-constant subtrees out of a
    /// per-feature evaluation loop.
    pub fn is_feature_constant(&self) -> bool {
        match self {
            Expression::Literal(_) => true,
            Expression::Lambda(lambda) => lambda.feature_constant,
        }
    }

    /// True if the value never depends on the zoom parameter.
    pub fn is_zoom_constant(&self) -> bool {
        match self {
            Expression::Literal(_) => true,
            Expression::Lambda(lambda) => lambda.zoom_constant,
        }
    }
}
