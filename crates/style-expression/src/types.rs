//! The static type model, operator signatures, and the operator
//! registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::EvaluationError;
use crate::expression::{EvaluationContext, Lambda};
use crate::value::Value;

/// A static type. Two types are the same iff their canonical names
/// match; `Display` produces the canonical name.
#[derive(Debug, Clone)]
pub enum Type {
    Null,
    Number,
    Boolean,
    String,
    Color,
    Object,
    /// The top type: matches any concrete type during overload
    /// resolution, without coercion.
    Value,
    /// An unbound generic placeholder, used only while matching
    /// overload signatures.
    Typename(String),
    /// Array type with item type and optional fixed length.
    Array(Box<Type>, Option<usize>),
}

impl Type {
    /// An array type with unconstrained length.
    pub fn array(item: Type) -> Type {
        Type::Array(Box::new(item), None)
    }

    /// An array type with a fixed length.
    pub fn fixed_array(item: Type, len: usize) -> Type {
        Type::Array(Box::new(item), Some(len))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Null => write!(f, "Null"),
            Type::Number => write!(f, "Number"),
            Type::Boolean => write!(f, "Boolean"),
            Type::String => write!(f, "String"),
            Type::Color => write!(f, "Color"),
            Type::Object => write!(f, "Object"),
            Type::Value => write!(f, "Value"),
            Type::Typename(name) => write!(f, "{}", name),
            Type::Array(item, Some(n)) => write!(f, "Array<{}, {}>", item, n),
            Type::Array(item, None) => {
                if matches!(**item, Type::Value) {
                    write!(f, "Array")
                } else {
                    write!(f, "Array<{}>", item)
                }
            }
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Type {}

/// Closed identifier for every registered operator. Drives the
/// feature- and zoom-constancy analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    E,
    Pi,
    Ln2,
    Zoom,
    Plus,
    Times,
    Minus,
    Divide,
    Mod,
    Pow,
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    TypeOf,
    AssertString,
    AssertNumber,
    AssertBoolean,
    AssertObject,
    AssertArray,
    ToString,
    ToNumber,
    ToBoolean,
    ToRgba,
    ParseColor,
    Rgb,
    Rgba,
    Get,
    Has,
    Id,
    Properties,
    GeometryType,
    At,
    Length,
    Coalesce,
}

/// One parameter slot of a signature.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// A single required argument of the given type.
    Single(Type),
    /// A trailing variadic slot: zero or more arguments of one type,
    /// optionally capped. Unbounded when `max` is `None`.
    NArgs { ty: Type, max: Option<usize> },
}

/// One admissible parameter-type pattern for an operator.
pub type Signature = Vec<Param>;

/// The native evaluation function of an operator. The node's resolved
/// signature guarantees the argument count and (statically known)
/// argument types it receives.
pub type EvalFn = fn(&Lambda, &EvaluationContext<'_>) -> Result<Value, EvaluationError>;

/// A registered operator: its id, name, declared result type, overload
/// signatures, and native evaluation function. All overloads share the
/// single `result` type by construction.
#[derive(Debug)]
pub struct OperatorDefinition {
    pub op: Op,
    pub name: &'static str,
    pub result: Type,
    pub signatures: Vec<Signature>,
    pub eval_fn: EvalFn,
}

/// Name-keyed operator table. Built once and passed to the parser by
/// reference; independent registries may coexist in one process.
#[derive(Debug)]
pub struct Registry {
    map: HashMap<&'static str, Arc<OperatorDefinition>>,
}

impl Registry {
    pub fn new(operators: Vec<OperatorDefinition>) -> Registry {
        let mut map = HashMap::with_capacity(operators.len());
        for op in operators {
            debug_assert!(
                !op.signatures.is_empty(),
                "operator {:?} registered without signatures",
                op.name
            );
            map.insert(op.name, Arc::new(op));
        }
        Registry { map }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<OperatorDefinition>> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for Registry {
    /// The full built-in operator set.
    fn default() -> Self {
        Registry::new(crate::operators::all_operators())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names() {
        assert_eq!(Type::Number.to_string(), "Number");
        assert_eq!(Type::Value.to_string(), "Value");
        assert_eq!(Type::array(Type::Value).to_string(), "Array");
        assert_eq!(Type::array(Type::Number).to_string(), "Array<Number>");
        assert_eq!(
            Type::fixed_array(Type::Number, 3).to_string(),
            "Array<Number, 3>"
        );
        assert_eq!(
            Type::fixed_array(Type::Value, 2).to_string(),
            "Array<Value, 2>"
        );
    }

    #[test]
    fn equality_is_name_equality() {
        assert_eq!(Type::array(Type::Number), Type::array(Type::Number));
        assert_ne!(Type::array(Type::Number), Type::array(Type::String));
        assert_ne!(
            Type::fixed_array(Type::Number, 2),
            Type::fixed_array(Type::Number, 3)
        );
        assert_eq!(Type::Typename("T".into()), Type::Typename("T".into()));
    }

    #[test]
    fn default_registry_resolves_names() {
        let registry = Registry::default();
        assert!(registry.get("+").is_some());
        assert!(registry.get("geometry_type").is_some());
        assert!(registry.get("no_such_operator").is_none());
    }
}
