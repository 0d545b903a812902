//! Style expression evaluator for map feature styling.
//!
//! # Overview
//!
//! Expressions arrive as JSON arrays of the form
//! `[operator, ...operands]` and compute per-feature styling values
//! (colors, numbers, strings, booleans) from feature data and a zoom
//! level. A raw tree is parsed and type-checked once into an immutable
//! [`Expression`], then evaluated repeatedly, once per rendered
//! feature. Resolved trees are `Send + Sync` and may be evaluated
//! concurrently.
//!
//! # Example
//!
//! ```
//! use style_expression::{parse, EvaluationContext, Registry, SimpleFeature, Value};
//! use serde_json::json;
//!
//! let registry = Registry::default();
//! let expr = parse(&json!(["+", 1, 2, 3]), &registry).unwrap();
//!
//! let feature = SimpleFeature::default();
//! let result = expr.evaluate(&EvaluationContext::new(0.0, &feature)).unwrap();
//! assert_eq!(result, Value::Number(6.0));
//! ```

pub mod color;
pub mod error;
pub mod expression;
pub mod feature;
pub mod operators;
pub mod parser;
pub mod typecheck;
pub mod types;
pub mod value;

// Re-export the core public API
pub use color::Color;
pub use error::{CompileError, EvaluationError};
pub use expression::{EvaluationContext, Expression, Lambda, Literal};
pub use feature::{Feature, FeatureId, FeatureType, SimpleFeature};
pub use operators::all_operators;
pub use parser::{parse, ParsingContext};
pub use types::{Op, OperatorDefinition, Param, Registry, Signature, Type};
pub use value::{stringify, type_of, Value};
