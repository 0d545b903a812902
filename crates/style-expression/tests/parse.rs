//! Parser and type-checker tests: literal typing, overload
//! resolution, error attribution, and the constancy analysis.

use serde_json::{json, Value as Json};
use style_expression::{parse, Expression, Registry, Type};

fn parse_ok(expression: Json) -> Expression {
    let registry = Registry::default();
    parse(&expression, &registry)
        .unwrap_or_else(|errors| panic!("parse({}) failed: {:?}", expression, errors))
}

fn parse_errs(expression: Json) -> Vec<style_expression::CompileError> {
    let registry = Registry::default();
    match parse(&expression, &registry) {
        Ok(_) => panic!("expected compile error for {}", expression),
        Err(errors) => errors,
    }
}

// ----------------------------------------------------------------- Literals

#[test]
fn literal_scalars_have_expected_types() {
    assert_eq!(*parse_ok(json!(null)).result_type(), Type::Null);
    assert_eq!(*parse_ok(json!(true)).result_type(), Type::Boolean);
    assert_eq!(*parse_ok(json!(3)).result_type(), Type::Number);
    assert_eq!(*parse_ok(json!("a")).result_type(), Type::String);
}

#[test]
fn literal_containers_have_structural_types() {
    assert_eq!(parse_ok(json!([1, 2, 3])).result_type().to_string(), "Array<Number, 3>");
    assert_eq!(parse_ok(json!([1, "x"])).result_type().to_string(), "Array<Value, 2>");
    assert_eq!(*parse_ok(json!({"a": 1})).result_type(), Type::Object);
}

#[test]
fn literal_typing_is_deterministic() {
    let input = json!({"a": [1, "x", null], "b": true});
    let first = parse_ok(input.clone());
    let second = parse_ok(input);
    assert_eq!(first.result_type(), second.result_type());
}

#[test]
fn arrays_not_starting_with_a_string_are_literals() {
    let expr = parse_ok(json!([1, "not-an-operator", 3]));
    assert!(matches!(expr, Expression::Literal(_)));
}

// ----------------------------------------------------------------- Errors

#[test]
fn unknown_operator_is_a_compile_error() {
    let errors = parse_errs(json!(["frobnicate", 1]));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Unknown operator \"frobnicate\""));
}

#[test]
fn arity_mismatch_is_a_compile_error() {
    let errors = parse_errs(json!(["-", 5]));
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0].message.contains("expected 2 arguments, but found 1"),
        "got: {}",
        errors[0].message
    );
}

#[test]
fn no_matching_overload_reports_one_reason_per_signature() {
    // == declares Number, String, and Boolean pairs; none accepts
    // mixed operand types.
    let errors = parse_errs(json!(["==", 1, "one"]));
    assert_eq!(errors.len(), 3);
    for error in &errors {
        assert!(error.message.starts_with("\"==\""), "got: {}", error.message);
    }
}

#[test]
fn argument_type_mismatch_names_position_and_types() {
    let errors = parse_errs(json!(["-", 5, "x"]));
    assert!(
        errors[0]
            .message
            .contains("expected Number for argument 2, but found String"),
        "got: {}",
        errors[0].message
    );
}

#[test]
fn errors_carry_the_json_path_of_the_failing_operand() {
    let errors = parse_errs(json!(["+", 1, ["-", 5]]));
    assert_eq!(errors[0].key, "[2]");

    let errors = parse_errs(json!(["+", ["*", ["unknown_op"]], 2]));
    assert_eq!(errors[0].key, "[1][1]");
}

#[test]
fn child_failure_propagates_immediately() {
    // Both operands are bad; only the first is reported.
    let errors = parse_errs(json!(["+", ["unknown_a"], ["unknown_b"]]));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("unknown_a"));
}

#[test]
fn variadic_operand_cap_is_enforced() {
    // get takes a key plus at most one object operand.
    let errors = parse_errs(json!(["get", "k", {"k": 1}, {"k": 2}]));
    assert!(
        errors[0].message.contains("at most 1"),
        "got: {}",
        errors[0].message
    );
}

#[test]
fn top_typed_children_match_concrete_slots() {
    // get's result is top-typed; + requires Numbers. The match is
    // permitted at compile time and checked at runtime.
    parse_ok(json!(["+", ["get", "lanes"], 1]));
}

// ----------------------------------------------------------------- Constancy

#[test]
fn literal_trees_are_feature_and_zoom_constant() {
    let expr = parse_ok(json!(["+", 1, ["*", 2, ["pi"]]]));
    assert!(expr.is_feature_constant());
    assert!(expr.is_zoom_constant());
}

#[test]
fn feature_accessors_poison_feature_constancy() {
    for expression in [
        json!(["get", "x"]),
        json!(["has", "x"]),
        json!(["id"]),
        json!(["properties"]),
        json!(["geometry_type"]),
        json!(["+", 1, ["to_number", ["get", "x"]]]),
    ] {
        let expr = parse_ok(expression.clone());
        assert!(!expr.is_feature_constant(), "expression: {}", expression);
        assert!(expr.is_zoom_constant(), "expression: {}", expression);
    }
}

#[test]
fn object_forms_of_get_and_has_are_feature_constant() {
    assert!(parse_ok(json!(["get", "k", {"k": 1}])).is_feature_constant());
    assert!(parse_ok(json!(["has", "k", {"k": 1}])).is_feature_constant());
}

#[test]
fn zoom_poisons_zoom_constancy_only() {
    let expr = parse_ok(json!(["+", ["zoom"], 1]));
    assert!(!expr.is_zoom_constant());
    assert!(expr.is_feature_constant());
}

// ----------------------------------------------------------------- Registry

#[test]
fn registries_are_independent_values() {
    // A registry restricted to the math family does not know the
    // feature accessors.
    let math_only = Registry::new(style_expression::operators::math::operators());
    assert!(parse(&json!(["+", 1, 2]), &math_only).is_ok());
    let errors = parse(&json!(["get", "x"]), &math_only).unwrap_err();
    assert!(errors[0].message.contains("Unknown operator"));

    // The full registry still resolves it.
    assert!(parse(&json!(["get", "x"]), &Registry::default()).is_ok());
}
