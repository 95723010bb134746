//! Integration tests for self-referential validators.

use serde_json::json;
use verdict::{boxed, Validator, ValidatorLike};

/// Helper to extract the error value from a Validation
fn unwrap_failure<T, E>(v: stillwater::Validation<T, E>) -> E
where
    T: std::fmt::Debug,
{
    v.into_result().unwrap_err()
}

fn tree_validator() -> verdict::RecursiveValidator {
    Validator::recursion(|tree| {
        Validator::object()
            .field("name", Validator::string())
            .field("children", Validator::array(tree).optional())
    })
}

#[test]
fn test_recursive_tree_accepts_nesting() {
    let tree = tree_validator();

    // A leaf needs no children key at all.
    assert!(tree.validate(&json!({ "name": "leaf" })).is_success());

    let nested = json!({
        "name": "root",
        "children": [
            { "name": "a" },
            { "name": "b", "children": [{ "name": "b1" }] }
        ]
    });
    assert!(tree.validate(&nested).is_success());
}

#[test]
fn test_recursive_tree_rejects_with_nested_context() {
    let tree = tree_validator();

    let input = json!({
        "name": "root",
        "children": [
            { "name": "ok" },
            { "name": "parent", "children": [{ "name": 42 }] }
        ]
    });

    let errors = unwrap_failure(tree.validate(&input));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.first().context.to_string(),
        "root / children / 1 / children / 0 / name"
    );
    assert_eq!(errors.first().message, "Expected string, got number");
}

#[test]
fn test_recursive_tree_collects_errors_at_every_depth() {
    let tree = tree_validator();

    let input = json!({
        "name": 1,
        "children": [{ "name": 2 }]
    });

    let errors = unwrap_failure(tree.validate(&input));
    assert_eq!(errors.len(), 2);
    let contexts: Vec<String> = errors.iter().map(|e| e.context.to_string()).collect();
    assert_eq!(contexts, vec!["root / name", "root / children / 0 / name"]);
}

#[test]
fn test_recursive_linked_list() {
    let list = Validator::recursion(|list| {
        Validator::object()
            .field("head", Validator::number())
            .field("tail", list.optional())
    });

    let input = json!({ "head": 1, "tail": { "head": 2, "tail": { "head": 3 } } });
    assert!(list.validate(&input).is_success());

    let bad = json!({ "head": 1, "tail": { "head": "two" } });
    let errors = unwrap_failure(list.validate(&bad));
    assert_eq!(errors.first().context.to_string(), "root / tail / head");
}

#[test]
fn test_recursive_json_like_value() {
    // A validator for arbitrarily nested scalar/array/object data, with
    // the forward reference cloned into two positions.
    let value = Validator::recursion(|value| {
        Validator::union(vec![
            boxed(Validator::string()),
            boxed(Validator::number()),
            boxed(Validator::boolean()),
            boxed(Validator::array(value.clone())),
            boxed(Validator::dictionary(Validator::string(), value)),
        ])
    });

    let mixed = json!({
        "title": "report",
        "pages": [1, 2, 3],
        "meta": { "tags": ["a", "b"], "draft": false }
    });
    assert!(value.validate(&mixed).is_success());

    // null is not one of the alternatives; the union reports one
    // aggregate error at its own (root) context.
    let errors = unwrap_failure(value.validate(&json!({ "bad": null })));
    assert_eq!(errors.len(), 1);
    assert!(errors.first().context.is_root());
}

#[test]
fn test_recursive_validator_clones_share_the_binding() {
    let tree = tree_validator();
    let clone = tree.clone();

    let input = json!({ "name": "root", "children": [{ "name": "a" }] });
    assert!(tree.validate(&input).is_success());
    assert!(clone.validate(&input).is_success());
}

#[test]
fn test_expression_tree_scenario() {
    // Real-world scenario: arithmetic expressions where operands nest.
    let expr = Validator::recursion(|expr| {
        Validator::union(vec![
            boxed(Validator::number()),
            boxed(
                Validator::object()
                    .field("op", Validator::key_of(["add", "mul"]))
                    .field("args", Validator::array(expr)),
            ),
        ])
    });

    let input = json!({
        "op": "add",
        "args": [1, { "op": "mul", "args": [2, 3] }]
    });
    assert!(expr.validate(&input).is_success());

    let bad = json!({ "op": "div", "args": [1, 2] });
    assert!(expr.validate(&bad).is_failure());
}

#[test]
fn test_recursion_output_is_the_dynamic_value() {
    let tree = tree_validator();

    let input = json!({ "name": "solo" });
    let output = tree.validate(&input).into_result().unwrap();
    assert_eq!(output, json!({ "name": "solo" }));
}
