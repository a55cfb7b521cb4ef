//! Tests for foodfacts-model types.

use foodfacts_model::{Node, Product, RawRecord, RawValue};

#[test]
fn product_starts_unlinked() {
    let product = Product::new("Lait entier", "7610200000000");
    assert_eq!(product.name(), "Lait entier");
    assert_eq!(product.code(), "7610200000000");
    assert_eq!(product.ingredient_id(), 0);
}

#[test]
fn product_serializes_with_output_field_names() {
    let product = Product::new("Milk", "42");
    let json = serde_json::to_value(&product).expect("serialize product");
    assert_eq!(
        json,
        serde_json::json!({"name": "Milk", "code": "42", "ingredientId": 0})
    );
    let round: Product = serde_json::from_value(json).expect("deserialize product");
    assert_eq!(round, product);
}

#[test]
fn node_serializes_tagged() {
    let json = serde_json::to_string(&Node::list(["a"])).expect("serialize node");
    assert_eq!(json, r#"{"kind":"list","value":["a"]}"#);
}

#[test]
fn record_collects_from_pairs() {
    let record: RawRecord = vec![
        ("code".to_string(), RawValue::text("1")),
        ("product_name".to_string(), RawValue::Null),
    ]
    .into_iter()
    .collect();
    assert_eq!(record.len(), 2);
    let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
    assert_eq!(names, ["code", "product_name"]);
    assert!(record.get("PRODUCT_NAME").is_some_and(RawValue::is_null));
}
