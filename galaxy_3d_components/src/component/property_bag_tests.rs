/// Tests for PropertyBag ordering, merging and diffing

use super::*;

#[test]
fn test_insert_preserves_order_and_position() {
    let mut bag = PropertyBag::new()
        .with("roughness", 0.5f32)
        .with("metalness", 0.0f32)
        .with("wireframe", false);

    let previous = bag.insert("metalness", 1.0f32);
    assert_eq!(previous, Some(PropValue::Float(0.0)));

    let keys: Vec<&str> = bag.keys().collect();
    assert_eq!(keys, vec!["roughness", "metalness", "wireframe"]);
    assert_eq!(bag.get("metalness"), Some(&PropValue::Float(1.0)));
    assert_eq!(bag.len(), 3);
}

#[test]
fn test_remove_reindexes() {
    let mut bag: PropertyBag = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

    assert_eq!(bag.remove("a"), Some(PropValue::Int(1)));
    assert_eq!(bag.remove("a"), None);
    assert_eq!(bag.get("b"), Some(&PropValue::Int(2)));
    assert_eq!(bag.get("c"), Some(&PropValue::Int(3)));
    assert!(!bag.contains_key("a"));

    bag.insert("c", 30);
    let entries: Vec<(&str, &PropValue)> = bag.iter().collect();
    assert_eq!(entries, vec![("b", &PropValue::Int(2)), ("c", &PropValue::Int(30))]);
}

#[test]
fn test_empty_bag() {
    let bag = PropertyBag::default();
    assert!(bag.is_empty());
    assert_eq!(bag.iter().count(), 0);
}

#[test]
fn test_merged_over_overlay_wins() {
    let fixed = PropertyBag::new().with("color", "#ffffff").with("opacity", 1.0f32);
    let props = PropertyBag::new().with("color", "#ff0000").with("wireframe", true);

    let merged = props.merged_over(&fixed);

    assert_eq!(merged.get("color"), Some(&PropValue::from("#ff0000")));
    assert_eq!(merged.get("opacity"), Some(&PropValue::Float(1.0)));
    assert_eq!(merged.get("wireframe"), Some(&PropValue::Bool(true)));
    let keys: Vec<&str> = merged.keys().collect();
    assert_eq!(keys, vec!["color", "opacity", "wireframe"]);
}

#[test]
fn test_changes_from_reports_new_and_modified_keys() {
    let old = PropertyBag::new().with("roughness", 0.5f32).with("metalness", 0.0f32);
    let new = PropertyBag::new()
        .with("roughness", 0.5f32)
        .with("metalness", 1.0f32)
        .with("wireframe", true);

    let changes = new.changes_from(&old);
    assert_eq!(changes, vec![
        ("metalness", &PropValue::Float(1.0)),
        ("wireframe", &PropValue::Bool(true)),
    ]);
}

#[test]
fn test_changes_from_identical_bag_is_empty() {
    let bag = PropertyBag::new().with("size", 2.0f32);
    assert!(bag.clone().changes_from(&bag).is_empty());
}

#[test]
fn test_removed_from() {
    let old = PropertyBag::new().with("a", 1).with("b", 2);
    let new = PropertyBag::new().with("b", 2);
    assert_eq!(new.removed_from(&old), vec!["a"]);
    assert!(old.removed_from(&new).is_empty());
}

#[test]
fn test_equality_ignores_order() {
    let a = PropertyBag::new().with("x", 1).with("y", 2);
    let b = PropertyBag::new().with("y", 2).with("x", 1);
    assert_eq!(a, b);
    assert_ne!(a, PropertyBag::new().with("x", 1));
    assert_ne!(a, PropertyBag::new().with("x", 1).with("y", 3));
}
