use cattery_core::{Cat, Owner};
use serde_json::json;

#[test]
fn cat_without_owner_serializes_owner_as_null() {
    let mut cat = Cat::new("Tom", 3);
    cat.id = Some(1);

    let value = serde_json::to_value(&cat).unwrap();
    assert_eq!(
        value,
        json!({"id": 1, "name": "Tom", "age": 3, "owner": null})
    );
}

#[test]
fn payload_fields_are_all_optional() {
    let cat: Cat = serde_json::from_value(json!({})).unwrap();
    assert_eq!(cat, Cat::default());
    assert_eq!(cat.age, 0);
    assert!(cat.name.is_none());
}

#[test]
fn null_age_in_payload_defaults_to_zero() {
    let cat: Cat = serde_json::from_value(json!({"name": "Tom", "age": null})).unwrap();
    assert_eq!(cat.age, 0);
    assert_eq!(cat.name.as_deref(), Some("Tom"));
}

#[test]
fn payload_with_transient_owner_deserializes_without_ids() {
    let cat: Cat =
        serde_json::from_value(json!({"name": "Tom", "age": -2, "owner": {"name": "ann"}}))
            .unwrap();

    assert_eq!(cat.age, -2);
    let owner = cat.owner.as_ref().unwrap();
    assert!(owner.is_transient());
    assert_eq!(owner.name.as_deref(), Some("ann"));
    assert_eq!(cat.owner_id(), None);
}

#[test]
fn owner_reference_exposes_owner_id() {
    let cat = Cat::new("Tom", 3).with_owner(Owner::with_id(7));
    assert_eq!(cat.owner_id(), Some(7));
    assert!(!cat.owner.unwrap().is_transient());
}
