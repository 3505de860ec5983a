//! Model reference resolution across input combinations.

use std::sync::Arc;

use slots_content::{SlotRegistry, StaticSource};
use slots_core::{MaterialTable, ModelRef};

fn load_single(fields: &str) -> ModelRef {
    let document = format!("[slots.ring]\n{fields}\n");
    let source: StaticSource = document.parse().expect("valid TOML");
    let mut registry = SlotRegistry::new(source, Arc::new(MaterialTable::with_defaults()));
    registry.load().expect("load");
    registry
        .slot_configuration("ring")
        .expect("ring should load")
        .model()
        .clone()
}

#[test]
fn at_most_one_representation_for_every_combination() {
    let item_models = [
        None,
        Some("\"42\""),
        Some("\"mymod:ring_icon\""),
        Some("\"ring_icon\""),
        Some("\"Not Valid\""),
        Some("\"\""),
        Some("17"),
    ];
    let custom_model_data = [None, Some("7"), Some("\"seven\""), Some("99999999999")];

    for item_model in item_models {
        for data in custom_model_data {
            let mut fields = String::new();
            if let Some(value) = item_model {
                fields.push_str(&format!("item-model = {value}\n"));
            }
            if let Some(value) = data {
                fields.push_str(&format!("custom-model-data = {value}\n"));
            }

            let model = load_single(&fields);
            let representations = usize::from(model.custom_model_data().is_some())
                + usize::from(model.item_model().is_some());
            assert!(representations <= 1, "fields {fields:?} produced {model:?}");

            if data.is_some() {
                assert!(model.item_model().is_none(), "fields {fields:?} produced {model:?}");
            }
            if data == Some("7") {
                assert_eq!(model, ModelRef::Legacy(7), "fields {fields:?}");
            } else if data.is_some() {
                assert!(model.is_none(), "fields {fields:?} produced {model:?}");
            }
        }
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(load_single("item-model = \"42\""), ModelRef::Legacy(42));

    let named = load_single("item-model = \"mymod:ring_icon\"");
    assert_eq!(named.item_model().unwrap().namespace(), "mymod");
    assert_eq!(named.item_model().unwrap().path(), "ring_icon");
    assert!(named.custom_model_data().is_none());

    assert_eq!(
        load_single("item-model = \"42\"\ncustom-model-data = 7"),
        ModelRef::Legacy(7)
    );

    assert_eq!(
        load_single("item-model = \"mymod:ring\"\ncustom-model-data = \"seven\""),
        ModelRef::None
    );

    assert_eq!(load_single(""), ModelRef::None);
}
