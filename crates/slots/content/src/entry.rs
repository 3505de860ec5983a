//! Per-entry parsing of one `[slots.<key>]` table.
//!
//! Every field is validated independently. Only two conditions reject an
//! entry outright (missing table, blank key); any other anomaly substitutes a
//! documented default and records a warning.

use std::fmt;

use slots_core::{
    DEFAULT_NAME_COLOR, MIN_CAPACITY, Material, MaterialCatalog, ModelRef, NamespacedKey,
    RECOMMENDED_MAX_CAPACITY, SlotDefinition,
};
use toml::Value;
use tracing::{debug, warn};

pub const FIELD_NAME: &str = "name";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_ICON: &str = "icon";
pub const FIELD_ITEM_MODEL: &str = "item-model";
pub const FIELD_CUSTOM_MODEL_DATA: &str = "custom-model-data";
pub const FIELD_LORE: &str = "lore";

/// Hard rejection of a configuration entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryRejection {
    #[error("slot '{0}' has no configuration table")]
    MissingSection(String),

    #[error("slot key is blank")]
    BlankKey,
}

/// A value anomaly recorded while loading, tagged with its slot key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryWarning {
    pub key: String,
    pub message: String,
}

impl EntryWarning {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for EntryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// An accepted entry and the warnings raised while building it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedEntry {
    pub definition: SlotDefinition,
    pub warnings: Vec<String>,
}

/// Collects warnings for one entry and mirrors them to the log.
struct Diagnostics<'a> {
    key: &'a str,
    warnings: Vec<String>,
}

impl<'a> Diagnostics<'a> {
    fn new(key: &'a str) -> Self {
        Self {
            key,
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, message: String) {
        warn!(slot = self.key, "{}", message);
        self.warnings.push(message);
    }
}

/// Parses one slot entry.
///
/// `value` is whatever the document holds under `slots.<key>`; anything other
/// than a table is treated as a missing section.
pub fn parse_entry(
    key: &str,
    value: &Value,
    catalog: &dyn MaterialCatalog,
) -> Result<ParsedEntry, EntryRejection> {
    let Some(section) = value.as_table() else {
        return Err(EntryRejection::MissingSection(key.to_string()));
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(EntryRejection::BlankKey);
    }

    let mut diagnostics = Diagnostics::new(key);

    let display_name = resolve_display_name(section, key);
    let capacity = resolve_capacity(section, &mut diagnostics);
    let icon = resolve_icon(section, catalog, &mut diagnostics);
    let model = resolve_model(section, &mut diagnostics);
    let description = resolve_description(section, &mut diagnostics);

    let definition = SlotDefinition::builder(key)
        .display_name(display_name)
        .icon(icon)
        .model(model)
        .capacity(capacity)
        .description(description)
        .build();

    Ok(ParsedEntry {
        definition,
        warnings: diagnostics.warnings,
    })
}

fn resolve_display_name(section: &toml::Table, key: &str) -> String {
    match section.get(FIELD_NAME).and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("{DEFAULT_NAME_COLOR}{key}"),
    }
}

fn resolve_capacity(section: &toml::Table, diagnostics: &mut Diagnostics<'_>) -> u32 {
    let Some(value) = section.get(FIELD_AMOUNT) else {
        return MIN_CAPACITY;
    };

    let Some(amount) = value.as_integer() else {
        diagnostics.warn(format!(
            "amount {value} is not an integer, using {MIN_CAPACITY}"
        ));
        return MIN_CAPACITY;
    };

    if amount < i64::from(MIN_CAPACITY) {
        diagnostics.warn(format!(
            "amount {amount} is below the minimum of {MIN_CAPACITY}, clamped to {MIN_CAPACITY}"
        ));
        return MIN_CAPACITY;
    }

    let capacity = match u32::try_from(amount) {
        Ok(capacity) => capacity,
        Err(_) => {
            diagnostics.warn(format!("amount {amount} does not fit in 32 bits, saturated"));
            u32::MAX
        }
    };

    if capacity > RECOMMENDED_MAX_CAPACITY {
        diagnostics.warn(format!(
            "amount {capacity} exceeds the recommended maximum of {RECOMMENDED_MAX_CAPACITY}; \
             large slot counts may hurt performance"
        ));
    }

    capacity
}

fn resolve_icon(
    section: &toml::Table,
    catalog: &dyn MaterialCatalog,
    diagnostics: &mut Diagnostics<'_>,
) -> Material {
    let raw = match section.get(FIELD_ICON) {
        None => Material::DEFAULT_ICON_NAME,
        Some(Value::String(name)) => name.as_str(),
        Some(other) => {
            diagnostics.warn(format!(
                "icon {other} is not a material name, using {}",
                Material::SENTINEL_NAME
            ));
            return Material::sentinel();
        }
    };

    match catalog.resolve(raw) {
        None => {
            diagnostics.warn(format!(
                "unknown icon material '{raw}', using {}",
                Material::SENTINEL_NAME
            ));
            Material::sentinel()
        }
        Some(material) if !material.is_item() => {
            diagnostics.warn(format!(
                "icon material '{material}' is not an item, using {}",
                Material::SENTINEL_NAME
            ));
            Material::sentinel()
        }
        Some(material) => material,
    }
}

/// Resolves the model reference.
///
/// `item-model` is read first: an integer selects legacy model data, any other
/// text is a namespaced identifier. A present `custom-model-data` then
/// replaces whatever `item-model` produced; an unusable value leaves no model.
fn resolve_model(section: &toml::Table, diagnostics: &mut Diagnostics<'_>) -> ModelRef {
    let mut model = match section.get(FIELD_ITEM_MODEL) {
        None => ModelRef::None,
        Some(Value::String(raw)) => parse_item_model(raw.trim(), diagnostics),
        Some(Value::Integer(value)) => legacy_from_i64(*value, FIELD_ITEM_MODEL, diagnostics),
        Some(other) => {
            diagnostics.warn(format!(
                "{FIELD_ITEM_MODEL} {other} is neither text nor integer, ignored"
            ));
            ModelRef::None
        }
    };

    if let Some(value) = section.get(FIELD_CUSTOM_MODEL_DATA) {
        if !model.is_none() {
            debug!(
                slot = diagnostics.key,
                "{FIELD_CUSTOM_MODEL_DATA} overrides {FIELD_ITEM_MODEL} ({model})"
            );
        }
        model = match value.as_integer() {
            Some(data) => legacy_from_i64(data, FIELD_CUSTOM_MODEL_DATA, diagnostics),
            None => {
                diagnostics.warn(format!(
                    "{FIELD_CUSTOM_MODEL_DATA} {value} is not an integer, ignored"
                ));
                ModelRef::None
            }
        };
    }

    model
}

fn parse_item_model(raw: &str, diagnostics: &mut Diagnostics<'_>) -> ModelRef {
    if raw.is_empty() {
        return ModelRef::None;
    }

    if let Ok(data) = raw.parse::<i32>() {
        return ModelRef::Legacy(data);
    }

    match NamespacedKey::parse(raw) {
        Ok(key) => ModelRef::Named(key),
        Err(err) => {
            diagnostics.warn(format!("{FIELD_ITEM_MODEL} '{raw}' is unusable: {err}"));
            ModelRef::None
        }
    }
}

fn legacy_from_i64(value: i64, field: &str, diagnostics: &mut Diagnostics<'_>) -> ModelRef {
    match i32::try_from(value) {
        Ok(data) => ModelRef::Legacy(data),
        Err(_) => {
            diagnostics.warn(format!("{field} {value} is out of 32-bit range, ignored"));
            ModelRef::None
        }
    }
}

fn resolve_description(section: &toml::Table, diagnostics: &mut Diagnostics<'_>) -> Vec<String> {
    match section.get(FIELD_LORE) {
        None => {
            debug!(slot = diagnostics.key, "no lore configured");
            Vec::new()
        }
        Some(Value::Array(lines)) => lines
            .iter()
            .map(|line| match line {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(other) => {
            diagnostics.warn(format!("{FIELD_LORE} {other} is not a list of lines, ignored"));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slots_core::MaterialTable;

    fn parse(toml_src: &str) -> Result<ParsedEntry, EntryRejection> {
        let value = Value::Table(toml::from_str(toml_src).unwrap());
        parse_entry("ring", &value, &MaterialTable::with_defaults())
    }

    #[test]
    fn empty_table_gets_all_defaults() {
        let parsed = parse("").unwrap();
        let slot = &parsed.definition;

        assert_eq!(slot.key(), "ring");
        assert_eq!(slot.display_name(), "&fring");
        assert_eq!(slot.capacity(), 1);
        assert_eq!(slot.icon().name(), "STONE");
        assert!(slot.model().is_none());
        assert!(slot.description().is_empty());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn non_table_value_is_missing_section() {
        let value = Value::Integer(5);
        let err = parse_entry("ring", &value, &MaterialTable::with_defaults()).unwrap_err();
        assert_eq!(err, EntryRejection::MissingSection("ring".to_string()));
    }

    #[test]
    fn blank_key_is_rejected() {
        let value = Value::Table(toml::Table::new());
        let err = parse_entry("   ", &value, &MaterialTable::with_defaults()).unwrap_err();
        assert_eq!(err, EntryRejection::BlankKey);
    }

    #[test]
    fn capacity_below_floor_is_clamped_with_one_warning() {
        let parsed = parse("amount = 0").unwrap();
        assert_eq!(parsed.definition.capacity(), 1);
        assert_eq!(parsed.warnings.len(), 1);

        let parsed = parse("amount = -12").unwrap();
        assert_eq!(parsed.definition.capacity(), 1);
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn capacity_above_soft_cap_is_kept_with_one_warning() {
        let parsed = parse("amount = 100").unwrap();
        assert_eq!(parsed.definition.capacity(), 100);
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].contains("recommended maximum"));
    }

    #[test]
    fn capacity_within_range_is_identity() {
        for amount in [1, 2, 27, 54] {
            let parsed = parse(&format!("amount = {amount}")).unwrap();
            assert_eq!(parsed.definition.capacity(), amount);
            assert!(parsed.warnings.is_empty(), "amount {amount} should not warn");
        }
    }

    #[test]
    fn non_integer_amount_defaults() {
        let parsed = parse("amount = \"lots\"").unwrap();
        assert_eq!(parsed.definition.capacity(), 1);
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn icon_resolves_with_spaces_and_case() {
        let parsed = parse("icon = \"gold nugget\"").unwrap();
        assert_eq!(parsed.definition.icon().name(), "GOLD_NUGGET");
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn unknown_icon_falls_back_to_sentinel() {
        let parsed = parse("icon = \"unobtainium\"").unwrap();
        assert!(parsed.definition.icon().is_sentinel());
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn non_item_icon_falls_back_to_sentinel() {
        let parsed = parse("icon = \"water\"").unwrap();
        assert!(parsed.definition.icon().is_sentinel());
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].contains("not an item"));
    }

    #[test]
    fn integer_item_model_is_legacy() {
        let parsed = parse("item-model = \"42\"").unwrap();
        assert_eq!(parsed.definition.model(), &ModelRef::Legacy(42));
    }

    #[test]
    fn text_item_model_is_named() {
        let parsed = parse("item-model = \"mymod:ring_icon\"").unwrap();
        let key = parsed.definition.model().item_model().unwrap();
        assert_eq!(key.to_string(), "mymod:ring_icon");
        assert!(parsed.definition.model().custom_model_data().is_none());
    }

    #[test]
    fn bare_item_model_gets_default_namespace() {
        let parsed = parse("item-model = \"ring_icon\"").unwrap();
        assert_eq!(
            parsed.definition.model().item_model().unwrap().to_string(),
            "minecraft:ring_icon"
        );
    }

    #[test]
    fn explicit_custom_model_data_wins() {
        let parsed = parse("item-model = \"42\"\ncustom-model-data = 7").unwrap();
        assert_eq!(parsed.definition.model(), &ModelRef::Legacy(7));

        let parsed = parse("item-model = \"mymod:ring\"\ncustom-model-data = 7").unwrap();
        assert_eq!(parsed.definition.model(), &ModelRef::Legacy(7));
    }

    #[test]
    fn unusable_custom_model_data_still_clears_named_model() {
        let parsed = parse(
            r#"
            item-model = "mymod:ring"
            custom-model-data = "seven"
            "#,
        )
        .unwrap();
        assert!(parsed.definition.model().is_none());
        assert_eq!(parsed.warnings.len(), 1);

        let parsed = parse(
            r#"
            item-model = "mymod:ring"
            custom-model-data = 99999999999
            "#,
        )
        .unwrap();
        assert!(parsed.definition.model().is_none());
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].contains("out of 32-bit range"));
    }

    #[test]
    fn custom_model_data_alone_is_legacy() {
        let parsed = parse("custom-model-data = 1001").unwrap();
        assert_eq!(parsed.definition.model(), &ModelRef::Legacy(1001));
    }

    #[test]
    fn unusable_item_model_warns_and_clears() {
        let parsed = parse("item-model = \"Bad Key!\"").unwrap();
        assert!(parsed.definition.model().is_none());
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn blank_item_model_is_ignored() {
        let parsed = parse("item-model = \"  \"").unwrap();
        assert!(parsed.definition.model().is_none());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn lore_lines_are_kept_in_order() {
        let parsed = parse("lore = [\"&7first\", \"second\"]").unwrap();
        assert_eq!(parsed.definition.description(), ["&7first", "second"]);
        assert_eq!(
            parsed.definition.colored_description(),
            vec!["§7first", "second"]
        );
    }

    #[test]
    fn missing_lore_is_not_a_warning() {
        let parsed = parse("name = \"&6Ring\"").unwrap();
        assert!(parsed.definition.description().is_empty());
        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.definition.display_name(), "&6Ring");
    }

    #[test]
    fn blank_name_falls_back_to_key() {
        let parsed = parse("name = \"  \"").unwrap();
        assert_eq!(parsed.definition.display_name(), "&fring");
    }
}
