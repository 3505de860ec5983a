//! Slot type definitions.
//!
//! A [`SlotDefinition`] describes one accessory category (ring, necklace, ...)
//! and how it is presented. Definitions are immutable once built; the registry
//! replaces them wholesale on reload.

use crate::colors;
use crate::material::Material;
use crate::model::ModelRef;

/// Hard floor for slot capacity. Lower values are raised silently.
pub const MIN_CAPACITY: u32 = 1;

/// Soft ceiling for slot capacity (one double chest). Larger values are
/// accepted but flagged.
pub const RECOMMENDED_MAX_CAPACITY: u32 = 54;

/// Color prefix applied to the key when no display name is configured.
pub const DEFAULT_NAME_COLOR: &str = "&f";

/// One named accessory slot category.
///
/// # Invariants
///
/// - `key` is non-blank
/// - `display_name` is non-blank
/// - `icon` is always an item material
/// - `capacity >= MIN_CAPACITY`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotDefinition {
    key: String,
    display_name: String,
    icon: Material,
    model: ModelRef,
    capacity: u32,
    description: Vec<String>,
}

impl SlotDefinition {
    /// Creates a builder for the slot type `key`.
    pub fn builder(key: impl Into<String>) -> SlotDefinitionBuilder {
        SlotDefinitionBuilder::new(key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name with `&` markup left in place.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Display name with markup translated to presentation color codes.
    pub fn colored_display_name(&self) -> String {
        colors::translate(&self.display_name)
    }

    pub fn icon(&self) -> &Material {
        &self.icon
    }

    pub fn model(&self) -> &ModelRef {
        &self.model
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns true when the capacity is above [`RECOMMENDED_MAX_CAPACITY`].
    pub fn exceeds_recommended_capacity(&self) -> bool {
        self.capacity > RECOMMENDED_MAX_CAPACITY
    }

    /// Description lines with `&` markup left in place.
    pub fn description(&self) -> &[String] {
        &self.description
    }

    /// Description lines with markup translated.
    pub fn colored_description(&self) -> Vec<String> {
        colors::translate_lines(&self.description)
    }
}

/// Builder for [`SlotDefinition`].
///
/// Unset fields fall back to the same defaults the configuration parser uses:
/// `"&f<key>"` name, `STONE` icon, no model, capacity 1, no description.
#[derive(Debug)]
pub struct SlotDefinitionBuilder {
    key: String,
    display_name: Option<String>,
    icon: Option<Material>,
    model: ModelRef,
    capacity: u32,
    description: Vec<String>,
}

impl SlotDefinitionBuilder {
    fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into().trim().to_string(),
            display_name: None,
            icon: None,
            model: ModelRef::None,
            capacity: MIN_CAPACITY,
            description: Vec::new(),
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets the icon. Non-item materials are replaced by the sentinel.
    pub fn icon(mut self, icon: Material) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn model(mut self, model: ModelRef) -> Self {
        self.model = model;
        self
    }

    /// Sets the capacity, raised to [`MIN_CAPACITY`] if lower.
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn description<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.description = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one description line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    pub fn build(self) -> SlotDefinition {
        let display_name = match self.display_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => format!("{DEFAULT_NAME_COLOR}{}", self.key),
        };

        let icon = match self.icon {
            Some(icon) if icon.is_item() => icon,
            Some(_) => Material::sentinel(),
            None => Material::item(Material::DEFAULT_ICON_NAME),
        };

        SlotDefinition {
            key: self.key,
            display_name,
            icon,
            model: self.model,
            capacity: self.capacity.max(MIN_CAPACITY),
            description: self.description,
        }
    }
}
