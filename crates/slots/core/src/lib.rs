//! Core value types for accessory slot definitions.
//!
//! This crate holds the immutable data a slot registry hands out:
//! - [`SlotDefinition`]: one named slot category (name, icon, model, capacity, lore)
//! - [`ModelRef`]: legacy integer model data or a namespaced model identifier
//! - [`Material`] and [`MaterialCatalog`]: the host item catalog boundary
//! - [`ValidationReport`]: errors and warnings from a registry audit
//! - [`events`]: cancelable equip and recipe-transfer notifications
//!
//! Parsing raw configuration into these types lives in `slots-content`.

pub mod colors;
pub mod events;
pub mod material;
pub mod model;
pub mod report;
pub mod slot;

pub use events::{
    Cancellable, EquipAction, EventDispatcher, InventoryId, ItemRef, PlayerId,
    RecipeTransferEvent, SlotEquipEvent, SlotEvent, SlotListener,
};
pub use material::{Material, MaterialCatalog, MaterialTable, normalize_material_name};
pub use model::{DEFAULT_NAMESPACE, KeyParseError, ModelRef, NamespacedKey};
pub use report::ValidationReport;
pub use slot::{
    DEFAULT_NAME_COLOR, MIN_CAPACITY, RECOMMENDED_MAX_CAPACITY, SlotDefinition,
    SlotDefinitionBuilder,
};
