//! Host material catalog boundary.
//!
//! Slot icons reference materials owned by the host runtime. The registry only
//! needs two facts about a material: its canonical name and whether it can be
//! held as an item. [`MaterialCatalog`] exposes exactly that.

use std::collections::HashMap;
use std::fmt;

/// Canonicalizes a material name for lookup.
///
/// Trims, replaces spaces with underscores and upper-cases, so
/// `"gold nugget"` and `"GOLD_NUGGET"` resolve to the same entry.
pub fn normalize_material_name(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_ascii_uppercase()
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    name: String,
    is_item: bool,
}

impl Material {
    /// Fallback icon substituted whenever a configured icon is unusable.
    pub const SENTINEL_NAME: &'static str = "BARRIER";

    /// Icon used when a slot does not configure one.
    pub const DEFAULT_ICON_NAME: &'static str = "STONE";

    /// A material that can be held in an inventory.
    pub fn item(name: &str) -> Self {
        Self {
            name: normalize_material_name(name),
            is_item: true,
        }
    }

    /// A material that only exists as a world block (air, fluids, portals).
    pub fn block(name: &str) -> Self {
        Self {
            name: normalize_material_name(name),
            is_item: false,
        }
    }

    /// The fallback icon material.
    pub fn sentinel() -> Self {
        Self::item(Self::SENTINEL_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_item(&self) -> bool {
        self.is_item
    }

    pub fn is_sentinel(&self) -> bool {
        self.name == Self::SENTINEL_NAME
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Read-only view of the host's material catalog.
pub trait MaterialCatalog: Send + Sync {
    /// Resolves a material by name. Lookup is case-insensitive and treats
    /// spaces as underscores.
    fn resolve(&self, name: &str) -> Option<Material>;

    /// Returns every known material name, sorted.
    fn names(&self) -> Vec<String>;
}

/// In-memory [`MaterialCatalog`].
#[derive(Clone, Debug, Default)]
pub struct MaterialTable {
    materials: HashMap<String, Material>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table preloaded with common accessory icons and the non-item
    /// blocks most often mistyped as icons.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for name in DEFAULT_ITEMS {
            table.insert(Material::item(name));
        }
        for name in DEFAULT_BLOCKS {
            table.insert(Material::block(name));
        }
        table
    }

    /// Adds or replaces a material.
    pub fn insert(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl FromIterator<Material> for MaterialTable {
    fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
        let mut table = Self::new();
        for material in iter {
            table.insert(material);
        }
        table
    }
}

impl MaterialCatalog for MaterialTable {
    fn resolve(&self, name: &str) -> Option<Material> {
        self.materials.get(&normalize_material_name(name)).cloned()
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.materials.keys().cloned().collect();
        names.sort();
        names
    }
}

const DEFAULT_ITEMS: &[&str] = &[
    "STONE",
    "BARRIER",
    "AMETHYST_SHARD",
    "BLAZE_ROD",
    "BOOK",
    "CHAIN",
    "CLOCK",
    "COMPASS",
    "DIAMOND",
    "ELYTRA",
    "EMERALD",
    "ENDER_EYE",
    "ENDER_PEARL",
    "FEATHER",
    "GOLD_INGOT",
    "GOLD_NUGGET",
    "HEART_OF_THE_SEA",
    "IRON_INGOT",
    "LEATHER",
    "LEATHER_HELMET",
    "NAUTILUS_SHELL",
    "NETHER_STAR",
    "PAPER",
    "PLAYER_HEAD",
    "PRISMARINE_CRYSTALS",
    "RABBIT_FOOT",
    "SHIELD",
    "STRING",
    "TOTEM_OF_UNDYING",
];

const DEFAULT_BLOCKS: &[&str] = &[
    "AIR",
    "CAVE_AIR",
    "VOID_AIR",
    "WATER",
    "LAVA",
    "FIRE",
    "SOUL_FIRE",
    "BUBBLE_COLUMN",
    "END_GATEWAY",
    "END_PORTAL",
    "MOVING_PISTON",
    "NETHER_PORTAL",
    "PISTON_HEAD",
    "REDSTONE_WIRE",
    "TRIPWIRE",
];
