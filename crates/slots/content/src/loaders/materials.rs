//! Material catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use slots_core::{Material, MaterialTable};

use crate::loaders::{LoadResult, read_file};

/// Material catalog structure for RON files.
///
/// ```ron
/// (
///     items: ["STONE", "BARRIER", "GOLD_NUGGET"],
///     blocks: ["AIR", "WATER"],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialCatalogFile {
    pub items: Vec<String>,
    #[serde(default)]
    pub blocks: Vec<String>,
}

impl MaterialCatalogFile {
    /// Builds the in-memory table. A name listed as both item and block is
    /// treated as a block.
    pub fn into_table(self) -> MaterialTable {
        self.items
            .iter()
            .map(|name| Material::item(name))
            .chain(self.blocks.iter().map(|name| Material::block(name)))
            .collect()
    }
}

/// Loader for material catalogs from RON files.
pub struct MaterialLoader;

impl MaterialLoader {
    /// Load a material catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a [`MaterialCatalogFile`]
    pub fn load(path: &Path) -> LoadResult<MaterialTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse material catalog {}: {}", path.display(), e))
    }

    /// Parse a material catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<MaterialTable> {
        let catalog: MaterialCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse material catalog RON: {}", e))?;

        if !catalog.items.iter().any(|name| Material::item(name).is_sentinel()) {
            tracing::warn!(
                "material catalog does not list {}; fallback icons will not resolve",
                Material::SENTINEL_NAME
            );
        }

        Ok(catalog.into_table())
    }
}
