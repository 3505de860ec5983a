//! Case-insensitive registry of slot types.
//!
//! The registry owns every [`SlotDefinition`] it holds and hands out clones.
//! It is populated from a [`ConfigSource`] by [`SlotRegistry::load`], rebuilt
//! by [`SlotRegistry::reload`], and can be extended at runtime with entries
//! that never touch the source.
//!
//! # Concurrency
//!
//! Mutation goes through `&mut self`, so callers serialize loads, reloads and
//! runtime edits. `reload` clears before repopulating; a reader that shares
//! the registry behind a lock it releases between the two steps can observe an
//! empty namespace.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use slots_core::{MIN_CAPACITY, MaterialCatalog, SlotDefinition, ValidationReport};
use thiserror::Error;
use toml::Value;
use tracing::{debug, error, info, warn};

use crate::entry::{EntryWarning, parse_entry};
use crate::source::{ConfigSource, SourceError};

/// Top-level table holding one sub-table per slot type.
pub const SLOTS_SECTION: &str = "slots";

/// Normalizes a slot key for storage and lookup.
///
/// Every insert and lookup goes through this function.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("slot key must not be blank")]
    BlankKey,

    #[error("slot type '{0}' is already registered")]
    DuplicateKey(String),
}

/// Outcome of one load pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Entries accepted (duplicates within the pass count each time).
    pub loaded: usize,
    /// Entries rejected outright.
    pub failed: usize,
    /// Value anomalies that were replaced by defaults or flagged.
    pub warnings: Vec<EntryWarning>,
}

impl LoadSummary {
    /// Warnings recorded for one slot key (case-insensitive).
    pub fn warnings_for(&self, key: &str) -> Vec<&EntryWarning> {
        let key = normalize_key(key);
        self.warnings
            .iter()
            .filter(|warning| normalize_key(&warning.key) == key)
            .collect()
    }
}

/// Namespace of slot definitions keyed by normalized slot key.
pub struct SlotRegistry {
    source: Box<dyn ConfigSource>,
    catalog: Arc<dyn MaterialCatalog>,
    slots: HashMap<String, SlotDefinition>,
}

impl SlotRegistry {
    /// Creates an empty registry. Call [`load`](Self::load) to populate it.
    pub fn new(source: impl ConfigSource + 'static, catalog: Arc<dyn MaterialCatalog>) -> Self {
        Self {
            source: Box::new(source),
            catalog,
            slots: HashMap::new(),
        }
    }

    /// Reads the source and inserts every accepted entry.
    ///
    /// A missing `slots` table leaves the registry untouched and is not an
    /// error. Rejected entries are counted and skipped; they never stop
    /// sibling entries from loading. Within one pass a repeated key (after
    /// normalization) replaces the earlier entry, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Source`] if the document cannot be read or
    /// parsed.
    pub fn load(&mut self) -> Result<LoadSummary, RegistryError> {
        let origin = self.source.origin();
        let document = self.source.read()?;

        let Some(section) = document.get(SLOTS_SECTION).and_then(Value::as_table) else {
            warn!(%origin, "no '{SLOTS_SECTION}' table found, no slot types loaded");
            return Ok(LoadSummary::default());
        };

        let mut summary = LoadSummary::default();
        let mut seen = HashSet::new();

        for (key, value) in section {
            match parse_entry(key, value, self.catalog.as_ref()) {
                Ok(parsed) => {
                    let normalized = normalize_key(key);
                    if !seen.insert(normalized.clone()) {
                        warn!(
                            slot = %key,
                            "duplicate slot key, later definition replaces earlier one"
                        );
                    }
                    debug!(
                        slot = %key,
                        capacity = parsed.definition.capacity(),
                        icon = %parsed.definition.icon(),
                        "loaded slot type"
                    );
                    summary.warnings.extend(
                        parsed
                            .warnings
                            .into_iter()
                            .map(|message| EntryWarning::new(key.as_str(), message)),
                    );
                    self.slots.insert(normalized, parsed.definition);
                    summary.loaded += 1;
                }
                Err(rejection) => {
                    error!(slot = %key, %rejection, "rejected slot configuration");
                    summary.failed += 1;
                }
            }
        }

        info!(
            %origin,
            loaded = summary.loaded,
            failed = summary.failed,
            warnings = summary.warnings.len(),
            "slot configuration loaded"
        );

        Ok(summary)
    }

    /// Clears the namespace and loads again from the source.
    ///
    /// Runtime-registered entries are discarded. If the source fails, the
    /// registry stays empty.
    pub fn reload(&mut self) -> Result<LoadSummary, RegistryError> {
        self.slots.clear();
        self.load()
    }

    /// Snapshot of every registered slot type, keyed by normalized key.
    pub fn slot_configurations(&self) -> HashMap<String, SlotDefinition> {
        self.slots.clone()
    }

    /// Looks up a slot type. Blank keys are never found.
    pub fn slot_configuration(&self, key: &str) -> Option<SlotDefinition> {
        self.get(key).cloned()
    }

    pub fn has_slot_type(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Registers a slot type outside the configuration source.
    ///
    /// Unlike [`load`](Self::load), this never overwrites an existing entry.
    /// The entry lives until the next [`reload`](Self::reload).
    ///
    /// # Errors
    ///
    /// - [`RegistryError::BlankKey`] if `key` is blank
    /// - [`RegistryError::DuplicateKey`] if `key` is already registered
    pub fn add_slot_configuration(
        &mut self,
        key: &str,
        definition: SlotDefinition,
    ) -> Result<(), RegistryError> {
        let normalized = normalize_key(key);
        if normalized.is_empty() {
            return Err(RegistryError::BlankKey);
        }
        if self.slots.contains_key(&normalized) {
            return Err(RegistryError::DuplicateKey(key.trim().to_string()));
        }

        info!(slot = %normalized, "registered runtime slot type");
        self.slots.insert(normalized, definition);
        Ok(())
    }

    /// Removes a slot type, returning it if it was present.
    pub fn remove_slot_configuration(&mut self, key: &str) -> Option<SlotDefinition> {
        let normalized = normalize_key(key);
        if normalized.is_empty() {
            return None;
        }

        let removed = self.slots.remove(&normalized);
        if removed.is_some() {
            info!(slot = %normalized, "removed slot type");
        }
        removed
    }

    /// Audits the current namespace without modifying it.
    ///
    /// Reports an error when nothing is registered, and a warning for each
    /// slot whose capacity is below the floor or whose icon fell back to the
    /// sentinel material.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.slots.is_empty() {
            report.add_error("no slot types are configured");
            return report;
        }

        for key in self.keys() {
            let slot = &self.slots[&key];
            if slot.capacity() < MIN_CAPACITY {
                report.add_warning(format!(
                    "slot '{key}' has capacity {} (minimum is {MIN_CAPACITY})",
                    slot.capacity()
                ));
            }
            if slot.icon().is_sentinel() {
                report.add_warning(format!(
                    "slot '{key}' uses the fallback icon {}; check its icon setting",
                    slot.icon()
                ));
            }
        }

        report
    }

    /// Normalized keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.slots.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Diagnostic description of the configuration source.
    pub fn origin(&self) -> String {
        self.source.origin()
    }

    fn get(&self, key: &str) -> Option<&SlotDefinition> {
        let normalized = normalize_key(key);
        if normalized.is_empty() {
            return None;
        }
        self.slots.get(&normalized)
    }
}

impl std::fmt::Debug for SlotRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotRegistry")
            .field("origin", &self.source.origin())
            .field("slots", &self.keys())
            .finish()
    }
}
