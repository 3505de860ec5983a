//! Slot type registry built from declarative configuration.
//!
//! This crate turns a TOML document into validated [`slots_core::SlotDefinition`]s:
//! - [`source`]: where the raw document comes from (file or in-memory)
//! - [`entry`]: per-entry parsing with field fallbacks
//! - [`registry`]: the case-insensitive namespace, reload and audit
//! - [`loaders`]: file-backed material catalogs (RON)
//!
//! A bad entry never aborts a load; it is counted, logged, and skipped.

pub mod entry;
pub mod registry;
pub mod source;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use entry::{EntryRejection, EntryWarning, ParsedEntry, parse_entry};
pub use registry::{LoadSummary, RegistryError, SLOTS_SECTION, SlotRegistry, normalize_key};
pub use source::{ConfigSource, FileSource, SourceError, StaticSource};

#[cfg(feature = "loaders")]
pub use loaders::MaterialLoader;
