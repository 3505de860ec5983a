//! Raw configuration sources.
//!
//! A [`ConfigSource`] yields the whole document as a TOML table. The registry
//! calls [`ConfigSource::read`] on every load, so file-backed sources pick up
//! edits on reload.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read slot configuration {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse slot configuration from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Supplier of the raw configuration tree.
pub trait ConfigSource: Send + Sync {
    /// Reads the current document.
    fn read(&self) -> Result<toml::Table, SourceError>;

    /// Human-readable origin for diagnostics.
    fn origin(&self) -> String;
}

/// TOML file on disk, re-read on every call.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileSource {
    fn read(&self) -> Result<toml::Table, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        parse_document(&content, &self.origin())
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// Document held in memory. Used by hosts that assemble configuration
/// themselves, and by tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    document: toml::Table,
}

impl StaticSource {
    pub fn new(document: toml::Table) -> Self {
        Self { document }
    }

    /// Replaces the held document; the next load sees the new content.
    pub fn replace(&mut self, document: toml::Table) {
        self.document = document;
    }
}

impl FromStr for StaticSource {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_document(s, "<inline>").map(Self::new)
    }
}

impl ConfigSource for StaticSource {
    fn read(&self) -> Result<toml::Table, SourceError> {
        Ok(self.document.clone())
    }

    fn origin(&self) -> String {
        "<inline>".to_string()
    }
}

fn parse_document(content: &str, origin: &str) -> Result<toml::Table, SourceError> {
    toml::from_str(content).map_err(|source| SourceError::Parse {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_parses_inline_toml() {
        let source: StaticSource = "[slots.ring]\namount = 2\n".parse().unwrap();
        let document = source.read().unwrap();
        let ring = document["slots"]["ring"].as_table().unwrap();
        assert_eq!(ring["amount"].as_integer(), Some(2));
    }

    #[test]
    fn static_source_rejects_malformed_toml() {
        let err = "[slots.ring\n".parse::<StaticSource>().unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let source = FileSource::new("/definitely/not/here/slots.toml");
        let err = source.read().unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("slots.toml"));
    }
}
