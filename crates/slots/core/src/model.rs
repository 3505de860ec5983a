//! Item model references.
//!
//! Older clients select a custom appearance through an integer
//! (`custom-model-data`); newer ones use a namespaced identifier
//! (`item-model`). A slot carries at most one of them.

use std::fmt;
use std::str::FromStr;

/// Namespace assumed when an identifier has no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("namespaced key is empty")]
    Empty,

    #[error("invalid namespace '{0}' (allowed: a-z 0-9 . _ -)")]
    InvalidNamespace(String),

    #[error("invalid path '{0}' (allowed: a-z 0-9 . _ - /)")]
    InvalidPath(String),
}

/// A `namespace:path` identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamespacedKey {
    namespace: String,
    path: String,
}

impl NamespacedKey {
    pub fn new(namespace: &str, path: &str) -> Result<Self, KeyParseError> {
        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(KeyParseError::InvalidNamespace(namespace.to_string()));
        }
        if path.is_empty() || !path.chars().all(is_path_char) {
            return Err(KeyParseError::InvalidPath(path.to_string()));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Parses `namespace:path`, or a bare `path` in [`DEFAULT_NAMESPACE`].
    ///
    /// An empty namespace before the colon (`":ring"`) also selects the default.
    pub fn parse(raw: &str) -> Result<Self, KeyParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(KeyParseError::Empty);
        }

        match raw.split_once(':') {
            Some(("", path)) => Self::new(DEFAULT_NAMESPACE, path),
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, raw),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl FromStr for NamespacedKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Model appearance selected for a slot's icon.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelRef {
    /// Vanilla appearance.
    #[default]
    None,

    /// Integer custom model data.
    Legacy(i32),

    /// Namespaced item model identifier.
    Named(NamespacedKey),
}

impl ModelRef {
    /// Integer model data, if this is a legacy reference.
    pub fn custom_model_data(&self) -> Option<i32> {
        match self {
            Self::Legacy(value) => Some(*value),
            _ => None,
        }
    }

    /// Namespaced model identifier, if this is a named reference.
    pub fn item_model(&self) -> Option<&NamespacedKey> {
        match self {
            Self::Named(key) => Some(key),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Legacy(value) => write!(f, "custom-model-data {value}"),
            Self::Named(key) => write!(f, "item-model {key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_namespaced_key() {
        let key = NamespacedKey::parse("mymod:ring_icon").unwrap();
        assert_eq!(key.namespace(), "mymod");
        assert_eq!(key.path(), "ring_icon");
        assert_eq!(key.to_string(), "mymod:ring_icon");
    }

    #[test]
    fn bare_path_uses_default_namespace() {
        let key: NamespacedKey = "item/ring".parse().unwrap();
        assert_eq!(key.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(key.path(), "item/ring");

        let key = NamespacedKey::parse(":amulet").unwrap();
        assert_eq!(key.namespace(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn rejects_invalid_keys() {
        assert_eq!(NamespacedKey::parse("   "), Err(KeyParseError::Empty));
        assert!(matches!(
            NamespacedKey::parse("My Mod:ring"),
            Err(KeyParseError::InvalidNamespace(_))
        ));
        assert!(matches!(
            NamespacedKey::parse("mymod:Ring"),
            Err(KeyParseError::InvalidPath(_))
        ));
        assert!(matches!(
            NamespacedKey::parse("a:b:c"),
            Err(KeyParseError::InvalidPath(_))
        ));
        assert!(matches!(
            NamespacedKey::parse("mymod:"),
            Err(KeyParseError::InvalidPath(_))
        ));
    }

    #[test]
    fn model_ref_accessors_are_exclusive() {
        let legacy = ModelRef::Legacy(42);
        assert_eq!(legacy.custom_model_data(), Some(42));
        assert!(legacy.item_model().is_none());

        let named = ModelRef::Named(NamespacedKey::parse("mymod:ring").unwrap());
        assert!(named.custom_model_data().is_none());
        assert_eq!(named.item_model().unwrap().path(), "ring");

        assert!(ModelRef::default().is_none());
    }
}
