//! Property bag abstraction and the in-memory session.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::SessionError;

/// Host-owned key/value store mutated in place by custom actions.
pub trait PropertyBag {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Removes `key` from the bag.
    fn remove(&mut self, key: &str);
}

/// In-memory session, persisted as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemorySession {
    properties: BTreeMap<String, String>,
}

impl MemorySession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a session from a JSON file.
    ///
    /// A missing file yields an empty session.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "session file not found, starting empty");
            return Ok(Self::new());
        }
        let data = std::fs::read_to_string(path)?;
        let session: Self = serde_json::from_str(&data)?;
        tracing::debug!(
            path = %path.display(),
            properties = session.properties.len(),
            "session loaded"
        );
        Ok(session)
    }

    /// Writes the session to a JSON file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "session saved");
        Ok(())
    }

    /// Iterates over all properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyBag for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.properties.remove(key);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemorySession {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
