//! Lookup tables built from a [`KeywordMapping`].

use std::collections::{
    BTreeMap,
    HashMap,
    HashSet,
};

use super::{
    KeymapError,
    KeywordMapping,
};
use crate::syntax::is_valid_host_ident;

/// Bidirectional keyword and predeclared-identifier tables for one locale.
///
/// Immutable once built; share it by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct Maps {
    /// Localized keyword to Go keyword.
    local_to_host: HashMap<String, String>,
    /// Go keyword to localized keyword.
    host_to_local: HashMap<String, String>,
    /// Localized name to Go predeclared identifier.
    local_to_host_predeclared: HashMap<String, String>,
    /// Go predeclared identifier to localized name.
    host_to_local_predeclared: HashMap<String, String>,
    /// Every localized spelling from both dictionaries.
    local_all: HashSet<String>,
    /// Accept bare Go names in localized source.
    allow_host_keywords: bool,
}

impl Maps {
    /// Parses keyword map JSON and builds the lookup tables.
    pub fn load(data: &[u8], allow_host_keywords: bool) -> Result<Self, KeymapError> {
        let mapping: KeywordMapping = serde_json::from_slice(data)?;
        Self::from_mapping(&mapping, allow_host_keywords)
    }

    /// Builds the lookup tables from an already parsed mapping.
    pub fn from_mapping(
        mapping: &KeywordMapping,
        allow_host_keywords: bool,
    ) -> Result<Self, KeymapError> {
        if let Some(key) = mapping.keywords.keys().find(|key| mapping.predeclared.contains_key(*key))
        {
            return Err(KeymapError::ConflictingKey { key: key.clone() });
        }

        let mut maps = Self { allow_host_keywords, ..Self::default() };
        fill_tables(
            &mapping.keywords,
            &mut maps.local_to_host,
            &mut maps.host_to_local,
            &mut maps.local_all,
        )?;
        fill_tables(
            &mapping.predeclared,
            &mut maps.local_to_host_predeclared,
            &mut maps.host_to_local_predeclared,
            &mut maps.local_all,
        )?;

        tracing::debug!(
            keywords = maps.local_to_host.len(),
            predeclared = maps.local_to_host_predeclared.len(),
            allow_host_keywords,
            "Keyword maps loaded"
        );
        Ok(maps)
    }

    /// Go keyword for a localized keyword.
    #[must_use]
    pub fn local_keyword(&self, local: &str) -> Option<&str> {
        self.local_to_host.get(local).map(String::as_str)
    }

    /// Go predeclared identifier for a localized name.
    #[must_use]
    pub fn local_predeclared(&self, local: &str) -> Option<&str> {
        self.local_to_host_predeclared.get(local).map(String::as_str)
    }

    /// Localized spelling of a Go keyword.
    #[must_use]
    pub fn host_keyword(&self, host: &str) -> Option<&str> {
        self.host_to_local.get(host).map(String::as_str)
    }

    /// Localized spelling of a Go predeclared identifier.
    #[must_use]
    pub fn host_predeclared(&self, host: &str) -> Option<&str> {
        self.host_to_local_predeclared.get(host).map(String::as_str)
    }

    /// Returns true if `ident` is a localized keyword or predeclared name.
    #[must_use]
    pub fn is_local(&self, ident: &str) -> bool {
        self.local_all.contains(ident)
    }

    /// Returns true if `ident` is a mapped Go keyword or predeclared identifier.
    #[must_use]
    pub fn is_host(&self, ident: &str) -> bool {
        self.host_to_local.contains_key(ident) || self.host_to_local_predeclared.contains_key(ident)
    }

    /// Localized spelling of `chan`, if the locale maps it.
    #[must_use]
    pub fn channel_keyword(&self) -> Option<&str> {
        self.host_keyword("chan")
    }

    /// Whether bare Go keywords are accepted in localized source.
    #[must_use]
    pub const fn allow_host_keywords(&self) -> bool {
        self.allow_host_keywords
    }
}

/// Inserts one dictionary into the forward and backward tables.
///
/// Keys arrive in ascending order; a repeated Go name keeps the last key.
fn fill_tables(
    entries: &BTreeMap<String, String>,
    forward: &mut HashMap<String, String>,
    backward: &mut HashMap<String, String>,
    local_all: &mut HashSet<String>,
) -> Result<(), KeymapError> {
    for (local, host) in entries {
        if !is_valid_host_ident(host) {
            return Err(KeymapError::InvalidHostName { key: local.clone(), value: host.clone() });
        }
        forward.insert(local.clone(), host.clone());
        if let Some(previous) = backward.insert(host.clone(), local.clone()) {
            tracing::warn!(
                host = %host,
                previous = %previous,
                kept = %local,
                "Go name is mapped more than once; keeping the last localized spelling"
            );
        }
        local_all.insert(local.clone());
    }
    Ok(())
}
