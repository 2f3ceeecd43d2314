use indexmap::IndexMap;
use serde::Serialize;

use crate::error::LoadError;
use crate::node::kind;

/// Canonical display names for raw kinds, consulted before pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KindNames {
    names: IndexMap<String, String>,
}

impl Default for KindNames {
    fn default() -> Self {
        let mut names = IndexMap::new();
        names.insert(kind::DATE.to_owned(), "Date".to_owned());
        Self { names }
    }
}

impl KindNames {
    /// A table with no entries; every kind passes through.
    pub fn empty() -> Self {
        Self { names: IndexMap::new() }
    }

    pub fn insert(&mut self, raw: impl Into<String>, display: impl Into<String>) -> Option<String> {
        self.names.insert(raw.into(), display.into())
    }

    pub fn get(&self, raw: &str) -> Option<&str> {
        self.names.get(raw).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a `raw=Display` override, as given on the command line.
    pub fn parse_entry(src: &str) -> Result<(String, String), LoadError> {
        match src.split_once('=') {
            Some((raw, display)) if !raw.trim().is_empty() && !display.trim().is_empty() => {
                Ok((raw.trim().to_owned(), display.trim().to_owned()))
            }
            _ => Err(LoadError::KindName(src.to_owned())),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for KindNames {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (raw, display) in iter {
            self.insert(raw, display);
        }
    }
}
