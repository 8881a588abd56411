/// Translation tables and fragment resolution.
///
/// A table maps a lookup key to a partial record (a fragment) whose field
/// names mirror the subset of the document being localized. Keys are stable
/// ids first, display names as a fallback; the distinction is kept visible
/// so reporting can tell fallback matches from exact ones.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub type TranslationFragment = Map<String, Value>;

/// How a fragment was located, if at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FragmentMatch<'a> {
    ById(&'a Value),
    ByName(&'a Value),
    Unmatched,
}

impl<'a> FragmentMatch<'a> {
    pub fn fragment(&self) -> Option<&'a Value> {
        match self {
            Self::ById(fragment) | Self::ByName(fragment) => Some(fragment),
            Self::Unmatched => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::ByName(_))
    }
}

/// Resolve a fragment inside any translation object, trying the stable id
/// before the display name. Shared by the table itself and the nested
/// collection converters, whose fragments are plain JSON objects.
pub fn resolve_fragment<'a>(
    translations: &'a Map<String, Value>,
    id: Option<&str>,
    name: Option<&str>,
) -> FragmentMatch<'a> {
    if let Some(fragment) = id.and_then(|key| translations.get(key)) {
        return FragmentMatch::ById(fragment);
    }
    if let Some(fragment) = name.and_then(|key| translations.get(key)) {
        return FragmentMatch::ByName(fragment);
    }
    FragmentMatch::Unmatched
}

/// One loaded translation table, read-only for the duration of a pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: Map<String, Value>,
}

impl TranslationTable {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let table = serde_json::from_value(value).context("translation table must be an object")?;
        Ok(table)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading translations from {}", path.as_ref().display()))?;
        let table = serde_json::from_str(&content).context("parsing translation table")?;
        Ok(table)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn resolve(&self, id: Option<&str>, name: Option<&str>) -> FragmentMatch<'_> {
        resolve_fragment(&self.entries, id, name)
    }
}
