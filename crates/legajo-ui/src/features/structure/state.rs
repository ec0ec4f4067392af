//! Structure map state.
//!
//! # Design
//! - One owner for the key -> section mapping; callers go through `merge`,
//!   `set`, `remove` and `to_json` instead of touching entries directly.
//! - Keys carry a zero-padded numeric prefix, so key order is display order.
//! - Cached copies are validated as a whole: one bad entry rejects the lot.
//! - Server copies are patches: fields they omit keep the cached or default value.

use legajo_api_models::{DocumentSection, SectionPatch};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Suffix of keys created through the "add section" control.
pub const NEW_KEY_SUFFIX: &str = "Nueva";

/// Failures while loading or serializing a structure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// The cached text is not JSON.
    #[error("cached structure is not valid JSON: {0}")]
    Malformed(String),
    /// The cached JSON is not an object.
    #[error("cached structure must be a JSON object")]
    NotAnObject,
    /// An entry lacks its section id.
    #[error("cached entry `{key}` is missing `id_seccion`")]
    MissingSectionId {
        /// Offending key.
        key: String,
    },
    /// An entry has the section id but the wrong field types.
    #[error("cached entry `{key}` has an invalid shape: {detail}")]
    InvalidEntry {
        /// Offending key.
        key: String,
        /// Decoder message.
        detail: String,
    },
    /// Serialization failed.
    #[error("structure could not be serialized: {0}")]
    Serialize(String),
}

/// Why an entry cannot be submitted yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    /// No section selected.
    MissingSection,
    /// No document type selected.
    MissingDocumentType,
    /// A page number below 1.
    PageBelowOne,
    /// End page before start page.
    ReversedRange,
}

impl IssueKind {
    /// User-facing description.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingSection => "falta seleccionar la sección",
            Self::MissingDocumentType => "falta seleccionar el tipo de documento",
            Self::PageBelowOne => "las páginas deben ser mayores o iguales a 1",
            Self::ReversedRange => "la página final es anterior a la inicial",
        }
    }
}

/// Entry that would be rejected on submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionIssue {
    /// Entry key.
    pub key: String,
    /// First problem found for the entry.
    pub kind: IssueKind,
}

/// Ordered key -> section mapping describing how a scanned file splits into documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureMap {
    entries: BTreeMap<String, DocumentSection>,
}

impl StructureMap {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock seven-document layout every personnel file starts from.
    #[must_use]
    pub fn with_defaults() -> Self {
        let defaults = [
            ("01_DNI", 1, "DNI", "Cédula de Identidad", 1, 1),
            ("02_Curriculum", 2, "Curriculum", "Currículum Vitae", 2, 5),
            ("03_Titulo_Universitario", 3, "Titulo", "Título Universitario", 6, 6),
            ("04_Contrato_Laboral", 4, "Contrato", "Contrato Laboral", 7, 12),
            ("05_Antecedentes_Penales", 5, "Antecedentes", "Antecedentes Penales", 13, 14),
            ("06_Carnet_Sanitario", 6, "Carnet", "Carnet Sanitario", 15, 15),
            ("07_Licencias", 7, "Licencias", "Licencias Profesionales", 16, 20),
        ];
        let entries = defaults
            .into_iter()
            .map(|(key, section_id, doc_type, description, start, end)| {
                (
                    key.to_string(),
                    DocumentSection {
                        section_id,
                        document_type: doc_type.to_string(),
                        description: description.to_string(),
                        page_start: start,
                        page_end: end,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Parse and validate a cached structure.
    ///
    /// # Errors
    /// Returns [`StructureError`] when the text is not a JSON object or any
    /// entry lacks `id_seccion` or has mistyped fields.
    pub fn from_cache_json(raw: &str) -> Result<Self, StructureError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|err| StructureError::Malformed(err.to_string()))?;
        Self::from_cache_value(value)
    }

    /// Validate an already decoded cached structure.
    ///
    /// # Errors
    /// See [`StructureMap::from_cache_json`].
    pub fn from_cache_value(value: Value) -> Result<Self, StructureError> {
        let Value::Object(object) = value else {
            return Err(StructureError::NotAnObject);
        };
        let mut entries = BTreeMap::new();
        for (key, entry) in object {
            let has_section_id = entry
                .as_object()
                .is_some_and(|fields| fields.contains_key("id_seccion"));
            if !has_section_id {
                return Err(StructureError::MissingSectionId { key });
            }
            let section = serde_json::from_value::<DocumentSection>(entry).map_err(|err| {
                StructureError::InvalidEntry {
                    key: key.clone(),
                    detail: err.to_string(),
                }
            })?;
            entries.insert(key, section);
        }
        Ok(Self { entries })
    }

    /// Overlay `other` onto this map; incoming values win on shared keys.
    pub fn merge<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (String, DocumentSection)>,
    {
        self.entries.extend(other);
    }

    /// Apply server patches field by field; unknown keys start from a blank entry.
    pub fn overlay<I>(&mut self, patches: I)
    where
        I: IntoIterator<Item = (String, SectionPatch)>,
    {
        for (key, patch) in patches {
            patch.apply(self.entries.entry(key).or_insert_with(DocumentSection::blank));
        }
    }

    /// Working map for one page load: defaults, then the cached copy, then the server patches.
    ///
    /// A cached copy that fails validation is skipped and its error returned so
    /// the caller can clear it from storage.
    #[must_use]
    pub fn assemble<I>(cached: Option<&str>, server: Option<I>) -> (Self, Option<StructureError>)
    where
        I: IntoIterator<Item = (String, SectionPatch)>,
    {
        let mut map = Self::with_defaults();
        let rejected = match cached.map(Self::from_cache_json) {
            Some(Ok(cached)) => {
                map.merge(cached);
                None
            }
            Some(Err(err)) => Some(err),
            None => None,
        };
        if let Some(patches) = server {
            map.overlay(patches);
        }
        (map, rejected)
    }

    /// Insert or overwrite one entry, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, section: DocumentSection) -> Option<DocumentSection> {
        self.entries.insert(key.into(), section)
    }

    /// Remove one entry.
    pub fn remove(&mut self, key: &str) -> Option<DocumentSection> {
        self.entries.remove(key)
    }

    /// Look up one entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DocumentSection> {
        self.entries.get(key)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentSection)> {
        self.entries.iter().map(|(key, section)| (key.as_str(), section))
    }

    /// Keys in display order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// JSON text for the cache and the hidden submission field.
    ///
    /// # Errors
    /// Returns [`StructureError::Serialize`] if encoding fails.
    pub fn to_json(&self) -> Result<String, StructureError> {
        serde_json::to_string(&self.entries).map_err(|err| StructureError::Serialize(err.to_string()))
    }

    /// Key for the next added section: `NN_Nueva` with `NN = len + 1`, bumped past collisions.
    #[must_use]
    pub fn next_new_key(&self) -> String {
        let mut number = self.entries.len() + 1;
        loop {
            let key = format!("{number:02}_{NEW_KEY_SUFFIX}");
            if !self.entries.contains_key(&key) {
                return key;
            }
            number += 1;
        }
    }

    /// Append a blank section and return its key.
    pub fn add_blank(&mut self) -> String {
        let key = self.next_new_key();
        self.entries.insert(key.clone(), DocumentSection::blank());
        key
    }

    /// Entries the server would refuse, in key order.
    #[must_use]
    pub fn submission_issues(&self) -> Vec<SubmissionIssue> {
        self.entries
            .iter()
            .filter_map(|(key, section)| {
                entry_issue(section).map(|kind| SubmissionIssue {
                    key: key.clone(),
                    kind,
                })
            })
            .collect()
    }

    /// Sum of [`page_count`] over all entries.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.entries
            .values()
            .map(page_count)
            .fold(0, u32::saturating_add)
    }
}

impl FromIterator<(String, DocumentSection)> for StructureMap {
    fn from_iter<T: IntoIterator<Item = (String, DocumentSection)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StructureMap {
    type Item = (String, DocumentSection);
    type IntoIter = std::collections::btree_map::IntoIter<String, DocumentSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

fn entry_issue(section: &DocumentSection) -> Option<IssueKind> {
    if section.section_id == 0 {
        return Some(IssueKind::MissingSection);
    }
    if section.document_type.trim().is_empty() {
        return Some(IssueKind::MissingDocumentType);
    }
    if section.page_start < 1 || section.page_end < 1 {
        return Some(IssueKind::PageBelowOne);
    }
    if section.page_end < section.page_start {
        return Some(IssueKind::ReversedRange);
    }
    None
}

/// Page column text: `"5"` for a single page, `"7-12"` for a range.
#[must_use]
pub fn page_range_label(section: &DocumentSection) -> String {
    if section.page_start == section.page_end {
        section.page_start.to_string()
    } else {
        format!("{}-{}", section.page_start, section.page_end)
    }
}

/// Pages covered by the entry, zero for a reversed range.
#[must_use]
pub const fn page_count(section: &DocumentSection) -> u32 {
    if section.page_end < section.page_start {
        0
    } else {
        section
            .page_end
            .saturating_sub(section.page_start)
            .saturating_add(1)
    }
}
