#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the legajo records API.
//!
//! The records backend speaks Spanish field names on the wire (`id_seccion`,
//! `nombre`, `cantidad`, ...). These types keep the Rust side in English and pin
//! the wire names with serde attributes so the mapping lives in one place.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One selectable entry of a server-defined catalog (sections or document types).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Catalog identifier.
    pub id: u32,
    /// Display name.
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
}

/// Section catalog entry returned by the section lookup endpoint.
pub type SectionOption = CatalogEntry;

/// Document type entry returned by the per-section lookup endpoint.
pub type DocumentTypeOption = CatalogEntry;

/// One labelled page range of a scanned personnel file.
///
/// Every field defaults when absent so partially populated server payloads
/// still decode; stricter shape checks belong to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocumentSection {
    /// Section catalog id, `0` when unset.
    #[serde(rename = "id_seccion", default)]
    pub section_id: u32,
    /// Document type display label (not its catalog id).
    #[serde(rename = "tipo_documento", default)]
    pub document_type: String,
    /// Free-text description.
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// First page (1-based, inclusive).
    #[serde(rename = "pagina_inicio", default = "first_page")]
    pub page_start: u32,
    /// Last page (1-based, inclusive).
    #[serde(rename = "pagina_fin", default = "first_page")]
    pub page_end: u32,
}

const fn first_page() -> u32 {
    1
}

impl DocumentSection {
    /// Blank entry used for freshly added rows.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            section_id: 0,
            document_type: String::new(),
            description: String::new(),
            page_start: 1,
            page_end: 1,
        }
    }
}

/// Field-level update for one structure entry, as served by the personnel
/// structure endpoint.
///
/// The stock server layout omits `id_seccion`, so absent fields must leave the
/// entry they land on untouched rather than reset it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SectionPatch {
    /// Section catalog id.
    #[serde(rename = "id_seccion", default)]
    pub section_id: Option<u32>,
    /// Document type display label.
    #[serde(rename = "tipo_documento", default)]
    pub document_type: Option<String>,
    /// Free-text description.
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    /// First page.
    #[serde(rename = "pagina_inicio", default)]
    pub page_start: Option<u32>,
    /// Last page.
    #[serde(rename = "pagina_fin", default)]
    pub page_end: Option<u32>,
}

impl SectionPatch {
    /// Overwrite the fields of `section` this patch carries.
    pub fn apply(self, section: &mut DocumentSection) {
        if let Some(section_id) = self.section_id {
            section.section_id = section_id;
        }
        if let Some(document_type) = self.document_type {
            section.document_type = document_type;
        }
        if let Some(description) = self.description {
            section.description = description;
        }
        if let Some(page_start) = self.page_start {
            section.page_start = page_start;
        }
        if let Some(page_end) = self.page_end {
            section.page_end = page_end;
        }
    }

    /// The patch applied to a blank entry.
    #[must_use]
    pub fn into_section(self) -> DocumentSection {
        let mut section = DocumentSection::blank();
        self.apply(&mut section);
        section
    }
}

/// Structure entry as emitted by the personnel structure endpoint.
///
/// Older backends answer with bare `[start, end]` pairs instead of objects.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StructureEntryWire {
    /// Bare inclusive page range.
    Range([u32; 2]),
    /// Section object, possibly partial.
    Section(SectionPatch),
}

impl From<StructureEntryWire> for SectionPatch {
    fn from(value: StructureEntryWire) -> Self {
        match value {
            StructureEntryWire::Range([page_start, page_end]) => Self {
                page_start: Some(page_start),
                page_end: Some(page_end),
                ..Self::default()
            },
            StructureEntryWire::Section(patch) => patch,
        }
    }
}

/// Response of `GET /personnel-structure/{personnelId}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PersonnelStructureResponse {
    /// Explicit success flag; absent means success.
    #[serde(default)]
    pub success: Option<bool>,
    /// Key to entry mapping.
    #[serde(rename = "estructura", alias = "structure", default)]
    pub structure: BTreeMap<String, StructureEntryWire>,
}

impl PersonnelStructureResponse {
    /// Entry patches carried by a successful response.
    #[must_use]
    pub fn into_patches(self) -> Option<BTreeMap<String, SectionPatch>> {
        if self.success == Some(false) {
            return None;
        }
        Some(
            self.structure
                .into_iter()
                .map(|(key, entry)| (key, SectionPatch::from(entry)))
                .collect(),
        )
    }
}

/// Response of the DNI existence lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DniCheckResponse {
    /// Whether a personnel record already uses the DNI.
    pub exists: bool,
}

/// Row of the personnel list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonnelSummary {
    /// Personnel identifier.
    pub id: u64,
    /// Full display name.
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: String,
    /// National identity document number.
    #[serde(default)]
    pub dni: String,
}

/// Headcount per organisational unit embedded in the HR dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitHeadcount {
    /// Unit display name.
    #[serde(rename = "nombre_unidad")]
    pub unit: String,
    /// Active personnel in the unit.
    #[serde(rename = "cantidad")]
    pub count: u32,
}

/// Headcount per employment status embedded in the HR dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusHeadcount {
    /// Status label (active, inactive, ...).
    #[serde(rename = "estado")]
    pub status: String,
    /// Personnel with the status.
    #[serde(rename = "cantidad")]
    pub count: u32,
}

/// Headcount per sex embedded in the HR dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SexHeadcount {
    /// Sex label.
    #[serde(rename = "sexo")]
    pub sex: String,
    /// Personnel with the label.
    #[serde(rename = "cantidad")]
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entry_accepts_spanish_and_english_names() {
        let spanish: CatalogEntry =
            serde_json::from_str(r#"{"id": 3, "nombre": "Títulos"}"#).expect("decode");
        let english: CatalogEntry =
            serde_json::from_str(r#"{"id": 3, "name": "Títulos"}"#).expect("decode");
        assert_eq!(spanish, english);
        assert_eq!(
            serde_json::to_value(&spanish).expect("encode")["nombre"],
            "Títulos"
        );
    }

    #[test]
    fn structure_response_handles_missing_section_ids_and_ranges() {
        let body = r#"{
            "estructura": {
                "01_DNI": {"tipo_documento": "DNI", "descripcion": "Cédula", "pagina_inicio": 1, "pagina_fin": 1},
                "02_Curriculum": [2, 5]
            }
        }"#;
        let response: PersonnelStructureResponse = serde_json::from_str(body).expect("decode");
        let patches = response.into_patches().expect("success");
        assert_eq!(patches["01_DNI"].section_id, None);
        assert_eq!(patches["01_DNI"].document_type.as_deref(), Some("DNI"));
        assert_eq!(patches["02_Curriculum"].page_start, Some(2));
        assert_eq!(patches["02_Curriculum"].page_end, Some(5));
        assert_eq!(patches["02_Curriculum"].document_type, None);
    }

    #[test]
    fn patch_without_section_id_keeps_the_existing_one() {
        let mut section = DocumentSection {
            section_id: 1,
            document_type: "Pasaporte".to_string(),
            description: String::new(),
            page_start: 1,
            page_end: 2,
        };
        let patch: SectionPatch = serde_json::from_str(
            r#"{"tipo_documento": "DNI", "descripcion": "Cédula de Identidad", "pagina_inicio": 1, "pagina_fin": 1}"#,
        )
        .expect("decode");
        patch.apply(&mut section);
        assert_eq!(section.section_id, 1);
        assert_eq!(section.document_type, "DNI");
        assert_eq!(section.page_end, 1);
    }

    #[test]
    fn range_patch_on_a_blank_entry_sets_only_pages() {
        let section = SectionPatch::from(StructureEntryWire::Range([3, 4])).into_section();
        assert_eq!(section.section_id, 0);
        assert!(section.document_type.is_empty());
        assert_eq!((section.page_start, section.page_end), (3, 4));
    }

    #[test]
    fn structure_response_with_failure_flag_yields_nothing() {
        let body = r#"{"success": false, "structure": {}}"#;
        let response: PersonnelStructureResponse = serde_json::from_str(body).expect("decode");
        assert!(response.into_patches().is_none());
    }

    #[test]
    fn document_section_serializes_wire_names() {
        let section = DocumentSection {
            section_id: 4,
            document_type: "Contrato".to_string(),
            description: "Contrato Laboral".to_string(),
            page_start: 7,
            page_end: 12,
        };
        let value = serde_json::to_value(&section).expect("encode");
        assert_eq!(value["id_seccion"], 4);
        assert_eq!(value["tipo_documento"], "Contrato");
        assert_eq!(value["pagina_inicio"], 7);
        assert_eq!(value["pagina_fin"], 12);
    }
}
