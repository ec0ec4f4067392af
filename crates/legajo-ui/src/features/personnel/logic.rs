//! Personnel list decoding, filtering and structure preview rows.

use crate::features::structure::state::{page_count, page_range_label};
use legajo_api_models::{DocumentSection, PersonnelSummary};
use serde_json::Value;
use thiserror::Error;

/// Leading option when people are listed.
pub const SELECT_PROMPT: &str = "-- Seleccione un Personal --";
/// Sole option when nobody matches.
pub const EMPTY_LIST: &str = "-- No hay personal disponible --";

/// Personnel list could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonnelListError {
    /// Server answered with an `{error}` object.
    #[error("Error del servidor: {0}")]
    Server(String),
    /// Rows did not match the expected shape.
    #[error("respuesta inválida: {0}")]
    Decode(String),
}

/// Decode the list endpoint body. Non-array bodies are treated as an empty list.
///
/// # Errors
/// Returns [`PersonnelListError::Server`] for an `{error}` body and
/// [`PersonnelListError::Decode`] for malformed rows.
pub fn parse_personnel_list(body: Value) -> Result<Vec<PersonnelSummary>, PersonnelListError> {
    if let Some(message) = body.get("error").filter(|value| !value.is_null()) {
        let message = message
            .as_str()
            .map_or_else(|| message.to_string(), str::to_string);
        return Err(PersonnelListError::Server(message));
    }
    if !body.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(body).map_err(|err| PersonnelListError::Decode(err.to_string()))
}

/// Option text: `"{name} ({dni})"`.
#[must_use]
pub fn option_label(person: &PersonnelSummary) -> String {
    format!("{} ({})", person.name, person.dni)
}

/// People whose name or DNI contains `term`, case-insensitively. A blank term keeps everyone.
#[must_use]
pub fn filter_personnel<'a>(people: &'a [PersonnelSummary], term: &str) -> Vec<&'a PersonnelSummary> {
    let term = term.trim().to_lowercase();
    people
        .iter()
        .filter(|person| {
            term.is_empty()
                || person.name.to_lowercase().contains(&term)
                || person.dni.to_lowercase().contains(&term)
        })
        .collect()
}

/// One preview table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRow {
    /// Structure key.
    pub key: String,
    /// Page column text.
    pub pages: String,
    /// Pages covered.
    pub count: u32,
}

/// Read-only view of a personnel structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructurePreview {
    /// Rows in key order.
    pub rows: Vec<PreviewRow>,
    /// Sum of page counts.
    pub total: u32,
}

impl StructurePreview {
    /// Build the preview from structure entries.
    #[must_use]
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a DocumentSection)>,
    {
        let rows: Vec<PreviewRow> = entries
            .into_iter()
            .map(|(key, section)| PreviewRow {
                key: key.clone(),
                pages: page_range_label(section),
                count: page_count(section),
            })
            .collect();
        let total = rows.iter().map(|row| row.count).fold(0, u32::saturating_add);
        Self { rows, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn people() -> Vec<PersonnelSummary> {
        vec![
            PersonnelSummary {
                id: 1,
                name: "Ana Quispe".to_string(),
                dni: "12345678".to_string(),
            },
            PersonnelSummary {
                id: 2,
                name: "Luis Mamani".to_string(),
                dni: "87654321".to_string(),
            },
        ]
    }

    #[test]
    fn server_error_body_is_reported() {
        let err = parse_personnel_list(json!({"error": "sin conexión"})).expect_err("error body");
        assert_eq!(err, PersonnelListError::Server("sin conexión".to_string()));
        assert_eq!(err.to_string(), "Error del servidor: sin conexión");
    }

    #[test]
    fn non_array_body_is_empty() {
        assert!(parse_personnel_list(json!({"data": []})).expect("empty").is_empty());
        let list = parse_personnel_list(json!([{"id": 3, "nombre": "Eva", "dni": "11112222"}]))
            .expect("list");
        assert_eq!(option_label(&list[0]), "Eva (11112222)");
    }

    #[test]
    fn filter_matches_name_or_dni() {
        let people = people();
        assert_eq!(filter_personnel(&people, "  ").len(), 2);
        let by_name = filter_personnel(&people, "QUISPE");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);
        let by_dni = filter_personnel(&people, "8765");
        assert_eq!(by_dni[0].id, 2);
        assert!(filter_personnel(&people, "zzz").is_empty());
    }

    #[test]
    fn preview_totals_pages() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "01_DNI".to_string(),
            DocumentSection {
                section_id: 1,
                document_type: "DNI".to_string(),
                description: String::new(),
                page_start: 1,
                page_end: 1,
            },
        );
        entries.insert(
            "02_Curriculum".to_string(),
            DocumentSection {
                section_id: 2,
                document_type: "Curriculum".to_string(),
                description: String::new(),
                page_start: 2,
                page_end: 5,
            },
        );
        let preview = StructurePreview::from_entries(&entries);
        assert_eq!(preview.total, 5);
        assert_eq!(preview.rows[1].pages, "2-5");
        assert_eq!(preview.rows[1].count, 4);
    }
}
