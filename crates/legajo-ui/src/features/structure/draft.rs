//! Per-card form state for the structure editor.
//!
//! # Design
//! - Keep inputs as strings for lossless editing; convert only on confirm.
//! - The document type is chosen by id but stored by label, which is what the
//!   upload handler reads back.

use legajo_api_models::{DocumentSection, DocumentTypeOption};
use thiserror::Error;

/// Reasons a card cannot be confirmed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RowError {
    /// Section or document type left unselected.
    #[error("Por favor completa todos los campos")]
    Incomplete,
    /// A page field is not an integer of at least 1.
    #[error("Las páginas deben ser números enteros mayores o iguales a 1")]
    InvalidPages,
}

/// Editable copy of one structure entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDraft {
    /// Immutable entry key.
    pub key: String,
    /// Section select value.
    pub section_id: String,
    /// Document type select value.
    pub document_type_id: String,
    /// Label of the selected document type.
    pub document_type_label: String,
    /// Description input.
    pub description: String,
    /// Start page input.
    pub page_start: String,
    /// End page input.
    pub page_end: String,
}

impl CardDraft {
    /// Draft mirroring a stored entry. The type id is resolved once options load.
    #[must_use]
    pub fn from_entry(key: &str, section: &DocumentSection) -> Self {
        Self {
            key: key.to_string(),
            section_id: section.section_id.to_string(),
            document_type_id: "0".to_string(),
            document_type_label: section.document_type.clone(),
            description: section.description.clone(),
            page_start: section.page_start.to_string(),
            page_end: section.page_end.to_string(),
        }
    }

    /// Selected section id, `None` while unset.
    #[must_use]
    pub fn selected_section(&self) -> Option<u32> {
        positive_id(&self.section_id)
    }

    /// Reconcile the selected type with freshly loaded options.
    ///
    /// Keeps the current id when still offered, otherwise selects the option
    /// whose name matches the stored label, otherwise clears the selection.
    pub fn adopt_options(&mut self, options: &[DocumentTypeOption]) {
        let by_id = positive_id(&self.document_type_id)
            .and_then(|id| options.iter().find(|option| option.id == id));
        let chosen = by_id.or_else(|| {
            options
                .iter()
                .find(|option| option.name == self.document_type_label)
        });
        match chosen {
            Some(option) => {
                self.document_type_id = option.id.to_string();
                self.document_type_label = option.name.clone();
            }
            None => {
                self.document_type_id = "0".to_string();
            }
        }
    }

    /// Validate the draft and build the entry it confirms.
    ///
    /// # Errors
    /// Returns [`RowError::Incomplete`] when the section or type is unset and
    /// [`RowError::InvalidPages`] when a page is not an integer of at least 1.
    pub fn confirm(&self) -> Result<DocumentSection, RowError> {
        let section_id = self.selected_section().ok_or(RowError::Incomplete)?;
        if positive_id(&self.document_type_id).is_none() {
            return Err(RowError::Incomplete);
        }
        let page_start = parse_page(&self.page_start).ok_or(RowError::InvalidPages)?;
        let page_end = parse_page(&self.page_end).ok_or(RowError::InvalidPages)?;
        Ok(DocumentSection {
            section_id,
            document_type: self.document_type_label.clone(),
            description: self.description.clone(),
            page_start,
            page_end,
        })
    }
}

fn positive_id(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

fn parse_page(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(section: &str, doc_type: &str, start: &str, end: &str) -> CardDraft {
        CardDraft {
            key: "03_Nueva".to_string(),
            section_id: section.to_string(),
            document_type_id: doc_type.to_string(),
            document_type_label: "Titulo".to_string(),
            description: "Título".to_string(),
            page_start: start.to_string(),
            page_end: end.to_string(),
        }
    }

    fn option(id: u32, name: &str) -> DocumentTypeOption {
        DocumentTypeOption {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn unset_section_or_type_is_incomplete() {
        assert_eq!(draft("0", "4", "1", "1").confirm(), Err(RowError::Incomplete));
        assert_eq!(draft("3", "0", "1", "1").confirm(), Err(RowError::Incomplete));
        assert_eq!(draft("", "4", "1", "1").confirm(), Err(RowError::Incomplete));
    }

    #[test]
    fn pages_must_be_positive_integers() {
        assert_eq!(draft("3", "4", "0", "2").confirm(), Err(RowError::InvalidPages));
        assert_eq!(draft("3", "4", "abc", "2").confirm(), Err(RowError::InvalidPages));
        assert_eq!(draft("3", "4", "2", "-1").confirm(), Err(RowError::InvalidPages));
    }

    #[test]
    fn single_page_entry_confirms_with_label() {
        let section = draft("3", "4", "3", "3").confirm().expect("valid");
        assert_eq!(section.section_id, 3);
        assert_eq!(section.document_type, "Titulo");
        assert_eq!(section.page_start, 3);
        assert_eq!(section.page_end, 3);
    }

    #[test]
    fn adopt_options_matches_stored_label() {
        let entry = DocumentSection {
            section_id: 3,
            document_type: "Titulo".to_string(),
            description: String::new(),
            page_start: 6,
            page_end: 6,
        };
        let mut card = CardDraft::from_entry("03_Titulo_Universitario", &entry);
        card.adopt_options(&[option(10, "Bachiller"), option(11, "Titulo")]);
        assert_eq!(card.document_type_id, "11");

        card.adopt_options(&[option(12, "Maestría")]);
        assert_eq!(card.document_type_id, "0");
    }

    #[test]
    fn adopt_options_keeps_a_still_offered_id() {
        let mut card = draft("3", "10", "1", "1");
        card.adopt_options(&[option(10, "Bachiller"), option(11, "Titulo")]);
        assert_eq!(card.document_type_id, "10");
        assert_eq!(card.document_type_label, "Bachiller");
    }
}
