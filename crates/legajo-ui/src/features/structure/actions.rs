//! Structure editor card actions.
//!
//! # Design
//! - Capture user intent and lookup results as discrete actions.
//! - The reducer is pure so late network results always land on the latest state.

use crate::features::doc_types::state::{DocTypeOptions, selected_section};
use crate::features::structure::draft::CardDraft;
use legajo_api_models::DocumentTypeOption;
use std::rc::Rc;
use yew::Reducible;

/// Local state of one editor card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardState {
    /// Form inputs.
    pub draft: CardDraft,
    /// Document type options for the selected section.
    pub options: DocTypeOptions,
}

impl CardState {
    /// Fresh card state. Cards with a section start in the loading state
    /// because their options are fetched right after mount.
    #[must_use]
    pub fn new(draft: CardDraft) -> Self {
        let options = if draft.selected_section().is_some() {
            DocTypeOptions::Loading
        } else {
            DocTypeOptions::NeedsSection
        };
        Self { draft, options }
    }
}

/// Changes applied to a [`CardState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Section select changed.
    SectionChanged(String),
    /// Document type select changed.
    DocumentTypeChanged(String),
    /// Description input changed.
    DescriptionChanged(String),
    /// Start page input changed.
    PageStartChanged(String),
    /// End page input changed.
    PageEndChanged(String),
    /// Document type lookup succeeded.
    TypesLoaded(Vec<DocumentTypeOption>),
    /// Document type lookup failed.
    TypesFailed,
}

impl Reducible for CardState {
    type Action = CardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CardAction::SectionChanged(value) => {
                next.options = if selected_section(&value).is_some() {
                    DocTypeOptions::Loading
                } else {
                    DocTypeOptions::NeedsSection
                };
                next.draft.section_id = value;
                next.draft.document_type_id = "0".to_string();
                next.draft.document_type_label.clear();
            }
            CardAction::DocumentTypeChanged(value) => {
                next.draft.document_type_label = next
                    .options
                    .label_for(&value)
                    .map(str::to_string)
                    .unwrap_or_default();
                next.draft.document_type_id = value;
            }
            CardAction::DescriptionChanged(value) => next.draft.description = value,
            CardAction::PageStartChanged(value) => next.draft.page_start = value,
            CardAction::PageEndChanged(value) => next.draft.page_end = value,
            CardAction::TypesLoaded(options) => {
                next.draft.adopt_options(&options);
                next.options = DocTypeOptions::Loaded(options);
            }
            CardAction::TypesFailed => next.options = DocTypeOptions::Failed,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legajo_api_models::DocumentSection;

    fn card(section_id: u32, doc_type: &str) -> Rc<CardState> {
        let section = DocumentSection {
            section_id,
            document_type: doc_type.to_string(),
            ..DocumentSection::blank()
        };
        Rc::new(CardState::new(CardDraft::from_entry("01_DNI", &section)))
    }

    fn types() -> Vec<DocumentTypeOption> {
        vec![
            DocumentTypeOption {
                id: 1,
                name: "DNI".to_string(),
            },
            DocumentTypeOption {
                id: 2,
                name: "Pasaporte".to_string(),
            },
        ]
    }

    #[test]
    fn new_card_loads_only_when_a_section_is_set() {
        assert_eq!(card(1, "DNI").options, DocTypeOptions::Loading);
        assert_eq!(card(0, "").options, DocTypeOptions::NeedsSection);
    }

    #[test]
    fn loaded_types_preselect_the_stored_label() {
        let state = card(1, "DNI").reduce(CardAction::TypesLoaded(types()));
        assert_eq!(state.draft.document_type_id, "1");
        assert!(!state.options.disabled());
    }

    #[test]
    fn section_change_clears_the_type_and_starts_loading() {
        let state = card(1, "DNI")
            .reduce(CardAction::TypesLoaded(types()))
            .reduce(CardAction::SectionChanged("2".to_string()));
        assert_eq!(state.options, DocTypeOptions::Loading);
        assert_eq!(state.draft.document_type_id, "0");
        assert!(state.draft.document_type_label.is_empty());

        let state = state.reduce(CardAction::SectionChanged("0".to_string()));
        assert_eq!(state.options, DocTypeOptions::NeedsSection);
    }

    #[test]
    fn type_change_records_the_label_for_confirmation() {
        let state = card(1, "DNI")
            .reduce(CardAction::TypesLoaded(types()))
            .reduce(CardAction::DocumentTypeChanged("2".to_string()))
            .reduce(CardAction::PageEndChanged("3".to_string()));
        let section = state.draft.confirm().expect("valid");
        assert_eq!(section.document_type, "Pasaporte");
        assert_eq!(section.page_end, 3);
    }

    #[test]
    fn failed_lookup_keeps_the_control_enabled() {
        let state = card(1, "DNI").reduce(CardAction::TypesFailed);
        assert_eq!(state.options, DocTypeOptions::Failed);
        assert!(!state.options.disabled());
    }
}
