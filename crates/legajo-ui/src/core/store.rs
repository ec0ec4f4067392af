//! Structure editor yewdux store.
//!
//! # Design
//! - Keep the working structure in one store so the summary table and the
//!   cards render from the same state without prop drilling.
//! - Reducers below are the only mutation paths; views call them through
//!   `Dispatch::reduce_mut`.

use crate::features::structure::state::{StructureError, StructureMap};
use legajo_api_models::{DocumentSection, SectionOption};
use yewdux::store::Store;

/// Editor lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Initial fetches still running.
    #[default]
    Loading,
    /// Working map assembled.
    Ready,
}

/// Shared state for the structure editor island.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct EditorStore {
    /// Working structure.
    pub map: StructureMap,
    /// Section catalog, fetched once per page.
    pub catalog: Vec<SectionOption>,
    /// Value of the hidden `estructura_json` field.
    pub submitted: String,
    /// Lifecycle phase.
    pub phase: LoadPhase,
    /// Whether the card editor is visible.
    pub editing: bool,
    /// Bumped to rebuild every card from the working map.
    pub revision: u32,
}

impl EditorStore {
    /// Install the initial catalog and working map, mirroring the map into the hidden field.
    ///
    /// # Errors
    /// Returns [`StructureError`] when the map cannot be serialized; the
    /// hidden field then stays empty.
    pub fn initialize(
        &mut self,
        catalog: Vec<SectionOption>,
        map: StructureMap,
    ) -> Result<(), StructureError> {
        self.catalog = catalog;
        self.map = map;
        self.phase = LoadPhase::Ready;
        self.submitted = self.map.to_json()?;
        Ok(())
    }

    /// Overwrite one entry after a confirmed card edit.
    pub fn confirm_entry(&mut self, key: &str, section: DocumentSection) {
        self.map.set(key, section);
    }

    /// Drop one entry.
    pub fn delete_entry(&mut self, key: &str) -> bool {
        self.map.remove(key).is_some()
    }

    /// Append a blank entry and return its key.
    pub fn add_entry(&mut self) -> String {
        self.map.add_blank()
    }

    /// Serialize the working map into the hidden field and close the editor.
    ///
    /// # Errors
    /// Returns [`StructureError::Serialize`] if encoding fails.
    pub fn save(&mut self) -> Result<String, StructureError> {
        let json = self.map.to_json()?;
        self.submitted.clone_from(&json);
        self.editing = false;
        Ok(json)
    }

    /// Hide the editor and rebuild the cards, discarding unconfirmed edits.
    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Toggle the editor visibility.
    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    /// Display name for a section, falling back to `key` when unresolved.
    #[must_use]
    pub fn section_name<'a>(&'a self, section_id: u32, key: &'a str) -> &'a str {
        self.catalog
            .iter()
            .find(|section| section.id == section_id)
            .map_or(key, |section| section.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<SectionOption> {
        vec![SectionOption {
            id: 1,
            name: "Identificación".to_string(),
        }]
    }

    #[test]
    fn initialize_mirrors_the_map_into_the_hidden_field() {
        let mut store = EditorStore::default();
        store
            .initialize(catalog(), StructureMap::with_defaults())
            .expect("serialize");
        assert_eq!(store.phase, LoadPhase::Ready);
        let reloaded = StructureMap::from_cache_json(&store.submitted).expect("reload");
        assert_eq!(reloaded, store.map);
    }

    #[test]
    fn section_names_fall_back_to_the_key() {
        let mut store = EditorStore::default();
        store
            .initialize(catalog(), StructureMap::with_defaults())
            .expect("serialize");
        assert_eq!(store.section_name(1, "01_DNI"), "Identificación");
        assert_eq!(store.section_name(2, "02_Curriculum"), "02_Curriculum");
    }

    #[test]
    fn confirm_does_not_touch_the_hidden_field_until_save() {
        let mut store = EditorStore::default();
        store
            .initialize(catalog(), StructureMap::with_defaults())
            .expect("serialize");
        let before = store.submitted.clone();
        store.confirm_entry(
            "01_DNI",
            DocumentSection {
                section_id: 1,
                document_type: "Pasaporte".to_string(),
                description: String::new(),
                page_start: 1,
                page_end: 2,
            },
        );
        assert_eq!(store.submitted, before);
        store.editing = true;
        let saved = store.save().expect("serialize");
        assert_eq!(store.submitted, saved);
        assert!(saved.contains("Pasaporte"));
        assert!(!store.editing);
    }

    #[test]
    fn delete_then_save_omits_the_key() {
        let mut store = EditorStore::default();
        store
            .initialize(catalog(), StructureMap::with_defaults())
            .expect("serialize");
        assert!(store.delete_entry("06_Carnet_Sanitario"));
        assert!(!store.delete_entry("06_Carnet_Sanitario"));
        let saved = store.save().expect("serialize");
        assert!(!saved.contains("06_Carnet_Sanitario"));
    }

    #[test]
    fn cancel_rebuilds_cards() {
        let mut store = EditorStore::default();
        store.toggle_editing();
        assert!(store.editing);
        store.cancel_editing();
        assert!(!store.editing);
        assert_eq!(store.revision, 1);
    }
}
