//! End-to-end structure editor flow over the native state layer.

use legajo_api_models::{DocumentTypeOption, PersonnelStructureResponse};
use legajo_ui::core::store::{EditorStore, LoadPhase};
use legajo_ui::core::urls::{DEFAULT_STRUCTURE_TEMPLATE, fill_id_template, structure_cache_key};
use legajo_ui::features::structure::actions::{CardAction, CardState};
use legajo_ui::features::structure::draft::{CardDraft, RowError};
use legajo_ui::features::structure::state::StructureMap;
use std::rc::Rc;
use yew::Reducible;

#[test]
fn cache_then_server_overlay_the_defaults() {
    let cached = r#"{"01_DNI":{"id_seccion":1,"tipo_documento":"Pasaporte","descripcion":"","pagina_inicio":1,"pagina_fin":2},
        "08_Extra":{"id_seccion":8,"tipo_documento":"Otro","descripcion":"","pagina_inicio":21,"pagina_fin":21}}"#;
    let server: PersonnelStructureResponse = serde_json::from_str(
        r#"{"estructura":{"01_DNI":{"tipo_documento":"DNI","descripcion":"Cédula de Identidad","pagina_inicio":1,"pagina_fin":1}}}"#,
    )
    .expect("decode");

    let (map, rejected) = StructureMap::assemble(Some(cached), server.into_patches());

    assert!(rejected.is_none());
    assert_eq!(map.len(), 8);
    let dni = map.get("01_DNI").expect("dni");
    assert_eq!(dni.section_id, 1);
    assert_eq!(dni.document_type, "DNI");
    assert_eq!(dni.page_end, 1);
    assert_eq!(map.get("08_Extra").map(|s| s.page_start), Some(21));
    assert!(map.submission_issues().is_empty());
}

#[test]
fn invalid_cache_falls_back_to_defaults_plus_server() {
    let server: PersonnelStructureResponse =
        serde_json::from_str(r#"{"structure":{"02_Curriculum":[2,6]}}"#).expect("decode");
    let (map, rejected) = StructureMap::assemble(Some("not json"), server.into_patches());
    assert!(rejected.is_some());
    let curriculum = map.get("02_Curriculum").expect("default entry");
    assert_eq!(curriculum.section_id, 2);
    assert_eq!(curriculum.page_end, 6);
}

#[test]
fn cache_without_section_ids_is_rejected_whole() {
    let raw = r#"{"01_DNI":{"id_seccion":1,"tipo_documento":"DNI","descripcion":"","pagina_inicio":1,"pagina_fin":1},
                  "02_Curriculum":{"tipo_documento":"CV"}}"#;
    assert!(StructureMap::from_cache_json(raw).is_err());
    assert!(StructureMap::from_cache_json("[1, 2]").is_err());
    assert!(StructureMap::from_cache_json("not json").is_err());
}

#[test]
fn added_card_confirms_into_the_saved_structure() {
    let mut store = EditorStore::default();
    store
        .initialize(Vec::new(), StructureMap::with_defaults())
        .expect("serialize");
    assert_eq!(store.phase, LoadPhase::Ready);

    let key = store.add_entry();
    assert_eq!(key, "08_Nueva");
    let blank = store.map.get(&key).cloned().expect("added");
    let state = Rc::new(CardState::new(CardDraft::from_entry(&key, &blank)));
    assert_eq!(state.draft.confirm(), Err(RowError::Incomplete));
    assert_eq!(store.map.submission_issues().len(), 1);

    let state = state
        .reduce(CardAction::SectionChanged("3".to_string()))
        .reduce(CardAction::TypesLoaded(vec![DocumentTypeOption {
            id: 9,
            name: "Diploma".to_string(),
        }]))
        .reduce(CardAction::DocumentTypeChanged("9".to_string()))
        .reduce(CardAction::PageStartChanged("21".to_string()))
        .reduce(CardAction::PageEndChanged("22".to_string()));
    let confirmed = state.draft.confirm().expect("complete card");
    store.confirm_entry(&key, confirmed);

    assert!(store.map.submission_issues().is_empty());
    assert_eq!(store.map.total_pages(), 22);
    let saved = store.save().expect("serialize");
    let reloaded = StructureMap::from_cache_json(&saved).expect("round trip");
    assert_eq!(
        reloaded.get("08_Nueva").map(|s| s.document_type.as_str()),
        Some("Diploma")
    );
}

#[test]
fn personnel_scoped_urls_and_cache_keys() {
    assert_eq!(
        fill_id_template(DEFAULT_STRUCTURE_TEMPLATE, "42"),
        "/pdf/api/estructura-personal/42"
    );
    assert_eq!(structure_cache_key(" 42 "), "structure-cache:42");
}
