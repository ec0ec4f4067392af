//! Structure editor island.
//!
//! # Design
//! - Boot runs the staged load once, then installs the result in the editor store.
//! - The summary table, the cards and the hidden field all render from the store.
//! - Save writes the local cache and the hidden field; it never calls the server.

use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, persist_structure_cache};
use crate::core::store::{EditorStore, LoadPhase};
use crate::core::urls::EditorEndpoints;
use crate::features::structure::api::{load_catalog, load_working_map};
use crate::features::structure::card::SectionCard;
use crate::features::structure::state::{IssueKind, StructureMap};
use crate::features::structure::table::SummaryTable;
use gloo::console;
use gloo::dialogs::alert;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const SAVED_NOTICE: &str = "✓ Estructura personalizada guardada correctamente";
const MISSING_PERSONNEL: &str = "No se pudo determinar el personal. Por favor, recarga la página.";
const STORAGE_FAILED: &str = "Error al guardar: no se pudo escribir en el almacenamiento local";

#[derive(Properties, PartialEq)]
pub(crate) struct StructureEditorProps {
    #[prop_or_default]
    pub(crate) personnel_id: Option<AttrValue>,
    pub(crate) endpoints: EditorEndpoints,
}

#[function_component(StructureEditor)]
pub(crate) fn structure_editor(props: &StructureEditorProps) -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let dispatch = Dispatch::<EditorStore>::new();
    let phase = use_selector(|store: &EditorStore| store.phase);
    let editing = use_selector(|store: &EditorStore| store.editing);
    let revision = use_selector(|store: &EditorStore| store.revision);
    let submitted = use_selector(|store: &EditorStore| store.submitted.clone());
    let catalog = use_selector(|store: &EditorStore| store.catalog.clone());
    let entries = use_selector(|store: &EditorStore| {
        store
            .map
            .iter()
            .map(|(key, section)| (key.to_string(), section.clone()))
            .collect::<Vec<_>>()
    });
    let issues = use_selector(|store: &EditorStore| store.map.submission_issues());

    {
        let dispatch = dispatch.clone();
        let client = api_ctx.client.clone();
        let endpoints = props.endpoints.clone();
        let personnel_id = props.personnel_id.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    let catalog = load_catalog(&client, &endpoints).await;
                    let map = load_working_map(&client, &endpoints, personnel_id.as_deref()).await;
                    let mut loaded = Some((catalog, map));
                    dispatch.reduce_mut(|store| {
                        if let Some((catalog, map)) = loaded.take() {
                            if let Err(err) = store.initialize(catalog, map) {
                                console::error!("structure serialization failed", err.to_string());
                            }
                        }
                    });
                });
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.reduce_mut(EditorStore::toggle_editing))
    };
    let on_add = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| {
                let key = store.add_entry();
                console::log!("section added", key);
            });
        })
    };
    let on_cancel = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.reduce_mut(EditorStore::cancel_editing))
    };
    let on_save = {
        let dispatch = dispatch.clone();
        let personnel_id = props.personnel_id.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(personnel_id) = personnel_id.clone() else {
                console::error!("save skipped: personnel id missing");
                alert(MISSING_PERSONNEL);
                return;
            };
            let mut outcome: Option<Result<StructureMap, String>> = None;
            dispatch.reduce_mut(|store| {
                outcome = Some(
                    store
                        .save()
                        .map(|_| store.map.clone())
                        .map_err(|err| err.to_string()),
                );
            });
            match outcome {
                Some(Ok(map)) if persist_structure_cache(&personnel_id, &map) => {
                    console::log!("structure saved", &*personnel_id, map.len());
                    alert(SAVED_NOTICE);
                }
                Some(Ok(_)) => alert(STORAGE_FAILED),
                Some(Err(detail)) => {
                    console::error!("structure save failed", detail.clone());
                    alert(&format!("Error al guardar: {detail}"));
                }
                None => {}
            }
        })
    };

    if *phase == LoadPhase::Loading {
        return html! {
            <div class="text-muted small py-2">
                <span class="spinner-border spinner-border-sm me-2"></span>
                {"Cargando estructura..."}
            </div>
        };
    }

    let toggle_label = if *editing {
        html! { <><i class="bi bi-x me-1"></i>{"Ocultar Edición"}</> }
    } else {
        html! { <><i class="bi bi-pencil me-1"></i>{"Personalizar Estructura"}</> }
    };
    let revision = *revision;

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <input type="hidden" name="estructura_json" value={(*submitted).clone()} />
            <SummaryTable />
            <button type="button" id="btnPersonalizar" class="btn btn-sm btn-outline-secondary" onclick={on_toggle}>
                { toggle_label }
            </button>
            <div id="editarEstructura" class={classes!("mt-3", (!*editing).then_some("d-none"))}>
                if !issues.is_empty() {
                    <div class="alert alert-warning py-2 small">
                        <strong>{"Secciones incompletas:"}</strong>
                        <ul class="mb-0">
                            { for issues.iter().map(|issue| html! {
                                <li key={issue.key.clone()}>{ format!("{}: {}", issue.key, IssueKind::message(issue.kind)) }</li>
                            }) }
                        </ul>
                    </div>
                }
                <div id="formularioEstructura">
                    { for entries.iter().map(|(key, section)| html! {
                        <SectionCard
                            key={format!("{revision}-{key}")}
                            entry_key={AttrValue::from(key.clone())}
                            section={section.clone()}
                            catalog={catalog.clone()}
                            doc_types_template={AttrValue::from(props.endpoints.doc_types_template.clone())}
                        />
                    }) }
                    <button type="button" class="btn btn-sm btn-success mt-3" onclick={on_add}>
                        <i class="bi bi-plus-lg me-1"></i>{"Agregar Sección"}
                    </button>
                </div>
                <div class="d-flex gap-2 mt-3">
                    <button type="button" id="btnCancelarPersonalizacion" class="btn btn-sm btn-outline-secondary" onclick={on_cancel}>
                        {"Cancelar"}
                    </button>
                    <button type="button" id="btnGuardarPersonalizacion" class="btn btn-sm btn-primary" onclick={on_save}>
                        <i class="bi bi-save me-1"></i>{"Guardar Estructura"}
                    </button>
                </div>
            </div>
        </ContextProvider<ApiCtx>>
    }
}
