//! Personnel picker island for the bulk upload page.

use crate::app::api::ApiCtx;
use crate::app::preferences::api_base_url;
use crate::core::urls::fill_id_template;
use crate::features::personnel::logic::{
    EMPTY_LIST, SELECT_PROMPT, StructurePreview, filter_personnel, option_label,
    parse_personnel_list,
};
use gloo::console;
use legajo_api_models::{DocumentSection, PersonnelSummary};
use std::collections::BTreeMap;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PersonnelPickerProps {
    pub(crate) list_url: AttrValue,
    pub(crate) structure_template: AttrValue,
}

#[derive(Clone, PartialEq)]
enum PeopleState {
    Loading,
    Loaded(Vec<PersonnelSummary>),
    Failed(String),
}

#[derive(Clone, PartialEq)]
enum PreviewState {
    Idle,
    Loading,
    Shown(StructurePreview),
    Missing,
}

#[function_component(PersonnelPicker)]
pub(crate) fn personnel_picker(props: &PersonnelPickerProps) -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let people = use_state(|| PeopleState::Loading);
    let term = use_state(String::new);
    let selected = use_state(String::new);
    let preview = use_state(|| PreviewState::Idle);
    let preview_generation = use_mut_ref(|| 0u64);

    {
        let people = people.clone();
        let client = api_ctx.client.clone();
        let list_url = props.list_url.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    let loaded = match client.fetch_personnel_list(&list_url).await {
                        Ok(body) => parse_personnel_list(body).map_err(|err| err.to_string()),
                        Err(err) => Err(err.to_string()),
                    };
                    match loaded {
                        Ok(list) => {
                            console::log!("personnel list loaded", list.len());
                            people.set(PeopleState::Loaded(list));
                        }
                        Err(detail) => {
                            console::error!("personnel list failed", detail.clone());
                            people.set(PeopleState::Failed(detail));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_search = {
        let term = term.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                term.set(input.value());
            }
        })
    };

    let on_select = {
        let selected = selected.clone();
        let preview = preview.clone();
        let generation = preview_generation.clone();
        let client = api_ctx.client.clone();
        let template = props.structure_template.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let id = select.value();
            selected.set(id.clone());
            let current = {
                let mut generation = generation.borrow_mut();
                *generation = generation.wrapping_add(1);
                *generation
            };
            if id.is_empty() {
                preview.set(PreviewState::Idle);
                return;
            }
            preview.set(PreviewState::Loading);
            let path = fill_id_template(&template, &id);
            let client = client.clone();
            let preview = preview.clone();
            let generation = generation.clone();
            yew::platform::spawn_local(async move {
                let result = client.fetch_personnel_structure(&path).await;
                if *generation.borrow() != current {
                    return;
                }
                match result {
                    Ok(Some(patches)) => {
                        let entries: BTreeMap<String, DocumentSection> = patches
                            .into_iter()
                            .map(|(key, patch)| (key, patch.into_section()))
                            .collect();
                        preview.set(PreviewState::Shown(StructurePreview::from_entries(&entries)));
                    }
                    Ok(None) => preview.set(PreviewState::Missing),
                    Err(err) => {
                        console::error!("structure preview failed", err.to_string());
                        preview.set(PreviewState::Missing);
                    }
                }
            });
        })
    };

    let options = match &*people {
        PeopleState::Loading => html! {
            <option value="" disabled={true} selected={true}>{"Cargando personal..."}</option>
        },
        PeopleState::Failed(detail) => html! {
            <option value="" disabled={true} selected={true}>{ format!("❌ Error: {detail}") }</option>
        },
        PeopleState::Loaded(list) => {
            let visible = filter_personnel(list, &term);
            if visible.is_empty() {
                html! { <option value="" disabled={true} selected={true}>{ EMPTY_LIST }</option> }
            } else {
                html! {
                    <>
                        <option value="" selected={selected.is_empty()}>{ SELECT_PROMPT }</option>
                        { for visible.into_iter().map(|person| {
                            let value = person.id.to_string();
                            let is_selected = *selected == value;
                            html! {
                                <option value={value} selected={is_selected} data-dni={person.dni.clone()}>
                                    { option_label(person) }
                                </option>
                            }
                        }) }
                    </>
                }
            }
        }
    };

    let preview_html = match &*preview {
        PreviewState::Idle => html! {},
        PreviewState::Loading => html! {
            <div class="text-muted small">{"Cargando estructura..."}</div>
        },
        PreviewState::Missing => html! {
            <div id="noEstructura" class="alert alert-info small mb-0">
                {"Este personal no tiene una estructura personalizada; se usará la estructura por defecto."}
            </div>
        },
        PreviewState::Shown(structure) => html! {
            <div id="estructuraContainer" class="table-responsive">
                <table class="table table-sm mb-0">
                    <thead>
                        <tr><th>{"Sección"}</th><th>{"Páginas"}</th><th>{"Total"}</th></tr>
                    </thead>
                    <tbody id="estructuraTable">
                        { for structure.rows.iter().map(|row| html! {
                            <tr key={row.key.clone()}>
                                <td><strong>{ row.key.clone() }</strong></td>
                                <td>{ row.pages.clone() }</td>
                                <td>{ row.count.to_string() }</td>
                            </tr>
                        }) }
                    </tbody>
                    <tfoot>
                        <tr>
                            <td colspan="2" class="text-end fw-bold">{"Total de páginas"}</td>
                            <td class="fw-bold">{ structure.total.to_string() }</td>
                        </tr>
                    </tfoot>
                </table>
            </div>
        },
    };

    html! {
        <>
            <div class="mb-3">
                <input type="search" id="buscarPersonal" class="form-control mb-2"
                    placeholder="Buscar por nombre o DNI..." oninput={on_search} />
                <select id="id_personal" name="id_personal" class="form-select" required={true} onchange={on_select}>
                    { options }
                </select>
            </div>
            { preview_html }
        </>
    }
}
