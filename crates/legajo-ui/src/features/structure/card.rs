//! One editable structure entry.
//!
//! # Design
//! - Inputs live in a local reducer; the shared map changes only on confirm or delete.
//! - Section changes restart the card's lookup slot, so a late response for an
//!   older section is dropped.

use crate::app::api::ApiCtx;
use crate::core::store::EditorStore;
use crate::core::urls::fill_id_template;
use crate::features::doc_types::fetch::TypeFetchSlot;
use crate::features::doc_types::state::selected_section;
use crate::features::structure::actions::{CardAction, CardState};
use crate::features::structure::draft::CardDraft;
use crate::services::api::ApiClient;
use gloo::console;
use gloo::dialogs::{alert, confirm};
use gloo_timers::callback::Timeout;
use legajo_api_models::{DocumentSection, SectionOption};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

const SECTION_DEBOUNCE_MS: u32 = 300;
const CONFIRM_FLASH_MS: u32 = 1_000;
const DELETE_PROMPT: &str = "¿Eliminar esta sección?";

#[derive(Properties, PartialEq)]
pub(crate) struct SectionCardProps {
    pub(crate) entry_key: AttrValue,
    pub(crate) section: DocumentSection,
    pub(crate) catalog: Rc<Vec<SectionOption>>,
    pub(crate) doc_types_template: AttrValue,
}

#[derive(Clone)]
struct TypeLookup {
    slot: Rc<RefCell<TypeFetchSlot>>,
    client: Rc<ApiClient>,
    template: AttrValue,
    dispatcher: UseReducerDispatcher<CardState>,
}

impl TypeLookup {
    /// Replace any pending lookup with one for `section_id` after `delay_ms`.
    fn schedule(&self, section_id: Option<u32>, delay_ms: u32) {
        let generation = self.slot.borrow_mut().restart();
        let Some(section_id) = section_id else {
            return;
        };
        let lookup = self.clone();
        let timer = Timeout::new(delay_ms, move || {
            let Some(signal) = lookup.slot.borrow_mut().begin_request(generation) else {
                return;
            };
            let path = fill_id_template(&lookup.template, &section_id.to_string());
            yew::platform::spawn_local(async move {
                let result = lookup
                    .client
                    .fetch_document_types(&path, Some(&signal))
                    .await;
                if signal.aborted() || !lookup.slot.borrow().is_current(generation) {
                    return;
                }
                match result {
                    Ok(types) => lookup.dispatcher.dispatch(CardAction::TypesLoaded(types)),
                    Err(err) => {
                        console::error!("document types failed", path, err.to_string());
                        lookup.dispatcher.dispatch(CardAction::TypesFailed);
                    }
                }
            });
        });
        self.slot.borrow_mut().hold_timer(generation, timer);
    }
}

#[function_component(SectionCard)]
pub(crate) fn section_card(props: &SectionCardProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let state = {
        let key = props.entry_key.clone();
        let section = props.section.clone();
        use_reducer(move || CardState::new(CardDraft::from_entry(&key, &section)))
    };
    let slot = use_mut_ref(TypeFetchSlot::default);
    let flashing = use_state(|| false);
    let flash_timer = use_mut_ref(|| None as Option<Timeout>);

    let lookup = api_ctx.map(|ctx| TypeLookup {
        slot: slot.clone(),
        client: ctx.client,
        template: props.doc_types_template.clone(),
        dispatcher: state.dispatcher(),
    });

    {
        let lookup = lookup.clone();
        let slot = slot.clone();
        let initial = state.draft.selected_section();
        use_effect_with_deps(
            move |_| {
                if let Some(lookup) = lookup {
                    lookup.schedule(initial, 0);
                }
                move || slot.borrow_mut().cancel()
            },
            (),
        );
    }

    let on_section = {
        let dispatcher = state.dispatcher();
        let lookup = lookup.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let value = select.value();
            let section_id = selected_section(&value);
            dispatcher.dispatch(CardAction::SectionChanged(value));
            if let Some(lookup) = &lookup {
                lookup.schedule(section_id, SECTION_DEBOUNCE_MS);
            }
        })
    };

    let on_doc_type = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                dispatcher.dispatch(CardAction::DocumentTypeChanged(select.value()));
            }
        })
    };

    let text_input = |action: fn(String) -> CardAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                dispatcher.dispatch(action(input.value()));
            }
        })
    };
    let on_description = text_input(CardAction::DescriptionChanged);
    let on_page_start = text_input(CardAction::PageStartChanged);
    let on_page_end = text_input(CardAction::PageEndChanged);

    let on_confirm = {
        let state = state.clone();
        let flashing = flashing.clone();
        let flash_timer = flash_timer.clone();
        Callback::from(move |_: MouseEvent| match state.draft.confirm() {
            Ok(section) => {
                let key = state.draft.key.clone();
                let mut section = Some(section);
                Dispatch::<EditorStore>::new().reduce_mut(|store| {
                    if let Some(section) = section.take() {
                        store.confirm_entry(&key, section);
                    }
                });
                flashing.set(true);
                let flashing = flashing.clone();
                *flash_timer.borrow_mut() = Some(Timeout::new(CONFIRM_FLASH_MS, move || {
                    flashing.set(false);
                }));
            }
            Err(err) => alert(&err.to_string()),
        })
    };

    let on_delete = {
        let key = props.entry_key.clone();
        Callback::from(move |_: MouseEvent| {
            if !confirm(DELETE_PROMPT) {
                return;
            }
            Dispatch::<EditorStore>::new().reduce_mut(|store| {
                store.delete_entry(&key);
            });
        })
    };

    let draft = &state.draft;
    let options = &state.options;
    let confirm_class = if *flashing {
        "btn btn-sm btn-success flex-grow-1 btn-actualizar-fila"
    } else {
        "btn btn-sm btn-outline-primary flex-grow-1 btn-actualizar-fila"
    };
    let no_type = options.options().iter().all(|option| option.id.to_string() != draft.document_type_id);

    html! {
        <div class="card mb-3" data-seccion={props.entry_key.clone()}>
            <div class="card-body p-2">
                <div class="row g-2">
                    <div class="col-12 col-md-1">
                        <label class="form-label small fw-bold">{"ID"}</label>
                        <input type="text" class="form-control form-control-sm" value={props.entry_key.clone()} disabled={true} />
                    </div>
                    <div class="col-12 col-md-3">
                        <label class="form-label small fw-bold">{"Sección"}</label>
                        <select class="form-select form-select-sm seccion-select" onchange={on_section}>
                            <option value="0" selected={draft.selected_section().is_none()}>{"-- Seleccionar --"}</option>
                            { for props.catalog.iter().map(|section| {
                                let value = section.id.to_string();
                                let selected = value == draft.section_id;
                                html! { <option value={value} selected={selected}>{ section.name.clone() }</option> }
                            }) }
                        </select>
                    </div>
                    <div class="col-12 col-md-3">
                        <label class="form-label small fw-bold">{"Tipo Documento"}</label>
                        <select class="form-select form-select-sm tipo-documento" disabled={options.disabled()} onchange={on_doc_type}>
                            <option value="0" selected={no_type}>{ options.placeholder() }</option>
                            { for options.options().iter().map(|option| {
                                let value = option.id.to_string();
                                let selected = value == draft.document_type_id;
                                html! { <option value={value} selected={selected}>{ option.name.clone() }</option> }
                            }) }
                        </select>
                    </div>
                    <div class="col-12 col-md-2">
                        <label class="form-label small fw-bold">{"Descripción"}</label>
                        <input type="text" class="form-control form-control-sm descripcion" value={draft.description.clone()} oninput={on_description} />
                    </div>
                    <div class="col-12 col-md-1">
                        <label class="form-label small fw-bold">{"Inicio"}</label>
                        <input type="number" min="1" class="form-control form-control-sm page-start" value={draft.page_start.clone()} oninput={on_page_start} />
                    </div>
                    <div class="col-12 col-md-1">
                        <label class="form-label small fw-bold">{"Fin"}</label>
                        <input type="number" min="1" class="form-control form-control-sm page-end" value={draft.page_end.clone()} oninput={on_page_end} />
                    </div>
                    <div class="col-12 col-md-2 d-flex align-items-end gap-1">
                        <button type="button" class={confirm_class} onclick={on_confirm}>
                            <i class="bi bi-check"></i>
                        </button>
                        <button type="button" class="btn btn-sm btn-outline-danger btn-eliminar-fila" onclick={on_delete}>
                            <i class="bi bi-trash"></i>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
