//! Bootstrap `show.bs.modal` listeners for the confirmation modals.

use crate::app::page::{data_attr, element_by_id};
use crate::features::modals::logic::ConfirmModalKind;
use gloo::console;
use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlFormElement};

/// Button that opened the modal, carried on Bootstrap's event as `relatedTarget`.
fn related_target(event: &Event) -> Option<Element> {
    Reflect::get(event.as_ref(), &JsValue::from_str("relatedTarget"))
        .ok()?
        .dyn_into::<Element>()
        .ok()
}

fn prepare(kind: ConfirmModalKind, modal: &Element, event: &Event) {
    let Some(trigger) = related_target(event) else {
        return;
    };
    let Some(action) = data_attr(&trigger, kind.id_attribute()).and_then(|id| kind.action_url(&id))
    else {
        return;
    };
    let Some(form) = modal
        .query_selector(kind.form_selector())
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    form.set_action(&action);
    if let Ok(Some(name)) = modal.query_selector(kind.name_selector()) {
        let label = trigger.get_attribute(kind.name_attribute());
        name.set_text_content(label.as_deref());
    }
    console::log!("confirmation modal armed", kind.host_id(), action);
}

/// Attach listeners to every confirmation modal on the page.
pub(crate) fn bind() {
    for kind in ConfirmModalKind::all() {
        let Some(modal) = element_by_id(kind.host_id()) else {
            continue;
        };
        let target = modal.clone();
        EventListener::new(&target, "show.bs.modal", move |event| {
            prepare(kind, &modal, event);
        })
        .forget();
    }
}
