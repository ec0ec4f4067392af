//! `#dni` blur handler.
//!
//! # Design
//! - Each blur supersedes the previous check; stale responses are ignored.
//! - A failed lookup never blocks submit; the server validates again.

use crate::app::page::{dni_check_template, element_by_id};
use crate::core::urls::fill_id_template;
use crate::features::doc_types::state::LookupGeneration;
use crate::features::dni::logic::{DniFeedback, DniInput};
use crate::services::api::ApiClient;
use gloo::console;
use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlInputElement};

struct DniField {
    input: HtmlInputElement,
    feedback: Option<Element>,
    submit: Option<HtmlButtonElement>,
    template: String,
    client: Rc<ApiClient>,
    generation: Cell<LookupGeneration>,
}

impl DniField {
    fn apply(&self, feedback: DniFeedback) {
        if let Some(element) = &self.feedback {
            element.set_text_content(Some(feedback.message()));
        }
        let classes = self.input.class_list();
        let mut updated = classes.remove_2("is-invalid", "is-valid");
        if let Some(class) = feedback.input_class() {
            updated = updated.and_then(|()| classes.add_1(class));
        }
        if updated.is_err() {
            console::warn!("could not update DNI validation classes");
        }
        if let Some(submit) = &self.submit {
            submit.set_disabled(feedback.blocks_submit());
        }
    }

    fn check(self: &Rc<Self>) {
        let mut latest = self.generation.get();
        let generation = latest.advance();
        self.generation.set(latest);
        let input = DniInput::classify(&self.input.value());
        self.apply(DniFeedback::for_input(&input));
        let DniInput::Ready(dni) = input else {
            return;
        };
        let path = fill_id_template(&self.template, &dni);
        let field = Rc::clone(self);
        yew::platform::spawn_local(async move {
            let result = field.client.check_dni(&path).await;
            if !field.generation.get().is_current(generation) {
                return;
            }
            match result {
                Ok(response) => field.apply(DniFeedback::from_response(&response)),
                Err(err) => {
                    console::error!("DNI check failed", err.to_string());
                    field.apply(DniFeedback::Unverified);
                }
            }
        });
    }
}

/// Wire the DNI check if the form has a `#dni` input.
pub(crate) fn bind(client: Rc<ApiClient>) {
    let Some(input) = element_by_id("dni").and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let field = Rc::new(DniField {
        template: dni_check_template(&input),
        feedback: element_by_id("dni-feedback"),
        submit: element_by_id("submit-btn")
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok()),
        input,
        client,
        generation: Cell::new(LookupGeneration::default()),
    });
    let target = field.input.clone();
    EventListener::new(&target, "blur", move |_| field.check()).forget();
}
