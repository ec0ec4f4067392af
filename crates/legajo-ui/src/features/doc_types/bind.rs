//! Standalone `#seccion_select` -> `#tipo_doc_select` pair on the upload form.

use crate::app::page::{data_attr, element_by_id};
use crate::core::urls::{DEFAULT_DOC_TYPES_TEMPLATE, fill_id_template};
use crate::features::doc_types::fetch::TypeFetchSlot;
use crate::features::doc_types::state::{DocTypeOptions, selected_section};
use crate::services::api::ApiClient;
use gloo::console;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

const SECTION_SELECT_ID: &str = "seccion_select";
const TYPE_SELECT_ID: &str = "tipo_doc_select";

struct DependentSelect {
    types: HtmlSelectElement,
    template: String,
    client: Rc<ApiClient>,
    slot: RefCell<TypeFetchSlot>,
}

impl DependentSelect {
    fn load(self: &Rc<Self>, value: &str) {
        let generation = self.slot.borrow_mut().restart();
        let Some(section_id) = selected_section(value) else {
            self.render(&DocTypeOptions::NeedsSection);
            return;
        };
        self.render(&DocTypeOptions::Loading);
        let Some(signal) = self.slot.borrow_mut().begin_request(generation) else {
            return;
        };
        let path = fill_id_template(&self.template, &section_id.to_string());
        let binding = Rc::clone(self);
        yew::platform::spawn_local(async move {
            let result = binding
                .client
                .fetch_document_types(&path, Some(&signal))
                .await;
            if signal.aborted() || !binding.slot.borrow().is_current(generation) {
                return;
            }
            match result {
                Ok(types) => binding.render(&DocTypeOptions::Loaded(types)),
                Err(err) => {
                    console::error!("document types failed", path, err.to_string());
                    binding.render(&DocTypeOptions::Failed);
                }
            }
        });
    }

    fn render(&self, options: &DocTypeOptions) {
        self.types.set_length(0);
        let entries = std::iter::once(("0".to_string(), options.placeholder().to_string())).chain(
            options
                .options()
                .iter()
                .map(|option| (option.id.to_string(), option.name.clone())),
        );
        for (value, text) in entries {
            let added = HtmlOptionElement::new_with_text_and_value(&text, &value)
                .and_then(|option| self.types.add_with_html_option_element(&option));
            if added.is_err() {
                console::warn!("could not add document type option", value);
            }
        }
        self.types.set_disabled(options.disabled());
    }
}

/// Wire the dependent dropdown if both selects are on the page.
pub(crate) fn bind(client: Rc<ApiClient>) {
    let Some(section) = element_by_id(SECTION_SELECT_ID)
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
    else {
        return;
    };
    let Some(types) = element_by_id(TYPE_SELECT_ID)
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
    else {
        return;
    };
    let template = data_attr(&section, "data-tipos-url").unwrap_or_else(|| {
        console::warn!("data-tipos-url missing; using the default template");
        DEFAULT_DOC_TYPES_TEMPLATE.to_string()
    });
    let binding = Rc::new(DependentSelect {
        types,
        template,
        client,
        slot: RefCell::new(TypeFetchSlot::default()),
    });

    binding.load(&section.value());

    let listener_binding = Rc::clone(&binding);
    let select = section.clone();
    EventListener::new(&section, "change", move |_| {
        listener_binding.load(&select.value());
    })
    .forget();
}
