//! Page boot: attach the DOM bindings and mount the Yew islands the page hosts.

use crate::features::charts::view::mount_charts;
use crate::features::personnel::view::{PersonnelPicker, PersonnelPickerProps};
use crate::features::structure::view::{StructureEditor, StructureEditorProps};
use crate::features::{dni, doc_types, handlers, modals};
use crate::services::api::ApiClient;
use preferences::api_base_url;
use std::rc::Rc;

pub(crate) mod api;
pub(crate) mod page;
pub(crate) mod preferences;

/// Entry point for the wasm bundle.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let client = Rc::new(ApiClient::new(api_base_url()));

    handlers::bind::bind();
    modals::bind::bind();
    dni::bind::bind(Rc::clone(&client));
    doc_types::bind::bind(client);
    mount_charts();

    if let Some(host) = page::editor_host() {
        let props = StructureEditorProps {
            personnel_id: host.personnel_id.map(Into::into),
            endpoints: host.endpoints,
        };
        yew::Renderer::<StructureEditor>::with_root_and_props(host.element, props).render();
    }
    if let Some(host) = page::picker_host() {
        let props = PersonnelPickerProps {
            list_url: host.list_url.into(),
            structure_template: host.structure_template.into(),
        };
        yew::Renderer::<PersonnelPicker>::with_root_and_props(host.element, props).render();
    }
}
