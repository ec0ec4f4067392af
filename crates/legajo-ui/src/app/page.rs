//! Host page lookups: mount points, `data-*` configuration and small DOM helpers.

use crate::core::urls::{
    DEFAULT_DNI_CHECK_TEMPLATE, DEFAULT_PERSONNEL_LIST_URL, DEFAULT_STRUCTURE_TEMPLATE,
    EditorEndpoints,
};
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub(crate) const EDITOR_HOST_ID: &str = "estructura-editor";
pub(crate) const UPLOAD_FORM_ID: &str = "formCargarPDF";
pub(crate) const PICKER_HOST_ID: &str = "personal-picker";

/// Element with `id`, if the page has one.
pub(crate) fn element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// Every element matching `selector`.
pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nodes) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Trimmed, non-empty attribute value.
pub(crate) fn data_attr(element: &Element, name: &str) -> Option<String> {
    element
        .get_attribute(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Show or hide through the inline `display` style.
pub(crate) fn set_displayed(element: &Element, displayed: bool) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let value = if displayed { "" } else { "none" };
        if element.style().set_property("display", value).is_err() {
            gloo::console::warn!("could not update display style");
        }
    }
}

/// Swap a Bootstrap `d-none` placeholder to `d-flex`.
pub(crate) fn reveal_placeholder(id: &str) {
    if let Some(placeholder) = element_by_id(id) {
        let classes = placeholder.class_list();
        if classes.remove_1("d-none").is_err() || classes.add_1("d-flex").is_err() {
            gloo::console::warn!("could not reveal placeholder", id);
        }
    }
}

/// Structure editor mount point and its configuration.
pub(crate) struct EditorHost {
    pub(crate) element: Element,
    pub(crate) personnel_id: Option<String>,
    pub(crate) endpoints: EditorEndpoints,
}

pub(crate) fn editor_host() -> Option<EditorHost> {
    let element = element_by_id(EDITOR_HOST_ID)?;
    let personnel_id = data_attr(&element, "data-personal-id").or_else(|| {
        element_by_id(UPLOAD_FORM_ID).and_then(|form| data_attr(&form, "data-personal-id"))
    });
    let defaults = EditorEndpoints::default();
    let endpoints = EditorEndpoints {
        sections_url: data_attr(&element, "data-secciones-url").unwrap_or(defaults.sections_url),
        doc_types_template: data_attr(&element, "data-tipos-url")
            .unwrap_or(defaults.doc_types_template),
        structure_template: data_attr(&element, "data-estructura-url")
            .unwrap_or(defaults.structure_template),
    };
    Some(EditorHost {
        element,
        personnel_id,
        endpoints,
    })
}

/// Personnel picker mount point and its endpoints.
pub(crate) struct PickerHost {
    pub(crate) element: Element,
    pub(crate) list_url: String,
    pub(crate) structure_template: String,
}

pub(crate) fn picker_host() -> Option<PickerHost> {
    let element = element_by_id(PICKER_HOST_ID)?;
    let list_url = data_attr(&element, "data-personal-list-url")
        .unwrap_or_else(|| DEFAULT_PERSONNEL_LIST_URL.to_string());
    let structure_template = data_attr(&element, "data-estructura-url")
        .unwrap_or_else(|| DEFAULT_STRUCTURE_TEMPLATE.to_string());
    Some(PickerHost {
        element,
        list_url,
        structure_template,
    })
}

/// DNI check template from `#dni[data-check-url]`, else the default.
pub(crate) fn dni_check_template(input: &Element) -> String {
    data_attr(input, "data-check-url").unwrap_or_else(|| DEFAULT_DNI_CHECK_TEMPLATE.to_string())
}
