//! Click and submit listeners for attribute-driven page handlers.
//!
//! # Design
//! - One listener per marked element, attached once at boot.
//! - Missing targets make the handler a no-op.

use crate::app::page::{element_by_id, query_all, set_displayed};
use crate::features::handlers::logic::{
    AttributeHandler, BUSY_HTML, COPIED_HTML, COPY_FAILED_MESSAGE, COPY_FEEDBACK_MS,
    confirm_message, copy_source_text, eye_icon_class, toggled_input_type,
};
use gloo::console;
use gloo::dialogs::{alert, confirm};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

/// Attach every attribute handler, the sidebar toggle and the upload form check.
pub(crate) fn bind() {
    for handler in AttributeHandler::all() {
        for element in query_all(&handler.selector()) {
            let options = if handler.prevents_default() {
                EventListenerOptions::enable_prevent_default()
            } else {
                EventListenerOptions::default()
            };
            let target = element.clone();
            EventListener::new_with_options(&target, "click", options, move |event| {
                handle_click(handler, &element, event);
            })
            .forget();
        }
    }
    bind_sidebar_toggle();
    bind_upload_validation();
}

fn handle_click(handler: AttributeHandler, element: &Element, event: &Event) {
    match handler {
        AttributeHandler::Confirm => {
            let message = element.get_attribute(handler.attribute()).unwrap_or_default();
            if !confirm(confirm_message(&message)) {
                event.prevent_default();
            }
        }
        AttributeHandler::DisableOnSubmit => {
            event.prevent_default();
            disable_and_submit(element);
        }
        AttributeHandler::TogglePassword => {
            event.prevent_default();
            toggle_password(element);
        }
        AttributeHandler::CopyToClipboard => {
            event.prevent_default();
            copy_to_clipboard(element);
        }
        AttributeHandler::GoBack | AttributeHandler::CancelPasswordForm => {
            if window().history().and_then(|history| history.back()).is_err() {
                console::warn!("history.back failed");
            }
        }
        AttributeHandler::CancelEmailForm => {
            if let Some(form) = element_by_id("email-form") {
                set_displayed(&form, false);
            }
        }
        AttributeHandler::TriggerFileInput => {
            if let Some(input) = attribute_target(element, handler)
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            {
                input.click();
            }
        }
        AttributeHandler::Print => {
            if window().print().is_err() {
                console::warn!("window.print failed");
            }
        }
    }
}

/// Element whose id is the handler attribute's value.
fn attribute_target(element: &Element, handler: AttributeHandler) -> Option<Element> {
    let id = element.get_attribute(handler.attribute())?;
    element_by_id(id.trim())
}

fn disable_and_submit(element: &Element) {
    let Some(button) = element.dyn_ref::<HtmlButtonElement>() else {
        return;
    };
    button.set_disabled(true);
    button.set_inner_html(BUSY_HTML);
    if let Some(form) = button.form() {
        if form.submit().is_err() {
            console::error!("form submit failed");
        }
    }
}

fn toggle_password(element: &Element) {
    let Some(input) = attribute_target(element, AttributeHandler::TogglePassword)
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let next = toggled_input_type(&input.type_());
    input.set_type(next);
    if let Ok(Some(icon)) = element.query_selector("i") {
        icon.set_class_name(eye_icon_class(next));
    }
}

fn copy_to_clipboard(element: &Element) {
    let Some(source) = attribute_target(element, AttributeHandler::CopyToClipboard) else {
        return;
    };
    let value = source
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value);
    let Some(text) = copy_source_text(source.text_content().as_deref(), value.as_deref()) else {
        return;
    };
    let button = element.clone();
    yew::platform::spawn_local(async move {
        let promise = window().navigator().clipboard().write_text(&text);
        let written = JsFuture::from(promise).await.is_ok();
        if !written {
            console::error!("clipboard write failed");
            alert(COPY_FAILED_MESSAGE);
            return;
        }
        let original = button.inner_html();
        button.set_inner_html(COPIED_HTML);
        TimeoutFuture::new(COPY_FEEDBACK_MS).await;
        button.set_inner_html(&original);
    });
}

fn bind_sidebar_toggle() {
    let Some(toggle) = element_by_id("sidebarToggle") else {
        return;
    };
    EventListener::new_with_options(
        &toggle,
        "click",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            event.prevent_default();
            if let Some(wrapper) = element_by_id("wrapper") {
                if wrapper.class_list().toggle("toggled").is_err() {
                    console::warn!("could not toggle sidebar");
                }
            }
        },
    )
    .forget();
}

fn bind_upload_validation() {
    let Some(form) = element_by_id("uploadForm")
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let target = form.clone();
    EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            if !form.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            if form.class_list().add_1("was-validated").is_err() {
                console::warn!("could not mark upload form as validated");
            }
        },
    )
    .forget();
}
