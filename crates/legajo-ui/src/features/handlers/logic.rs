//! Attribute handler catalog and the small decisions they make.

/// Button markup while a form submits.
pub const BUSY_HTML: &str =
    r#"<span class="spinner-border spinner-border-sm me-2"></span>Procesando..."#;
/// Button markup after a successful copy.
pub const COPIED_HTML: &str = r#"<i class="bi bi-check-circle me-1"></i>Copiado!"#;
/// How long the copy confirmation stays, in milliseconds.
pub const COPY_FEEDBACK_MS: u32 = 2_000;
/// Alert text for a failed copy.
pub const COPY_FAILED_MESSAGE: &str = "Error al copiar al portapapeles";
/// Prompt used when `data-confirm` is present but empty.
pub const DEFAULT_CONFIRM_MESSAGE: &str = "¿Está seguro?";

/// Click handlers attached to every element carrying the attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeHandler {
    /// Blocking confirm; cancel prevents the default action.
    Confirm,
    /// Disable the button and submit its form.
    DisableOnSubmit,
    /// Flip the target input between `password` and `text`.
    TogglePassword,
    /// Copy the target's text to the clipboard.
    CopyToClipboard,
    /// Navigate back.
    GoBack,
    /// Leave the password form by navigating back.
    CancelPasswordForm,
    /// Hide the email form.
    CancelEmailForm,
    /// Open the target file picker.
    TriggerFileInput,
    /// Print the page.
    Print,
}

impl AttributeHandler {
    /// Every handler, in binding order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Confirm,
            Self::DisableOnSubmit,
            Self::TogglePassword,
            Self::CopyToClipboard,
            Self::GoBack,
            Self::CancelPasswordForm,
            Self::CancelEmailForm,
            Self::TriggerFileInput,
            Self::Print,
        ]
    }

    /// Attribute marking the element.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Confirm => "data-confirm",
            Self::DisableOnSubmit => "data-disable-on-submit",
            Self::TogglePassword => "data-toggle-password",
            Self::CopyToClipboard => "data-copy-to-clipboard",
            Self::GoBack => "data-go-back",
            Self::CancelPasswordForm => "data-cancel-password-form",
            Self::CancelEmailForm => "data-cancel-email-form",
            Self::TriggerFileInput => "data-trigger-file-input",
            Self::Print => "data-print",
        }
    }

    /// `querySelectorAll` selector.
    #[must_use]
    pub fn selector(self) -> String {
        format!("[{}]", self.attribute())
    }

    /// Whether the listener must be able to call `preventDefault`.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(
            self,
            Self::Confirm | Self::DisableOnSubmit | Self::TogglePassword | Self::CopyToClipboard
        )
    }
}

/// Prompt for a `data-confirm` element.
#[must_use]
pub fn confirm_message(attribute: &str) -> &str {
    if attribute.trim().is_empty() {
        DEFAULT_CONFIRM_MESSAGE
    } else {
        attribute
    }
}

/// Input type after a visibility toggle.
#[must_use]
pub fn toggled_input_type(current: &str) -> &'static str {
    if current.eq_ignore_ascii_case("password") {
        "text"
    } else {
        "password"
    }
}

/// Icon class for an input showing `input_type`.
#[must_use]
pub fn eye_icon_class(input_type: &str) -> &'static str {
    if input_type.eq_ignore_ascii_case("password") {
        "bi bi-eye"
    } else {
        "bi bi-eye-slash"
    }
}

/// Text to copy: the element's text content, else its value.
#[must_use]
pub fn copy_source_text(text_content: Option<&str>, value: Option<&str>) -> Option<String> {
    text_content
        .filter(|text| !text.is_empty())
        .or_else(|| value.filter(|value| !value.is_empty()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_toggle_round_trips_and_swaps_icon() {
        let shown = toggled_input_type("password");
        assert_eq!(shown, "text");
        assert_eq!(eye_icon_class(shown), "bi bi-eye-slash");
        let hidden = toggled_input_type(shown);
        assert_eq!(hidden, "password");
        assert_eq!(eye_icon_class(hidden), "bi bi-eye");
    }

    #[test]
    fn copy_prefers_text_content() {
        assert_eq!(
            copy_source_text(Some("abc"), Some("xyz")).as_deref(),
            Some("abc")
        );
        assert_eq!(copy_source_text(Some(""), Some("xyz")).as_deref(), Some("xyz"));
        assert_eq!(copy_source_text(None, Some("")), None);
    }

    #[test]
    fn empty_confirm_uses_the_default_prompt() {
        assert_eq!(confirm_message(""), DEFAULT_CONFIRM_MESSAGE);
        assert_eq!(confirm_message("¿Eliminar?"), "¿Eliminar?");
    }

    #[test]
    fn selectors_wrap_attributes() {
        assert_eq!(AttributeHandler::Print.selector(), "[data-print]");
        assert!(AttributeHandler::Confirm.prevents_default());
        assert!(!AttributeHandler::GoBack.prevents_default());
    }
}
