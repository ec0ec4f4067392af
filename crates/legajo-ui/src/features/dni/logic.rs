//! DNI input classification and feedback states.

use legajo_api_models::DniCheckResponse;

/// Number of digits in a national id.
pub const DNI_LENGTH: usize = 8;

/// Trimmed DNI input, classified before any lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DniInput {
    /// Nothing typed.
    Empty,
    /// Wrong length or non-digit characters.
    Malformed,
    /// Eight digits, ready to check.
    Ready(String),
}

impl DniInput {
    /// Classify raw input text.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty() {
            return Self::Empty;
        }
        if value.len() == DNI_LENGTH && value.bytes().all(|byte| byte.is_ascii_digit()) {
            Self::Ready(value.to_string())
        } else {
            Self::Malformed
        }
    }
}

/// What the feedback element, input and submit button show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DniFeedback {
    /// No message.
    #[default]
    Idle,
    /// Lookup in flight.
    Checking,
    /// Server reports the DNI is free.
    Available,
    /// Server reports the DNI is taken.
    Duplicate,
    /// Input failed local validation.
    Malformed,
    /// Lookup failed; the server will still validate on submit.
    Unverified,
}

impl DniFeedback {
    /// Feedback for freshly classified input. `Ready` input starts checking.
    #[must_use]
    pub const fn for_input(input: &DniInput) -> Self {
        match input {
            DniInput::Empty => Self::Idle,
            DniInput::Malformed => Self::Malformed,
            DniInput::Ready(_) => Self::Checking,
        }
    }

    /// Feedback for a lookup response.
    #[must_use]
    pub const fn from_response(response: &DniCheckResponse) -> Self {
        if response.exists {
            Self::Duplicate
        } else {
            Self::Available
        }
    }

    /// Text for the feedback element.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Checking => "Verificando...",
            Self::Available => "DNI disponible.",
            Self::Duplicate => "Este DNI ya se encuentra registrado.",
            Self::Malformed => "El DNI debe tener 8 dígitos.",
            Self::Unverified => "No se pudo verificar el DNI. Intente de nuevo.",
        }
    }

    /// Validation class for the input, if any.
    #[must_use]
    pub const fn input_class(self) -> Option<&'static str> {
        match self {
            Self::Available => Some("is-valid"),
            Self::Duplicate | Self::Malformed => Some("is-invalid"),
            Self::Idle | Self::Checking | Self::Unverified => None,
        }
    }

    /// Whether the submit button must be disabled.
    #[must_use]
    pub const fn blocks_submit(self) -> bool {
        matches!(self, Self::Duplicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_trims_and_checks_digits() {
        assert_eq!(DniInput::classify("   "), DniInput::Empty);
        assert_eq!(DniInput::classify("1234567"), DniInput::Malformed);
        assert_eq!(DniInput::classify("1234567a"), DniInput::Malformed);
        assert_eq!(DniInput::classify("123456789"), DniInput::Malformed);
        assert_eq!(
            DniInput::classify(" 12345678 "),
            DniInput::Ready("12345678".to_string())
        );
    }

    #[test]
    fn short_input_is_flagged_without_a_lookup() {
        let feedback = DniFeedback::for_input(&DniInput::classify("1234"));
        assert_eq!(feedback, DniFeedback::Malformed);
        assert_eq!(feedback.message(), "El DNI debe tener 8 dígitos.");
        assert_eq!(feedback.input_class(), Some("is-invalid"));
        assert!(!feedback.blocks_submit());
    }

    #[test]
    fn duplicate_blocks_submit() {
        let feedback = DniFeedback::from_response(&DniCheckResponse { exists: true });
        assert_eq!(feedback.message(), "Este DNI ya se encuentra registrado.");
        assert!(feedback.blocks_submit());
        let feedback = DniFeedback::from_response(&DniCheckResponse { exists: false });
        assert_eq!(feedback.input_class(), Some("is-valid"));
        assert!(!feedback.blocks_submit());
    }

    #[test]
    fn failed_lookup_leaves_submit_enabled() {
        assert!(!DniFeedback::Unverified.blocks_submit());
        assert_eq!(DniFeedback::Unverified.input_class(), None);
        assert_eq!(DniFeedback::Idle.message(), "");
    }
}
