//! Modal descriptors.
//!
//! # Design
//! - Each modal is described by data: host id, trigger attributes, form and
//!   name targets, and the action URL pattern.
//! - The binding is shared across modals and never branches on the kind.

/// Bootstrap confirmation modals present on record pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmModalKind {
    /// Delete one uploaded document.
    DeleteDocument,
    /// Deactivate a personnel record.
    DeactivatePersonnel,
    /// Reactivate a personnel record.
    ActivatePersonnel,
}

impl ConfirmModalKind {
    /// Every supported modal.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [
            Self::DeleteDocument,
            Self::DeactivatePersonnel,
            Self::ActivatePersonnel,
        ]
    }

    /// Id of the modal element.
    #[must_use]
    pub const fn host_id(self) -> &'static str {
        match self {
            Self::DeleteDocument => "confirmDeleteModal",
            Self::DeactivatePersonnel => "confirmDeactivateModal",
            Self::ActivatePersonnel => "confirmActivateModal",
        }
    }

    /// Trigger attribute carrying the record id.
    #[must_use]
    pub const fn id_attribute(self) -> &'static str {
        match self {
            Self::DeleteDocument => "data-doc-id",
            Self::DeactivatePersonnel | Self::ActivatePersonnel => "data-personal-id",
        }
    }

    /// Trigger attribute carrying the display name.
    #[must_use]
    pub const fn name_attribute(self) -> &'static str {
        match self {
            Self::DeleteDocument => "data-doc-name",
            Self::DeactivatePersonnel | Self::ActivatePersonnel => "data-personal-name",
        }
    }

    /// Selector of the form inside the modal.
    #[must_use]
    pub const fn form_selector(self) -> &'static str {
        match self {
            Self::DeleteDocument => "#deleteDocForm",
            Self::DeactivatePersonnel => "#deactivateForm",
            Self::ActivatePersonnel => "#activateForm",
        }
    }

    /// Selector of the element showing the record name.
    #[must_use]
    pub const fn name_selector(self) -> &'static str {
        match self {
            Self::DeleteDocument => "#docNameToDelete",
            Self::DeactivatePersonnel => "#personalNameToDeactivate",
            Self::ActivatePersonnel => "#personalNameToActivate",
        }
    }

    /// Form action for a record id, encoded as one path segment; `None` when
    /// the trigger carried no id.
    #[must_use]
    pub fn action_url(self, id: &str) -> Option<String> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        let id = urlencoding::encode(id);
        Some(match self {
            Self::DeleteDocument => format!("/legajo/documento/{id}/eliminar"),
            Self::DeactivatePersonnel => format!("/legajo/personal/{id}/eliminar"),
            Self::ActivatePersonnel => format!("/legajo/personal/{id}/reactivar"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_urls_follow_the_record_routes() {
        assert_eq!(
            ConfirmModalKind::DeleteDocument.action_url("42").as_deref(),
            Some("/legajo/documento/42/eliminar")
        );
        assert_eq!(
            ConfirmModalKind::DeactivatePersonnel.action_url("7").as_deref(),
            Some("/legajo/personal/7/eliminar")
        );
        assert_eq!(
            ConfirmModalKind::ActivatePersonnel.action_url("7").as_deref(),
            Some("/legajo/personal/7/reactivar")
        );
    }

    #[test]
    fn ids_are_encoded_as_one_path_segment() {
        assert_eq!(
            ConfirmModalKind::DeactivatePersonnel.action_url("7/../x").as_deref(),
            Some("/legajo/personal/7%2F..%2Fx/eliminar")
        );
        assert_eq!(
            ConfirmModalKind::DeleteDocument.action_url(" 4 2 ").as_deref(),
            Some("/legajo/documento/4%202/eliminar")
        );
    }

    #[test]
    fn missing_id_is_a_no_op() {
        for kind in ConfirmModalKind::all() {
            assert_eq!(kind.action_url("  "), None);
        }
    }

    #[test]
    fn personnel_modals_share_trigger_attributes() {
        assert_eq!(
            ConfirmModalKind::ActivatePersonnel.id_attribute(),
            ConfirmModalKind::DeactivatePersonnel.id_attribute()
        );
        assert_eq!(ConfirmModalKind::DeleteDocument.name_attribute(), "data-doc-name");
    }
}
