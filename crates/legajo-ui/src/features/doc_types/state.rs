//! Document type dropdown state shared by the editor cards and the standalone selects.

use legajo_api_models::DocumentTypeOption;

/// Options currently offered by a document type select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DocTypeOptions {
    /// No section chosen yet.
    #[default]
    NeedsSection,
    /// Lookup in flight.
    Loading,
    /// Lookup finished; may be empty.
    Loaded(Vec<DocumentTypeOption>),
    /// Lookup failed.
    Failed,
}

impl DocTypeOptions {
    /// Text of the leading `value="0"` option.
    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::NeedsSection => "-- Seleccione una sección primero --",
            Self::Loading => "Cargando...",
            Self::Loaded(options) if options.is_empty() => "-- No hay tipos para esta sección --",
            Self::Loaded(_) => "-- Seleccione un tipo --",
            Self::Failed => "-- Error al cargar --",
        }
    }

    /// Whether the select should be disabled.
    ///
    /// A failed lookup leaves the control enabled so the error stays visible.
    #[must_use]
    pub fn disabled(&self) -> bool {
        match self {
            Self::NeedsSection | Self::Loading => true,
            Self::Loaded(options) => options.is_empty(),
            Self::Failed => false,
        }
    }

    /// Selectable options.
    #[must_use]
    pub fn options(&self) -> &[DocumentTypeOption] {
        match self {
            Self::Loaded(options) => options,
            _ => &[],
        }
    }

    /// Display name for a selected id.
    #[must_use]
    pub fn label_for(&self, id: &str) -> Option<&str> {
        let id = id.trim().parse::<u32>().ok()?;
        self.options()
            .iter()
            .find(|option| option.id == id)
            .map(|option| option.name.as_str())
    }
}

/// Counter that marks which lookup is the latest one.
///
/// Every new lookup advances the counter; a result is applied only while the
/// generation it was started with is still current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LookupGeneration(u64);

impl LookupGeneration {
    /// Supersede every earlier lookup and return the new generation.
    pub const fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Whether `generation` is still the latest lookup.
    #[must_use]
    pub const fn is_current(self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// Section id carried by a select value, `None` for the placeholder.
#[must_use]
pub fn selected_section(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> DocTypeOptions {
        DocTypeOptions::Loaded(vec![
            DocumentTypeOption {
                id: 4,
                name: "Contrato".to_string(),
            },
            DocumentTypeOption {
                id: 5,
                name: "Adenda".to_string(),
            },
        ])
    }

    #[test]
    fn placeholder_and_disabled_follow_the_lifecycle() {
        assert!(DocTypeOptions::NeedsSection.disabled());
        assert!(DocTypeOptions::Loading.disabled());
        assert_eq!(DocTypeOptions::Loading.placeholder(), "Cargando...");
        assert!(!loaded().disabled());
        assert!(DocTypeOptions::Loaded(Vec::new()).disabled());
        assert_eq!(
            DocTypeOptions::Loaded(Vec::new()).placeholder(),
            "-- No hay tipos para esta sección --"
        );
        assert!(!DocTypeOptions::Failed.disabled());
        assert_eq!(DocTypeOptions::Failed.placeholder(), "-- Error al cargar --");
    }

    #[test]
    fn label_lookup_by_select_value() {
        assert_eq!(loaded().label_for("5"), Some("Adenda"));
        assert_eq!(loaded().label_for("0"), None);
        assert_eq!(DocTypeOptions::Failed.label_for("4"), None);
    }

    #[test]
    fn advancing_supersedes_earlier_lookups() {
        let mut generation = LookupGeneration::default();
        let first = generation.advance();
        assert!(generation.is_current(first));
        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn generation_wraps_instead_of_overflowing() {
        let mut generation = LookupGeneration(u64::MAX);
        assert_eq!(generation.advance(), 0);
        assert!(generation.is_current(0));
        assert!(!generation.is_current(u64::MAX));
    }

    #[test]
    fn placeholder_value_is_not_a_section() {
        assert_eq!(selected_section("0"), None);
        assert_eq!(selected_section(""), None);
        assert_eq!(selected_section("12"), Some(12));
    }
}
