//! Endpoint defaults and URL templating.
//!
//! # Design
//! - Host pages may override every endpoint through `data-*` attributes; these
//!   constants are the fallbacks.
//! - Templates carry a `/0` placeholder where the record id goes, matching the
//!   URLs the server renders with `url_for(..., id=0)`.

/// Section catalog lookup.
pub const DEFAULT_SECTIONS_URL: &str = "/legajo/api/secciones";
/// Document types per section, `/0` is replaced by the section id.
pub const DEFAULT_DOC_TYPES_TEMPLATE: &str = "/legajo/api/tipos_documento/por_seccion/0";
/// Persisted structure per personnel, `/0` is replaced by the personnel id.
pub const DEFAULT_STRUCTURE_TEMPLATE: &str = "/pdf/api/estructura-personal/0";
/// DNI existence check, `/0` is replaced by the DNI.
pub const DEFAULT_DNI_CHECK_TEMPLATE: &str = "/legajo/api/personal/check_dni/0";
/// Personnel list for the upload picker.
pub const DEFAULT_PERSONNEL_LIST_URL: &str = "/pdf/api/personal-list";

const CACHE_KEY_PREFIX: &str = "structure-cache:";

/// Endpoints used by the structure editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorEndpoints {
    /// Section catalog URL.
    pub sections_url: String,
    /// Document type template.
    pub doc_types_template: String,
    /// Personnel structure template.
    pub structure_template: String,
}

impl Default for EditorEndpoints {
    fn default() -> Self {
        Self {
            sections_url: DEFAULT_SECTIONS_URL.to_string(),
            doc_types_template: DEFAULT_DOC_TYPES_TEMPLATE.to_string(),
            structure_template: DEFAULT_STRUCTURE_TEMPLATE.to_string(),
        }
    }
}

/// Substitute `id` for the `/0` placeholder of a URL template.
///
/// The trailing placeholder wins; otherwise the first `/0/` segment is used.
/// Templates without a placeholder get the id appended as a new segment.
#[must_use]
pub fn fill_id_template(template: &str, id: &str) -> String {
    let encoded = urlencoding::encode(id.trim());
    if let Some(prefix) = template.strip_suffix("/0") {
        return format!("{prefix}/{encoded}");
    }
    if template.contains("/0/") {
        return template.replacen("/0/", &format!("/{encoded}/"), 1);
    }
    format!("{}/{encoded}", template.trim_end_matches('/'))
}

/// Local storage key for a personnel-scoped structure cache.
#[must_use]
pub fn structure_cache_key(personnel_id: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{}", personnel_id.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_placeholder_is_replaced() {
        assert_eq!(
            fill_id_template(DEFAULT_DOC_TYPES_TEMPLATE, "7"),
            "/legajo/api/tipos_documento/por_seccion/7"
        );
        assert_eq!(
            fill_id_template("/api/10/items/0", "3"),
            "/api/10/items/3"
        );
    }

    #[test]
    fn inner_placeholder_and_missing_placeholder() {
        assert_eq!(fill_id_template("/api/0/detail", "42"), "/api/42/detail");
        assert_eq!(fill_id_template("/api/items/", "42"), "/api/items/42");
    }

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(fill_id_template("/check/0", "12 34"), "/check/12%2034");
    }

    #[test]
    fn cache_key_is_scoped_by_personnel() {
        assert_eq!(structure_cache_key(" 15 "), "structure-cache:15");
    }
}
