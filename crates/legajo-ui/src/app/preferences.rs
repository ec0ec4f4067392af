//! Persistence and environment helpers for the page islands.

use crate::core::urls::structure_cache_key;
use crate::features::structure::state::StructureMap;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::document;

const API_BASE_ATTRIBUTE: &str = "data-api-base";

/// Raw cached structure for one personnel, if any.
pub(crate) fn load_structure_cache(personnel_id: &str) -> Option<String> {
    let key = structure_cache_key(personnel_id);
    match LocalStorage::raw().get_item(&key) {
        Ok(value) => value,
        Err(err) => {
            log_storage_error("get", &key, &format!("{err:?}"));
            None
        }
    }
}

/// Drop the cached structure for one personnel.
pub(crate) fn clear_structure_cache(personnel_id: &str) {
    LocalStorage::delete(structure_cache_key(personnel_id));
}

/// Persist the working structure for one personnel.
pub(crate) fn persist_structure_cache(personnel_id: &str, map: &StructureMap) -> bool {
    let key = structure_cache_key(personnel_id);
    match LocalStorage::set(&key, map) {
        Ok(()) => true,
        Err(err) => {
            log_storage_error("set", &key, &err.to_string());
            false
        }
    }
}

/// Prefix for every API path, read from `<body data-api-base>`; same-origin by default.
pub(crate) fn api_base_url() -> String {
    document()
        .body()
        .and_then(|body| body.get_attribute(API_BASE_ATTRIBUTE))
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
