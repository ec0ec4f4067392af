//! Network and cache stages of the structure editor boot.
//!
//! # Design
//! - This module only does I/O; `StructureMap::assemble` fixes the merge order.
//! - Every stage degrades to the previous result; nothing here fails the editor.
//! - A cache that fails validation is discarded as a whole and cleared.

use crate::app::preferences::{clear_structure_cache, load_structure_cache};
use crate::core::urls::{EditorEndpoints, fill_id_template};
use crate::features::structure::state::StructureMap;
use crate::services::api::ApiClient;
use gloo::console;
use legajo_api_models::SectionOption;

/// Section catalog, empty when the lookup fails.
pub(crate) async fn load_catalog(client: &ApiClient, endpoints: &EditorEndpoints) -> Vec<SectionOption> {
    match client.fetch_sections(&endpoints.sections_url).await {
        Ok(catalog) => {
            console::log!("section catalog loaded", catalog.len());
            catalog
        }
        Err(err) => {
            console::error!("section catalog failed", err.to_string());
            Vec::new()
        }
    }
}

/// Defaults, overlaid by the local cache, overlaid by the server copy.
pub(crate) async fn load_working_map(
    client: &ApiClient,
    endpoints: &EditorEndpoints,
    personnel_id: Option<&str>,
) -> StructureMap {
    let Some(personnel_id) = personnel_id else {
        console::warn!("personnel id missing; using the default structure");
        return StructureMap::with_defaults();
    };

    let cached = load_structure_cache(personnel_id);
    let path = fill_id_template(&endpoints.structure_template, personnel_id);
    let server = match client.fetch_personnel_structure(&path).await {
        Ok(Some(stored)) => {
            console::log!("server structure received", personnel_id, stored.len());
            Some(stored)
        }
        Ok(None) => {
            console::log!("no server structure", personnel_id);
            None
        }
        Err(err) => {
            console::warn!("server structure failed", personnel_id, err.to_string());
            None
        }
    };

    let (map, rejected) = StructureMap::assemble(cached.as_deref(), server);
    if let Some(err) = rejected {
        console::warn!("cached structure rejected", personnel_id, err.to_string());
        clear_structure_cache(personnel_id);
    } else if cached.is_some() {
        console::log!("cached structure accepted", personnel_id);
    }
    map
}
