//! Read-only summary of the working structure.

use crate::core::store::EditorStore;
use crate::features::structure::state::page_range_label;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(SummaryTable)]
pub(crate) fn summary_table() -> Html {
    let rows = use_selector(|store: &EditorStore| {
        store
            .map
            .iter()
            .map(|(key, section)| {
                (
                    key.to_string(),
                    store.section_name(section.section_id, key).to_string(),
                    section.document_type.clone(),
                    section.description.clone(),
                    page_range_label(section),
                )
            })
            .collect::<Vec<_>>()
    });
    let total = use_selector(|store: &EditorStore| store.map.total_pages());

    html! {
        <div class="table-responsive">
            <table class="table table-sm table-striped align-middle">
                <thead>
                    <tr>
                        <th>{"Sección"}</th>
                        <th>{"Tipo Documento"}</th>
                        <th>{"Descripción"}</th>
                        <th>{"Páginas"}</th>
                    </tr>
                </thead>
                <tbody id="estructuraBody">
                    { for rows.iter().map(|(key, section, doc_type, description, pages)| html! {
                        <tr key={key.clone()} data-seccion={key.clone()}>
                            <td>{ section.clone() }</td>
                            <td>{ doc_type.clone() }</td>
                            <td>{ description.clone() }</td>
                            <td>{ pages.clone() }</td>
                        </tr>
                    }) }
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="3" class="text-end fw-bold">{"Total de páginas"}</td>
                        <td class="fw-bold">{ total.to_string() }</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
