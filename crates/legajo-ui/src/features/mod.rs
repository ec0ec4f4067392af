//! Feature slices.
//!
//! Each slice keeps its pure state and logic natively testable and gates the
//! DOM-facing parts behind `wasm32`.

pub mod charts;
pub mod dni;
pub mod doc_types;
pub mod handlers;
pub mod modals;
pub mod personnel;
pub mod structure;
