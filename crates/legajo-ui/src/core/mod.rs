//! Cross-feature primitives: endpoint configuration and the editor store.

pub mod store;
pub mod urls;
