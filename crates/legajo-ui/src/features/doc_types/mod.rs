//! Section -> document type dropdowns.
//!
//! # Design
//! - One option-state model shared by the standalone selects and editor cards.
//! - The standalone pair is bound to server-rendered selects, not mounted.

#[cfg(target_arch = "wasm32")]
pub mod bind;
#[cfg(target_arch = "wasm32")]
pub(crate) mod fetch;
pub mod state;
