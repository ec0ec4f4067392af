//! Document structure editor.
//!
//! # Design
//! - The structure map and card drafts are plain data with native tests.
//! - The island renders from the shared editor store; cards keep their own
//!   reducer and a cancellable type lookup.
//! - Network calls stay in this slice's `api` module.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
mod card;
pub mod draft;
pub mod state;
#[cfg(target_arch = "wasm32")]
mod table;
#[cfg(target_arch = "wasm32")]
pub mod view;
