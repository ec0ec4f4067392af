//! Confirmation modals for destructive record actions.

#[cfg(target_arch = "wasm32")]
pub mod bind;
pub mod logic;
