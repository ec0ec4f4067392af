//! Page-wide handlers declared through `data-*` attributes.

#[cfg(target_arch = "wasm32")]
pub mod bind;
pub mod logic;
