//! DNI uniqueness check on the personnel form.
//!
//! # Design
//! - Classification and feedback are pure; the binding only moves them into the DOM.
//! - A request goes out only for a well-formed DNI.

#[cfg(target_arch = "wasm32")]
pub mod bind;
pub mod logic;
