//! Personnel picker and structure preview on the upload page.
//!
//! # Design
//! - List decoding, filtering and preview totals are pure.
//! - The island owns the `id_personal` select; the form submits it as before.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
