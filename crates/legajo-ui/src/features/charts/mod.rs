//! HR dashboard charts rendered as SVG.
//!
//! # Design
//! - Parsing, filtering and geometry are pure and tested natively.
//! - One component draws every chart style from a prepared series.
//! - Empty or unreadable data swaps the chart for its placeholder.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
