//! Shared Dioxus components and D3.js bridge for the three-point dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`,
//!   plus the dataset fetch and timer helpers
//! - `state`: Reactive AppState with Dioxus Signals around the `Session`
//! - `components`: Reusable RSX components (selectors, panels, containers, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
