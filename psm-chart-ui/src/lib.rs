//! Shared Dioxus components and D3.js bridge for the stability map.
//!
//! This crate provides:
//! - `fetch`: concurrent browser fetch of the observations CSV and boundaries
//! - `js_bridge`: Rust wrappers for the D3.js series chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: map, selectors, chart panes, status boxes

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
