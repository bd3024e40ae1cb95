//! Shared Dioxus components and Chart.js bridge for the precipitation chart.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js via `js_sys::eval()`, and the
//!   `JsChartSurface` the presenter draws through
//! - `loader`: fetches and parses `data.json`
//! - `media_query`: a hook exposing a CSS media query as a signal
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod media_query;
pub mod state;
