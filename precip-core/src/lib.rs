//! Data types and chart construction for the Regina precipitation chart.
//!
//! This crate has no web dependencies so everything here can be unit tested
//! natively:
//! - `record`: the `PrecipitationRecord` wire type and payload parsing
//! - `month_color`: the static month -> bar color table
//! - `chart_config`: builds the Chart.js bar chart configuration
//! - `presenter`: the render/teardown state machine that owns the chart handle

pub mod chart_config;
pub mod month_color;
pub mod presenter;
pub mod record;
