//! Reusable Dioxus RSX components for the precipitation chart.

mod chart_container;
mod chart_header;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
