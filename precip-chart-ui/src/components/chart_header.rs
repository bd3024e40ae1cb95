//! Chart header component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
}

/// Page heading above the chart.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        h2 {
            style: "margin: 0 0 8px 0;",
            "{props.title}"
        }
    }
}
