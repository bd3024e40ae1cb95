//! Chart container holding the Chart.js canvas.

use crate::state::AppState;
use dioxus::prelude::*;

/// Container height in compact layout.
pub const COMPACT_HEIGHT_PX: u32 = 800;
/// Container height in desktop layout.
pub const WIDE_HEIGHT_PX: u32 = 600;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the canvas (Chart.js will render into this)
    pub id: String,
    /// Maximum width in pixels
    #[props(default = 1000)]
    pub max_width: u32,
}

/// A sized container with the canvas the chart attaches to.
///
/// Chart.js runs with `maintainAspectRatio: false`, so the container's height
/// sets the chart's height: taller in compact layout where bars run
/// horizontally.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();
    let height = if (state.compact)() {
        COMPACT_HEIGHT_PX
    } else {
        WIDE_HEIGHT_PX
    };
    let style = format!(
        "height: {}px; max-width: {}px; width: 100%; position: relative;",
        height, props.max_width
    );

    rsx! {
        div {
            class: "container",
            style: "{style}",
            canvas {
                id: "{props.id}",
            }
        }
    }
}
