//! Monthly Precipitation for Regina, Saskatchewan
//!
//! A Chart.js bar chart of monthly precipitation that lays itself out
//! horizontally on narrow viewports.
//!
//! Data flow:
//! 1. On mount: fetch `/data.json` once and store the records in `AppState`.
//! 2. Once records exist: build the bar chart on the canvas.
//! 3. When the `(max-width: 800px)` media query flips: destroy the chart and
//!    rebuild it with the same records in the other orientation.
//!
//! A failed fetch or malformed payload is only logged to the console; the
//! chart is never drawn.

use dioxus::prelude::*;
use precip_chart_ui::components::{ChartContainer, ChartHeader};
use precip_chart_ui::js_bridge::{self, JsChartSurface};
use precip_chart_ui::loader;
use precip_chart_ui::media_query::use_media_query;
use precip_chart_ui::state::AppState;
use precip_core::presenter::ChartPresenter;
use std::cell::RefCell;
use std::rc::Rc;

/// Static JSON resource with the monthly records.
const DATA_PATH: &str = "/data.json";

/// DOM id of the Chart.js canvas.
const CHART_CANVAS_ID: &str = "precipitation-chart";

/// Viewports matching this query get the compact (horizontal bar) layout.
const COMPACT_QUERY: &str = "(max-width: 800px)";

const TITLE: &str = "Precipitation Data for Regina, Saskatchewan";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("precipitation-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let compact = use_media_query(COMPACT_QUERY);
    let mut state = use_context_provider(|| AppState::new(compact));
    let presenter = use_hook(|| {
        Rc::new(RefCell::new(ChartPresenter::new(
            JsChartSurface,
            CHART_CANVAS_ID,
        )))
    });

    // ─── Effect 1: Fetch records once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            match loader::fetch_precipitation(DATA_PATH).await {
                Ok(records) => {
                    log::info!("Loaded {} precipitation records", records.len());
                    state.records.set(Some(records));
                }
                Err(e) => log::error!("Failed to load {}: {:#}", DATA_PATH, e),
            }
        });
    });

    // ─── Effect 2: (Re)build the chart ───
    // Re-runs when the records arrive and on every compact layout flip.
    let effect_presenter = presenter.clone();
    use_effect(move || {
        let compact = (state.compact)();
        let records = state.records.read();
        // No records yet, or the load failed: no chart is ever constructed.
        let Some(records) = records.as_ref() else {
            return;
        };
        if let Err(e) = effect_presenter.borrow_mut().render(records, compact) {
            log::error!("Failed to render precipitation chart: {:#}", e);
        }
    });

    use_drop(move || presenter.borrow_mut().release());

    // ─── Render ───
    rsx! {
        main {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader { title: TITLE.to_string() }

            ChartContainer { id: CHART_CANVAS_ID.to_string() }
        }
    }
}
