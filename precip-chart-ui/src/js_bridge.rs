//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Chart.js bridge lives in `assets/js/bar-chart.js` and is loaded at
//! runtime once Chart.js itself is available. It is evaluated at global scope
//! (no ES modules) and exposed via `window.*`. This module provides Rust
//! wrappers that serialize data and call those globals.

use precip_core::chart_config::BarChartConfig;
use precip_core::presenter::{ChartHandle, ChartSurface};

static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Chart.js UMD build, injected when the host page did not load it.
pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('precip JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the bar chart script with a wait-for-Chart.js polling loop.
///
/// Injects the Chart.js `<script>` tag if no `Chart` global exists yet, then
/// evaluates the bridge at global scope once it does and promotes its
/// functions to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__precipChartsInit) window.__precipChartScript = {};",
        js_string(BAR_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__precipChartsInit) return;
            window.__precipChartsInit = true;
            if (typeof Chart === 'undefined' && !document.getElementById('precip-chartjs')) {{
                var tag = document.createElement('script');
                tag.id = 'precip-chartjs';
                tag.src = {cdn};
                document.head.appendChild(tag);
            }}
            var waitForChartJs = setInterval(function() {{
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChartJs);
                    (0, eval)(window.__precipChartScript);
                    delete window.__precipChartScript;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof destroyBarChart !== 'undefined') window.destroyBarChart = destroyBarChart;
                    window.__precipChartsReady = true;
                    console.log('precip charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        cdn = js_string(CHART_JS_CDN),
    );
    let _ = js_sys::eval(&init_js);
}

/// Render a bar chart onto the canvas `canvas_id`.
///
/// Polls until Chart.js is initialized and the canvas exists. The request is
/// tagged with `generation`; if a destroy or a newer render arrives before the
/// poll fires, this one is dropped.
pub fn render_bar_chart(canvas_id: &str, generation: u64, config_json: &str) {
    let id = js_string(canvas_id);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            window.__precipPending = window.__precipPending || {{}};
            window.__precipPending[{id}] = {generation};
            var poll = setInterval(function() {{
                if (window.__precipPending[{id}] !== {generation}) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__precipChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    delete window.__precipPending[{id}];
                    try {{
                        window.renderBarChart({id}, {config});
                    }} catch(e) {{ console.error('[precip] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart on `canvas_id` and cancel any render still waiting.
pub fn destroy_bar_chart(canvas_id: &str) {
    let id = js_string(canvas_id);
    call_js(&format!(
        "if (window.__precipPending) delete window.__precipPending[{id}]; \
         if (typeof window.destroyBarChart !== 'undefined') window.destroyBarChart({id});"
    ));
}

/// [`ChartSurface`] backed by Chart.js in the browser.
#[derive(Debug, Default)]
pub struct JsChartSurface;

impl ChartSurface for JsChartSurface {
    fn create(&mut self, handle: &ChartHandle, config: &BarChartConfig) -> anyhow::Result<()> {
        let config_json = config.to_json()?;
        render_bar_chart(handle.mount_id(), handle.generation(), &config_json);
        Ok(())
    }

    fn destroy(&mut self, handle: ChartHandle) {
        destroy_bar_chart(handle.mount_id());
    }
}
