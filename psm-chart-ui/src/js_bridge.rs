//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js series chart lives in `assets/js/series-chart.js`, is embedded at
//! compile time and evaluated as a global once D3 has loaded. Chart specs
//! arrive as JSON produced by `psm_data::ChartSpec::to_json`.

static SERIES_CHART_JS: &str = include_str!("../assets/js/series-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PSM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Poll attempts, 100 ms apart, before waiting on D3 or a container gives up.
pub const POLL_LIMIT: u32 = 150;

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script is stored on `window` and evaluated at global scope via
/// indirect eval once `d3` exists, so its function declarations become
/// globals. Safe to call more than once; a poll that gives up can be
/// restarted by calling again.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__psmChartsReady) {{ window.__psmChartScripts = {}; }}",
        serde_json::to_string(SERIES_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);
    let _ = js_sys::eval(&init_script());
}

fn init_script() -> String {
    format!(
        r#"
        (function() {{
            if (window.__psmChartsReady || window.__psmChartsPolling) {{ return; }}
            window.__psmChartsPolling = true;
            var tries = 0;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    window.__psmChartsPolling = false;
                    (0, eval)(window.__psmChartScripts);
                    delete window.__psmChartScripts;
                    if (typeof renderSeriesChart !== 'undefined') window.renderSeriesChart = renderSeriesChart;
                    window.__psmChartsReady = true;
                    console.log('PSM charts initialized');
                }} else if (++tries >= {limit}) {{
                    clearInterval(waitForD3);
                    window.__psmChartsPolling = false;
                    console.error('[PSM] d3 did not load; charts disabled');
                }}
            }}, 100);
        }})();
        "#,
        limit = POLL_LIMIT,
    )
}

/// Render a chart spec into the container with the given DOM id.
///
/// Polls until D3, the chart script and the container all exist, at most
/// [`POLL_LIMIT`] times. A newer render into the same container cancels a
/// pending one.
pub fn render_series_chart(container_id: &str, spec_json: &str) {
    call_js(&render_script(container_id, spec_json));
}

fn render_script(container_id: &str, spec_json: &str) -> String {
    // Passed as JS string literals; serde_json handles all escaping.
    let id_literal = serde_json::to_string(container_id).unwrap_or_default();
    let spec_literal = serde_json::to_string(spec_json).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var id = {id_literal};
            var polls = window.__psmChartPolls || (window.__psmChartPolls = {{}});
            if (polls[id]) {{ clearInterval(polls[id]); }}
            var tries = 0;
            var poll = setInterval(function() {{
                if (window.__psmChartsReady &&
                    typeof window.renderSeriesChart !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(poll);
                    delete polls[id];
                    try {{
                        window.renderSeriesChart(id, {spec_literal});
                    }} catch(e) {{ console.error('[PSM] renderSeriesChart error:', e); }}
                }} else if (++tries >= {limit}) {{
                    clearInterval(poll);
                    delete polls[id];
                    console.warn('[PSM] gave up rendering chart', id);
                }}
            }}, 100);
            polls[id] = poll;
        }})();
        "#,
        limit = POLL_LIMIT,
    )
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
