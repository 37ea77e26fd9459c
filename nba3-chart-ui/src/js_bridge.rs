//! Typed wrappers around JS interop via `js_sys::eval()` and `web_sys`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those
//! globals, plus the fetch and timer primitives the app's async tasks await.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");
static RANKING_CHART_JS: &str = include_str!("../assets/js/ranking-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('NBA3 JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Safe to call on every render; the scripts are evaluated once. They are
/// evaluated at global scope via indirect `eval` once D3 is ready, and each
/// entry point is then promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, TREND_CHART_JS, RANKING_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__nba3ChartScripts && !window.__nba3ChartsReady) {{ window.__nba3ChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__nba3ChartsReady || window.__nba3ChartsPending) return;
            window.__nba3ChartsPending = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__nba3ChartScripts);
                    delete window.__nba3ChartScripts;
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    if (typeof renderRankingChart !== 'undefined') window.renderRankingChart = renderRankingChart;
                    if (typeof highlightYear !== 'undefined') window.highlightYear = highlightYear;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__nba3ChartsPending = false;
                    window.__nba3ChartsReady = true;
                    console.log('NBA3 charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn escape_arg(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Call `window.<function>(container, data, config)` once D3, the chart
/// scripts and the container element all exist.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_arg(data_json);
    let escaped_config = escape_arg(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__nba3ChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[NBA3] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the multi-series trend chart (teams or players over seasons).
pub fn render_trend_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("[NBA3] bridge: renderTrendChart into #{}", container_id);
    render_when_ready("renderTrendChart", container_id, data_json, config_json);
}

/// Render the elite-shooter bar chart.
pub fn render_ranking_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("[NBA3] bridge: renderRankingChart into #{}", container_id);
    render_when_ready("renderRankingChart", container_id, data_json, config_json);
}

/// Mark one season on the trend chart, or clear the mark with `None`.
pub fn highlight_year(container_id: &str, year: Option<i32>) {
    let year = year.map_or_else(|| "null".to_string(), |y| y.to_string());
    call_js(&format!(
        "if (window.highlightYear) window.highlightYear('{}', {});",
        container_id, year
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Reload the page (the only recovery from a failed data load).
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("[NBA3] bridge: reload failed: {:?}", e);
        }
    }
}

fn js_error(context: &str, value: JsValue) -> String {
    let detail = value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "unknown error".to_string());
    format!("{}: {}", context, detail)
}

/// Fetch a same-origin text resource.
///
/// A non-2xx status is an error, not an empty body.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window object".to_string())?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| js_error("invalid request", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("network error", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("unexpected fetch result", e))?;
    if !resp.ok() {
        return Err(format!("HTTP {} for {}", resp.status(), url));
    }

    let text = JsFuture::from(resp.text().map_err(|e| js_error("unreadable body", e))?)
        .await
        .map_err(|e| js_error("unreadable body", e))?;
    let body = text
        .as_string()
        .ok_or_else(|| format!("non-text body for {}", url))?;
    log::info!("[NBA3] bridge: fetched {} ({} bytes)", url, body.len());
    Ok(body)
}

/// Resolve after `ms` milliseconds using `setTimeout`.
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}
