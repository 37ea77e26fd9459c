//! Chart sub-view buttons (attempts, accuracy, rate, ...).

use super::era_buttons::button_style;
use crate::state::AppState;
use dioxus::prelude::*;
use nba3_view::ChartMetric;

/// Picks the plotted metric. Clicking the active one returns to the mode
/// default.
#[component]
pub fn ChartMetricSelector() -> Element {
    let state = use_context::<AppState>();
    let (chosen, effective) = state
        .with_session(|s| (s.state().chart_metric(), s.state().effective_chart_metric()))
        .unwrap_or((None, ChartMetric::Attempts));

    rsx! {
        div {
            style: "display: flex; gap: 6px;",
            for (metric, label) in ChartMetric::ALL.into_iter().map(|m| (m, m.label())) {
                button {
                    key: "{metric:?}",
                    style: button_style(metric == effective),
                    onclick: move |_| {
                        let next = if chosen == Some(metric) { None } else { Some(metric) };
                        state.update(|s| s.set_chart_metric(next));
                    },
                    "{label}"
                }
            }
        }
    }
}
