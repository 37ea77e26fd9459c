//! Analysis mode tabs.

use crate::state::AppState;
use dioxus::prelude::*;
use nba3_view::AnalysisMode;

fn tab_style(active: bool) -> &'static str {
    if active {
        "padding: 12px 16px; background: #ea580c; color: white; border: 2px solid #ea580c; border-radius: 8px; cursor: pointer; font-size: 13px; font-weight: 600; text-align: left;"
    } else {
        "padding: 12px 16px; background: #f1f5f9; color: #475569; border: 2px solid #e2e8f0; border-radius: 8px; cursor: pointer; font-size: 13px; font-weight: 500; text-align: left;"
    }
}

/// One button per analysis mode; switching keeps all selections.
#[component]
pub fn ModeTabs() -> Element {
    let state = use_context::<AppState>();
    let current = state.with_session(|s| s.state().mode()).unwrap_or_default();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 1fr; gap: 8px; margin-bottom: 16px;",
            for (mode, label) in AnalysisMode::ALL.into_iter().map(|m| (m, m.label())) {
                button {
                    key: "{mode:?}",
                    style: tab_style(mode == current),
                    onclick: move |_| state.update(|s| s.set_mode(mode)),
                    "{label}"
                }
            }
        }
    }
}
