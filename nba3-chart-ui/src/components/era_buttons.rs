//! One-click era presets.

use crate::state::AppState;
use dioxus::prelude::*;
use nba3_core::Era;

pub(crate) fn button_style(active: bool) -> &'static str {
    if active {
        "padding: 8px 12px; background: #1e40af; color: white; border: 1px solid #1e40af; border-radius: 6px; cursor: pointer; font-size: 12px; text-align: left;"
    } else {
        "padding: 8px 12px; background: white; color: #374151; border: 1px solid #e2e8f0; border-radius: 6px; cursor: pointer; font-size: 12px; text-align: left;"
    }
}

#[component]
pub fn EraButtons() -> Element {
    let state = use_context::<AppState>();
    let active = state
        .with_session(|s| Era::matching(&s.state().window()))
        .flatten();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 1fr; gap: 6px; margin-bottom: 16px;",
            for (era, label) in Era::ALL.into_iter().map(|e| (e, e.label())) {
                button {
                    key: "{era:?}",
                    style: button_style(active == Some(era)),
                    onclick: move |_| state.update(|s| s.apply_era(era)),
                    "{label}"
                }
            }
        }
    }
}
