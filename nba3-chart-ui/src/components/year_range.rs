//! Start and end year sliders.

use crate::state::AppState;
use dioxus::prelude::*;
use nba3_core::{YearWindow, MAX_YEAR, MIN_YEAR};

/// Two sliders over the supported seasons. A move that would invert the
/// window is rejected by the session and the slider snaps back on the next
/// render.
#[component]
pub fn YearRange() -> Element {
    let state = use_context::<AppState>();
    let window = state
        .with_session(|s| s.state().window())
        .unwrap_or_else(YearWindow::full);
    let start = window.start();
    let end = window.end();

    let on_start = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.update(|s| {
                let _ = s.set_window_start(year);
            });
        }
    };
    let on_end = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.update(|s| {
                let _ = s.set_window_end(year);
            });
        }
    };

    rsx! {
        div {
            style: "display: grid; gap: 12px; margin-bottom: 16px;",
            div {
                label {
                    style: "font-weight: 600; color: #ea580c; font-size: 14px;",
                    "Start: {start}"
                }
                input {
                    r#type: "range",
                    min: "{MIN_YEAR}",
                    max: "{MAX_YEAR}",
                    value: "{start}",
                    style: "width: 100%;",
                    oninput: on_start,
                }
            }
            div {
                label {
                    style: "font-weight: 600; color: #ea580c; font-size: 14px;",
                    "End: {end}"
                }
                input {
                    r#type: "range",
                    min: "{MIN_YEAR}",
                    max: "{MAX_YEAR}",
                    value: "{end}",
                    style: "width: 100%;",
                    oninput: on_end,
                }
            }
        }
    }
}
