//! Play/pause control for the season timeline.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use nba3_core::YearWindow;

/// Starts a repeating task that steps the timeline through `window` every
/// `playback_interval_ms`. Stopping, or unmounting the button, cancels it.
#[component]
pub fn PlaybackButton(window: YearWindow) -> Element {
    let mut state = use_context::<AppState>();
    let playing = state.timeline.read().is_playing();
    let current = state.timeline.read().current_year();
    let interval = state
        .with_session(|s| s.config().playback_interval_ms)
        .unwrap_or(500);

    use_drop(move || state.stop_playback());

    let on_click = move |_| {
        if state.timeline.read().is_playing() {
            state.stop_playback();
            return;
        }
        state.timeline.write().retarget(window);
        state.timeline.write().toggle();
        let task = spawn(async move {
            loop {
                js_bridge::sleep_ms(interval).await;
                if state.timeline.write().advance().is_none() {
                    break;
                }
            }
            state.finish_playback();
        });
        state.playback_task.set(Some(task));
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 10px; margin-top: 12px;",
            button {
                style: "padding: 8px 16px; background: #0f172a; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 13px;",
                onclick: on_click,
                if playing { "⏸ Pause" } else { "▶ Play Timeline" }
            }
            if let Some(year) = current {
                span {
                    style: "font-size: 14px; font-weight: 700; color: #ea580c;",
                    "Season {year}"
                }
            }
        }
    }
}
