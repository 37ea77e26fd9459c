//! Previous/next buttons, scene pills and the scene counter.

use crate::state::AppState;
use dioxus::prelude::*;
use nba3_view::{Scene, SceneView};

fn pill_style(active: bool) -> &'static str {
    if active {
        "padding: 6px 14px; background: #ea580c; color: white; border: none; border-radius: 999px; cursor: pointer; font-size: 13px; font-weight: 600;"
    } else {
        "padding: 6px 14px; background: #f1f5f9; color: #374151; border: none; border-radius: 999px; cursor: pointer; font-size: 13px;"
    }
}

const STEP_STYLE: &str = "padding: 8px 16px; background: #0f172a; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 13px;";

/// Moves past either end are disabled here and rejected by the session.
#[component]
pub fn SceneNav(scene: SceneView) -> Element {
    let state = use_context::<AppState>();
    let current = scene.scene;
    let at_first = current.is_first();
    let at_last = current.is_last();
    let position = scene.position;
    let total = scene.total;

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; gap: 12px; margin-bottom: 12px;",
            button {
                style: STEP_STYLE,
                disabled: at_first,
                onclick: move |_| state.update(|s| {
                    if let Err(e) = s.prev_scene() {
                        log::debug!("[NBA3] session: {}", e);
                    }
                }),
                "← Previous"
            }
            div {
                style: "display: flex; gap: 6px; flex-wrap: wrap;",
                for (target, label) in Scene::ALL.into_iter().map(|s| (s, s.label())) {
                    button {
                        key: "{label}",
                        style: pill_style(target == current),
                        onclick: move |_| state.update(|s| {
                            let _ = s.go_to_scene(target.index());
                        }),
                        "{label}"
                    }
                }
            }
            span {
                style: "font-size: 12px; color: #64748b;",
                "Scene {position} of {total}"
            }
            button {
                style: STEP_STYLE,
                disabled: at_last,
                onclick: move |_| state.update(|s| {
                    if let Err(e) = s.next_scene() {
                        log::debug!("[NBA3] session: {}", e);
                    }
                }),
                "Next →"
            }
        }
    }
}
