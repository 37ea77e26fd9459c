//! Player checklist with the current selection in order.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn PlayerSelector() -> Element {
    let state = use_context::<AppState>();
    let names = state.player_names.read().clone();
    let selected: Vec<String> = state
        .with_session(|s| s.state().players().as_slice().to_vec())
        .unwrap_or_default();

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            h3 {
                style: "font-size: 16px; font-weight: 700; color: #0f172a; margin: 0 0 12px 0; padding-bottom: 8px; border-bottom: 2px solid #ea580c;",
                "🏀 Players"
            }
            div {
                style: "max-height: 350px; overflow-y: auto; border: 1px solid #e2e8f0; border-radius: 8px; padding: 10px;",
                for name in names {
                    PlayerCheckbox {
                        key: "{name}",
                        checked: selected.contains(&name),
                        name: name.clone(),
                    }
                }
            }
            if !selected.is_empty() {
                div {
                    style: "margin-top: 12px;",
                    h4 {
                        style: "font-size: 14px; font-weight: 600; color: #374151; margin: 0 0 8px 0;",
                        "Selected Players"
                    }
                    button {
                        style: "font-size: 12px; padding: 4px 10px; border: 1px solid #e2e8f0; border-radius: 4px; background: white; cursor: pointer;",
                        onclick: move |_| state.update(|s| s.clear_players()),
                        "Clear"
                    }
                    for name in selected.iter() {
                        div {
                            key: "{name}",
                            style: "font-size: 13px; color: #0f172a; padding: 2px 0;",
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlayerCheckbox(name: String, checked: bool) -> Element {
    let state = use_context::<AppState>();
    let key = name.clone();
    rsx! {
        label {
            style: "display: block; font-size: 13px; color: #374151; cursor: pointer; padding: 2px 0;",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| {
                    state.update(|s| {
                        s.toggle_player(&key);
                    });
                },
            }
            " {name}"
        }
    }
}
