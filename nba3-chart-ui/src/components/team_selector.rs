//! Team checklist grouped by conference and division.

use crate::state::AppState;
use dioxus::prelude::*;
use nba3_core::Conference;
use std::collections::BTreeMap;

#[component]
pub fn TeamSelector() -> Element {
    let state = use_context::<AppState>();
    let directory = state.team_directory.read().clone();
    let selected: Vec<String> = state
        .with_session(|s| s.state().teams().as_slice().to_vec())
        .unwrap_or_default();

    let mut grouped: BTreeMap<Conference, BTreeMap<String, Vec<String>>> = BTreeMap::new();
    for team in directory {
        grouped
            .entry(team.conference)
            .or_default()
            .entry(team.division)
            .or_default()
            .push(team.name);
    }

    rsx! {
        div {
            style: "margin-bottom: 24px;",
            h3 {
                style: "font-size: 16px; font-weight: 700; color: #0f172a; margin: 0 0 12px 0; padding-bottom: 8px; border-bottom: 2px solid #ea580c;",
                "🏀 Teams"
            }
            for (conference, divisions) in grouped {
                div {
                    key: "{conference}",
                    style: "margin-bottom: 12px;",
                    h4 {
                        style: "font-size: 14px; font-weight: 600; color: #1e40af; margin: 0 0 6px 0;",
                        "{conference} Conference"
                    }
                    for (division, teams) in divisions {
                        div {
                            key: "{division}",
                            style: "margin: 0 0 8px 8px;",
                            div {
                                style: "font-size: 12px; font-weight: 600; color: #64748b; margin-bottom: 4px;",
                                "{division}"
                            }
                            for team in teams {
                                TeamCheckbox {
                                    key: "{team}",
                                    checked: selected.contains(&team),
                                    name: team.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamCheckbox(name: String, checked: bool) -> Element {
    let state = use_context::<AppState>();
    let key = name.clone();
    rsx! {
        label {
            style: "display: block; font-size: 13px; color: #374151; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| {
                    state.update(|s| {
                        s.toggle_team(&key);
                    });
                },
            }
            " {name}"
        }
    }
}
