//! Playoff and winning-season filters for team series.

use crate::state::AppState;
use dioxus::prelude::*;
use nba3_view::TeamSeasonFilter;

#[component]
pub fn TeamFilterToggles() -> Element {
    let state = use_context::<AppState>();
    let filter = state
        .with_session(|s| s.state().team_filter())
        .unwrap_or_default();
    let winning_min = state
        .with_session(|s| s.config().metrics.winning_min_wins)
        .unwrap_or(41);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; margin-bottom: 16px; font-size: 13px; color: #374151;",
            label {
                input {
                    r#type: "checkbox",
                    checked: filter.playoffs_only,
                    onchange: move |_| {
                        state.update(|s| {
                            s.set_team_filter(TeamSeasonFilter {
                                playoffs_only: !filter.playoffs_only,
                                ..filter
                            })
                        });
                    },
                }
                " Playoff seasons only"
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: filter.winning_only,
                    onchange: move |_| {
                        state.update(|s| {
                            s.set_team_filter(TeamSeasonFilter {
                                winning_only: !filter.winning_only,
                                ..filter
                            })
                        });
                    },
                }
                " Winning seasons only ({winning_min}+ wins)"
            }
        }
    }
}
