//! Year-by-year league table for the evolution scene.

use crate::state::AppState;
use dioxus::prelude::*;
use nba3_view::LeagueTrendPoint;

fn signed(value: f64) -> String {
    format!("{:+.1}", value)
}

#[derive(Props, Clone, PartialEq)]
pub struct LeagueTimelineProps {
    pub trend: Vec<LeagueTrendPoint>,
}

/// One row per league season with its year-over-year changes. The row of
/// the playback year is highlighted.
#[component]
pub fn LeagueTimeline(props: LeagueTimelineProps) -> Element {
    let state = use_context::<AppState>();
    let current = state.timeline.read().current_year();

    rsx! {
        div {
            style: "max-height: 260px; overflow-y: auto; margin-top: 12px;",
            table {
                style: "width: 100%; font-size: 12px; border-collapse: collapse;",
                thead {
                    tr {
                        th { style: "text-align: left;", "Season" }
                        th { "3PT Rate" }
                        th { "Δ" }
                        th { "Mid-Range" }
                        th { "eFG%" }
                        th { "Δ" }
                    }
                }
                tbody {
                    for point in props.trend.iter() {
                        tr {
                            key: "{point.year}",
                            style: if current == Some(point.year) { "background: #ffedd5; font-weight: 700;" } else { "" },
                            td { "{point.year}" }
                            td { style: "text-align: right;", {format!("{:.1}%", point.three_pt_rate)} }
                            td { style: "text-align: right;", {signed(point.three_pt_rate_delta)} }
                            td { style: "text-align: right;", {format!("{:.1}%", point.mid_range_rate)} }
                            td { style: "text-align: right;", {format!("{:.1}%", point.efg_percentage)} }
                            td { style: "text-align: right;", {signed(point.efficiency_delta)} }
                        }
                    }
                }
            }
        }
    }
}
