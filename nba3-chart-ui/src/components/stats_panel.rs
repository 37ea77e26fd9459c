//! Team and career panels and league benchmarks.

use dioxus::prelude::*;
use nba3_view::{BenchmarkRow, CareerPanel, TeamPanel};

fn percentile_label(percentile: Option<f64>) -> String {
    match percentile {
        Some(p) => format!("{:.0}th pct", p),
        None => "n/a".to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatsPanelProps {
    pub teams: Vec<TeamPanel>,
    pub careers: Vec<CareerPanel>,
    pub benchmarks: Vec<BenchmarkRow>,
}

/// Per-team and per-player figures, then the league percentile table.
#[component]
pub fn StatsPanel(props: StatsPanelProps) -> Element {
    rsx! {
        div {
            if props.teams.is_empty() && props.careers.is_empty() && props.benchmarks.is_empty() {
                p {
                    style: "font-size: 13px; color: #374151; line-height: 1.4; margin: 0;",
                    "Select teams or players to see contextual statistics and league rankings."
                }
            }
            for panel in props.teams.iter() {
                TeamCard { key: "{panel.team}", panel: panel.clone() }
            }
            for panel in props.careers.iter() {
                CareerCard { key: "{panel.player}", panel: panel.clone() }
            }
            if !props.benchmarks.is_empty() {
                h4 {
                    style: "font-size: 14px; font-weight: 600; color: #374151; margin: 12px 0 8px 0;",
                    "League Benchmarks"
                }
                table {
                    style: "width: 100%; font-size: 12px; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: "text-align: left;", "Metric" }
                            th { "P25" }
                            th { "Median" }
                            th { "P75" }
                            th { "P90" }
                        }
                    }
                    tbody {
                        for row in props.benchmarks.iter() {
                            tr {
                                key: "{row.label}",
                                td { "{row.label}" }
                                td { style: "text-align: right;", {format!("{:.1}", row.benchmarks.p25)} }
                                td { style: "text-align: right;", {format!("{:.1}", row.benchmarks.p50)} }
                                td { style: "text-align: right;", {format!("{:.1}", row.benchmarks.p75)} }
                                td { style: "text-align: right;", {format!("{:.1}", row.benchmarks.p90)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CareerCard(panel: CareerPanel) -> Element {
    let career = &panel.career;
    let window = &panel.window;
    let trend_sign = if career.career_trend >= 0.0 { "+" } else { "" };
    let accuracy = format!("{:.1}%", career.career_accuracy);
    let trend = format!("{}{:.1}", trend_sign, career.career_trend);
    let window_accuracy = format!("{:.1}%", window.accuracy);
    let window_rate = format!("{:.1}%", window.average_rate);
    let rank = percentile_label(panel.rate_percentile);

    rsx! {
        div {
            style: "padding: 12px; background: #f8fafc; border-radius: 8px; margin-bottom: 8px; border-left: 4px solid {panel.color};",
            div {
                style: "font-weight: 700; color: #0f172a; margin-bottom: 6px;",
                "{panel.player}"
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 4px; font-size: 12px; color: #374151;",
                span { "Career: {career.first_year}-{career.last_year}" }
                span { "Seasons: {career.total_seasons}" }
                span { "Made/Att: {career.total_made}/{career.total_attempts}" }
                span { "Accuracy: {accuracy}" }
                span { "Rate trend: {trend}" }
                span { "Prime seasons: {career.prime_seasons}" }
                span { "In range: {window.seasons} seasons" }
                span { "Range made: {window.total_made}" }
                span { "Range accuracy: {window_accuracy}" }
                span { "Avg rate: {window_rate}" }
                span { "Rate rank: {rank}" }
            }
        }
    }
}

#[component]
fn TeamCard(panel: TeamPanel) -> Element {
    let summary = &panel.summary;
    let window = &panel.window;
    let average_wins = summary
        .average_wins
        .map_or_else(|| "n/a".to_string(), |w| format!("{:.1}", w));
    let peak_rate = format!("{:.1}%", summary.peak_rate);
    let window_accuracy = format!("{:.1}%", window.accuracy);
    let window_rate = format!("{:.1}%", window.average_rate);
    let rank = percentile_label(panel.rate_percentile);

    rsx! {
        div {
            style: "padding: 12px; background: #f8fafc; border-radius: 8px; margin-bottom: 8px; border-left: 4px solid {panel.color};",
            div {
                style: "font-weight: 700; color: #0f172a; margin-bottom: 6px;",
                "{panel.team}"
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 4px; font-size: 12px; color: #374151;",
                span { "Seasons: {summary.first_year}-{summary.last_year}" }
                span { "Playoffs: {summary.playoff_seasons}/{summary.total_seasons}" }
                span { "Total wins: {summary.total_wins}" }
                span { "Avg wins: {average_wins}" }
                span { "Peak rate: {peak_rate}" }
                span { "In range: {window.seasons} seasons" }
                span { "Range made: {window.total_made}" }
                span { "Range accuracy: {window_accuracy}" }
                span { "Avg rate: {window_rate}" }
                span { "Rate rank: {rank}" }
            }
        }
    }
}
