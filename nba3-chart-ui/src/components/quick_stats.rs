//! Quick stats box.

use dioxus::prelude::*;
use nba3_view::QuickStat;

#[derive(Props, Clone, PartialEq)]
pub struct QuickStatsProps {
    pub stats: Vec<QuickStat>,
}

#[component]
pub fn QuickStats(props: QuickStatsProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h4 {
                style: "font-size: 14px; font-weight: 600; color: #374151; margin: 0 0 8px 0;",
                "📋 Quick Stats"
            }
            for stat in props.stats.iter() {
                div {
                    key: "{stat.label}",
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 12px; background: #f8fafc; border-radius: 8px; margin-bottom: 8px; border-left: 4px solid #ea580c;",
                    span { style: "font-size: 13px; color: #64748b;", "{stat.label}" }
                    span { style: "font-size: 16px; font-weight: 700; color: #0f172a;", "{stat.value}" }
                }
            }
        }
    }
}
