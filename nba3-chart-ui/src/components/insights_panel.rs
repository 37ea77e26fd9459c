//! Narrative insights under the chart.

use dioxus::prelude::*;
use nba3_view::Insight;

#[derive(Props, Clone, PartialEq)]
pub struct InsightsPanelProps {
    pub insights: Vec<Insight>,
}

#[component]
pub fn InsightsPanel(props: InsightsPanelProps) -> Element {
    rsx! {
        div {
            style: "margin-top: 16px; padding: 16px; background: #f8fafc; border-radius: 8px; border: 1px solid #e2e8f0;",
            for (i, insight) in props.insights.iter().enumerate() {
                div {
                    key: "{i}",
                    style: "display: flex; gap: 10px; align-items: flex-start; margin-bottom: 8px;",
                    div {
                        style: "font-size: 16px; width: 20px; text-align: center;",
                        "{insight.icon}"
                    }
                    div {
                        style: "font-size: 13px; color: #374151; line-height: 1.4;",
                        "{insight.text}"
                    }
                }
            }
        }
    }
}
