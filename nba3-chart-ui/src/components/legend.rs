//! Series legend.

use dioxus::prelude::*;
use nba3_view::LegendEntry;

#[derive(Props, Clone, PartialEq)]
pub struct LegendProps {
    pub entries: Vec<LegendEntry>,
}

#[component]
pub fn Legend(props: LegendProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin-top: 12px;",
            for entry in props.entries.iter() {
                div {
                    key: "{entry.label}",
                    style: "display: flex; align-items: center; gap: 6px; font-size: 13px; color: #374151;",
                    span {
                        style: "display: inline-block; width: 14px; height: 4px; border-radius: 2px; background: {entry.color};",
                    }
                    "{entry.label}"
                }
            }
        }
    }
}
