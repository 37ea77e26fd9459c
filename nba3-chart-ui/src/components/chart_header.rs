//! Chart header component with title and y-axis description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Y-axis description (e.g., "Three-Point Attempts")
    #[props(default = String::new())]
    pub axis_label: String,
    /// The active window, e.g. "2015-2020"
    #[props(default = String::new())]
    pub window_label: String,
}

/// Header for the chart section showing title, window and y-axis.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px; color: #0f172a;",
                "{props.title}"
                if !props.window_label.is_empty() {
                    span {
                        style: "margin-left: 8px; font-size: 13px; font-weight: 500; color: #ea580c;",
                        "{props.window_label}"
                    }
                }
            }
            if !props.axis_label.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Y-axis: {props.axis_label}"
                }
            }
        }
    }
}
