//! Chart container component with empty-state overlay.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Placeholder shown instead of a chart
    #[props(!optional)]
    pub empty_message: Option<String>,
    /// Optional minimum height in pixels
    #[props(default = 420)]
    pub min_height: u32,
}

/// A container div for D3.js charts. The D3 target stays mounted while the
/// placeholder is shown so the next render finds it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; background: #fafbfc; border-radius: 8px;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if let Some(message) = &props.empty_message {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #64748b; font-size: 16px; text-align: center;",
                    "{message}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
