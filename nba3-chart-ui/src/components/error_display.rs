//! Full-screen error display with a reload action.

use crate::js_bridge;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a fatal load error. Reloading is the only way forward; there is
/// no partial dashboard to fall back to.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 60vh; gap: 16px;",
            div {
                style: "padding: 12px 16px; max-width: 640px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                strong { "Error: " }
                "{props.message}"
            }
            button {
                style: "padding: 10px 20px; background: #ea580c; color: white; border: none; border-radius: 6px; cursor: pointer; font-weight: 600;",
                onclick: move |_| js_bridge::reload_page(),
                "Reload"
            }
        }
    }
}
