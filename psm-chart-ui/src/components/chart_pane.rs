//! Titled container that D3 renders a chart into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPaneProps {
    /// The DOM id D3 renders into
    pub id: String,
    /// Heading above the chart
    pub title: String,
    /// Shown instead of the chart until there is something to draw
    #[props(!optional)]
    pub placeholder: Option<String>,
    #[props(default = 380)]
    pub min_height: u32,
}

/// A chart section: heading plus the D3 container div.
///
/// The container stays mounted while the placeholder shows so a pending
/// render can always find its element.
#[component]
pub fn ChartPane(props: ChartPaneProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        section {
            style: "flex: 1 1 420px; margin: 8px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            div {
                style: "{style}",
                if let Some(text) = props.placeholder.as_ref() {
                    div {
                        style: "position: absolute; top: 40%; width: 100%; text-align: center; color: #888;",
                        "{text}"
                    }
                }
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}
