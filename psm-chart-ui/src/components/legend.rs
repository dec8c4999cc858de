//! Color legend for the stability scale.

use psm_core::config::NEUTRAL_FILL;
use psm_core::ColorScale;
use dioxus::prelude::*;

/// One swatch per effective scale stop, plus the no-data color.
#[component]
pub fn MapLegend() -> Element {
    let scale = ColorScale::stability();
    let stops: Vec<(String, String)> = scale
        .stops()
        .map(|(value, color)| (format!("{:+}", value), color.to_string()))
        .collect();
    let no_data = NEUTRAL_FILL;

    rsx! {
        div {
            style: "display: flex; gap: 10px; align-items: center; font-size: 12px; color: #444; margin: 4px 0 12px 0;",
            span { style: "font-weight: bold;", "Political stability:" }
            for (label, color) in stops.into_iter() {
                span {
                    style: "display: inline-flex; align-items: center; gap: 4px;",
                    span { style: "display: inline-block; width: 14px; height: 14px; background: {color};" }
                    "{label}"
                }
            }
            span {
                style: "display: inline-flex; align-items: center; gap: 4px;",
                span { style: "display: inline-block; width: 14px; height: 14px; border: 1px solid #ccc; background: {no_data};" }
                "no data"
            }
        }
    }
}
