//! Loading, error and notice boxes.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Fatal error box; shown instead of the map when loading fails.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error loading data: " }
            "{props.message}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NoticeBannerProps {
    pub message: String,
    pub on_dismiss: EventHandler<()>,
}

/// Dismissable, non-fatal notice such as a country without data.
#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 12px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border: 1px solid #FFE082; border-radius: 4px;",
            span { "{props.message}" }
            button {
                style: "border: none; background: transparent; cursor: pointer; font-size: 16px;",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading data...".to_string())]
    pub message: String,
}

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{props.message}"
        }
    }
}
