//! Dropdowns for the two-country comparison.

use crate::state::AppState;
use dioxus::prelude::*;

/// Which comparison dropdown a selector drives.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ComparisonSlot {
    First,
    Second,
}

#[derive(Props, Clone, PartialEq)]
pub struct CountrySelectorProps {
    pub slot: ComparisonSlot,
    pub label: String,
}

/// Country dropdown.
/// Lists every distinct country from the dataset and updates the comparison on change.
#[component]
pub fn CountrySelector(props: CountrySelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let slot = props.slot;
    let (countries, selected, listed) = match state.comparison.read().as_ref() {
        Some(view) => {
            let selected = match slot {
                ComparisonSlot::First => view.first().to_string(),
                ComparisonSlot::Second => view.second().to_string(),
            };
            let listed = view.is_listed(&selected);
            (view.countries().to_vec(), selected, listed)
        }
        None => (Vec::new(), String::new(), false),
    };
    let select_id = match slot {
        ComparisonSlot::First => "country1",
        ComparisonSlot::Second => "country2",
    };

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let mut comparison = state.comparison.write();
        if let Some(view) = comparison.as_mut() {
            let result = match slot {
                ComparisonSlot::First => view.select_first(&value),
                ComparisonSlot::Second => view.select_second(&value),
            };
            if let Err(e) = result {
                log::warn!("comparison: {}", e);
            }
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{select_id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}"
            }
            select {
                id: "{select_id}",
                onchange: on_change,
                // Shown value must match the charted selection.
                if !listed {
                    option { value: "", disabled: true, selected: true, "{selected}" }
                }
                for country in countries.iter() {
                    option {
                        value: "{country}",
                        selected: *country == selected,
                        "{country}"
                    }
                }
            }
        }
    }
}
