//! Political Stability and Arms Deliveries
//!
//! A world choropleth colored by political stability. Clicking a country
//! draws its arms-deliveries and stability time series; two dropdowns
//! compare any pair of countries side by side.
//!
//! Data flow:
//! 1. On mount, the observations CSV (served next to the app) and the world
//!    GeoJSON are fetched concurrently. Either failing aborts with an error box.
//! 2. The CSV is loaded into an in-memory SQLite store; the boundaries are
//!    projected and colored into a `ChoroplethMap`.
//! 3. Map clicks go through the `Session`; the selected country's charts
//!    are rendered via D3.js. Dropdown changes re-render the comparison.

use dioxus::prelude::*;
use psm_chart_ui::components::{
    ChartPane, ComparisonSlot, CountrySelector, ErrorDisplay, LoadingSpinner, MapLegend,
    NoticeBanner, WorldMap,
};
use psm_chart_ui::state::AppState;
use psm_chart_ui::{fetch, js_bridge};
use psm_core::config::{DEFAULT_GEOJSON_SOURCE, DEFAULT_OBSERVATIONS_SOURCE};
use psm_data::{ChoroplethMap, ComparisonView, Session};

const ARMS_CHART_ID: &str = "arms-chart";
const STABILITY_CHART_ID: &str = "stability-chart";
const COMPARE_ARMS_CHART_ID: &str = "compare-arms-chart";
const COMPARE_STABILITY_CHART_ID: &str = "compare-stability-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("stability-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load both sources once; nothing renders on failure ───
    use_future(move || async move {
        match fetch::load_sources(DEFAULT_OBSERVATIONS_SOURCE, DEFAULT_GEOJSON_SOURCE).await {
            Ok((db, features)) => {
                let map = match ChoroplethMap::from_database(&features, &db) {
                    Ok(map) => map,
                    Err(e) => {
                        log::error!("Error building map: {}", e);
                        state.error_msg.set(Some(e.to_string()));
                        state.loading.set(false);
                        return;
                    }
                };
                let comparison = match ComparisonView::load(&db) {
                    Ok(view) => view,
                    Err(e) => {
                        log::error!("Error listing countries: {}", e);
                        state.error_msg.set(Some(e.to_string()));
                        state.loading.set(false);
                        return;
                    }
                };
                log::info!(
                    "Loaded {} map features, {} countries",
                    map.shapes.len(),
                    comparison.countries().len()
                );
                // Session first: the comparison effect reads its store.
                state.session.set(Some(Session::new(db)));
                state.map.set(Some(map));
                state.comparison.set(Some(comparison));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("Error loading data: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);
    });

    // ─── Detail charts: redraw whenever a new country is selected ───
    use_effect(move || {
        let Some(charts) = (state.detail)() else {
            return;
        };
        js_bridge::render_series_chart(ARMS_CHART_ID, &charts.arms.to_json());
        js_bridge::render_series_chart(STABILITY_CHART_ID, &charts.stability.to_json());
    });

    // ─── Comparison charts: redraw whenever either dropdown changes ───
    use_effect(move || {
        let Some(view) = (state.comparison)() else {
            return;
        };
        let db = match state.session.peek().as_ref() {
            Some(session) => session.database().clone(),
            None => return,
        };
        match view.charts(&db) {
            Ok(charts) => {
                js_bridge::render_series_chart(COMPARE_ARMS_CHART_ID, &charts.arms.to_json());
                js_bridge::render_series_chart(
                    COMPARE_STABILITY_CHART_ID,
                    &charts.stability.to_json(),
                );
            }
            Err(e) => {
                log::error!("Comparison query failed: {}", e);
                js_bridge::destroy_chart(COMPARE_ARMS_CHART_ID);
                js_bridge::destroy_chart(COMPARE_STABILITY_CHART_ID);
            }
        }
    });

    let detail_country = state.detail.read().as_ref().map(|c| c.country.clone());
    let detail_placeholder = match detail_country {
        Some(_) => None,
        None => Some("Click a country on the map to see its history.".to_string()),
    };
    let detail_heading = detail_country.unwrap_or_else(|| "Country detail".to_string());

    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 { style: "margin: 8px 0;", "Political Stability and Arms Deliveries" }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                WorldMap {}
                MapLegend {}

                if let Some(message) = (state.notice)() {
                    NoticeBanner {
                        message,
                        on_dismiss: move |_| state.notice.set(None),
                    }
                }

                h3 { style: "margin: 16px 0 0 0;", "{detail_heading}" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px;",
                    ChartPane {
                        id: ARMS_CHART_ID.to_string(),
                        title: "Arms Export".to_string(),
                        placeholder: detail_placeholder.clone(),
                    }
                    ChartPane {
                        id: STABILITY_CHART_ID.to_string(),
                        title: "Political Stability".to_string(),
                        placeholder: detail_placeholder,
                    }
                }

                h3 { style: "margin: 16px 0 0 0;", "Compare Countries" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-end;",
                    CountrySelector { slot: ComparisonSlot::First, label: "Country 1:".to_string() }
                    CountrySelector { slot: ComparisonSlot::Second, label: "Country 2:".to_string() }
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px;",
                    ChartPane {
                        id: COMPARE_ARMS_CHART_ID.to_string(),
                        title: "Arms Export Comparison".to_string(),
                        placeholder: None,
                    }
                    ChartPane {
                        id: COMPARE_STABILITY_CHART_ID.to_string(),
                        title: "Political Stability Comparison".to_string(),
                        placeholder: None,
                    }
                }
            }
        }
    }
}
