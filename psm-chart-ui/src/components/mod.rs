//! Reusable Dioxus RSX components for the stability map.

mod chart_pane;
mod country_selector;
mod legend;
mod status;
mod world_map;

pub use chart_pane::ChartPane;
pub use country_selector::{ComparisonSlot, CountrySelector};
pub use legend::MapLegend;
pub use status::{ErrorDisplay, LoadingSpinner, NoticeBanner};
pub use world_map::WorldMap;
