//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use psm_core::ZoomTransform;
use psm_data::{ChoroplethMap, ComparisonView, DetailCharts, Outcome, Session, Tooltip};
use dioxus::prelude::*;

/// Shared state of the stability map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Map interaction state over the loaded store (None until loaded).
    /// Only written and peeked; components render from the signals below.
    pub session: Signal<Option<Session>>,
    /// Country label under the pointer
    pub tooltip: Signal<Tooltip>,
    /// Current pan/zoom of the map layer
    pub transform: Signal<ZoomTransform>,
    /// Projected, colored country shapes (None until loaded)
    pub map: Signal<Option<ChoroplethMap>>,
    /// Comparison dropdowns (None until loaded)
    pub comparison: Signal<Option<ComparisonView>>,
    /// Charts of the country last clicked on the map
    pub detail: Signal<Option<DetailCharts>>,
    /// Whether the sources are still loading
    pub loading: Signal<bool>,
    /// Fatal load error
    pub error_msg: Signal<Option<String>>,
    /// Non-fatal notice, e.g. a clicked country without data
    pub notice: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            tooltip: Signal::new(Tooltip::default()),
            transform: Signal::new(ZoomTransform::IDENTITY),
            map: Signal::new(None),
            comparison: Signal::new(None),
            detail: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            notice: Signal::new(None),
        }
    }

    /// Route a session outcome to the signals that render it.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Detail(charts) => {
                self.notice.set(None);
                self.detail.set(Some(charts));
            }
            Outcome::NotAvailable(err) => self.notice.set(Some(err.to_string())),
            Outcome::Tooltip(tooltip) => self.tooltip.set(tooltip),
            Outcome::Transform(transform) => self.transform.set(transform),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
