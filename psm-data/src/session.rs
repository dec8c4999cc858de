//! Map interaction state: selection, hover tooltip and pan/zoom.
//!
//! The UI forwards raw pointer events as [`MapEvent`]s; [`Session::handle`]
//! updates the state and reports what the caller has to redraw.

use crate::chart::DetailCharts;
use crate::ViewError;
use psm_core::config::TOOLTIP_OFFSET;
use psm_core::{NotFoundError, ZoomTransform};
use psm_db::Database;

/// A pointer event on the map canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Pointer entered the named feature.
    HoverEnter { name: String },
    /// Pointer moved, in page coordinates.
    HoverMove { page_x: f64, page_y: f64 },
    /// Pointer left the feature under it.
    HoverLeave,
    /// Named feature was clicked.
    Click { name: String },
    /// Wheel scroll at a canvas point; positive `delta_y` zooms out.
    Wheel { delta_y: f64, x: f64, y: f64 },
    /// Drag by a screen-pixel offset.
    Drag { dx: f64, dy: f64 },
    /// Double click at a canvas point.
    DoubleClick { x: f64, y: f64, shift: bool },
}

/// Floating label that follows the pointer over a country.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    pub left: f64,
    pub top: f64,
}

/// Map-only, or map plus the detail charts of one country.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    NoSelection,
    CountrySelected(DetailCharts),
}

/// What the caller must redraw after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The tooltip changed to this.
    Tooltip(Tooltip),
    /// The map transform changed.
    Transform(ZoomTransform),
    /// A country was selected; draw its charts.
    Detail(DetailCharts),
    /// The clicked country has no data; show the notice, draw nothing.
    NotAvailable(NotFoundError),
}

/// Interaction state for one map, over a shared read-only store.
#[derive(Clone, PartialEq)]
pub struct Session {
    db: Database,
    state: ViewState,
    tooltip: Tooltip,
    transform: ZoomTransform,
}

impl Session {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            state: ViewState::NoSelection,
            tooltip: Tooltip::default(),
            transform: ZoomTransform::IDENTITY,
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    pub fn selected_country(&self) -> Option<&str> {
        match &self.state {
            ViewState::NoSelection => None,
            ViewState::CountrySelected(charts) => Some(&charts.country),
        }
    }

    pub fn handle(&mut self, event: MapEvent) -> Result<Outcome, ViewError> {
        match event {
            MapEvent::HoverEnter { name } => {
                self.tooltip.visible = true;
                self.tooltip.text = name;
                Ok(Outcome::Tooltip(self.tooltip.clone()))
            }
            MapEvent::HoverMove { page_x, page_y } => {
                self.tooltip.left = page_x + TOOLTIP_OFFSET.0;
                self.tooltip.top = page_y + TOOLTIP_OFFSET.1;
                Ok(Outcome::Tooltip(self.tooltip.clone()))
            }
            MapEvent::HoverLeave => {
                self.tooltip.visible = false;
                Ok(Outcome::Tooltip(self.tooltip.clone()))
            }
            MapEvent::Click { name } => self.select_country(&name),
            MapEvent::Wheel { delta_y, x, y } => {
                Ok(self.set_transform(self.transform.wheel(delta_y, (x, y))))
            }
            MapEvent::Drag { dx, dy } => Ok(self.set_transform(self.transform.pan(dx, dy))),
            MapEvent::DoubleClick { x, y, shift } => {
                Ok(self.set_transform(self.transform.double_click((x, y), shift)))
            }
        }
    }

    /// Select `country` for the detail view.
    ///
    /// An unknown country leaves the current selection in place and yields
    /// [`Outcome::NotAvailable`]; it is a notice, not a failure.
    pub fn select_country(&mut self, country: &str) -> Result<Outcome, ViewError> {
        match DetailCharts::load(&self.db, country) {
            Ok(charts) => {
                log::info!("session: selected {}", country);
                self.state = ViewState::CountrySelected(charts.clone());
                Ok(Outcome::Detail(charts))
            }
            Err(ViewError::NotFound(err)) => {
                log::info!("session: {}", err);
                Ok(Outcome::NotAvailable(err))
            }
            Err(e) => Err(e),
        }
    }

    fn set_transform(&mut self, transform: ZoomTransform) -> Outcome {
        self.transform = transform;
        Outcome::Transform(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let db = Database::from_csv(
            "Country,Year,StabilityEstimate,ArmsDeliveries\nFrance,2020,1.2,50\nFrance,2021,-0.5,75\n",
        )
        .unwrap();
        Session::new(db)
    }

    #[test]
    fn starts_with_no_selection() {
        let s = session();
        assert_eq!(s.state(), &ViewState::NoSelection);
        assert!(!s.tooltip().visible);
        assert_eq!(s.transform(), ZoomTransform::IDENTITY);
    }

    #[test]
    fn click_selects_country_and_yields_charts() {
        let mut s = session();
        let outcome = s
            .handle(MapEvent::Click {
                name: "France".to_string(),
            })
            .unwrap();
        match outcome {
            Outcome::Detail(charts) => {
                assert_eq!(charts.arms.series[0].x, vec![2020, 2021]);
                assert_eq!(charts.arms.series[0].y, vec![Some(50.0), Some(75.0)]);
                assert_eq!(charts.stability.series[0].y, vec![Some(1.2), Some(-0.5)]);
            }
            other => panic!("expected detail charts, got {:?}", other),
        }
        assert_eq!(s.selected_country(), Some("France"));
    }

    #[test]
    fn click_on_unknown_country_is_a_notice() {
        let mut s = session();
        let outcome = s
            .handle(MapEvent::Click {
                name: "Atlantis".to_string(),
            })
            .unwrap();
        match outcome {
            Outcome::NotAvailable(err) => {
                assert_eq!(err.to_string(), "Data not available for Atlantis")
            }
            other => panic!("expected notice, got {:?}", other),
        }
        assert_eq!(s.state(), &ViewState::NoSelection);
    }

    #[test]
    fn click_on_country_without_years_is_not_a_notice() {
        let db = Database::from_csv(
            "Country,Year,StabilityEstimate,ArmsDeliveries\nTuvalu,,0.9,1\n",
        )
        .unwrap();
        let mut s = Session::new(db);
        match s.select_country("Tuvalu").unwrap() {
            Outcome::Detail(charts) => assert!(charts.arms.series[0].is_empty()),
            other => panic!("expected detail charts, got {:?}", other),
        }
        assert_eq!(s.selected_country(), Some("Tuvalu"));
    }

    #[test]
    fn unknown_click_keeps_previous_selection() {
        let mut s = session();
        s.select_country("France").unwrap();
        s.select_country("Atlantis").unwrap();
        assert_eq!(s.selected_country(), Some("France"));
    }

    #[test]
    fn tooltip_follows_pointer() {
        let mut s = session();
        s.handle(MapEvent::HoverEnter {
            name: "France".to_string(),
        })
        .unwrap();
        s.handle(MapEvent::HoverMove {
            page_x: 100.0,
            page_y: 200.0,
        })
        .unwrap();
        assert_eq!(
            s.tooltip(),
            &Tooltip {
                visible: true,
                text: "France".to_string(),
                left: 110.0,
                top: 180.0,
            }
        );
        s.handle(MapEvent::HoverLeave).unwrap();
        assert!(!s.tooltip().visible);
    }

    #[test]
    fn hover_outcomes_carry_the_new_tooltip() {
        let mut s = session();
        s.handle(MapEvent::HoverEnter {
            name: "France".to_string(),
        })
        .unwrap();
        let outcome = s
            .handle(MapEvent::HoverMove {
                page_x: 5.0,
                page_y: 50.0,
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Tooltip(s.tooltip().clone()));
        match outcome {
            Outcome::Tooltip(tooltip) => {
                assert_eq!((tooltip.left, tooltip.top), (15.0, 30.0));
                assert_eq!(tooltip.text, "France");
            }
            other => panic!("expected tooltip, got {:?}", other),
        }
        assert_eq!(
            s.handle(MapEvent::HoverLeave).unwrap(),
            Outcome::Tooltip(Tooltip {
                visible: false,
                text: "France".to_string(),
                left: 15.0,
                top: 30.0,
            })
        );
    }

    #[test]
    fn zoom_gestures_update_transform() {
        let mut s = session();
        let outcome = s
            .handle(MapEvent::DoubleClick {
                x: 480.0,
                y: 300.0,
                shift: false,
            })
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Transform(ZoomTransform {
                k: 2.0,
                x: -480.0,
                y: -300.0
            })
        );
        s.handle(MapEvent::Drag { dx: 100.0, dy: 0.0 }).unwrap();
        assert_eq!(s.transform().x, -380.0);
        s.handle(MapEvent::Wheel {
            delta_y: 500.0,
            x: 0.0,
            y: 0.0,
        })
        .unwrap();
        assert_eq!(s.transform(), ZoomTransform::IDENTITY);
    }
}
