//! Choropleth world map with hover tooltip, click selection and pan/zoom.

use crate::state::AppState;
use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use psm_core::config::{HEIGHT, STROKE, WIDTH};
use psm_data::MapEvent;

/// DOM id of the map `<svg>`, measured on each zoom gesture.
const MAP_CANVAS_ID: &str = "world-map-canvas";

/// Forward a pointer event to the session and route the outcome.
fn dispatch(mut state: AppState, event: MapEvent) {
    let outcome = match state.session.write().as_mut() {
        Some(session) => session.handle(event),
        None => return,
    };
    match outcome {
        Ok(outcome) => state.apply(outcome),
        Err(e) => log::error!("map: {}", e),
    }
}

/// Top-left corner of the canvas in client coordinates, read live so page
/// scroll and layout changes are accounted for.
fn canvas_origin() -> Option<(f64, f64)> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_CANVAS_ID)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.left(), rect.top()))
}

/// Client coordinates to canvas coordinates. The canvas is drawn 1:1 with
/// its view box.
fn to_canvas((x, y): (f64, f64), origin: Option<(f64, f64)>) -> (f64, f64) {
    match origin {
        Some((left, top)) => (x - left, y - top),
        None => (x, y),
    }
}

/// The map canvas. Renders nothing until the map has been built.
///
/// Only the transform and drag state are read here; hover updates touch the
/// tooltip signal alone and leave the country layer untouched.
#[component]
pub fn WorldMap() -> Element {
    let state = use_context::<AppState>();
    let mut drag_from: Signal<Option<(f64, f64)>> = use_signal(|| None);
    let mut dragged = use_signal(|| false);

    if state.map.read().is_none() {
        return rsx! {};
    }
    let transform_attr = (state.transform)().to_string();
    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);
    let cursor = if drag_from().is_some() { "grabbing" } else { "grab" };

    let on_wheel = move |evt: Event<WheelData>| {
        evt.prevent_default();
        let delta_y = match evt.delta() {
            WheelDelta::Pixels(v) => v.y,
            WheelDelta::Lines(v) => v.y * 25.0,
            WheelDelta::Pages(v) => v.y * 500.0,
        };
        let client = evt.client_coordinates();
        let (x, y) = to_canvas((client.x, client.y), canvas_origin());
        dispatch(state, MapEvent::Wheel { delta_y, x, y });
    };

    let on_mouse_move = move |evt: Event<MouseData>| {
        let Some((px, py)) = drag_from() else {
            return;
        };
        let client = evt.client_coordinates();
        let (dx, dy) = (client.x - px, client.y - py);
        if dx != 0.0 || dy != 0.0 {
            dragged.set(true);
            drag_from.set(Some((client.x, client.y)));
            dispatch(state, MapEvent::Drag { dx, dy });
        }
    };

    let on_double_click = move |evt: Event<MouseData>| {
        let client = evt.client_coordinates();
        let (x, y) = to_canvas((client.x, client.y), canvas_origin());
        let shift = evt.modifiers().contains(Modifiers::SHIFT);
        dispatch(state, MapEvent::DoubleClick { x, y, shift });
    };

    rsx! {
        div {
            svg {
                id: MAP_CANVAS_ID,
                width: "{WIDTH}",
                height: "{HEIGHT}",
                view_box: "{view_box}",
                style: "border: 1px solid #e0e0e0; background: #fafafa; cursor: {cursor}; user-select: none;",
                onwheel: on_wheel,
                onmousedown: move |evt: Event<MouseData>| {
                    let client = evt.client_coordinates();
                    dragged.set(false);
                    drag_from.set(Some((client.x, client.y)));
                },
                onmousemove: on_mouse_move,
                onmouseup: move |_| drag_from.set(None),
                onmouseleave: move |_| drag_from.set(None),
                ondoubleclick: on_double_click,
                g {
                    transform: "{transform_attr}",
                    CountryLayer { dragged }
                }
            }
            MapTooltip {}
        }
    }
}

/// All country paths. Re-renders only when the map itself changes.
#[component]
fn CountryLayer(dragged: Signal<bool>) -> Element {
    let state = use_context::<AppState>();
    let shapes = match state.map.read().as_ref() {
        Some(map) => map.shapes.clone(),
        None => Vec::new(),
    };

    rsx! {
        for (i, shape) in shapes.into_iter().enumerate() {
            CountryPath {
                key: "{i}",
                name: shape.name,
                d: shape.path,
                fill: shape.fill,
                dragged,
            }
        }
    }
}

/// One country polygon wired to hover and click events.
#[component]
fn CountryPath(name: String, d: String, fill: String, dragged: Signal<bool>) -> Element {
    let state = use_context::<AppState>();
    let enter_name = name.clone();
    let click_name = name.clone();

    rsx! {
        path {
            d: "{d}",
            fill: "{fill}",
            stroke: STROKE,
            onmouseenter: move |_| {
                dispatch(state, MapEvent::HoverEnter { name: enter_name.clone() });
            },
            onmousemove: move |evt: Event<MouseData>| {
                let page = evt.page_coordinates();
                dispatch(state, MapEvent::HoverMove { page_x: page.x, page_y: page.y });
            },
            onmouseleave: move |_| dispatch(state, MapEvent::HoverLeave),
            onclick: move |_| {
                // A pan gesture ends with a click on whatever is under the pointer.
                if !dragged() {
                    dispatch(state, MapEvent::Click { name: click_name.clone() });
                }
            },
        }
    }
}

/// Floating country label positioned in page coordinates.
#[component]
fn MapTooltip() -> Element {
    let state = use_context::<AppState>();
    let tooltip = (state.tooltip)();
    let display = if tooltip.visible { "block" } else { "none" };

    rsx! {
        div {
            style: "position: absolute; left: {tooltip.left}px; top: {tooltip.top}px; display: {display}; pointer-events: none; padding: 4px 8px; background: rgba(0, 0, 0, 0.75); color: #fff; font-size: 12px; border-radius: 4px;",
            "{tooltip.text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_point_is_shifted_by_live_origin() {
        assert_eq!(to_canvas((500.0, 320.0), Some((20.0, 20.0))), (480.0, 300.0));
        // after scrolling the page down by 400px the canvas top is above the viewport
        assert_eq!(to_canvas((500.0, 20.0), Some((20.0, -280.0))), (480.0, 300.0));
    }

    #[test]
    fn unmeasured_canvas_uses_client_point() {
        assert_eq!(to_canvas((12.0, 34.0), None), (12.0, 34.0));
    }
}
