//! Pointer capture: window-level mouse and touch listeners feeding a shared
//! device-pixel position cell.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, TouchEvent, window};

use super::surface::Surface;

/// Install `mousemove` / `touchstart` / `touchmove` listeners. The returned
/// cell always holds the latest pointer position in device pixels; it stays
/// at the origin until the first event arrives.
pub fn install(surface: Rc<RefCell<Surface>>) -> Result<Rc<Cell<(f64, f64)>>, JsValue> {
    let pos = Rc::new(Cell::new((0.0, 0.0)));
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;

    {
        let pos = pos.clone();
        let surface = surface.clone();
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            let dpr = surface.borrow().dpr();
            pos.set((evt.client_x() as f64 * dpr, evt.client_y() as f64 * dpr));
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    for event_name in ["touchstart", "touchmove"] {
        let pos = pos.clone();
        let surface = surface.clone();
        let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
            // First active touch point only
            if let Some(touch) = evt.touches().get(0) {
                let dpr = surface.borrow().dpr();
                pos.set((touch.client_x() as f64 * dpr, touch.client_y() as f64 * dpr));
            }
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(pos)
}
